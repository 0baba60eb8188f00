use std::path::{Path, PathBuf};

use tracing::info;
use tracing_subscriber::EnvFilter;

use sheetcut::{
    BatchReport, SheetLayout, SheetManifest, SliceParams, extract_pdf_text_to_path,
    normalize_icons, process_manifest, process_sheet_to_dir,
};

use super::args::{
    BatchArgs, CliArgs, Command, ExtractTextArgs, SplitArgs, SquareArgs, parse_labels,
};
use super::errors::AppError;

fn run_split(args: SplitArgs) -> Result<(), AppError> {
    let layout = SheetLayout {
        rows: args.rows,
        columns: args.columns,
        labels: parse_labels(&args.labels),
    };
    if layout.labeled_count() == 0 {
        return Err(AppError::NoLabels {
            labels: args.labels,
        });
    }

    let params = SliceParams {
        margin: args.margin,
        background_threshold: args.threshold,
        trim: args.trim,
        square: args.square,
    };

    let report = process_sheet_to_dir(&args.input, &args.output_dir, &layout, &params)?;
    info!(
        "Successfully processed: {:?} -> {:?} ({} icons)",
        args.input,
        args.output_dir,
        report.written.len()
    );
    Ok(())
}

fn run_square(args: SquareArgs) -> Result<(), AppError> {
    let paths: Vec<PathBuf> = match &args.dir {
        Some(dir) => args.files.iter().map(|f| dir.join(f)).collect(),
        None => args.files.clone(),
    };

    let report = normalize_icons(&paths, args.policy, args.continue_on_error)?;
    finish(report, paths.len())
}

fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let mut manifest = SheetManifest::from_path(&args.manifest)?;
    if args.output_dir.is_some() {
        manifest.output_dir = args.output_dir;
    }

    let base_dir = args
        .manifest
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));

    info!(
        "Starting batch processing: {} sheet(s) from {:?}",
        manifest.sheets.len(),
        args.manifest
    );
    let report = process_manifest(&manifest, base_dir, args.continue_on_error)?;
    finish(report, manifest.sheets.len())
}

fn run_extract_text(args: ExtractTextArgs) -> Result<(), AppError> {
    let pages = extract_pdf_text_to_path(&args.input, &args.output)?;
    info!(
        "Successfully extracted {} page(s): {:?} -> {:?}",
        pages, args.input, args.output
    );
    Ok(())
}

fn finish(report: BatchReport, total: usize) -> Result<(), AppError> {
    info!("Batch processing complete!");
    info!("Processed: {}", report.processed);
    info!("Skipped: {}", report.skipped);
    info!("Errors: {}", report.errors);

    if report.errors > 0 {
        return Err(AppError::BatchFailed {
            failed: report.errors,
            total,
        });
    }
    Ok(())
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .init();
    }

    match args.command {
        Command::Split(split) => run_split(split)?,
        Command::Square(square) => run_square(square)?,
        Command::Batch(batch) => run_batch(batch)?,
        Command::ExtractText(extract) => run_extract_text(extract)?,
    }

    Ok(())
}
