//! High-level, ergonomic library API: slice sheets to files or in-memory
//! buffers, normalize existing icons in place, run manifest batches, and dump
//! PDF text. Prefer these entrypoints over the low-level processing modules.
use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

use image::RgbaImage;
use tracing::{info, warn};

use crate::core::layout::SheetLayout;
use crate::core::params::{SheetManifest, SliceParams};
use crate::core::processing::background::{clear_background_in_place, trim_transparent};
use crate::core::processing::padding::make_square;
use crate::core::processing::slice::slice_sheet;
use crate::error::{Error, Result};
use crate::io::loader::load_sheet;
use crate::io::pdf::extract_pages;
use crate::io::writers::png::write_png;
use crate::io::writers::text::write_page_dump;
use crate::types::{NormalizationPolicy, NormalizeOutcome};

/// Icons written for one sheet
#[derive(Debug, Clone, Default)]
pub struct SheetReport {
    pub sheet: PathBuf,
    pub written: Vec<PathBuf>,
}

/// Batch processing report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub processed: usize,
    pub skipped: usize,
    pub errors: usize,
}

/// Output path for `label` inside `output_dir` (`{label}.png`).
/// Labels that would escape the directory are rejected.
pub fn icon_path(output_dir: &Path, label: &str) -> Result<PathBuf> {
    let file_name = format!("{}.png", label);
    let mut components = Path::new(&file_name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(output_dir.join(file_name)),
        _ => Err(Error::InvalidArgument {
            arg: "label",
            value: label.to_string(),
        }),
    }
}

/// Output paths for every labeled slot of `layout`, in slicing order.
/// Escaping or repeated labels are rejected before any file is written.
fn icon_paths(output_dir: &Path, layout: &SheetLayout) -> Result<Vec<PathBuf>> {
    let mut seen = HashSet::new();
    layout
        .labeled()
        .map(|(_, label)| {
            if !seen.insert(label) {
                return Err(Error::InvalidArgument {
                    arg: "label",
                    value: format!("{} (duplicate)", label),
                });
            }
            icon_path(output_dir, label)
        })
        .collect()
}

/// Per-icon finishing: trim transparent borders, then square if requested.
pub fn prepare_icon(icon: RgbaImage, params: &SliceParams) -> Result<RgbaImage> {
    let icon = if params.trim {
        trim_transparent(&icon)?
    } else {
        icon
    };
    match params.square {
        Some(policy) => make_square(&icon, policy),
        None => Ok(icon),
    }
}

fn clean_sheet(mut sheet: RgbaImage, params: &SliceParams) -> Result<RgbaImage> {
    if let Some(threshold) = params.background_threshold {
        clear_background_in_place(&mut sheet, threshold)?;
    }
    Ok(sheet)
}

/// Run the full pipeline on an in-memory sheet and collect `(label, icon)` pairs
pub fn slice_sheet_to_buffers(
    sheet: RgbaImage,
    layout: &SheetLayout,
    params: &SliceParams,
) -> Result<Vec<(String, RgbaImage)>> {
    let sheet = clean_sheet(sheet, params)?;
    let mut icons = Vec::with_capacity(layout.labeled_count());
    for slice in slice_sheet(&sheet, layout, params.margin)? {
        let icon = prepare_icon(slice.image, params)?;
        icons.push((slice.label, icon));
    }
    Ok(icons)
}

/// Load `input`, slice it per `layout`, and write `{label}.png` files into `output_dir`
pub fn process_sheet_to_dir(
    input: &Path,
    output_dir: &Path,
    layout: &SheetLayout,
    params: &SliceParams,
) -> Result<SheetReport> {
    let sheet = clean_sheet(load_sheet(input)?, params)?;
    let slices = slice_sheet(&sheet, layout, params.margin)?;
    let outputs = icon_paths(output_dir, layout)?;
    std::fs::create_dir_all(output_dir)?;

    let mut report = SheetReport {
        sheet: input.to_path_buf(),
        written: Vec::with_capacity(outputs.len()),
    };

    let (cell_w, cell_h) = slices.cell_size();
    info!(
        "Processing {:?}: {}x{}, icon size: {}x{}",
        input,
        sheet.width(),
        sheet.height(),
        cell_w,
        cell_h
    );

    for (slice, output) in slices.zip(outputs) {
        let icon = prepare_icon(slice.image, params)?;
        write_png(&output, &icon)?;
        info!(
            "  Saved: {}.png ({}x{})",
            slice.label,
            icon.width(),
            icon.height()
        );
        report.written.push(output);
    }

    Ok(report)
}

/// Square an existing icon file in place
pub fn normalize_icon_file(path: &Path, policy: NormalizationPolicy) -> Result<NormalizeOutcome> {
    if !path.exists() {
        return Ok(NormalizeOutcome::Missing);
    }
    let icon = load_sheet(path)?;
    let (width, height) = icon.dimensions();
    if width == height {
        return Ok(NormalizeOutcome::AlreadySquare { size: width });
    }

    let squared = make_square(&icon, policy)?;
    write_png(path, &squared)?;
    Ok(NormalizeOutcome::Normalized {
        from: (width, height),
        to: squared.width(),
    })
}

/// Square each file in `paths` in place.
/// Missing files are skipped; if `continue_on_error` is false the first failure is returned.
pub fn normalize_icons<P: AsRef<Path>>(
    paths: &[P],
    policy: NormalizationPolicy,
    continue_on_error: bool,
) -> Result<BatchReport> {
    let mut report = BatchReport::default();

    for path in paths {
        let path = path.as_ref();
        match normalize_icon_file(path, policy) {
            Ok(NormalizeOutcome::Missing) => {
                warn!("Not found: {:?}", path);
                report.skipped += 1;
            }
            Ok(outcome @ NormalizeOutcome::AlreadySquare { .. }) => {
                info!("Already square: {:?} {}", path, outcome);
                report.skipped += 1;
            }
            Ok(outcome) => {
                info!("Fixed: {:?} {}", path, outcome);
                report.processed += 1;
            }
            Err(e) => {
                warn!("Error normalizing {:?}: {}", path, e);
                report.errors += 1;
                if !continue_on_error {
                    return Err(e);
                }
            }
        }
    }

    Ok(report)
}

fn resolve(base_dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}

/// Process every sheet of `manifest`. Relative paths resolve against `base_dir`.
/// Missing sheets are skipped with a warning; if `continue_on_error` is false the first
/// failure is returned.
pub fn process_manifest(
    manifest: &SheetManifest,
    base_dir: &Path,
    continue_on_error: bool,
) -> Result<BatchReport> {
    let mut report = BatchReport::default();

    for job in &manifest.sheets {
        let input = resolve(base_dir, &job.file);
        if !input.exists() {
            warn!("Sheet not found: {:?}", input);
            report.skipped += 1;
            continue;
        }

        let output_dir = match job.output_dir.as_ref().or(manifest.output_dir.as_ref()) {
            Some(dir) => resolve(base_dir, dir),
            None => input
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| base_dir.to_path_buf()),
        };

        match process_sheet_to_dir(&input, &output_dir, &job.layout, &job.params) {
            Ok(sheet) => {
                info!(
                    "Successfully processed: {:?} ({} icons)",
                    input,
                    sheet.written.len()
                );
                report.processed += 1;
            }
            Err(e) => {
                warn!("Error processing {:?}: {}", input, e);
                report.errors += 1;
                if !continue_on_error {
                    return Err(e);
                }
            }
        }
    }

    Ok(report)
}

/// Dump the text of every page of `input` into `output`. Returns the number of
/// pages that had text.
pub fn extract_pdf_text_to_path(input: &Path, output: &Path) -> Result<usize> {
    let pages = extract_pages(input)?;
    let with_text = write_page_dump(output, &pages)?;
    info!("Saved {} of {} pages to {:?}", with_text, pages.len(), output);
    Ok(with_text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn icon_path_rejects_escaping_labels() {
        let dir = Path::new("out");
        assert_eq!(icon_path(dir, "fire").unwrap(), PathBuf::from("out/fire.png"));
        assert!(icon_path(dir, "../fire").is_err());
        assert!(icon_path(dir, "sub/fire").is_err());
    }

    #[test]
    fn bad_labels_are_rejected_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let sheet = dir.path().join("sheet.png");
        write_png(&sheet, &RgbaImage::from_pixel(40, 20, Rgba([9, 9, 9, 255]))).unwrap();
        let out = dir.path().join("out");

        let escaping = SheetLayout::new(1, 2, vec![Some("good"), Some("../evil")]);
        let err = process_sheet_to_dir(&sheet, &out, &escaping, &SliceParams::default())
            .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { arg: "label", .. }));
        assert!(!out.join("good.png").exists());
        assert!(!dir.path().join("evil.png").exists());

        let repeated = SheetLayout::new(1, 2, vec![Some("x"), Some("x")]);
        let err = process_sheet_to_dir(&sheet, &out, &repeated, &SliceParams::default())
            .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { arg: "label", .. }));
        assert!(!out.join("x.png").exists());
    }

    #[test]
    fn prepare_icon_trims_before_squaring() {
        let mut icon = RgbaImage::new(40, 40);
        for x in 10..30 {
            for y in 15..25 {
                icon.put_pixel(x, y, Rgba([5, 5, 5, 255]));
            }
        }
        let params = SliceParams {
            trim: true,
            square: Some(NormalizationPolicy::Pad),
            ..SliceParams::default()
        };
        let out = prepare_icon(icon, &params).unwrap();
        assert_eq!(out.dimensions(), (20, 20));
        assert_eq!(out.get_pixel(0, 4)[3], 0);
        assert_eq!(out.get_pixel(0, 5)[3], 255);
    }

    #[test]
    fn buffers_follow_background_and_grid() {
        let sheet = RgbaImage::from_fn(40, 20, |x, _| {
            if x < 20 {
                Rgba([255, 255, 255, 255])
            } else {
                Rgba([10, 10, 10, 255])
            }
        });
        let layout = SheetLayout::new(1, 2, vec![Some("blank"), Some("dark")]);
        let params = SliceParams {
            background_threshold: Some(240),
            ..SliceParams::default()
        };

        let icons = slice_sheet_to_buffers(sheet, &layout, &params).unwrap();
        assert_eq!(icons.len(), 2);
        assert_eq!(icons[0].0, "blank");
        assert!(icons[0].1.pixels().all(|p| p[3] == 0));
        assert!(icons[1].1.pixels().all(|p| p[3] == 255));
    }
}
