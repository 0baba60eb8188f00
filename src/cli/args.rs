use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use sheetcut::NormalizationPolicy;

#[derive(Parser)]
#[command(name = "sheetcut", version, about = "SHEETCUT CLI")]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Enable logging
    #[arg(long, global = true, default_value_t = false)]
    pub log: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Slice a sprite sheet into one PNG per labeled grid cell
    Split(SplitArgs),
    /// Make existing icon files square, rewriting them in place
    Square(SquareArgs),
    /// Slice every sheet listed in a JSON manifest
    Batch(BatchArgs),
    /// Dump the text of every PDF page into a text file
    ExtractText(ExtractTextArgs),
}

#[derive(Args)]
pub struct SplitArgs {
    /// Input sheet image
    #[arg(short, long)]
    pub input: PathBuf,

    /// Directory receiving `<label>.png` files
    #[arg(short, long)]
    pub output_dir: PathBuf,

    /// Number of grid rows
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub rows: u32,

    /// Number of grid columns
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub columns: u32,

    /// Comma-separated labels in row-major order; `-` or an empty entry skips a cell
    #[arg(long)]
    pub labels: String,

    /// Inward margin per cell side, in pixels
    #[arg(long, default_value_t = 0)]
    pub margin: u32,

    /// Turn near-white pixels (all of R, G, B above this value) transparent before slicing;
    /// `--threshold` alone uses 240
    #[arg(long, num_args = 0..=1, default_missing_value = "240")]
    pub threshold: Option<u8>,

    /// Trim fully transparent borders from each icon
    #[arg(long, default_value_t = false)]
    pub trim: bool,

    /// Square each icon by center-cropping or transparent padding
    #[arg(long, value_enum)]
    pub square: Option<NormalizationPolicy>,
}

#[derive(Args)]
pub struct SquareArgs {
    /// Icon files to normalize
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Directory the icon files are relative to
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// Crop to the shorter side or pad to the longer side
    #[arg(long, value_enum, default_value_t = NormalizationPolicy::Pad)]
    pub policy: NormalizationPolicy,

    /// Keep going after a file fails
    #[arg(long, default_value_t = false)]
    pub continue_on_error: bool,
}

#[derive(Args)]
pub struct BatchArgs {
    /// JSON manifest listing sheets, layouts and params
    #[arg(short, long)]
    pub manifest: PathBuf,

    /// Output directory for sheets that do not name one
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Keep going after a sheet fails
    #[arg(long, default_value_t = false)]
    pub continue_on_error: bool,
}

#[derive(Args)]
pub struct ExtractTextArgs {
    /// Input PDF
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output text file
    #[arg(short, long)]
    pub output: PathBuf,
}

/// Split a `--labels` value into per-cell labels.
pub fn parse_labels(raw: &str) -> Vec<Option<String>> {
    raw.split(',')
        .map(str::trim)
        .map(|label| match label {
            "" | "-" => None,
            other => Some(other.to_string()),
        })
        .collect()
}
