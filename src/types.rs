use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How a non-square icon is turned into a square one.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NormalizationPolicy {
    /// Center-crop to the shorter side (lossy)
    Crop,
    /// Center on a transparent canvas sized to the longer side (lossless)
    Pad,
}

impl std::fmt::Display for NormalizationPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NormalizationPolicy::Crop => write!(f, "Crop"),
            NormalizationPolicy::Pad => write!(f, "Pad"),
        }
    }
}

/// Result of normalizing a single icon file in place.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum NormalizeOutcome {
    Missing,
    AlreadySquare { size: u32 },
    Normalized { from: (u32, u32), to: u32 },
}

impl std::fmt::Display for NormalizeOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NormalizeOutcome::Missing => write!(f, "not found"),
            NormalizeOutcome::AlreadySquare { size } => {
                write!(f, "already square ({}x{})", size, size)
            }
            NormalizeOutcome::Normalized { from, to } => {
                write!(f, "({}x{}) -> ({}x{})", from.0, from.1, to, to)
            }
        }
    }
}
