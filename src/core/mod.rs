//! Core building blocks: sheet layouts, processing parameters, and the
//! slicing/normalization primitives. These are consumed by the high-level
//! `api` module.
pub mod layout;
pub mod params;
pub mod processing;
