//! I/O layer: the sheet `loader`, the PDF page `pdf` extractor, and `writers`
//! for PNG icons and text dumps.
pub mod loader;
pub use loader::{decode_sheet, load_sheet};

pub mod pdf;
pub use pdf::{PageText, extract_pages};

pub mod writers;
