#![doc = r#"
SHEETCUT — sprite-sheet slicing for icon assets.

This crate cuts uniform-grid sprite sheets into individual icon files, with
optional near-white background removal, transparent-border trimming, and
square normalization (center-crop or transparent padding). It also ships a
small PDF page-text dumper used alongside the icon tooling. It powers the
`sheetcut` CLI and can be embedded in your own Rust applications.

Slice a sheet to files
----------------------
```rust,no_run
use std::path::Path;
use sheetcut::{process_sheet_to_dir, NormalizationPolicy, SheetLayout, SliceParams};

fn main() -> sheetcut::Result<()> {
    let layout = SheetLayout::new(
        2,
        4,
        vec![
            Some("fire"), Some("cold"), Some("lightning"), Some("thunder"),
            Some("acid"), Some("poison"), None, None,
        ],
    );
    let params = SliceParams {
        square: Some(NormalizationPolicy::Pad),
        ..SliceParams::default()
    };

    let report = process_sheet_to_dir(
        Path::new("assets/sheet1.png"),
        Path::new("assets/icons"),
        &layout,
        &params,
    )?;
    println!("wrote {} icons", report.written.len());
    Ok(())
}
```

Work in memory
--------------
```rust
use image::{Rgba, RgbaImage};
use sheetcut::{make_square, slice_sheet, NormalizationPolicy, SheetLayout};

let sheet = RgbaImage::from_pixel(400, 200, Rgba([10, 20, 30, 255]));
let layout = SheetLayout::new(2, 4, (0..8).map(|i| Some(format!("icon-{i}"))));

for slice in slice_sheet(&sheet, &layout, 0).unwrap() {
    assert_eq!(slice.image.dimensions(), (100, 100));
    let square = make_square(&slice.image, NormalizationPolicy::Crop).unwrap();
    assert_eq!(square.width(), square.height());
}
```

Error handling
--------------
All public functions return `sheetcut::Result<T>`; match on `sheetcut::Error`
to tell an unreadable sheet (`ImageLoad`) from bad grid parameters
(`InvalidGeometry`) or an empty image (`InvalidImage`).

```rust,no_run
use std::path::Path;
use sheetcut::{process_sheet_to_dir, Error, SheetLayout, SliceParams};

let layout = SheetLayout::new(2, 2, vec![Some("a"), Some("b")]);
let params = SliceParams::default();
match process_sheet_to_dir(Path::new("missing.png"), Path::new("out"), &layout, &params) {
    Ok(_) => {}
    Err(Error::ImageLoad { path, .. }) => eprintln!("cannot read {path:?}"),
    Err(Error::InvalidGeometry(msg)) => eprintln!("bad grid: {msg}"),
    Err(other) => eprintln!("other error: {other}"),
}
```

Useful modules
--------------
- [`api`] — high-level entry points and batch helpers.
- [`core`] — layouts, parameters, and the slicing/normalization primitives.
- [`io`] — sheet loading, PDF page text, PNG and text writers.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use crate::core::layout::{Cell, SheetLayout};
pub use crate::core::params::{SheetJob, SheetManifest, SliceParams};
pub use error::{Error, Result};
pub use types::{NormalizationPolicy, NormalizeOutcome};

// Processing primitives
pub use crate::core::processing::background::{
    DEFAULT_THRESHOLD, clear_background, clear_background_in_place, opaque_bounds,
    trim_transparent,
};
pub use crate::core::processing::padding::{crop_to_square, make_square, pad_to_square};
pub use crate::core::processing::slice::{SheetSlice, SheetSlices, slice_sheet};

// I/O helpers
pub use io::loader::{decode_sheet, load_sheet};
pub use io::pdf::{PageText, extract_pages};
pub use io::writers::png::{encode_png, write_png};
pub use io::writers::text::{format_page_dump, write_page_dump};

// High-level API re-exports
pub use api::{
    BatchReport, SheetReport, extract_pdf_text_to_path, icon_path, normalize_icon_file,
    normalize_icons, prepare_icon, process_manifest, process_sheet_to_dir,
    slice_sheet_to_buffers,
};
