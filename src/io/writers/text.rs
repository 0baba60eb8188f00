use std::path::Path;

use crate::error::Result;
use crate::io::pdf::PageText;

/// Render pages as `=== Page N ===` sections. Pages without text are left out.
pub fn format_page_dump(pages: &[PageText]) -> String {
    let mut parts: Vec<String> = Vec::new();
    for page in pages {
        if let Some(text) = &page.text {
            parts.push(format!("\n=== Page {} ===\n", page.number));
            parts.push(text.clone());
        }
    }
    parts.join("\n")
}

/// Write the page dump as UTF-8. Returns the number of pages that had text.
pub fn write_page_dump(output: &Path, pages: &[PageText]) -> Result<usize> {
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(output, format_page_dump(pages))?;
    Ok(pages.iter().filter(|p| p.text.is_some()).count())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(number: u32, text: Option<&str>) -> PageText {
        PageText {
            number,
            text: text.map(str::to_string),
        }
    }

    #[test]
    fn dump_skips_empty_pages_and_keeps_numbering() {
        let pages = vec![page(1, Some("Fireball")), page(2, None), page(3, Some("Shield"))];
        assert_eq!(
            format_page_dump(&pages),
            "\n=== Page 1 ===\n\nFireball\n\n=== Page 3 ===\n\nShield"
        );
    }

    #[test]
    fn dump_of_no_text_is_empty() {
        assert_eq!(format_page_dump(&[page(1, None)]), "");
    }
}
