//! Per-page text extraction from PDF documents via `lopdf`.
use std::path::Path;

use lopdf::Document;
use tracing::{debug, info, warn};

use crate::error::Result;

/// Text of one PDF page; `text` is None when the page yielded nothing or
/// could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageText {
    /// 1-based page number
    pub number: u32,
    pub text: Option<String>,
}

pub fn extract_pages(path: &Path) -> Result<Vec<PageText>> {
    let doc = Document::load(path)?;
    extract_document_pages(&doc)
}

pub fn extract_pages_from_memory(bytes: &[u8]) -> Result<Vec<PageText>> {
    let doc = Document::load_mem(bytes)?;
    extract_document_pages(&doc)
}

fn extract_document_pages(doc: &Document) -> Result<Vec<PageText>> {
    let pages = doc.get_pages();
    info!("Total pages: {}", pages.len());

    let mut out = Vec::with_capacity(pages.len());
    for &number in pages.keys() {
        let text = match doc.extract_text(&[number]) {
            Ok(text) => {
                debug!("Page {}: {} chars", number, text.chars().count());
                Some(text).filter(|t| !t.is_empty())
            }
            Err(e) => {
                warn!("Page {}: no text extracted: {}", number, e);
                None
            }
        };
        out.push(PageText { number, text });
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use lopdf::{Object, Stream, dictionary};

    fn document_with_pages(contents: &[&[u8]]) -> Document {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let kids: Vec<Object> = contents
            .iter()
            .map(|content| {
                let content_id = doc.add_object(Stream::new(dictionary! {}, content.to_vec()));
                doc.add_object(dictionary! {
                    "Type" => "Page",
                    "Parent" => pages_id,
                    "Contents" => content_id,
                })
                .into()
            })
            .collect();
        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        doc
    }

    #[test]
    fn undecodable_page_does_not_stop_the_document() {
        let doc = document_with_pages(&[
            b"BT (Fireball) Tj ET",
            b"BT 12 Tf (Shield) Tj ET",
            b"",
            b"BT (Wish) Tj ET",
        ]);
        let pages = extract_document_pages(&doc).unwrap();

        assert_eq!(pages.len(), 4);
        assert!(pages[0].text.as_deref().unwrap().contains("Fireball"));
        assert_eq!(pages[1], PageText { number: 2, text: None });
        assert_eq!(pages[2].text, None);
        assert_eq!(pages[3].number, 4);
        assert!(pages[3].text.as_deref().unwrap().contains("Wish"));
    }

    #[test]
    fn missing_pdf_is_an_error() {
        assert!(extract_pages(Path::new("/no/such/book.pdf")).is_err());
    }

    #[test]
    fn garbage_bytes_are_a_pdf_error() {
        let err = extract_pages_from_memory(b"%not really a pdf").unwrap_err();
        assert!(matches!(err, Error::Pdf(_)));
    }
}
