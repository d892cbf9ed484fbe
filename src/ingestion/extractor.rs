//! Text extraction from uploaded documents
//!
//! PDF text is extracted page by page with lopdf; plain text is decoded
//! as UTF-8. Unsupported types yield an empty string rather than an
//! error, so callers can treat "nothing extractable" uniformly.

use crate::error::{Error, Result};
use crate::types::FileType;

/// Extracts a single text string from a raw document
pub struct TextExtractor;

impl TextExtractor {
    /// Extract text from a document's raw bytes.
    ///
    /// The type is decided by the filename extension. Pure function of
    /// the input; no side effects.
    pub fn extract(filename: &str, data: &[u8]) -> Result<String> {
        match FileType::from_path(filename) {
            FileType::Pdf => Self::extract_pdf(filename, data),
            FileType::Txt => Self::extract_txt(filename, data),
            FileType::Unknown => Ok(String::new()),
        }
    }

    /// Decode plain text as UTF-8, unmodified
    fn extract_txt(filename: &str, data: &[u8]) -> Result<String> {
        String::from_utf8(data.to_vec())
            .map_err(|e| Error::decode(format!("'{}' is not valid UTF-8: {}", filename, e)))
    }

    /// Extract PDF text per page, in page order.
    ///
    /// Pages are joined with a newline; pages that yield no text are
    /// skipped entirely and contribute nothing, not even a blank line.
    /// Page text is otherwise carried unmodified, whitespace included.
    fn extract_pdf(filename: &str, data: &[u8]) -> Result<String> {
        let doc = lopdf::Document::load_mem(data)
            .map_err(|e| Error::decode(format!("failed to load PDF '{}': {}", filename, e)))?;

        let mut pages = Vec::new();

        // get_pages is keyed by page number, iteration order is ascending
        for page_number in doc.get_pages().keys() {
            match doc.extract_text(&[*page_number]) {
                Ok(text) => {
                    if !text.trim().is_empty() {
                        pages.push(text);
                    }
                }
                Err(e) => {
                    tracing::warn!(
                        "Skipping page {} of '{}': text extraction failed: {}",
                        page_number,
                        filename,
                        e
                    );
                }
            }
        }

        Ok(pages.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_txt_utf8() {
        let text = TextExtractor::extract("notes.txt", "The sky is blue.".as_bytes()).unwrap();
        assert_eq!(text, "The sky is blue.");
    }

    #[test]
    fn test_extract_txt_preserves_content() {
        let input = "line one\nline two\n\n  indented  ";
        let text = TextExtractor::extract("doc.txt", input.as_bytes()).unwrap();
        assert_eq!(text, input);
    }

    #[test]
    fn test_extract_unsupported_type_is_empty() {
        let text = TextExtractor::extract("data.csv", b"a,b,c\n1,2,3").unwrap();
        assert_eq!(text, "");
    }

    #[test]
    fn test_extract_invalid_utf8_fails() {
        let err = TextExtractor::extract("bad.txt", &[0xff, 0xfe, 0x00]).unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn test_extract_invalid_pdf_fails() {
        let err = TextExtractor::extract("broken.pdf", b"not a pdf at all").unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    fn one_page_pdf(text: &str) -> Vec<u8> {
        use lopdf::content::{Content, Operation};
        use lopdf::{dictionary, Document, Object, Stream};

        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 12.into()]),
                Operation::new("Td", vec![100.into(), 600.into()]),
                Operation::new("Tj", vec![Object::string_literal(text)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().unwrap(),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => vec![page_id.into()],
                "Count" => 1,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).unwrap();
        bytes
    }

    #[test]
    fn test_extract_pdf_page_text_is_unmodified() {
        let data = one_page_pdf("The sky is blue.");

        let extracted = TextExtractor::extract("sky.pdf", &data).unwrap();
        assert!(extracted.contains("The sky is blue."));

        // A single non-empty page passes through exactly as the page
        // yields it, surrounding whitespace included
        let doc = lopdf::Document::load_mem(&data).unwrap();
        let raw = doc.extract_text(&[1]).unwrap();
        assert_eq!(extracted, raw);
    }
}
