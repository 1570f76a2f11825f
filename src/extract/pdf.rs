//! PDF text extraction wrapper
//!
//! Wraps pdf-extract with error handling for encrypted, scanned or
//! corrupted PDFs. The document is parsed once and pages are rendered one
//! at a time. pdf-extract panics on some malformed pages (a missing
//! MediaBox, unexpected font encodings), so loading and every page are
//! isolated with `catch_unwind`.

use super::{ExtractError, Extraction};
use pdf_extract::{Document, PlainTextOutput};
use std::panic::{self, AssertUnwindSafe};
use tracing::debug;

/// Extract text from PDF bytes, one page at a time
pub fn extract(bytes: &[u8]) -> Extraction {
    let doc = match load_document(bytes) {
        Ok(doc) => doc,
        Err(e) => return Extraction::failed(String::new(), e),
    };

    let page_numbers: Vec<u32> = doc.get_pages().keys().copied().collect();
    debug!(pages = page_numbers.len(), "Parsed PDF");

    collect_pages(page_numbers.into_iter().map(|n| page_text(&doc, n)))
}

fn load_document(bytes: &[u8]) -> Result<Document, ExtractError> {
    let loaded = panic::catch_unwind(|| Document::load_mem(bytes))
        .map_err(|payload| ExtractError::Panic(panic_message(payload.as_ref())))?;
    let mut doc = loaded.map_err(|e| ExtractError::Pdf(e.to_string()))?;

    // Many PDFs are "encrypted" with an empty user password
    if doc.is_encrypted() {
        doc.decrypt("")
            .map_err(|e| ExtractError::Pdf(format!("encrypted document: {}", e)))?;
    }
    Ok(doc)
}

/// Plain text of one page (1-based)
fn page_text(doc: &Document, page_num: u32) -> Result<String, ExtractError> {
    let rendered = panic::catch_unwind(AssertUnwindSafe(|| {
        let mut text = String::new();
        {
            let mut output = PlainTextOutput::new(&mut text);
            pdf_extract::output_doc_page(doc, &mut output, page_num)?;
        }
        Ok::<_, pdf_extract::OutputError>(text)
    }));

    match rendered {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(e)) => Err(ExtractError::Pdf(format!("page {}: {}", page_num, e))),
        Err(payload) => Err(ExtractError::Panic(format!(
            "page {}: {}",
            page_num,
            panic_message(payload.as_ref())
        ))),
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// Join page texts, each followed by a newline.
///
/// Pages with no extractable text contribute nothing. The first failing
/// page stops the walk; pages read before it are kept.
pub fn collect_pages<I>(pages: I) -> Extraction
where
    I: IntoIterator<Item = Result<String, ExtractError>>,
{
    let mut text = String::new();
    for page in pages {
        match page {
            Ok(page_text) => {
                if !page_text.is_empty() {
                    text.push_str(&page_text);
                    text.push('\n');
                }
            }
            Err(e) => return Extraction::failed(text, e),
        }
    }
    Extraction::complete(text)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Build a small PDF with one line of Helvetica text per page.
    /// Pages flagged `false` get no MediaBox anywhere in their tree.
    pub(crate) fn pdf_with_pages(pages: &[(&str, bool)]) -> Vec<u8> {
        let mut objects = vec![
            "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
            String::new(),
            "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>"
                .to_string(),
        ];
        let mut kids = Vec::new();
        for (text, has_media_box) in pages {
            let page_id = objects.len() + 1;
            kids.push(format!("{} 0 R", page_id));
            let media_box = if *has_media_box { "/MediaBox [0 0 612 792] " } else { "" };
            objects.push(format!(
                "<< /Type /Page /Parent 2 0 R {}/Resources << /Font << /F1 3 0 R >> >> /Contents {} 0 R >>",
                media_box,
                page_id + 1
            ));
            let content = format!("BT /F1 12 Tf 72 720 Td ({}) Tj ET", text);
            objects.push(format!(
                "<< /Length {} >>\nstream\n{}\nendstream",
                content.len(),
                content
            ));
        }
        objects[1] = format!(
            "<< /Type /Pages /Kids [{}] /Count {} >>",
            kids.join(" "),
            pages.len()
        );

        let mut pdf = b"%PDF-1.4\n".to_vec();
        let mut offsets = Vec::new();
        for (i, body) in objects.iter().enumerate() {
            offsets.push(pdf.len());
            pdf.extend_from_slice(format!("{} 0 obj\n{}\nendobj\n", i + 1, body).as_bytes());
        }
        let xref_at = pdf.len();
        let mut tail = format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1);
        for offset in offsets {
            tail.push_str(&format!("{:010} 00000 n \n", offset));
        }
        tail.push_str(&format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
            objects.len() + 1,
            xref_at
        ));
        pdf.extend_from_slice(tail.as_bytes());
        pdf
    }

    pub(crate) fn pdf_bytes(pages: &[&str]) -> Vec<u8> {
        let pages: Vec<(&str, bool)> = pages.iter().map(|p| (*p, true)).collect();
        pdf_with_pages(&pages)
    }

    fn non_blank_lines(text: &str) -> Vec<&str> {
        text.lines().map(str::trim).filter(|l| !l.is_empty()).collect()
    }

    #[test]
    fn test_extract_real_pages_in_order() {
        let extraction = extract(&pdf_bytes(&["Bail granted", "", "Appeal dismissed"]));
        assert!(extraction.error.is_none());
        assert_eq!(non_blank_lines(&extraction.text), vec!["Bail granted", "Appeal dismissed"]);
        assert!(extraction.text.ends_with("Appeal dismissed\n"));
    }

    #[test]
    fn test_broken_page_keeps_earlier_pages() {
        let bytes = pdf_with_pages(&[
            ("Order sheet", true),
            ("Lost page", false),
            ("Never reached", true),
        ]);
        let extraction = extract(&bytes);

        assert_eq!(non_blank_lines(&extraction.text), vec!["Order sheet"]);
        match extraction.error {
            Some(ExtractError::Panic(message)) => assert!(message.starts_with("page 2: ")),
            other => panic!("expected a page panic, got {:?}", other),
        }
    }

    #[test]
    fn test_collect_pages_joins_with_newlines() {
        let pages = vec![Ok("Page one".to_string()), Ok("Page two".to_string())];
        let extraction = collect_pages(pages);
        assert_eq!(extraction.text, "Page one\nPage two\n");
        assert!(extraction.error.is_none());
    }

    #[test]
    fn test_collect_pages_skips_empty_pages() {
        let pages = vec![Ok("A".to_string()), Ok(String::new()), Ok("B".to_string())];
        assert_eq!(collect_pages(pages).text, "A\nB\n");
    }

    #[test]
    fn test_collect_pages_keeps_text_before_failure() {
        let pages = vec![
            Ok("First".to_string()),
            Err(ExtractError::Pdf("bad xref".to_string())),
            Ok("Never reached".to_string()),
        ];
        let extraction = collect_pages(pages);
        assert_eq!(extraction.text, "First\n");
        assert!(matches!(extraction.error, Some(ExtractError::Pdf(_))));
    }

    #[test]
    fn test_extract_garbage_reports_error() {
        let extraction = extract(b"definitely not a pdf");
        assert_eq!(extraction.text, "");
        assert!(extraction.error.is_some());
    }

    #[test]
    fn test_panic_message() {
        let payload: Box<dyn std::any::Any + Send> = Box::new("boom");
        assert_eq!(panic_message(payload.as_ref()), "boom");
        let payload: Box<dyn std::any::Any + Send> = Box::new(String::from("bang"));
        assert_eq!(panic_message(payload.as_ref()), "bang");
    }
}
