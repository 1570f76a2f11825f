//! DOCX text extraction
//!
//! A .docx file is a ZIP container; the body lives in `word/document.xml`.
//! Only paragraphs that sit directly in `<w:body>` are read, and only the
//! runs directly inside them (or inside a hyperlink). Text boxes, tables
//! and other nested content are skipped.
//! - `<w:t>` text is concatenated, entities decoded
//! - `<w:tab/>` becomes a tab; `<w:cr/>` and line `<w:br/>` become newlines
//! - page and column breaks produce nothing

use super::{ExtractError, Extraction};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::io::Read;

/// Path of the main document part inside the container
pub const DOCUMENT_PART: &str = "word/document.xml";

/// Element paths, relative to `<w:body>`, whose children are run content
const RUN_PATHS: &[&[&str]] = &[&["w:p", "w:r"], &["w:p", "w:hyperlink", "w:r"]];

/// Extract paragraph text from DOCX bytes, each paragraph followed by a newline
pub fn extract(bytes: &[u8]) -> Extraction {
    let text = read_document_xml(bytes)
        .and_then(|xml| paragraphs_to_text(&xml).map_err(ExtractError::from));
    match text {
        Ok(text) => Extraction::complete(text),
        Err(e) => Extraction::failed(String::new(), e),
    }
}

fn read_document_xml(bytes: &[u8]) -> Result<String, ExtractError> {
    let mut archive = zip::ZipArchive::new(std::io::Cursor::new(bytes))?;
    let mut part = match archive.by_name(DOCUMENT_PART) {
        Ok(part) => part,
        Err(zip::result::ZipError::FileNotFound) => {
            return Err(ExtractError::MissingPart(DOCUMENT_PART))
        }
        Err(e) => return Err(e.into()),
    };

    let mut xml = String::new();
    part.read_to_string(&mut xml)?;
    Ok(xml)
}

/// Flatten the body paragraphs of a WordprocessingML document to text
pub fn paragraphs_to_text(xml: &str) -> Result<String, quick_xml::Error> {
    let mut reader = Reader::from_str(xml);
    let mut path: Vec<String> = Vec::new();
    let mut text = String::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                if in_run(&path) {
                    push_run_marker(&e, &mut text);
                }
                path.push(element_name(&e));
            }
            Event::Empty(e) => {
                if is_body_level(&path) && element_name(&e) == "w:p" {
                    text.push('\n');
                } else if in_run(&path) {
                    push_run_marker(&e, &mut text);
                }
            }
            Event::End(_) => {
                let closed = path.pop();
                if closed.as_deref() == Some("w:p") && is_body_level(&path) {
                    text.push('\n');
                }
            }
            Event::Text(t) => {
                if in_run_text(&path) {
                    text.push_str(&t.unescape()?);
                }
            }
            Event::CData(c) => {
                if in_run_text(&path) {
                    text.push_str(&String::from_utf8_lossy(&c));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(text)
}

fn element_name(e: &BytesStart) -> String {
    String::from_utf8_lossy(e.name().as_ref()).into_owned()
}

/// Part of `path` below the first `<w:body>`, if inside one
fn body_relative(path: &[String]) -> Option<&[String]> {
    let body = path.iter().position(|name| name == "w:body")?;
    Some(&path[body + 1..])
}

fn is_body_level(path: &[String]) -> bool {
    matches!(body_relative(path), Some(rel) if rel.is_empty())
}

fn path_is(rel: &[String], expected: &[&str]) -> bool {
    rel.len() == expected.len() && rel.iter().zip(expected).all(|(a, b)| a.as_str() == *b)
}

fn in_run(path: &[String]) -> bool {
    match body_relative(path) {
        Some(rel) => RUN_PATHS.iter().any(|run| path_is(rel, run)),
        None => false,
    }
}

fn in_run_text(path: &[String]) -> bool {
    match path.split_last() {
        Some((last, parent)) => last == "w:t" && in_run(parent),
        None => false,
    }
}

/// Text produced by a non-text run child
fn push_run_marker(e: &BytesStart, text: &mut String) {
    match e.name().as_ref() {
        b"w:tab" | b"w:ptab" => text.push('\t'),
        b"w:cr" => text.push('\n'),
        b"w:noBreakHyphen" => text.push('-'),
        b"w:br" => {
            let kind = e.try_get_attribute("w:type").ok().flatten();
            let is_line_break = match kind {
                Some(attr) => &*attr.value == b"textWrapping",
                None => true,
            };
            if is_line_break {
                text.push('\n');
            }
        }
        _ => {}
    }
}
