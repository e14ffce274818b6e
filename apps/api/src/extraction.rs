//! Text Extractor — turns uploaded bytes into one trimmed string.
//!
//! The file kind is decided from the file name before any parser runs.
//! PDF and DOCX parsing happen on the blocking pool.

use docx_rs::{read_docx, DocumentChild, Paragraph, ParagraphChild, RunChild};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Unsupported file type '{0}'. Please upload PDF, DOCX, or TXT file.")]
    UnsupportedFormat(String),

    #[error("Failed to parse TXT: file is not valid UTF-8 text")]
    Decode(#[from] std::string::FromUtf8Error),

    #[error("Failed to parse {kind}: {reason}")]
    Extraction { kind: &'static str, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    PlainText,
    Pdf,
    Docx,
}

impl FileKind {
    /// Maps a file name to a supported kind by its extension, ignoring case.
    pub fn from_file_name(file_name: &str) -> Result<Self, ExtractError> {
        let extension = file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "txt" => Ok(FileKind::PlainText),
            "pdf" => Ok(FileKind::Pdf),
            "docx" => Ok(FileKind::Docx),
            _ => Err(ExtractError::UnsupportedFormat(file_name.to_string())),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FileKind::PlainText => "TXT",
            FileKind::Pdf => "PDF",
            FileKind::Docx => "DOCX",
        }
    }
}

/// Extracts normalized text from an uploaded file.
pub async fn extract_upload(file_name: &str, data: Vec<u8>) -> Result<String, ExtractError> {
    let kind = FileKind::from_file_name(file_name)?;
    if kind == FileKind::PlainText {
        return extract_text(kind, data);
    }

    tokio::task::spawn_blocking(move || extract_text(kind, data))
        .await
        .map_err(|e| ExtractError::Extraction {
            kind: kind.label(),
            reason: format!("parser aborted: {e}"),
        })?
}

/// Synchronous extraction for an already-classified file.
pub fn extract_text(kind: FileKind, data: Vec<u8>) -> Result<String, ExtractError> {
    let text = match kind {
        FileKind::PlainText => String::from_utf8(data)?,
        FileKind::Pdf => extract_pdf_text(&data)?,
        FileKind::Docx => extract_docx_text(&data)?,
    };
    Ok(text.trim().to_string())
}

fn extract_pdf_text(data: &[u8]) -> Result<String, ExtractError> {
    let pages =
        pdf_extract::extract_text_from_mem_by_pages(data).map_err(|e| ExtractError::Extraction {
            kind: FileKind::Pdf.label(),
            reason: e.to_string(),
        })?;
    Ok(pages.join("\n"))
}

fn extract_docx_text(data: &[u8]) -> Result<String, ExtractError> {
    let docx = read_docx(data).map_err(|e| ExtractError::Extraction {
        kind: FileKind::Docx.label(),
        reason: e.to_string(),
    })?;

    let paragraphs: Vec<String> = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(paragraph) => Some(paragraph_text(paragraph)),
            _ => None,
        })
        .collect();

    Ok(paragraphs.join("\n"))
}

fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut buffer = String::new();
    for child in &paragraph.children {
        if let ParagraphChild::Run(run) = child {
            for run_child in &run.children {
                match run_child {
                    RunChild::Text(text) => buffer.push_str(&text.text),
                    RunChild::Tab(_) => buffer.push('\t'),
                    _ => {}
                }
            }
        }
    }
    buffer
}

/// Only used by tests to build DOCX fixtures in memory.
#[cfg(test)]
fn build_docx(paragraphs: &[&str]) -> Vec<u8> {
    use std::io::Cursor;

    use docx_rs::{Docx, Run};

    let docx = paragraphs.iter().fold(Docx::new(), |doc, text| {
        doc.add_paragraph(Paragraph::new().add_run(Run::new().add_text(*text)))
    });
    let mut cursor = Cursor::new(Vec::new());
    docx.build().pack(&mut cursor).unwrap();
    cursor.into_inner()
}
