//! Document loading: plain extracted text directly, or PDF via the
//! external `pdftotext` tool (poppler-utils).
//!
//! Extraction failure is fatal for the document; we never hand a partial
//! or garbled line list to the parser.

use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result, bail};

use mutasi_ingest::Document;

/// Load a statement document from `path`.
///
/// A `.pdf` input is converted with `pdftotext -layout`; anything else is
/// read as already-extracted text. Pages are split on the form-feed
/// character `pdftotext` emits.
pub fn load_document(path: &Path) -> Result<Document> {
    let is_pdf = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));

    let text = if is_pdf {
        run_pdftotext(path)?
    } else {
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?
    };

    Ok(Document::from_extracted_text(&text))
}

fn run_pdftotext(path: &Path) -> Result<String> {
    let Some(path_str) = path.to_str() else {
        bail!("invalid file path: {}", path.display());
    };

    let output = Command::new("pdftotext")
        .args(["-layout", path_str, "-"])
        .output()
        .context("running pdftotext (is poppler-utils installed?)")?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!(
            "pdftotext failed (exit {}): {}",
            output.status.code().unwrap_or(-1),
            stderr.trim()
        );
    }

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}
