//! Parser input types and tuning constants.

/// Extracted statement text: ordered pages, each an ordered list of
/// trimmed, non-empty lines. The parser never touches the PDF bytes;
/// text extraction happens upstream.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    pub pages: Vec<Vec<String>>,
}

impl Document {
    pub fn from_pages(pages: Vec<Vec<String>>) -> Document {
        Document { pages }
    }

    /// Build a document from raw extracted text, splitting pages on the
    /// form-feed character that `pdftotext` emits between pages. Lines are
    /// trimmed and blank lines dropped.
    pub fn from_extracted_text(text: &str) -> Document {
        let pages = text
            .split('\u{c}')
            .map(|page| {
                page.lines()
                    .map(str::trim)
                    .filter(|l| !l.is_empty())
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .filter(|lines: &Vec<String>| !lines.is_empty())
            .collect();
        Document { pages }
    }

    pub fn first_page(&self) -> &[String] {
        self.pages.first().map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Heuristic thresholds for the scanner.
///
/// These are empirically tuned for the BCA Tahapan layout and may need
/// retuning for other statement formats, so they are carried as named
/// configuration rather than inlined literals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanConfig {
    /// Lines examined (from the transaction-start line inclusive) when
    /// searching for the direction marker and amount.
    pub amount_window: usize,
    /// Lines examined after the amount line when searching for the
    /// counterparty name.
    pub name_window: usize,
    /// Continuation lines joined onto a multi-line owner name.
    pub owner_join_window: usize,
    /// Minimum digit count for a bare (unpunctuated) token to count as an
    /// amount; shorter runs are usually reference codes.
    pub min_amount_digits: usize,
    /// A name-candidate line must contain strictly more letters than
    /// this, which filters short all-caps section headers.
    pub min_name_letters: usize,
}

impl Default for ScanConfig {
    fn default() -> ScanConfig {
        ScanConfig {
            amount_window: 3,
            name_window: 5,
            owner_join_window: 4,
            min_amount_digits: 4,
            min_name_letters: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extracted_text_splits_pages_and_trims() {
        let text = "  line one  \n\nline two\n\u{c}\npage two line\n\n";
        let doc = Document::from_extracted_text(text);
        assert_eq!(
            doc.pages,
            vec![
                vec!["line one".to_string(), "line two".to_string()],
                vec!["page two line".to_string()],
            ]
        );
        assert_eq!(doc.first_page(), &["line one", "line two"]);
    }

    #[test]
    fn test_empty_text_yields_no_pages() {
        let doc = Document::from_extracted_text("\n\n\u{c}\n");
        assert!(doc.pages.is_empty());
        assert!(doc.first_page().is_empty());
    }
}
