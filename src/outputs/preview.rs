//! Human-readable preview of a summary CSV.

use crate::models::SummaryRow;
use crate::utils::truncate_chars;
use std::fmt::Write;

/// Titles are cut to this many characters in the preview.
const PREVIEW_TITLE_CHARS: usize = 60;

/// Render the preview banner followed by one block per row.
///
/// ```text
/// ============================================================
/// Preview of extracted data:
/// ============================================================
///
/// File: a.txt
/// Title: Solar output hits record...
/// Date: 2025-05-06
/// Keywords: solar, grid, record
/// ```
pub fn render_preview(rows: &[SummaryRow]) -> String {
    let rule = "=".repeat(60);
    let mut out = String::new();

    writeln!(out, "{rule}\nPreview of extracted data:\n{rule}").unwrap();
    for row in rows {
        writeln!(out).unwrap();
        writeln!(out, "File: {}", row.filename).unwrap();
        writeln!(
            out,
            "Title: {}...",
            truncate_chars(&row.title, PREVIEW_TITLE_CHARS)
        )
        .unwrap();
        writeln!(out, "Date: {}", row.date).unwrap();
        writeln!(out, "Keywords: {}", row.keywords().join(", ")).unwrap();
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(title: &str) -> SummaryRow {
        SummaryRow {
            filename: "a.txt".to_string(),
            title: title.to_string(),
            date: "2025-05-06".to_string(),
            keyword1: "solar".to_string(),
            keyword2: "grid".to_string(),
            keyword3: String::new(),
        }
    }

    #[test]
    fn test_banner_only_for_no_rows() {
        let rule = "=".repeat(60);
        assert_eq!(
            render_preview(&[]),
            format!("{rule}\nPreview of extracted data:\n{rule}\n")
        );
    }

    #[test]
    fn test_row_block() {
        let preview = render_preview(&[row("Short title")]);
        assert!(preview.ends_with(
            "\nFile: a.txt\nTitle: Short title...\nDate: 2025-05-06\nKeywords: solar, grid, \n"
        ));
    }

    #[test]
    fn test_long_title_truncated_to_sixty_chars() {
        let title = "é".repeat(80);
        let preview = render_preview(&[row(&title)]);
        let expected = format!("Title: {}...\n", "é".repeat(60));
        assert!(preview.contains(&expected));
    }
}
