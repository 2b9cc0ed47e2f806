//! Download renditions of a finished summary.

use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SummaryExport {
    pub text_file_name: String,
    pub markdown_file_name: String,
    pub markdown: String,
}

impl SummaryExport {
    pub fn new(upload_name: &str, model: &str, summary: &str) -> Self {
        let stem = file_stem(upload_name);
        Self {
            text_file_name: format!("{stem}_summary.txt"),
            markdown_file_name: format!("{stem}_summary.md"),
            markdown: to_markdown(upload_name, model, summary),
        }
    }
}

/// Upload name with every `.pdf` removed (`cv.pdf` → `cv`).
pub fn file_stem(upload_name: &str) -> String {
    upload_name.replace(".pdf", "")
}

/// Markdown document: fixed title, source file and model, then the summary.
pub fn to_markdown(upload_name: &str, model: &str, summary: &str) -> String {
    format!(
        "# Resume Project Summary\n\n**File**: {upload_name}\n\n**Model Used**: {model}\n\n---\n\n{summary}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_stem_strips_extension() {
        assert_eq!(file_stem("jane_doe.pdf"), "jane_doe");
        assert_eq!(file_stem("resume"), "resume");
    }

    #[test]
    fn test_to_markdown_header() {
        let md = to_markdown("jane.pdf", "gemma2-9b-it", "**Project Name**: X");
        assert_eq!(
            md,
            "# Resume Project Summary\n\n**File**: jane.pdf\n\n**Model Used**: gemma2-9b-it\n\n---\n\n**Project Name**: X"
        );
    }

    #[test]
    fn test_summary_export_file_names() {
        let export = SummaryExport::new("jane.pdf", "llama-3.3-70b-versatile", "summary");
        assert_eq!(export.text_file_name, "jane_summary.txt");
        assert_eq!(export.markdown_file_name, "jane_summary.md");
        assert!(export.markdown.ends_with("\n\n---\n\nsummary"));
    }
}
