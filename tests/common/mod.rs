pub mod fixtures;
pub mod pdf_assertions;

use formdoc::{AnswerMap, FormSchema, build_report};
use lopdf::Document as LopdfDocument;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Save the PDF to a file for manual debugging
    #[allow(dead_code)]
    pub fn save_for_debug(&self, name: &str) -> std::io::Result<()> {
        std::fs::write(format!("test_output_{}.pdf", name), &self.bytes)
    }
}

/// Build a report and parse the produced bytes back for inspection
pub fn render_report(
    schema: &FormSchema,
    answers: &AnswerMap,
) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    let bytes = build_report(schema, answers)?;
    GeneratedPdf::from_bytes(bytes)
}
