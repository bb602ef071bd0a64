//! Document readers: turn a resume file into the flat text blob the section
//! engine consumes (body paragraphs, then tables, then text-box content).

pub mod docx;
pub mod pdf;

use std::path::Path;

use crate::errors::ParseError;

pub use docx::DocxReader;
pub use pdf::PdfReader;

/// Label that introduces text-box content in the flattened text.
pub const SHAPES_LABEL: &str = "Texts in Shapes:";

/// Index into `Table::cells`. Merged regions share one id across grid slots.
pub type CellId = usize;

/// A table grid. `grid[row][col]` names the cell occupying that slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub cells: Vec<String>,
    pub grid: Vec<Vec<CellId>>,
}

impl Table {
    /// Cell texts in row-major order. A slot holding the same cell as its left
    /// or upper neighbour is a merge continuation and is skipped.
    pub fn flatten(&self) -> Vec<&str> {
        let mut out = Vec::new();
        for (r, row) in self.grid.iter().enumerate() {
            for (c, &id) in row.iter().enumerate() {
                let same_as_left = c > 0 && row[c - 1] == id;
                let same_as_up = r > 0 && self.grid[r - 1].get(c) == Some(&id);
                if same_as_left || same_as_up {
                    continue;
                }
                if let Some(text) = self.cells.get(id) {
                    out.push(text.as_str());
                }
            }
        }
        out
    }
}

/// Raw content pulled out of a resume file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentContent {
    pub paragraphs: Vec<String>,
    pub tables: Vec<Table>,
    pub shape_texts: Vec<String>,
}

impl DocumentContent {
    /// Concatenates paragraphs, flattened tables, and deduplicated text-box
    /// runs (under `SHAPES_LABEL`) into one newline-joined string.
    pub fn flatten(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        parts.push(self.paragraphs.join("\n"));

        for table in &self.tables {
            parts.push(table.flatten().join("\n"));
        }

        if !self.shape_texts.is_empty() {
            let mut unique: Vec<&str> = Vec::new();
            for text in &self.shape_texts {
                if !unique.contains(&text.as_str()) {
                    unique.push(text);
                }
            }
            parts.push(format!("{SHAPES_LABEL}\n{}", unique.join("\n")));
        }

        parts.join("\n")
    }
}

/// A source of resume content. Implemented per container format.
pub trait DocumentReader: Send + Sync {
    fn read(&self, path: &Path) -> Result<DocumentContent, ParseError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Docx,
    Pdf,
}

impl DocumentFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "docx" => Some(Self::Docx),
            "pdf" => Some(Self::Pdf),
            _ => None,
        }
    }
}

/// Picks a reader by file extension.
pub fn reader_for_path(path: &Path) -> Result<Box<dyn DocumentReader>, ParseError> {
    match DocumentFormat::from_path(path) {
        Some(DocumentFormat::Docx) => Ok(Box::new(DocxReader)),
        Some(DocumentFormat::Pdf) => Ok(Box::new(PdfReader)),
        None => Err(ParseError::UnsupportedFormat(path.display().to_string())),
    }
}
