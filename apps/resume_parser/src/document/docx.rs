//! DOCX reader: walks `word/document.xml` with a streaming XML reader and
//! collects body paragraphs, top-level tables, and text-box paragraphs.

use std::fs::File;
use std::io::Read;
use std::mem;
use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use tracing::debug;
use zip::ZipArchive;

use crate::document::{CellId, DocumentContent, DocumentReader, Table};
use crate::errors::ParseError;

const DOCUMENT_PART: &str = "word/document.xml";

#[derive(Debug, Clone, Copy, Default)]
pub struct DocxReader;

impl DocumentReader for DocxReader {
    fn read(&self, path: &Path) -> Result<DocumentContent, ParseError> {
        if !path.exists() {
            return Err(ParseError::FileNotFound(path.display().to_string()));
        }
        let file = File::open(path)?;
        let mut archive = ZipArchive::new(file)?;

        let xml = {
            let mut part = archive
                .by_name(DOCUMENT_PART)
                .map_err(|e| ParseError::Archive(format!("missing {DOCUMENT_PART}: {e}")))?;
            let mut content = String::new();
            part.read_to_string(&mut content)?;
            content
        };

        let content = parse_document_xml(&xml)?;
        debug!(
            path = %path.display(),
            paragraphs = content.paragraphs.len(),
            tables = content.tables.len(),
            shapes = content.shape_texts.len(),
            "read docx"
        );
        Ok(content)
    }
}

/// Extracts paragraphs, tables and text-box paragraphs from a WordprocessingML body.
pub fn parse_document_xml(xml: &str) -> Result<DocumentContent, ParseError> {
    let mut reader = Reader::from_str(xml);
    // Whitespace inside w:t is significant.
    reader.trim_text(false);

    let mut walker = BodyWalker::default();
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => walker.on_start(&e),
            Event::Empty(e) => {
                walker.on_start(&e);
                walker.on_end(e.name().as_ref());
            }
            Event::End(e) => walker.on_end(e.name().as_ref()),
            Event::Text(e) => {
                if walker.in_text {
                    let text = e.unescape()?;
                    walker.push_text(&text);
                }
            }
            Event::CData(e) => {
                if walker.in_text {
                    walker.push_text(&String::from_utf8_lossy(&e));
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(walker.content)
}

fn get_attr(e: &BytesStart, key: &[u8]) -> Option<String> {
    e.attributes()
        .find(|a| a.as_ref().ok().map(|x| x.key.as_ref()) == Some(key))
        .and_then(Result::ok)
        .map(|attr| String::from_utf8_lossy(&attr.value).to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VMerge {
    Restart,
    Continue,
}

#[derive(Debug, Default)]
struct CellBuilder {
    paragraphs: Vec<String>,
    current: String,
    span: usize,
    v_merge: Option<VMerge>,
}

#[derive(Debug, Default)]
struct TableBuilder {
    table: Table,
    row: Vec<CellId>,
    cell: Option<CellBuilder>,
}

impl TableBuilder {
    fn finish_cell(&mut self) {
        let Some(mut cell) = self.cell.take() else {
            return;
        };
        if !cell.current.is_empty() {
            cell.paragraphs.push(mem::take(&mut cell.current));
        }
        let col = self.row.len();
        let continued = match cell.v_merge {
            Some(VMerge::Continue) => self.table.grid.last().and_then(|prev| prev.get(col)).copied(),
            _ => None,
        };
        let id = continued.unwrap_or_else(|| {
            self.table.cells.push(cell.paragraphs.join("\n"));
            self.table.cells.len() - 1
        });
        for _ in 0..cell.span.max(1) {
            self.row.push(id);
        }
    }

    fn finish_row(&mut self) {
        self.finish_cell();
        let row = mem::take(&mut self.row);
        self.table.grid.push(row);
    }
}

/// Event-driven state for one pass over document.xml.
#[derive(Debug, Default)]
struct BodyWalker {
    content: DocumentContent,
    in_text: bool,
    run_depth: usize,
    table_depth: usize,
    textbox_depth: usize,
    paragraph: Option<String>,
    textbox_paragraph: String,
    table: Option<TableBuilder>,
}

impl BodyWalker {
    fn on_start(&mut self, e: &BytesStart) {
        match e.name().as_ref() {
            b"w:txbxContent" => {
                self.textbox_depth += 1;
            }
            b"w:r" => self.run_depth += 1,
            b"w:t" => self.in_text = true,
            // w:tab also appears as a tab-stop definition in w:pPr; only run-level ones are text.
            b"w:tab" if self.run_depth > 0 => self.push_text("\t"),
            b"w:br" | b"w:cr" if self.run_depth > 0 => self.push_text("\n"),
            b"w:p" => self.on_paragraph_start(),
            _ if self.textbox_depth > 0 => {}
            b"w:tbl" => {
                self.table_depth += 1;
                if self.table_depth == 1 {
                    self.table = Some(TableBuilder::default());
                }
            }
            b"w:tr" if self.table_depth == 1 => {
                if let Some(table) = self.table.as_mut() {
                    table.row.clear();
                }
            }
            b"w:tc" if self.table_depth == 1 => {
                if let Some(table) = self.table.as_mut() {
                    table.cell = Some(CellBuilder {
                        span: 1,
                        ..CellBuilder::default()
                    });
                }
            }
            b"w:gridSpan" if self.table_depth == 1 => {
                let span = get_attr(e, b"w:val").and_then(|v| v.parse::<usize>().ok());
                if let (Some(cell), Some(span)) = (self.current_cell(), span) {
                    cell.span = span;
                }
            }
            b"w:vMerge" if self.table_depth == 1 => {
                let v_merge = match get_attr(e, b"w:val").as_deref() {
                    Some("restart") => VMerge::Restart,
                    _ => VMerge::Continue,
                };
                if let Some(cell) = self.current_cell() {
                    cell.v_merge = Some(v_merge);
                }
            }
            _ => {}
        }
    }

    fn on_end(&mut self, name: &[u8]) {
        match name {
            b"w:r" => self.run_depth = self.run_depth.saturating_sub(1),
            b"w:t" => self.in_text = false,
            b"w:p" => self.on_paragraph_end(),
            b"w:txbxContent" => {
                self.textbox_depth = self.textbox_depth.saturating_sub(1);
            }
            _ if self.textbox_depth > 0 => {}
            b"w:tc" if self.table_depth == 1 => {
                if let Some(table) = self.table.as_mut() {
                    table.finish_cell();
                }
            }
            b"w:tr" if self.table_depth == 1 => {
                if let Some(table) = self.table.as_mut() {
                    table.finish_row();
                }
            }
            b"w:tbl" if self.table_depth > 0 => {
                if self.table_depth == 1 {
                    if let Some(table) = self.table.take() {
                        self.content.tables.push(table.table);
                    }
                }
                self.table_depth -= 1;
            }
            _ => {}
        }
    }

    fn on_paragraph_start(&mut self) {
        if self.textbox_depth > 0 {
            self.textbox_paragraph.clear();
        } else if self.table_depth == 0 {
            self.paragraph = Some(String::new());
        }
    }

    fn on_paragraph_end(&mut self) {
        if self.textbox_depth > 0 {
            let text = mem::take(&mut self.textbox_paragraph);
            if !text.trim().is_empty() {
                self.content.shape_texts.push(text);
            }
        } else if self.table_depth > 0 {
            if let Some(cell) = self.current_cell() {
                let text = mem::take(&mut cell.current);
                cell.paragraphs.push(text);
            }
        } else if let Some(text) = self.paragraph.take() {
            self.content.paragraphs.push(text);
        }
    }

    fn current_cell(&mut self) -> Option<&mut CellBuilder> {
        self.table.as_mut().and_then(|t| t.cell.as_mut())
    }

    /// Routes run text to the innermost open container: text box, table cell, or body paragraph.
    fn push_text(&mut self, text: &str) {
        if self.textbox_depth > 0 {
            self.textbox_paragraph.push_str(text);
        } else if self.table_depth > 0 {
            if let Some(cell) = self.current_cell() {
                cell.current.push_str(text);
            }
        } else if let Some(paragraph) = self.paragraph.as_mut() {
            paragraph.push_str(text);
        }
    }
}
