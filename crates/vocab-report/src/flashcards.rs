//! Printable flashcard sheets.
//!
//! Cards are laid out on A4 pages in a 2x4 grid. Each card shows the
//! configured front fields above a dashed cut line and the back fields
//! below it. The first field of a side is the main line; the others are
//! joined with `<br>` into the secondary line, empty values included.

use std::path::Path;

use anyhow::{Context, Result};
use quick_xml::escape::escape;
use thiserror::Error;
use tracing::info;

use vocab_ingest::write_atomic;
use vocab_model::{Field, Record};

/// Cards on one printed page.
pub const CARDS_PER_PAGE: usize = 8;

const DOCUMENT_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <title>Flashcards Print</title>
  <style>
    * { margin: 0; padding: 0; box-sizing: border-box; }
    @page { size: A4; margin: 10mm; }

    .page {
      width: 190mm;
      height: 277mm;
      display: grid;
      grid-template-columns: 1fr 1fr;
      grid-template-rows: repeat(4, 1fr);
      gap: 2mm;
      page-break-after: always;
    }

    .card {
      border: 1px solid #ccc;
      display: flex;
      flex-direction: column;
      font-family: Arial, sans-serif;
    }

    .front, .back {
      flex: 1;
      display: flex;
      flex-direction: column;
      justify-content: center;
      align-items: center;
      padding: 4mm;
      text-align: center;
    }

    .front .main {
      font-size: 16pt;
      font-weight: bold;
    }

    .front .sub {
      font-size: 11pt;
      color: #666;
      margin-top: 2mm;
    }

    .back .main {
      font-size: 13pt;
    }

    .back .sub {
      font-size: 11pt;
      color: #555;
      margin-top: 2mm;
    }

    .divider {
      border-top: 1px dashed #999;
      height: 0;
    }

    @media print {
      body { margin: 0; }
      .page { page-break-after: always; }
      .page:last-child { page-break-after: auto; }
    }
  </style>
</head>
<body>
"#;

const DOCUMENT_TAIL: &str = "\n</body>\n</html>\n";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("card {side} must list at least one field")]
    EmptySide { side: &'static str },
}

/// Fields shown on each side of a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardLayout {
    front: Vec<Field>,
    back: Vec<Field>,
}

impl CardLayout {
    pub fn new(front: Vec<Field>, back: Vec<Field>) -> Result<Self, LayoutError> {
        if front.is_empty() {
            return Err(LayoutError::EmptySide { side: "front" });
        }
        if back.is_empty() {
            return Err(LayoutError::EmptySide { side: "back" });
        }
        Ok(Self { front, back })
    }

    pub fn front(&self) -> &[Field] {
        &self.front
    }

    pub fn back(&self) -> &[Field] {
        &self.back
    }
}

impl Default for CardLayout {
    fn default() -> Self {
        Self {
            front: vec![Field::En, Field::Pron],
            back: vec![Field::MeaningEn, Field::Cz],
        }
    }
}

/// A rendered flashcard document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashcardSheet {
    pub html: String,
    pub cards: usize,
    pub pages: usize,
}

/// Number of pages needed for `cards` cards.
pub fn page_count(cards: usize) -> usize {
    cards.div_ceil(CARDS_PER_PAGE)
}

/// Renders one card per record, in the given order.
pub fn render_flashcards<'a, I>(records: I, layout: &CardLayout) -> FlashcardSheet
where
    I: IntoIterator<Item = &'a Record>,
{
    let cards: Vec<String> = records
        .into_iter()
        .map(|record| render_card(record, layout))
        .collect();

    let pages: Vec<String> = cards
        .chunks(CARDS_PER_PAGE)
        .map(|chunk| format!("    <div class=\"page\">\n{}\n    </div>", chunk.join("\n")))
        .collect();

    let mut html = String::from(DOCUMENT_HEAD);
    html.push_str(&pages.join("\n"));
    html.push_str(DOCUMENT_TAIL);

    FlashcardSheet {
        html,
        cards: cards.len(),
        pages: pages.len(),
    }
}

/// Writes a rendered sheet, replacing any previous document.
pub fn write_flashcards(path: &Path, sheet: &FlashcardSheet) -> Result<()> {
    write_atomic(path, sheet.html.as_bytes())
        .with_context(|| format!("write flashcards {}", path.display()))?;
    info!(
        path = %path.display(),
        cards = sheet.cards,
        pages = sheet.pages,
        "written"
    );
    Ok(())
}

fn render_card(record: &Record, layout: &CardLayout) -> String {
    let (front_main, front_sub) = side_lines(record, layout.front());
    let (back_main, back_sub) = side_lines(record, layout.back());

    format!(
        "      <div class=\"card\">
        <div class=\"front\">
          <div class=\"main\">{front_main}</div>
          <div class=\"sub\">{front_sub}</div>
        </div>
        <div class=\"divider\"></div>
        <div class=\"back\">
          <div class=\"main\">{back_main}</div>
          <div class=\"sub\">{back_sub}</div>
        </div>
      </div>"
    )
}

/// Escaped main line and `<br>`-joined secondary line of one side.
fn side_lines(record: &Record, fields: &[Field]) -> (String, String) {
    let mut lines = fields
        .iter()
        .map(|field| escape(record.text(*field).as_ref()).into_owned());
    let main = lines.next().unwrap_or_default();
    let sub = lines.collect::<Vec<_>>().join("<br>");
    (main, sub)
}
