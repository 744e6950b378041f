//! Turn parsed rows into fresh cards.
//!
//! A first row naming `front` or `back` is a header and columns are found by
//! name. Without one, columns are positional: front, back, frontImage, backImage.

use crate::config::{HEADER_BACK, HEADER_BACK_IMAGE, HEADER_FRONT, HEADER_FRONT_IMAGE};
use crate::domain::Card;

/// Column positions of the four card fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    pub front: Option<usize>,
    pub back: Option<usize>,
    pub front_image: Option<usize>,
    pub back_image: Option<usize>,
}

impl ColumnMap {
    /// front, back, frontImage, backImage in that order
    pub const POSITIONAL: ColumnMap = ColumnMap {
        front: Some(0),
        back: Some(1),
        front_image: Some(2),
        back_image: Some(3),
    };

    /// Resolve columns from a header row; the first matching column wins.
    pub fn from_header(header: &[String]) -> Self {
        let position = |name: &str| header.iter().position(|cell| cell == name);
        Self {
            front: position(HEADER_FRONT),
            back: position(HEADER_BACK),
            front_image: position(HEADER_FRONT_IMAGE),
            back_image: position(HEADER_BACK_IMAGE),
        }
    }
}

/// Lower-cased, trimmed cells of a candidate header row
fn normalize_header(row: &[String]) -> Vec<String> {
    row.iter().map(|cell| cell.trim().to_lowercase()).collect()
}

/// True if the row contains a `front` or `back` cell (case-insensitive, trimmed)
pub fn is_header(row: &[String]) -> bool {
    normalize_header(row)
        .iter()
        .any(|cell| cell == HEADER_FRONT || cell == HEADER_BACK)
}

fn text_at(row: &[String], index: Option<usize>) -> String {
    index
        .and_then(|i| row.get(i))
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}

fn image_at(row: &[String], index: Option<usize>) -> Option<String> {
    let value = text_at(row, index);
    if value.is_empty() { None } else { Some(value) }
}

/// Map rows to cards, skipping a header row and dropping rows with no front and no back.
pub fn map_rows_to_cards(rows: &[Vec<String>]) -> Vec<Card> {
    let Some(first) = rows.first() else {
        return Vec::new();
    };

    let (columns, data) = if is_header(first) {
        (ColumnMap::from_header(&normalize_header(first)), &rows[1..])
    } else {
        (ColumnMap::POSITIONAL, rows)
    };

    data.iter()
        .map(|row| {
            Card::new(
                text_at(row, columns.front),
                text_at(row, columns.back),
                image_at(row, columns.front_image),
                image_at(row, columns.back_image),
            )
        })
        .filter(|card| !card.is_blank())
        .collect()
}
