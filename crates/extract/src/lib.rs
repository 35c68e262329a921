//! Song list extraction from wiki HTML.
//!
//! The wiki keeps its song lists in large tables where neighbouring rows
//! share cells through `rowspan`. Extraction happens in two steps:
//!
//! 1. [`Table`] expands row spans so every logical row has a cell at every
//!    column ([`split_rowspan`] does the same for any cell type).
//! 2. [`classify_row`] reads a logical row into a [`ParsedTrack`](models::ParsedTrack),
//!    a [`RowError`](models::RowError), or nothing (section separators).
//!
//! [`parse_html`] runs both over a whole page.

mod consts;
pub mod error;
pub mod models;
mod parse;
mod table;

pub use crate::consts::TableLayout;
pub use crate::parse::{Category, Classified, classify_row, parse_category, parse_html, parse_scores};
pub use crate::table::{PhysicalCell, Table, split_rowspan};
