//! Turning logical table rows into tracks.

mod category;
mod text;

pub use self::category::{Category, parse_category};
use self::text::{category_tokens, cell_text};
use crate::consts::TableLayout;
use crate::error::{ErrorKind, Result};
use crate::models::{Difficulty, Level, ParsedTrack, Row, RowError, Scores, SkillType, Source};
use crate::table::{Table, colspan};
use exn::OptionExt;
use scraper::ElementRef;
use tracing::instrument;

/// Result of [`classify_row`].
#[derive(Debug, Clone, PartialEq)]
pub enum Classified {
    Track(ParsedTrack),
    Error(RowError),
    /// Section separators and other rows that aren't data.
    Ignore,
}
impl Classified {
    pub fn into_row(self) -> Option<Row> {
        match self {
            Self::Track(track) => Some(Row::Track(track)),
            Self::Error(error) => Some(Row::Error(error)),
            Self::Ignore => None,
        }
    }
}

/// Parses every row of a song list page.
///
/// Rows come back in table order; separators are skipped, and rows that fail
/// to parse become [`Row::Error`] without stopping the rest. A page without a
/// single `tbody` row yields one page-level error instead.
#[instrument(skip(html), fields(html_size = html.len(), rows))]
pub fn parse_html(source: Source, html: &str) -> Vec<Row> {
    let table = Table::from_html(html);
    let rows = table.logical_rows();
    tracing::Span::current().record("rows", rows.len());
    if rows.is_empty() {
        tracing::warn!(%source, "no table rows found");
        return vec![Row::Error(RowError::no_rows(source))];
    }
    rows.iter()
        .enumerate()
        .filter_map(|(index, cells)| classify_row(source, index, cells).into_row())
        .collect()
}

/// Parses a single logical row.
pub fn classify_row(source: Source, row: usize, cells: &[ElementRef<'_>]) -> Classified {
    if let [cell] = cells
        && colspan(cell) == TableLayout::COLUMN_COUNT
    {
        tracing::trace!(%source, row, "skipping section separator");
        return Classified::Ignore;
    }
    match parse_track(source, row, cells) {
        Ok(track) => Classified::Track(track),
        Err(err) => {
            let message = (*err).to_string();
            tracing::debug!(%source, row, %message, "row rejected");
            Classified::Error(RowError::new(source, Some(row), message))
        },
    }
}

fn parse_track(source: Source, row: usize, cells: &[ElementRef<'_>]) -> Result<ParsedTrack> {
    if cells.len() != TableLayout::COLUMN_COUNT {
        exn::bail!(ErrorKind::WrongColumnCount {
            expected: TableLayout::COLUMN_COUNT,
            found: cells.len(),
        });
    }
    let category = parse_category(&category_tokens(&cells[TableLayout::CATEGORY_COLUMN]))?;
    let title = cell_text(&cells[TableLayout::TITLE_COLUMN]).ok_or_raise(|| ErrorKind::EmptyField("title"))?;
    let artist = cell_text(&cells[TableLayout::ARTIST_COLUMN]).ok_or_raise(|| ErrorKind::EmptyField("artist"))?;
    let levels = cells
        .iter()
        .skip(TableLayout::LEVEL_COLUMN_START)
        .take(TableLayout::LEVEL_COLUMN_COUNT)
        .map(cell_text)
        .collect::<Vec<_>>();
    Ok(ParsedTrack {
        title,
        artist,
        skill_type: SkillType::for_source(source),
        long: category.long,
        open_type: category.open_type,
        scores: parse_scores(&levels)?,
        source,
        row,
    })
}

/// Reads one rating per difficulty tier, in tier order.
///
/// `-` means there is no chart at that tier. A missing or empty cell, or
/// anything else that isn't a number, fails the whole row.
pub fn parse_scores<S: AsRef<str>>(cells: &[Option<S>]) -> Result<Scores> {
    let mut scores = Scores::new();
    for (index, difficulty) in Difficulty::ALL.into_iter().enumerate() {
        let text: &str = cells
            .get(index)
            .and_then(Option::as_ref)
            .map(|cell| cell.as_ref())
            .ok_or_raise(|| ErrorKind::InvalidLevel(format!("{difficulty} is empty")))?;
        if text == TableLayout::NO_CHART {
            continue;
        }
        scores.insert(difficulty, text.parse::<Level>()?);
    }
    Ok(scores)
}
