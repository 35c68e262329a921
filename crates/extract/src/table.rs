//! Row span expansion.
//!
//! An HTML table row only lists the cells that *start* on it; a cell with
//! `rowspan="3"` silently occupies the same column on the next two rows. This
//! module turns physical rows into logical rows where every active column is
//! present, so the row parser can address cells by position.
//!
//! Column spans are left alone: a section header that spans the
//! full width stays a single cell, which the row parser detects and skips.

use crate::consts;
use scraper::{ElementRef, Html};
use tracing::instrument;

/// A cell as declared on a physical row, with its vertical span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhysicalCell<C> {
    pub cell: C,
    /// Number of rows the cell occupies, starting with the row it is declared
    /// on. Zero is treated as one.
    pub rowspan: usize,
}
impl<C> PhysicalCell<C> {
    pub fn new(cell: C, rowspan: usize) -> Self {
        Self { cell, rowspan }
    }
}
impl<C> From<C> for PhysicalCell<C> {
    fn from(cell: C) -> Self {
        Self::new(cell, 1)
    }
}

/// A cell placed in a logical row, remembering the last row it covers.
#[derive(Debug, Clone)]
struct Placed<C> {
    cell: C,
    last_row: usize,
}

/// Expands row spans, producing one logical row per physical row.
///
/// For each row, the cells declared on it come first (in column order), then
/// every column of the previous logical row whose cell is still active is
/// inserted back at its column index. Spans running past the last row are
/// dropped without complaint.
pub fn split_rowspan<C: Clone>(rows: impl IntoIterator<Item = Vec<PhysicalCell<C>>>) -> Vec<Vec<C>> {
    let mut logical: Vec<Vec<Placed<C>>> = Vec::new();
    for (index, row) in rows.into_iter().enumerate() {
        let mut placed: Vec<Placed<C>> = row
            .into_iter()
            .map(|physical| Placed {
                last_row: index.saturating_add(physical.rowspan.max(1) - 1),
                cell: physical.cell,
            })
            .collect();
        if let Some(previous) = logical.last() {
            for (column, carried) in previous.iter().enumerate() {
                if carried.last_row >= index {
                    // A short row can't leave a gap; the carried cell lands at the end.
                    placed.insert(column.min(placed.len()), carried.clone());
                }
            }
        }
        logical.push(placed);
    }
    logical.into_iter().map(|row| row.into_iter().map(|placed| placed.cell).collect()).collect()
}

/// Reads a `rowspan` attribute.
///
/// Fractional spans round down, and spans too large for a `usize` saturate.
/// Anything that isn't a number, or is below one, means no span.
pub(crate) fn rowspan(element: &ElementRef<'_>) -> usize {
    element
        .value()
        .attr("rowspan")
        .and_then(|value| value.trim().parse::<f64>().ok())
        .filter(|span| *span >= 1.0)
        .map_or(1, |span| span.floor() as usize)
}

/// Reads a `colspan` attribute. Anything that isn't a number means no span.
pub(crate) fn colspan(element: &ElementRef<'_>) -> usize {
    element.value().attr("colspan").and_then(|value| value.trim().parse::<usize>().ok()).unwrap_or(1)
}

/// A parsed HTML document holding one (or more) song list tables.
#[derive(Debug)]
pub struct Table {
    document: Html,
}
impl Table {
    pub fn from_html(html: &str) -> Self {
        Self {
            document: Html::parse_document(html),
        }
    }

    /// The `tbody` rows as they appear in the markup.
    pub fn physical_rows(&self) -> Vec<Vec<PhysicalCell<ElementRef<'_>>>> {
        self.document
            .select(&consts::ROW_SELECTOR)
            .map(|row| row.select(&consts::CELL_SELECTOR).map(|cell| PhysicalCell::new(cell, rowspan(&cell))).collect())
            .collect()
    }

    /// The `tbody` rows with row spans expanded.
    #[instrument(level = "trace", skip(self), fields(rows))]
    pub fn logical_rows(&self) -> Vec<Vec<ElementRef<'_>>> {
        let rows = split_rowspan(self.physical_rows());
        tracing::Span::current().record("rows", rows.len());
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn texts(rows: Vec<Vec<ElementRef<'_>>>) -> Vec<Vec<String>> {
        rows.into_iter()
            .map(|row| row.into_iter().map(|cell| cell.text().collect::<String>()).collect())
            .collect()
    }

    #[test]
    fn test_span_carries_into_next_row() {
        let rows = vec![
            vec![PhysicalCell::new('A', 2), PhysicalCell::new('B', 1)],
            vec![PhysicalCell::new('C', 1)],
        ];
        assert_eq!(split_rowspan(rows), vec![vec!['A', 'B'], vec!['A', 'C']]);
    }

    #[test]
    fn test_span_in_middle_column() {
        let rows = vec![
            vec!['A'.into(), PhysicalCell::new('B', 3), 'C'.into()],
            vec!['D'.into(), 'E'.into()],
            vec!['F'.into(), 'G'.into()],
            vec!['H'.into(), 'I'.into()],
        ];
        assert_eq!(
            split_rowspan(rows),
            vec![vec!['A', 'B', 'C'], vec!['D', 'B', 'E'], vec!['F', 'B', 'G'], vec!['H', 'I']]
        );
    }

    #[test]
    fn test_fully_inherited_row() {
        let rows = vec![vec![PhysicalCell::new('A', 2), PhysicalCell::new('B', 2)], vec![]];
        assert_eq!(split_rowspan(rows), vec![vec!['A', 'B'], vec!['A', 'B']]);
    }

    #[test]
    fn test_span_past_table_end_is_dropped() {
        let rows = vec![vec![PhysicalCell::new('A', 10)], vec!['B'.into()]];
        assert_eq!(split_rowspan(rows), vec![vec!['A'], vec!['A', 'B']]);
    }

    #[test]
    fn test_huge_span_on_later_row() {
        let rows = vec![vec!['A'.into()], vec![PhysicalCell::new('B', usize::MAX), 'C'.into()], vec!['D'.into()]];
        assert_eq!(split_rowspan(rows), vec![vec!['A'], vec!['B', 'C'], vec!['B', 'D']]);
    }

    #[test]
    fn test_zero_span_is_single_row() {
        let rows = vec![vec![PhysicalCell::new('A', 0), 'B'.into()], vec!['C'.into()]];
        assert_eq!(split_rowspan(rows), vec![vec!['A', 'B'], vec!['C']]);
    }

    #[test]
    fn test_empty_table() {
        assert!(split_rowspan(Vec::<Vec<PhysicalCell<char>>>::new()).is_empty());
    }

    #[test]
    fn test_html_rowspan() {
        let table = Table::from_html(
            r#"<table><tbody>
                <tr><td rowspan="2">A</td><td>B</td></tr>
                <tr><td>C</td></tr>
                <tr><td rowspan="oops">D</td><td>E</td></tr>
                <tr><td>F</td></tr>
            </tbody></table>"#,
        );
        assert_eq!(
            texts(table.logical_rows()),
            vec![vec!["A", "B"], vec!["A", "C"], vec!["D", "E"], vec!["F"]]
        );
    }

    #[test]
    fn test_html_huge_rowspan() {
        let table = Table::from_html(
            r#"<table><tbody>
                <tr><td>A</td></tr>
                <tr><td rowspan="18446744073709551615">B</td><td>C</td></tr>
                <tr><td>D</td></tr>
            </tbody></table>"#,
        );
        assert_eq!(texts(table.logical_rows()), vec![vec!["A"], vec!["B", "C"], vec!["B", "D"]]);
    }

    #[rstest]
    #[case("2", 2)]
    #[case(" 3 ", 3)]
    #[case("2.5", 2)]
    #[case("0.5", 1)]
    #[case("0", 1)]
    #[case("-2", 1)]
    #[case("NaN", 1)]
    #[case("oops", 1)]
    #[case("18446744073709551615", usize::MAX)]
    fn test_rowspan_attribute(#[case] value: &str, #[case] expected: usize) {
        let document = Html::parse_document(&format!(
            r#"<table><tbody><tr><td rowspan="{value}">A</td></tr></tbody></table>"#
        ));
        let cell = document.select(&consts::CELL_SELECTOR).next().unwrap();
        assert_eq!(rowspan(&cell), expected);
    }

    #[test]
    fn test_html_fractional_rowspan_carries() {
        let table = Table::from_html(
            r#"<table><tbody>
                <tr><td rowspan="2.5">A</td><td>B</td></tr>
                <tr><td>C</td></tr>
                <tr><td>D</td></tr>
            </tbody></table>"#,
        );
        assert_eq!(texts(table.logical_rows()), vec![vec!["A", "B"], vec!["A", "C"], vec!["D"]]);
    }

    #[test]
    fn test_html_header_rows_are_skipped() {
        let table = Table::from_html(
            r#"<table>
                <thead><tr><td>Title</td></tr></thead>
                <tbody><tr><td colspan="2">Section</td></tr><tr><td>A</td><td>B</td></tr></tbody>
            </table>"#,
        );
        let rows = table.logical_rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(colspan(&rows[0][0]), 2);
        assert_eq!(colspan(&rows[1][0]), 1);
    }
}
