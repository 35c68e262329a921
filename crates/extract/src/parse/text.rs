use crate::consts::TableLayout;
use scraper::{ElementRef, Node};

/// Reads the visible text of a cell.
///
/// Text nodes and the text of child elements (bold, coloured, links...) are
/// concatenated; footnote markers are dropped entirely. Returns `None` when
/// nothing but whitespace is left.
pub(crate) fn cell_text(cell: &ElementRef<'_>) -> Option<String> {
    let mut text = String::new();
    for child in cell.children() {
        match child.value() {
            Node::Text(node) => text.push_str(node),
            Node::Element(element) if element.classes().any(|class| class == TableLayout::ANNOTATION_CLASS) => {},
            Node::Element(_) => {
                if let Some(element) = ElementRef::wrap(child) {
                    text.extend(element.text());
                }
            },
            _ => {},
        }
    }
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

/// Splits the category cell into its tokens.
///
/// Tokens are separated by `<br>` (each lands in its own text node) or by
/// newlines. Only the cell's own text counts, markup inside it is ignored.
pub(crate) fn category_tokens(cell: &ElementRef<'_>) -> Vec<String> {
    cell.children()
        .filter_map(|child| match child.value() {
            Node::Text(node) => Some(node.lines().map(str::trim).filter(|t| !t.is_empty()).map(String::from)),
            _ => None,
        })
        .flatten()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::CELL_SELECTOR;
    use rstest::rstest;
    use scraper::Html;

    fn with_cell<T>(inner: &str, f: impl FnOnce(&ElementRef<'_>) -> T) -> T {
        let document = Html::parse_document(&format!("<table><tbody><tr><td>{inner}</td></tr></tbody></table>"));
        let cell = document.select(&CELL_SELECTOR).next().unwrap();
        f(&cell)
    }

    #[rstest]
    #[case("Foo", Some("Foo"))]
    #[case("  Foo  ", Some("Foo"))]
    #[case("<b>Foo</b> Bar", Some("Foo Bar"))]
    #[case(r#"Foo<span class="note_super">*1</span>"#, Some("Foo"))]
    #[case(r#"<span class="note_super">*1</span>"#, None)]
    #[case("<span style=\"color:red\"><b>Red</b></span>", Some("Red"))]
    #[case("", None)]
    #[case("   ", None)]
    fn test_cell_text(#[case] inner: &str, #[case] expected: Option<&str>) {
        assert_eq!(with_cell(inner, cell_text).as_deref(), expected);
    }

    #[rstest]
    #[case("L", vec!["L"])]
    #[case("EN1<br>L", vec!["EN1", "L"])]
    #[case("版<br />\nDX<br>", vec!["版", "DX"])]
    #[case("S\nGF", vec!["S", "GF"])]
    #[case("", vec![])]
    fn test_category_tokens(#[case] inner: &str, #[case] expected: Vec<&str>) {
        assert_eq!(with_cell(inner, category_tokens), expected);
    }
}
