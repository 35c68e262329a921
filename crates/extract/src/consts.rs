use regex::Regex;
use scraper::Selector;
use std::sync::LazyLock;

macro_rules! selector {
    ($name:ident, $css:expr) => {
        pub(crate) static $name: LazyLock<Selector> = LazyLock::new(|| Selector::parse($css).unwrap());
    };
}

macro_rules! regex {
    ($name:ident, $regex:expr) => {
        pub(crate) static $name: LazyLock<Regex> = LazyLock::new(|| Regex::new($regex).unwrap());
    };
}

// Header rows live in `thead` and are never data.
selector!(ROW_SELECTOR, "tbody tr");
selector!(CELL_SELECTOR, "td");
regex!(ENCORE_REGEX, r"^EN\d+$");
regex!(PREMIUM_ENCORE_REGEX, r"^PE\d+$");

/// Shape of the song list tables on the wiki.
///
/// Every data row has [`COLUMN_COUNT`](Self::COLUMN_COUNT) cells once row
/// spans are expanded. Section headers are a single cell spanning the whole
/// width.
pub struct TableLayout;
impl TableLayout {
    /// Cells in a data row.
    pub const COLUMN_COUNT: usize = 17;
    /// Category cell (open type, long flag, ignorable markers).
    pub const CATEGORY_COLUMN: usize = 0;
    pub const TITLE_COLUMN: usize = 1;
    pub const ARTIST_COLUMN: usize = 2;
    /// First of the difficulty rating cells.
    pub const LEVEL_COLUMN_START: usize = 5;
    /// Number of consecutive difficulty rating cells, one per tier.
    pub const LEVEL_COLUMN_COUNT: usize = 4;
    /// Marker in a rating cell for "no chart at this difficulty".
    pub const NO_CHART: &'static str = "-";
    /// Class of footnote markers, dropped when reading cell text.
    pub const ANNOTATION_CLASS: &'static str = "note_super";
}
