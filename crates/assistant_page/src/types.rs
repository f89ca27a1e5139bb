use url::Url;

/// Visual-state marker classes identifying summable readings inside the
/// resource-summary cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceMarker {
    /// Plain reading (`res`).
    Normal,
    /// Near-capacity reading (`warn_90`).
    NearFull,
    /// Over-capacity reading (`warn`).
    Warning,
}

impl ResourceMarker {
    pub fn class_name(self) -> &'static str {
        match self {
            ResourceMarker::Normal => "res",
            ResourceMarker::NearFull => "warn_90",
            ResourceMarker::Warning => "warn",
        }
    }
}

/// One marked reading: the marker it carries and its display text, kept
/// raw so totalling stays a query-time concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceReading {
    pub marker: ResourceMarker,
    pub raw: String,
}

/// A clickable element in a data row, selected by ordinal position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionLink {
    pub href: Option<String>,
    pub label: String,
}

/// One data row of the farm table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TargetRow {
    pub cell_count: usize,
    pub resources: Vec<ResourceReading>,
    pub actions: Vec<ActionLink>,
}

/// The extracted farm table: header shape plus all data rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FarmTable {
    pub header_cell_count: usize,
    /// Text of the header cell that hosts the filter inputs, preserved so
    /// rendering can keep it after the injected controls.
    pub header_label: Option<String>,
    pub rows: Vec<TargetRow>,
}

/// Extraction result: the table plus the page's `<base>` target, used to
/// resolve relative action hrefs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedPage {
    pub base_href: Option<Url>,
    pub table: FarmTable,
}
