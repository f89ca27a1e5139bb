use scraper::Selector;
use thiserror::Error;

/// Declared host-page contract: where the feature area, the table, and the
/// resource-summary cell live, and how wide rows must be. Validated once at
/// start-up, failing closed; per-row irregularities degrade at the
/// component level instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSchema {
    /// Container element identifying the feature area.
    pub widget_selector: String,
    /// The table of farmable targets.
    pub table_selector: String,
    /// 0-indexed position of the resource-summary cell. The same column's
    /// header cell hosts the filter inputs.
    pub resource_cell_index: usize,
    /// Header rows narrower than this cannot host the filter inputs.
    pub min_header_cells: usize,
    /// Data rows narrower than this are malformed for filtering.
    pub min_data_cells: usize,
}

impl Default for PageSchema {
    fn default() -> Self {
        Self {
            widget_selector: "#am_widget_Farm".to_string(),
            table_selector: "#plunder_list".to_string(),
            resource_cell_index: 5,
            min_header_cells: 6,
            min_data_cells: 10,
        }
    }
}

impl PageSchema {
    pub(crate) fn parse_selector(selector: &str) -> Result<Selector, SchemaError> {
        Selector::parse(selector).map_err(|_| SchemaError::InvalidSelector {
            selector: selector.to_string(),
        })
    }
}

/// Start-up validation failure: a required page element is missing. This is
/// the one error surfaced during setup; everything downstream degrades
/// silently per row.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("feature container not found ({selector})")]
    MissingWidget { selector: String },
    #[error("target table not found ({selector})")]
    MissingTable { selector: String },
    #[error("target table has no rows")]
    EmptyTable,
    #[error("invalid selector in page schema: {selector}")]
    InvalidSelector { selector: String },
}
