use assistant_logging::assistant_debug;
use ego_tree::NodeRef;
use scraper::node::Node;
use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::schema::{PageSchema, SchemaError};
use crate::types::{
    ActionLink, ExtractedPage, FarmTable, ResourceMarker, ResourceReading, TargetRow,
};

/// Parse a page snapshot, validate it against the schema, and extract the
/// farm table. Fails closed: a missing widget, missing table, or a table
/// without rows yields an error and nothing is extracted.
pub fn extract_page(html: &str, schema: &PageSchema) -> Result<ExtractedPage, SchemaError> {
    let document = Html::parse_document(html);

    let widget_selector = PageSchema::parse_selector(&schema.widget_selector)?;
    if document.select(&widget_selector).next().is_none() {
        return Err(SchemaError::MissingWidget {
            selector: schema.widget_selector.clone(),
        });
    }

    let table_selector = PageSchema::parse_selector(&schema.table_selector)?;
    let Some(table) = document.select(&table_selector).next() else {
        return Err(SchemaError::MissingTable {
            selector: schema.table_selector.clone(),
        });
    };

    let row_selector = PageSchema::parse_selector("tr")?;
    let rows: Vec<ElementRef> = table.select(&row_selector).collect();
    if rows.is_empty() {
        return Err(SchemaError::EmptyTable);
    }

    let header_selector = PageSchema::parse_selector("th")?;
    let header_cells: Vec<ElementRef> = rows[0].select(&header_selector).collect();
    let header_label = header_cells
        .get(schema.resource_cell_index)
        .map(|cell| cell.text().collect::<String>().trim().to_string())
        .filter(|label| !label.is_empty());

    let cell_selector = PageSchema::parse_selector("td")?;
    let anchor_selector = PageSchema::parse_selector("a")?;

    let data_rows: Vec<TargetRow> = rows[1..]
        .iter()
        .map(|row| {
            let cells: Vec<ElementRef> = row.select(&cell_selector).collect();
            let resources = cells
                .get(schema.resource_cell_index)
                .map(|cell| collect_readings(*cell))
                .unwrap_or_default();
            let actions = row
                .select(&anchor_selector)
                .map(|anchor| ActionLink {
                    href: anchor.value().attr("href").map(|href| href.trim().to_string()),
                    label: anchor.text().collect::<String>().trim().to_string(),
                })
                .collect();
            TargetRow {
                cell_count: cells.len(),
                resources,
                actions,
            }
        })
        .collect();

    assistant_debug!(
        "extracted {} data rows ({} header cells) from {}",
        data_rows.len(),
        header_cells.len(),
        schema.table_selector
    );

    Ok(ExtractedPage {
        base_href: extract_base_href(&document),
        table: FarmTable {
            header_cell_count: header_cells.len(),
            header_label,
            rows: data_rows,
        },
    })
}

/// Collect every marker-classed element under the resource-summary cell,
/// in document order.
fn collect_readings(cell: ElementRef<'_>) -> Vec<ResourceReading> {
    let mut readings = Vec::new();
    for child in cell.children() {
        visit_node(child, &mut readings);
    }
    readings
}

fn visit_node(node: NodeRef<'_, Node>, readings: &mut Vec<ResourceReading>) {
    if let Some(element) = ElementRef::wrap(node) {
        if let Some(marker) = marker_of(element) {
            readings.push(ResourceReading {
                marker,
                raw: element.text().collect::<String>(),
            });
        }
    }
    for child in node.children() {
        visit_node(child, readings);
    }
}

fn marker_of(element: ElementRef<'_>) -> Option<ResourceMarker> {
    [
        ResourceMarker::Normal,
        ResourceMarker::NearFull,
        ResourceMarker::Warning,
    ]
    .into_iter()
    .find(|marker| {
        element
            .value()
            .classes()
            .any(|class| class == marker.class_name())
    })
}

fn extract_base_href(document: &Html) -> Option<Url> {
    let selector = Selector::parse("base").ok()?;
    let base = document.select(&selector).next()?;
    let href = base.value().attr("href")?;
    Url::parse(href.trim()).ok()
}

/// Resolve an action link's href against the page base, if any. Fragment,
/// query-only, and scripting references resolve to nothing.
pub fn resolve_href(base: Option<&Url>, reference: &str) -> Option<Url> {
    let trimmed = reference.trim();
    if trimmed.is_empty() {
        return None;
    }
    let lower = trimmed.to_ascii_lowercase();
    if lower.starts_with('#') || lower.starts_with('?') || lower.starts_with("javascript:") {
        return None;
    }
    if let Ok(url) = Url::parse(trimmed) {
        return Some(url);
    }
    base.and_then(|base| base.join(trimmed).ok())
}
