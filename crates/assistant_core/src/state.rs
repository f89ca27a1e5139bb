use crate::numeric::{coerce_max_bound, coerce_min_bound, parse_grouped_number};
use crate::view_model::{AssistantViewModel, ControlsView, InputControl, RowView};

/// A header row narrower than this carries no room for the filter inputs;
/// injection aborts silently and filtering stays disabled.
pub const MIN_HEADER_CELLS: usize = 6;

/// Data rows narrower than this are malformed for filtering purposes and
/// never have their visibility altered.
pub const MIN_DATA_CELLS: usize = 10;

/// Owned snapshot of one data row: enough of the page content to derive
/// visibility and dispatch shortcuts, nothing more.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RowSnapshot {
    /// Number of cells the row has in the page.
    pub cell_count: usize,
    /// Display text of each marked reading in the resource-summary cell.
    pub resource_texts: Vec<String>,
    /// `href` of every action link in the row, in page order.
    pub action_hrefs: Vec<Option<String>>,
}

impl RowSnapshot {
    /// Sum of the row's marked resource readings.
    pub fn total(&self) -> f64 {
        self.resource_texts
            .iter()
            .map(|text| parse_grouped_number(text))
            .sum()
    }
}

/// The inclusive range a row total must fall in to stay visible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    /// The range that keeps every row visible.
    pub fn unbounded() -> Self {
        Self {
            min: 0.0,
            max: f64::INFINITY,
        }
    }

    pub fn contains(&self, total: f64) -> bool {
        total >= self.min && total <= self.max
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AssistantState {
    rows: Vec<RowSnapshot>,
    header_label: Option<String>,
    min_text: String,
    max_text: String,
    controls_injected: bool,
    dirty: bool,
}

impl AssistantState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derived projection of the current state. Visibility is computed
    /// fresh from bounds and row content; nothing is cached.
    pub fn view(&self) -> AssistantViewModel {
        let controls = self.controls_injected.then(|| ControlsView {
            min: InputControl::new("Min", self.min_text.clone()),
            max: InputControl::new("Max", self.max_text.clone()),
        });

        let rows: Vec<RowView> = self
            .rows
            .iter()
            .enumerate()
            .map(|(index, row)| RowView {
                index,
                total: (row.cell_count >= MIN_DATA_CELLS).then(|| row.total()),
                visible: self.is_row_visible(row),
                action_count: row.action_hrefs.len(),
            })
            .collect();
        let visible_count = rows.iter().filter(|row| row.visible).count();

        AssistantViewModel {
            controls,
            header_label: self.header_label.clone(),
            rows,
            visible_count,
        }
    }

    /// Returns whether the state changed since the last call, clearing the
    /// flag. The platform uses this to coalesce re-renders.
    pub fn consume_dirty(&mut self) -> bool {
        let was_dirty = self.dirty;
        self.dirty = false;
        was_dirty
    }

    pub fn rows(&self) -> &[RowSnapshot] {
        &self.rows
    }

    pub fn controls_injected(&self) -> bool {
        self.controls_injected
    }

    /// Bounds as currently configured. Without injected controls there is
    /// no way to configure a range, so everything passes.
    pub fn effective_bounds(&self) -> Bounds {
        if !self.controls_injected {
            return Bounds::unbounded();
        }
        Bounds {
            min: coerce_min_bound(&self.min_text),
            max: coerce_max_bound(&self.max_text),
        }
    }

    /// Live visibility of one row. Malformed rows (fewer than
    /// [`MIN_DATA_CELLS`] cells) keep their initial visible display.
    pub fn is_row_visible(&self, row: &RowSnapshot) -> bool {
        if row.cell_count < MIN_DATA_CELLS {
            return true;
        }
        self.effective_bounds().contains(row.total())
    }

    pub(crate) fn restore_bounds(&mut self, min_text: String, max_text: String) {
        self.min_text = min_text;
        self.max_text = max_text;
        self.dirty = true;
    }

    pub(crate) fn attach_page(
        &mut self,
        header_cell_count: usize,
        header_label: Option<String>,
        rows: Vec<RowSnapshot>,
    ) {
        self.header_label = header_label;
        self.rows = rows;
        self.controls_injected = header_cell_count >= MIN_HEADER_CELLS;
        self.dirty = true;
    }

    pub(crate) fn set_min_text(&mut self, text: String) {
        self.min_text = text;
        self.dirty = true;
    }

    pub(crate) fn set_max_text(&mut self, text: String) {
        self.max_text = text;
        self.dirty = true;
    }
}
