//! Assistant core: pure state machine and view-model helpers.
mod effect;
mod msg;
mod numeric;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use numeric::{coerce_max_bound, coerce_min_bound, parse_grouped_number};
pub use state::{AssistantState, Bounds, RowSnapshot, MIN_DATA_CELLS, MIN_HEADER_CELLS};
pub use update::update;
pub use view_model::{
    AssistantViewModel, ControlsView, InputControl, RowView, INPUT_MARGIN_RIGHT_PX, INPUT_SIZE,
};
