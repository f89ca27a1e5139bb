use crate::{AssistantState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AssistantState, msg: Msg) -> (AssistantState, Vec<Effect>) {
    let effects = match msg {
        Msg::BoundsRestored { min_text, max_text } => {
            state.restore_bounds(min_text, max_text);
            Vec::new()
        }
        Msg::PageLoaded {
            header_cell_count,
            header_label,
            rows,
        } => {
            state.attach_page(header_cell_count, header_label, rows);
            if state.controls_injected() {
                // Initial filter pass: the restored bounds apply immediately
                // and are written back like any other evaluation.
                vec![persist_current_bounds(&state)]
            } else {
                Vec::new()
            }
        }
        Msg::MinEdited(text) => {
            if !state.controls_injected() {
                return (state, Vec::new());
            }
            state.set_min_text(text);
            vec![persist_current_bounds(&state)]
        }
        Msg::MaxEdited(text) => {
            if !state.controls_injected() {
                return (state, Vec::new());
            }
            state.set_max_text(text);
            vec![persist_current_bounds(&state)]
        }
        Msg::KeyPressed(key) => {
            let Some(link_index) = shortcut_ordinal(key) else {
                // Not a shortcut: no side effect, no event suppression.
                return (state, Vec::new());
            };
            state
                .rows()
                .iter()
                .enumerate()
                .filter(|(_, row)| state.is_row_visible(row))
                .filter_map(|(row_index, row)| {
                    row.action_hrefs
                        .get(link_index)
                        .map(|href| Effect::ActivateLink {
                            row_index,
                            link_index,
                            href: href.clone(),
                        })
                })
                .collect()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn persist_current_bounds(state: &AssistantState) -> Effect {
    let bounds = state.effective_bounds();
    Effect::PersistBounds {
        min: bounds.min,
        max: bounds.max,
    }
}

/// Fixed shortcut table. Matching is exact: lowercase letters are not
/// shortcuts.
fn shortcut_ordinal(key: char) -> Option<usize> {
    match key {
        'A' => Some(0),
        'B' => Some(1),
        'C' => Some(2),
        _ => None,
    }
}
