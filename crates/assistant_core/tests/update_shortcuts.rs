use std::sync::Once;

use assistant_core::{update, AssistantState, Effect, Msg, RowSnapshot};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(assistant_logging::initialize_for_tests);
}

fn row_with_total(total: &str, action_count: usize) -> RowSnapshot {
    RowSnapshot {
        cell_count: 10,
        resource_texts: vec![total.to_string()],
        action_hrefs: (0..action_count)
            .map(|i| Some(format!("/game.php?screen=place&option={i}")))
            .collect(),
    }
}

fn load_page(state: AssistantState, rows: Vec<RowSnapshot>) -> AssistantState {
    let (state, _) = update(
        state,
        Msg::PageLoaded {
            header_cell_count: 6,
            header_label: Some("Resources".to_string()),
            rows,
        },
    );
    state
}

#[test]
fn key_a_activates_the_first_link_on_visible_rows_only() {
    init_logging();
    let state = load_page(
        AssistantState::new(),
        vec![row_with_total("100", 3), row_with_total("900", 3)],
    );

    // Hide the second row.
    let (state, _) = update(state, Msg::MaxEdited("500".to_string()));

    let (_state, effects) = update(state, Msg::KeyPressed('A'));
    assert_eq!(
        effects,
        vec![Effect::ActivateLink {
            row_index: 0,
            link_index: 0,
            href: Some("/game.php?screen=place&option=0".to_string()),
        }]
    );
}

#[test]
fn each_shortcut_maps_to_its_own_ordinal() {
    init_logging();
    let state = load_page(AssistantState::new(), vec![row_with_total("100", 3)]);

    let (state, effects) = update(state, Msg::KeyPressed('B'));
    assert_eq!(effects.len(), 1);
    assert_eq!(
        effects[0],
        Effect::ActivateLink {
            row_index: 0,
            link_index: 1,
            href: Some("/game.php?screen=place&option=1".to_string()),
        }
    );

    let (_state, effects) = update(state, Msg::KeyPressed('C'));
    assert_eq!(
        effects,
        vec![Effect::ActivateLink {
            row_index: 0,
            link_index: 2,
            href: Some("/game.php?screen=place&option=2".to_string()),
        }]
    );
}

#[test]
fn unrecognized_keys_do_nothing() {
    init_logging();
    let state = load_page(AssistantState::new(), vec![row_with_total("100", 3)]);

    let (state, effects) = update(state, Msg::KeyPressed('D'));
    assert!(effects.is_empty());

    // Matching is case-sensitive: a bare lowercase letter is not a shortcut.
    let (_state, effects) = update(state, Msg::KeyPressed('a'));
    assert!(effects.is_empty());
}

#[test]
fn rows_without_a_link_at_the_ordinal_are_skipped() {
    init_logging();
    let state = load_page(
        AssistantState::new(),
        vec![row_with_total("100", 1), row_with_total("200", 3)],
    );

    let (_state, effects) = update(state, Msg::KeyPressed('C'));
    assert_eq!(
        effects,
        vec![Effect::ActivateLink {
            row_index: 1,
            link_index: 2,
            href: Some("/game.php?screen=place&option=2".to_string()),
        }]
    );
}

#[test]
fn activations_arrive_in_row_order() {
    init_logging();
    let state = load_page(
        AssistantState::new(),
        vec![
            row_with_total("100", 2),
            row_with_total("200", 2),
            row_with_total("300", 2),
        ],
    );

    let (_state, effects) = update(state, Msg::KeyPressed('B'));
    let activated_rows: Vec<usize> = effects
        .iter()
        .map(|effect| match effect {
            Effect::ActivateLink { row_index, .. } => *row_index,
            other => panic!("unexpected effect: {other:?}"),
        })
        .collect();
    assert_eq!(activated_rows, vec![0, 1, 2]);
}

#[test]
fn visibility_is_read_live_at_each_keypress() {
    init_logging();
    let state = load_page(
        AssistantState::new(),
        vec![row_with_total("100", 3), row_with_total("900", 3)],
    );

    let (state, _) = update(state, Msg::MaxEdited("500".to_string()));
    let (state, effects) = update(state, Msg::KeyPressed('A'));
    assert_eq!(effects.len(), 1);

    // Widening the range afterwards makes the second row reachable again.
    let (state, _) = update(state, Msg::MaxEdited(String::new()));
    let (_state, effects) = update(state, Msg::KeyPressed('A'));
    assert_eq!(effects.len(), 2);
}

#[test]
fn malformed_rows_participate_in_shortcuts() {
    init_logging();
    let short_row = RowSnapshot {
        cell_count: 9,
        resource_texts: vec!["9.999".to_string()],
        action_hrefs: vec![Some("/short".to_string())],
    };
    let state = load_page(AssistantState::new(), vec![short_row]);

    // Bounds that would exclude the row's total: it is still never hidden,
    // so the shortcut reaches it.
    let (state, _) = update(state, Msg::MinEdited("1".to_string()));
    let (state, _) = update(state, Msg::MaxEdited("2".to_string()));

    let (_state, effects) = update(state, Msg::KeyPressed('A'));
    assert_eq!(
        effects,
        vec![Effect::ActivateLink {
            row_index: 0,
            link_index: 0,
            href: Some("/short".to_string()),
        }]
    );
}

#[test]
fn shortcuts_stay_armed_without_filter_controls() {
    init_logging();
    let (state, _) = update(
        AssistantState::new(),
        Msg::PageLoaded {
            header_cell_count: 5,
            header_label: None,
            rows: vec![row_with_total("100", 3), row_with_total("200", 3)],
        },
    );

    let (_state, effects) = update(state, Msg::KeyPressed('A'));
    assert_eq!(effects.len(), 2);
}

#[test]
fn links_without_href_still_activate() {
    init_logging();
    let row = RowSnapshot {
        cell_count: 10,
        resource_texts: vec!["100".to_string()],
        action_hrefs: vec![None],
    };
    let state = load_page(AssistantState::new(), vec![row]);

    let (_state, effects) = update(state, Msg::KeyPressed('A'));
    assert_eq!(
        effects,
        vec![Effect::ActivateLink {
            row_index: 0,
            link_index: 0,
            href: None,
        }]
    );
}
