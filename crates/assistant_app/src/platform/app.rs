use std::fs;
use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::Context;
use assistant_core::{update, AssistantState, Msg, RowSnapshot};
use assistant_logging::{assistant_error, assistant_info};
use assistant_page::{decode_page, extract_page, load_saved_bounds, FarmTable, PageSchema, TargetRow};

use super::effects::EffectRunner;
use super::logging::{self, LogDestination};
use super::persistence::FileBoundsStore;
use super::render;

const DEFAULT_SNAPSHOT: &str = "farm_page.html";
const BOUNDS_FILENAME: &str = ".assistant_bounds.ron";

pub fn run_app() -> anyhow::Result<()> {
    logging::initialize(LogDestination::Both);

    let snapshot_path = PathBuf::from(
        std::env::args()
            .nth(1)
            .unwrap_or_else(|| DEFAULT_SNAPSHOT.to_string()),
    );
    let bytes = fs::read(&snapshot_path)
        .with_context(|| format!("reading page snapshot {snapshot_path:?}"))?;

    let decoded = match decode_page(&bytes, None) {
        Ok(decoded) => decoded,
        Err(err) => {
            assistant_error!("Farm assistant: {}", err);
            return Ok(());
        }
    };

    // Required elements missing: one diagnostic line, setup aborts.
    let page = match extract_page(&decoded.html, &PageSchema::default()) {
        Ok(page) => page,
        Err(err) => {
            assistant_error!("Farm assistant: required elements not found: {}", err);
            return Ok(());
        }
    };
    assistant_info!(
        "loaded {:?} ({}, {} data rows)",
        snapshot_path,
        decoded.encoding_label,
        page.table.rows.len()
    );

    let store = FileBoundsStore::open(PathBuf::from(BOUNDS_FILENAME));
    let saved = load_saved_bounds(&store);
    let mut runner = EffectRunner::new(store, page.base_href.clone());

    let mut state = AssistantState::new();
    let startup = [
        Msg::BoundsRestored {
            min_text: saved.min_text,
            max_text: saved.max_text,
        },
        page_loaded_msg(&page.table),
    ];
    for msg in startup {
        let (next, effects) = update(state, msg);
        state = next;
        runner.run(effects);
    }

    if state.consume_dirty() {
        print!("{}", render::render(&state.view()));
    }
    print_help();

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("reading input")?;
        let msg = match parse_command(&line) {
            Command::Quit => break,
            Command::Show => {
                print!("{}", render::render(&state.view()));
                continue;
            }
            Command::Help => {
                print_help();
                continue;
            }
            Command::Msg(msg) => msg,
        };

        let (next, effects) = update(state, msg);
        state = next;
        runner.run(effects);
        if state.consume_dirty() {
            print!("{}", render::render(&state.view()));
        }
    }

    Ok(())
}

fn page_loaded_msg(table: &FarmTable) -> Msg {
    Msg::PageLoaded {
        header_cell_count: table.header_cell_count,
        header_label: table.header_label.clone(),
        rows: table.rows.iter().map(row_snapshot).collect(),
    }
}

fn row_snapshot(row: &TargetRow) -> RowSnapshot {
    RowSnapshot {
        cell_count: row.cell_count,
        resource_texts: row.resources.iter().map(|r| r.raw.clone()).collect(),
        action_hrefs: row.actions.iter().map(|a| a.href.clone()).collect(),
    }
}

enum Command {
    Msg(Msg),
    Show,
    Help,
    Quit,
}

/// Line protocol standing in for the hosting page's events: `min`/`max`
/// edits carry the input's full text; any other single character is a
/// page-wide keypress.
fn parse_command(line: &str) -> Command {
    let trimmed = line.trim();
    if let Some(rest) = trimmed.strip_prefix("min") {
        if rest.is_empty() || rest.starts_with(' ') {
            return Command::Msg(Msg::MinEdited(rest.trim().to_string()));
        }
    }
    if let Some(rest) = trimmed.strip_prefix("max") {
        if rest.is_empty() || rest.starts_with(' ') {
            return Command::Msg(Msg::MaxEdited(rest.trim().to_string()));
        }
    }
    match trimmed {
        "q" | "quit" => Command::Quit,
        "show" => Command::Show,
        "help" | "?" => Command::Help,
        _ => {
            let mut chars = trimmed.chars();
            match (chars.next(), chars.next()) {
                (Some(key), None) => Command::Msg(Msg::KeyPressed(key)),
                _ => Command::Msg(Msg::NoOp),
            }
        }
    }
}

fn print_help() {
    println!("commands: min <value> | max <value> | <key> (shortcuts A/B/C) | show | quit");
}
