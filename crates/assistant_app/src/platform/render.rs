use std::fmt::Write as _;

use assistant_core::AssistantViewModel;

/// Render the view model as terminal text. The injected controls come
/// first on the header line, with the original header label preserved
/// after them; each data row follows with its derived visibility.
pub(crate) fn render(view: &AssistantViewModel) -> String {
    let mut out = String::new();

    match &view.controls {
        Some(controls) => {
            let _ = writeln!(
                out,
                "[{}: {:>width$}] [{}: {:>width$}] {}",
                controls.min.placeholder,
                controls.min.value,
                controls.max.placeholder,
                controls.max.value,
                view.header_label.as_deref().unwrap_or(""),
                width = controls.min.size as usize,
            );
        }
        None => {
            let _ = writeln!(out, "(filter unavailable on this page layout)");
        }
    }

    for row in &view.rows {
        let total = row
            .total
            .map(|total| total.to_string())
            .unwrap_or_else(|| "-".to_string());
        let display = if row.visible { "show" } else { "hide" };
        let _ = writeln!(
            out,
            "row {:>3}  total {:>10}  {}  links {}",
            row.index + 1,
            total,
            display,
            row.action_count
        );
    }
    let _ = writeln!(out, "{} of {} rows visible", view.visible_count, view.rows.len());

    out
}
