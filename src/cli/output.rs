//! Output formatting for CLI

use crate::services::batch::Summary;
use crate::services::format::format_size;

/// Display options for text rendering
#[derive(Debug, Clone, Copy, Default)]
pub struct DisplayOptions {
    /// Show the apparent (logical) size column next to the allocated one
    pub apparent: bool,
    /// Print raw byte counts instead of human-readable units
    pub bytes: bool,
    /// Append a summed row across successful entries
    pub total: bool,
}

fn render_size(bytes: u64, raw: bool) -> String {
    if raw {
        bytes.to_string()
    } else {
        format_size(bytes)
    }
}

/// Render entries as aligned text rows: allocated size, optional apparent
/// size, then the path exactly as given.
#[must_use]
pub fn format_text(summary: &Summary, opts: DisplayOptions) -> String {
    let mut rows: Vec<(String, Option<String>, &str)> = summary
        .entries
        .iter()
        .map(|e| {
            (
                render_size(e.allocated_bytes, opts.bytes),
                opts.apparent
                    .then(|| render_size(e.apparent_bytes, opts.bytes)),
                e.path.as_str(),
            )
        })
        .collect();

    if opts.total && !summary.entries.is_empty() {
        rows.push((
            render_size(summary.total_allocated(), opts.bytes),
            opts.apparent
                .then(|| render_size(summary.total_apparent(), opts.bytes)),
            "total",
        ));
    }

    let alloc_width = rows.iter().map(|(a, _, _)| a.len()).max().unwrap_or(0);
    let apparent_width = rows
        .iter()
        .filter_map(|(_, a, _)| a.as_ref().map(String::len))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for (alloc, apparent, path) in &rows {
        if let Some(app) = apparent {
            out.push_str(&format!(
                "{alloc:>alloc_width$}  {app:>apparent_width$}  {path}\n"
            ));
        } else {
            out.push_str(&format!("{alloc:>alloc_width$}  {path}\n"));
        }
    }

    out
}

/// Render the summary as a JSON document with `entries` and `errors` arrays.
#[must_use]
pub fn format_json(summary: &Summary, include_total: bool) -> String {
    let mut doc = serde_json::json!({
        "entries": summary.entries,
        "errors": summary.errors,
    });

    if include_total {
        doc["total"] = serde_json::json!({
            "allocated_bytes": summary.total_allocated(),
            "apparent_bytes": summary.total_apparent(),
        });
    }

    serde_json::to_string_pretty(&doc).unwrap_or_else(|_| "{}".to_string())
}
