//! Shared formatting for version listings.

use crate::state::{VersionEntry, VersionSource};

/// One listing line: `* v1     [import ] 2025-11-30  tag - notes`.
///
/// `*` marks the active version.
pub fn version_line(entry: &VersionEntry, active: bool) -> String {
    let marker = if active { "*" } else { " " };
    let tag = match entry.tag.as_deref() {
        Some(t) if !t.is_empty() => format!("{} - ", t),
        _ => String::new(),
    };
    format!(
        "{} {:<6} [{:<7}] {}  {}{}",
        marker,
        entry.id,
        entry.source.kind(),
        entry.created_at.format("%Y-%m-%d"),
        tag,
        entry.notes
    )
}

/// Indented detail lines shown under a version in verbose listings.
pub fn version_details(entry: &VersionEntry) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(parent) = &entry.parent {
        lines.push(format!("         parent: {}", parent));
    }
    match &entry.source {
        VersionSource::Import { file, .. } => lines.push(format!("         file: {}", file)),
        VersionSource::Derived { operation } => {
            lines.push(format!("         operation: {}", operation))
        }
    }
    lines
}

/// Human-readable byte count for status output.
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    if bytes < KB {
        format!("{} bytes", bytes)
    } else if bytes < KB * KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{:.1} MB", bytes as f64 / (KB * KB) as f64)
    }
}
