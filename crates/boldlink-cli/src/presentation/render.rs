use anyhow::Result;
use boldlink_types::{CatalogEntry, RecordSource, display_url};

use crate::args::OutputFormat;
use crate::presentation::format_relative_time;

const LONG_URL_WIDTH: usize = 60;

/// Print a reconciled catalog: pretty JSON, or a fixed-width table.
pub fn render_entries(
    entries: &[CatalogEntry],
    base_url: &str,
    format: OutputFormat,
) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("No short links yet. Create one with 'boldlink shorten <URL>'.");
        return Ok(());
    }

    println!(
        "{:<40} {:>7} {:<14} {:<7}",
        "SHORT URL", "VISITS", "CREATED", "SOURCE"
    );
    println!("{}", "-".repeat(110));

    for entry in entries {
        let record = &entry.record;
        let short = if record.has_short_code() {
            display_url(base_url, &record.short_code)
        } else {
            "(awaiting code)".to_string()
        };

        println!(
            "{:<40} {:>7} {:<14} {:<7}",
            short,
            record.visits,
            format_relative_time(&record.created_at),
            source_label(&entry.source),
        );
        println!("  -> {}", truncate(&record.long_url, LONG_URL_WIDTH));
    }

    Ok(())
}

fn source_label(source: &RecordSource) -> &'static str {
    match source {
        RecordSource::Server => "server",
        RecordSource::Local => "local",
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars).collect();
    format!("{}...", kept)
}
