use std::time::Duration;

use anyhow::Result;
use boldlink_types::{display_url, validate_long_url};

use crate::args::OutputFormat;
use crate::context::AppContext;
use crate::presentation::render_entries;

pub async fn execute(
    ctx: &AppContext,
    url: &str,
    no_refresh: bool,
    format: OutputFormat,
) -> Result<()> {
    validate_long_url(url)?;

    let client = ctx.client()?;
    let record = client.create(url.trim()).await?;

    // Optimistic local copy; the server's version wins on the next merge.
    ctx.store().append(record.clone());

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        OutputFormat::Plain => {
            if record.has_short_code() {
                println!("{}", display_url(&ctx.base_url, &record.short_code));
            } else {
                println!("Short link created, but the service did not return a short code yet.");
            }
        }
    }

    if !no_refresh && format == OutputFormat::Plain {
        // Give the service a moment to index the new link before re-listing.
        tokio::time::sleep(Duration::from_millis(ctx.config.refresh_delay_ms)).await;
        if let Ok(server_records) = client.list_all().await {
            let local_records = ctx.store().load();
            let entries =
                boldlink_engine::reconcile(&server_records, &local_records, ctx.config.uncoded);
            println!();
            render_entries(&entries, &ctx.base_url, format)?;
        }
    }

    Ok(())
}
