use anyhow::Result;
use boldlink_types::display_url;
use serde_json::json;

use crate::args::OutputFormat;
use crate::context::AppContext;

/// Record a visit against the local slot and print the short URL.
///
/// Purely local: the service counts real redirects itself, and its count
/// replaces the optimistic one on the next fetch.
pub fn execute(ctx: &AppContext, short_code: &str, format: OutputFormat) -> Result<()> {
    let short_url = display_url(&ctx.base_url, short_code);

    match ctx.store().record_visit(short_code) {
        Some(visits) => match format {
            OutputFormat::Json => {
                let payload = json!({
                    "shortUrl": short_url,
                    "shortCode": short_code,
                    "visits": visits,
                    "tracked": true,
                });
                println!("{}", serde_json::to_string_pretty(&payload)?);
            }
            OutputFormat::Plain => {
                println!("{}", short_url);
                println!(
                    "Recorded visit #{} locally; the server's count takes over on the next fetch.",
                    visits
                );
            }
        },
        None => match format {
            OutputFormat::Json => {
                let payload = json!({
                    "shortUrl": short_url,
                    "shortCode": short_code,
                    "tracked": false,
                });
                println!("{}", serde_json::to_string_pretty(&payload)?);
            }
            OutputFormat::Plain => {
                println!("{}", short_url);
                println!(
                    "No local record for '{}'; the service counts this visit itself.",
                    short_code
                );
            }
        },
    }

    Ok(())
}
