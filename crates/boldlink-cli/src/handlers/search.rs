use anyhow::Result;
use boldlink_engine::search::filter;

use crate::args::OutputFormat;
use crate::catalog::load_catalog;
use crate::context::AppContext;
use crate::presentation::render_entries;

pub async fn execute(ctx: &AppContext, term: &str, format: OutputFormat) -> Result<()> {
    let entries = load_catalog(ctx).await?;

    match filter(&entries, term, &ctx.base_url) {
        None => {
            // Blank term is "show everything", not "match nothing".
            if format == OutputFormat::Plain {
                println!("Empty search term; showing all short links.");
                println!();
            }
            render_entries(&entries, &ctx.base_url, format)
        }
        Some(matches) => {
            if matches.is_empty() && format == OutputFormat::Plain {
                println!("No short links match '{}'.", term.trim());
                return Ok(());
            }
            render_entries(&matches, &ctx.base_url, format)
        }
    }
}
