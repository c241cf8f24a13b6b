use anyhow::Result;

use crate::args::OutputFormat;
use crate::catalog::load_catalog;
use crate::context::AppContext;
use crate::presentation::render_entries;

pub async fn execute(ctx: &AppContext, limit: Option<usize>, format: OutputFormat) -> Result<()> {
    let mut entries = load_catalog(ctx).await?;

    if let Some(limit) = limit {
        entries.truncate(limit);
    }

    render_entries(&entries, &ctx.base_url, format)
}
