use anyhow::Result;
use boldlink_engine::reconcile;
use boldlink_types::CatalogEntry;

use crate::context::AppContext;

/// Build the merged catalog view: server records when reachable, local
/// records always. An unreachable service degrades to local-only with a
/// notice on stderr.
pub async fn load_catalog(ctx: &AppContext) -> Result<Vec<CatalogEntry>> {
    let client = ctx.client()?;
    let server_records = match client.list_all().await {
        Ok(records) => records,
        Err(err) => {
            eprintln!("Warning: {}; showing local records only", err);
            Vec::new()
        }
    };

    let local_records = ctx.store().load();
    Ok(reconcile(&server_records, &local_records, ctx.config.uncoded))
}
