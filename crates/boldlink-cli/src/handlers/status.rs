use anyhow::Result;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use serde_json::json;

use crate::args::OutputFormat;
use crate::context::AppContext;

/// Probe the shortening service and report the verdict.
///
/// A disconnected service is a reportable state, not a command failure,
/// so the exit code stays zero either way.
pub async fn execute(ctx: &AppContext, format: OutputFormat) -> Result<()> {
    let client = ctx.client()?;
    let probe = client.test_connectivity().await;

    if format == OutputFormat::Json {
        let payload = json!({
            "endpoint": ctx.base_url,
            "connected": probe.is_ok(),
            "error": probe.as_ref().err().map(|err| err.to_string()),
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    let use_color = std::io::stdout().is_terminal();

    println!("Service endpoint: {}", ctx.base_url);
    match probe {
        Ok(()) => {
            if use_color {
                println!("Status: {}", "Connected".green().bold());
            } else {
                println!("Status: Connected");
            }
        }
        Err(err) => {
            if use_color {
                println!("Status: {}", "Disconnected".red().bold());
            } else {
                println!("Status: Disconnected");
            }
            println!("  {}", err);
            println!("Local records remain available; run 'boldlink status' to retry.");
        }
    }

    Ok(())
}
