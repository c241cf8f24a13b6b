use anyhow::Result;

use crate::args::{Cli, Commands};
use crate::context::AppContext;
use crate::handlers;

pub fn run(cli: Cli) -> Result<()> {
    let ctx = AppContext::from_cli(&cli)?;
    let format = cli.format;

    let Some(command) = cli.command else {
        show_guidance(&ctx);
        return Ok(());
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    match command {
        Commands::Shorten { url, no_refresh } => {
            runtime.block_on(handlers::shorten::execute(&ctx, &url, no_refresh, format))
        }
        Commands::List { limit } => runtime.block_on(handlers::list::execute(&ctx, limit, format)),
        Commands::Search { term } => {
            runtime.block_on(handlers::search::execute(&ctx, &term, format))
        }
        Commands::Visit { short_code } => handlers::visit::execute(&ctx, &short_code, format),
        Commands::Status => runtime.block_on(handlers::status::execute(&ctx, format)),
    }
}

fn show_guidance(ctx: &AppContext) {
    println!("boldlink - short links from the command line");
    println!();
    println!("Quick commands:");
    println!("  boldlink shorten <URL>      Create a short link");
    println!("  boldlink list               Show all short links");
    println!("  boldlink search <TERM>      Filter links by URL or code");
    println!("  boldlink visit <CODE>       Record a visit and print the short URL");
    println!("  boldlink status             Check the shortening service");
    println!();
    println!("Service endpoint: {}", ctx.base_url);
    println!();
    println!("Run 'boldlink --help' for all options.");
}
