//! Show a single RFC

use clap::Args;

use crate::output::{to_json, OutputFormat};
use crate::{AppContext, Cli};
use rfcview_core::RelationKind;

#[derive(Args)]
pub struct ShowArgs {
    /// RFC number
    pub number: u32,
}

pub fn run(args: &ShowArgs, cli: &Cli, ctx: &AppContext) -> anyhow::Result<()> {
    let format = OutputFormat::resolve_tabular(cli.format.as_deref())?;
    let record = ctx
        .directory
        .get(args.number)
        .ok_or_else(|| anyhow::anyhow!("RFC{} not found in index", args.number))?;

    if format == OutputFormat::Json {
        println!("{}", to_json(record)?);
        return Ok(());
    }

    println!("RFC{}: {}", record.number, record.title);
    match (record.year(), record.month()) {
        (Some(year), Some(month)) => println!("  Published: {:04}-{:02}", year, month),
        _ => println!("  Published: unknown"),
    }
    println!("  URL: {}", record.url());

    for kind in RelationKind::ALL {
        let numbers = record.relation(kind);
        if numbers.is_empty() {
            continue;
        }
        let list: Vec<String> = numbers.iter().map(|n| format!("RFC{}", n)).collect();
        println!("  {}: {}", kind, list.join(", "));
    }

    Ok(())
}
