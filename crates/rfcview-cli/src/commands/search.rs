//! Search commands

use clap::Args;
use serde::Serialize;

use crate::output::{to_json, OutputFormat};
use crate::{AppContext, Cli};
use rfcview_core::{search_with_stats, FilterOptions, SearchResult, SearchStats};

/// Filter flags shared by `search` and `graph`
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// RFC numbers or title words to select (comma separated)
    #[arg(default_value = "")]
    pub includes: String,

    /// RFC numbers or title words to reject (comma separated)
    #[arg(short = 'x', long, default_value = "")]
    pub exclude: String,

    /// Lowest RFC number to select
    #[arg(long)]
    pub from: Option<u32>,

    /// Highest RFC number to select
    #[arg(long)]
    pub to: Option<u32>,

    /// Also follow Updates/Obsoletes to older RFCs
    #[arg(short, long)]
    pub ancestors: bool,

    /// Also follow Updated by/Obsoleted by to newer RFCs
    #[arg(short, long)]
    pub descendants: bool,
}

impl FilterArgs {
    pub fn to_options(&self) -> FilterOptions {
        FilterOptions {
            from: self.from,
            to: self.to,
            includes: self.includes.clone(),
            excludes: self.exclude.clone(),
            search_ancestors: self.ancestors,
            search_descendants: self.descendants,
        }
    }
}

#[derive(Args)]
pub struct SearchArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Limit listed results
    #[arg(short, long, default_value = "1000")]
    pub limit: usize,
}

#[derive(Serialize)]
struct SearchOutput<'a> {
    #[serde(flatten)]
    result: &'a SearchResult,
    stats: &'a SearchStats,
}

pub fn run(args: &SearchArgs, cli: &Cli, ctx: &AppContext) -> anyhow::Result<()> {
    let format = OutputFormat::resolve_tabular(cli.format.as_deref())?;
    let opts = args.filter.to_options();
    if opts.includes.is_empty() {
        tracing::warn!("No include terms given; nothing will match");
    }

    let (result, stats) = search_with_stats(&ctx.directory, &opts);
    tracing::info!(
        "Search returned {} RFCs ({} seeds, {} edges)",
        stats.nodes,
        stats.seeds,
        stats.edges
    );

    if format == OutputFormat::Json {
        println!("{}", to_json(&SearchOutput { result: &result, stats: &stats })?);
        return Ok(());
    }

    if result.is_empty() {
        println!("No RFCs found for '{}'", opts.includes);
        return Ok(());
    }

    println!(
        "Search results for '{}' ({} found, {} matched directly):",
        opts.includes, stats.nodes, stats.seeds
    );
    for &number in result.rfcs.iter().take(args.limit) {
        match ctx.directory.get(number) {
            Some(record) => {
                let year = record
                    .year()
                    .map(|y| y.to_string())
                    .unwrap_or_else(|| "????".to_string());
                println!("  RFC{:<5} {}  {}", number, year, record.title);
            }
            None => println!("  RFC{:<5} (not in index)", number),
        }
    }
    if result.len() > args.limit {
        println!("  ... {} more", result.len() - args.limit);
    }

    if !result.updates.is_empty() || !result.obsoletes.is_empty() {
        println!("Relations:");
        for (from, to) in &result.updates {
            println!("  RFC{} -[updated by]-> RFC{}", from, to);
        }
        for (from, to) in &result.obsoletes {
            println!("  RFC{} -[obsoleted by]-> RFC{}", from, to);
        }
    }

    Ok(())
}
