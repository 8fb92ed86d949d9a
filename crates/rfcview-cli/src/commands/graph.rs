//! Graph command: search and render the relationship graph

use std::path::PathBuf;

use clap::Args;

use super::search::FilterArgs;
use crate::output::{emit, to_json, OutputFormat};
use crate::{AppContext, Cli};
use rfcview_core::{render_with, search, RankDir, RenderOptions};

#[derive(Args)]
pub struct GraphArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Layout direction (TB, LR, BT, RL)
    #[arg(long)]
    pub rankdir: Option<RankDir>,

    /// Write the graph to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: &GraphArgs, cli: &Cli, ctx: &AppContext) -> anyhow::Result<()> {
    let opts = args.filter.to_options();
    let result = search(&ctx.directory, &opts);
    tracing::debug!(
        "Graph has {} nodes, {} updates, {} obsoletes",
        result.len(),
        result.updates.len(),
        result.obsoletes.len()
    );

    let content = match OutputFormat::resolve(cli.format.as_deref(), OutputFormat::Dot) {
        OutputFormat::Json => to_json(&result)?,
        _ => {
            let mut options = RenderOptions::new();
            if let Some(rank_dir) = args.rankdir.or(ctx.config.rankdir) {
                options = options.with_rank_dir(rank_dir);
            }
            render_with(&result, &ctx.directory, &options)
        }
    };

    emit(&content, args.output.as_deref())
}
