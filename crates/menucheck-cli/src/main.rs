mod cmd_check;
mod cmd_fetch;
mod cmd_render;
mod logging;

use anyhow::Result;
use clap::{Parser, Subcommand};
use menucheck::v1::{SiblingScope, ValidateOptions};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "menucheck")]
#[command(about = "Fetch paginated menus and report which ones contain cycles")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    /// Judge each branch on its own path only, so a cycle under one child
    /// does not mark later siblings invalid
    #[arg(long, global = true)]
    per_branch: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch every page from an endpoint and validate the menus
    Fetch {
        /// Endpoint URL serving the first page
        #[arg(short, long, env = "MENUCHECK_URL")]
        url: String,

        /// Retries per page on server or transport errors
        #[arg(long, default_value_t = 3)]
        retries: u32,

        /// Request timeout in seconds
        #[arg(long, default_value_t = 30)]
        timeout: u64,

        /// Print per-root path counts instead of the full report
        #[arg(long)]
        summary: bool,
    },
    /// Validate menus from a page file (one page or an array of pages)
    Check {
        /// Input file (reads from stdin if not provided)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Print per-root path counts instead of the full report
        #[arg(long)]
        summary: bool,
    },
    /// Render menus to other formats
    Render {
        #[command(subcommand)]
        format: cmd_render::RenderFormat,
    },
}

fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();

    let options = ValidateOptions {
        sibling_scope: if cli.per_branch {
            SiblingScope::PerBranch
        } else {
            SiblingScope::Inherit
        },
    };
    let output = cmd_check::Output {
        pretty: cli.pretty,
        summary: false,
    };

    match cli.command {
        Commands::Fetch {
            url,
            retries,
            timeout,
            summary,
        } => cmd_fetch::run(
            url,
            retries,
            timeout,
            &options,
            cmd_check::Output { summary, ..output },
        ),
        Commands::Check { input, summary } => {
            cmd_check::run(input, &options, cmd_check::Output { summary, ..output })
        }
        Commands::Render { format } => cmd_render::run(format, &options),
    }
}
