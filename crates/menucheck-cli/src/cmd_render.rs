use anyhow::{Context, Result};
use clap::Subcommand;
use menucheck::v1::{ValidateOptions, validate_with};
use std::path::PathBuf;

use crate::cmd_check::{load_graph, read_input};

#[derive(Subcommand, Debug)]
pub enum RenderFormat {
    /// Render as Graphviz DOT
    Dot {
        /// Input file (reads from stdin if not provided)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file (writes to stdout if not provided)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Graph title
        #[arg(long)]
        title: Option<String>,

        /// Leave out menu data text, showing ids only
        #[arg(long)]
        no_labels: bool,

        /// Do not highlight invalid paths
        #[arg(long)]
        no_highlight: bool,

        /// Do not draw the legend
        #[arg(long)]
        no_legend: bool,
    },
}

pub fn run(format: RenderFormat, options: &ValidateOptions) -> Result<()> {
    match format {
        RenderFormat::Dot {
            input,
            output,
            title,
            no_labels,
            no_highlight,
            no_legend,
        } => {
            let render_options = menucheck_dot::RenderOptions {
                show_labels: !no_labels,
                highlight_invalid: !no_highlight,
                show_legend: !no_legend,
                title,
            };
            run_dot(input, output, options, &render_options)
        }
    }
}

fn run_dot(
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    options: &ValidateOptions,
    render_options: &menucheck_dot::RenderOptions,
) -> Result<()> {
    let content = read_input(input.as_ref())?;
    let dot = render_content(&content, options, render_options)?;

    if let Some(path) = &output {
        std::fs::write(path, &dot).with_context(|| format!("Failed to write {:?}", path))?;
    } else {
        print!("{}", dot);
    }

    Ok(())
}

fn render_content(
    content: &str,
    options: &ValidateOptions,
    render_options: &menucheck_dot::RenderOptions,
) -> Result<String> {
    let graph = load_graph(content)?;
    let result = validate_with(&graph, options);
    Ok(menucheck_dot::render(&graph, &result, render_options))
}
