use anyhow::{Context, Result};
use menucheck::v1::{Classification, MenuGraph, PageSet, ValidateOptions, query, validate_with};
use std::path::PathBuf;

/// How a classification is printed.
#[derive(Debug, Clone, Copy, Default)]
pub struct Output {
    pub pretty: bool,
    pub summary: bool,
}

pub fn run(input: Option<PathBuf>, options: &ValidateOptions, output: Output) -> Result<()> {
    let content = read_input(input.as_ref())?;
    let graph = load_graph(&content)?;
    let result = validate_with(&graph, options);
    println!("{}", format_result(&result, output)?);
    Ok(())
}

/// Read a file, or stdin when no path is given.
pub fn read_input(input: Option<&PathBuf>) -> Result<String> {
    if let Some(path) = input {
        std::fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))
    } else {
        use std::io::Read;
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read from stdin")?;
        Ok(buf)
    }
}

/// Build a graph from one page or an array of pages.
pub fn load_graph(content: &str) -> Result<MenuGraph> {
    let pages = PageSet::from_json(content)
        .context("Failed to parse menu pages")?
        .into_pages();
    tracing::debug!(pages = pages.len(), "loaded pages");
    Ok(MenuGraph::from_pages(&pages))
}

pub fn format_result(result: &Classification, output: Output) -> Result<String> {
    let json = if output.summary {
        let summary = query::summarize(result);
        if output.pretty {
            serde_json::to_string_pretty(&summary)?
        } else {
            serde_json::to_string(&summary)?
        }
    } else if output.pretty {
        result.to_json_pretty()?
    } else {
        result.to_json()?
    };
    Ok(json)
}
