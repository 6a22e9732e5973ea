mod anchor;
mod config;
mod error;
mod html;
mod node;
mod parser;

pub use anchor::heading_id;
pub use config::{Config, HeadingsConfig, HtmlConfig, LinksConfig};
pub use error::{Error, Result};
pub use node::Node;
pub use parser::{parse, parse_inline, parse_lines};

use std::fs;
use std::path::Path;

use tracing::info;

/// Render an already parsed document to HTML.
pub fn render_html(nodes: &[Node], config: &Config) -> String {
    html::blocks_to_html(nodes, config)
}

/// Convert markdown to HTML using default config.
pub fn markdown_to_html(markdown: &str) -> String {
    markdown_to_html_with_config(markdown, &Config::compiled_default())
}

/// Convert markdown to HTML with custom config.
pub fn markdown_to_html_with_config(markdown: &str, config: &Config) -> String {
    let nodes = parse(markdown);
    render_html(&nodes, config)
}

/// Read a markdown file, convert it and write the HTML to `output`.
pub fn convert_file(input: &Path, output: &Path, config: &Config) -> Result<()> {
    let markdown = fs::read_to_string(input).map_err(|source| Error::Read {
        path: input.to_path_buf(),
        source,
    })?;

    let html = markdown_to_html_with_config(&markdown, config);

    fs::write(output, html).map_err(|source| Error::Write {
        path: output.to_path_buf(),
        source,
    })?;

    info!(input = %input.display(), output = %output.display(), "converted");
    Ok(())
}
