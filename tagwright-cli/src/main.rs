//! Tagwright CLI
//!
//! Renders JSON tag definitions to markup for inspection and debugging.
//! The definitions use the same object notation the library serializes:
//! `{"tagName": "img", "attributes": {"src": "a.png"}}`.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use owo_colors::OwoColorize;
use tagwright_html::{HtmlTagObject, TagList, render_tag};

#[derive(Parser)]
#[command(name = "tagwright", version, about = "Render JSON tag definitions to markup")]
struct Args {
    /// Path to a JSON file holding one tag definition or an array of them.
    file: Option<PathBuf>,

    /// Inline JSON instead of a file.
    #[arg(long, value_name = "JSON", conflicts_with = "file")]
    json: Option<String>,

    /// Self-close void tags and expand boolean attributes (XHTML-compliant output).
    #[arg(long)]
    xhtml: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let source = match (&args.file, &args.json) {
        (_, Some(inline)) => inline.clone(),
        (Some(path), None) => {
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?
        }
        (None, None) => bail!("provide a definitions file or --json (see --help)"),
    };

    let tags = parse_definitions(&source)?;

    // The library renders empty names as malformed markup rather than
    // failing; annotate on stderr but still print.
    if tags.iter().any(|tag| tag.tag_name.is_empty()) {
        eprintln!(
            "{}",
            "warning: a definition has an empty tagName; its markup will be malformed".yellow()
        );
    }

    let rendered: TagList<String> = tags.iter().map(|tag| render_tag(tag, args.xhtml)).collect();
    println!("{rendered}");

    Ok(())
}

/// Parse a single tag definition or an array of them.
fn parse_definitions(source: &str) -> Result<TagList<HtmlTagObject>> {
    if let Ok(list) = serde_json::from_str::<Vec<HtmlTagObject>>(source) {
        return Ok(TagList::from(list));
    }
    let single: HtmlTagObject =
        serde_json::from_str(source).context("parsing tag definition JSON")?;
    Ok(TagList::from(vec![single]))
}
