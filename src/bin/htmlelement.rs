use std::{io::Write, path::PathBuf, sync::atomic::Ordering};

use anyhow::{Context, Result};
use chj_util::warn;
use clap::Parser as ClapParser;
use htmlelement::{HTMLELEMENT_TRACE,
                  attributes::normalize_quote_char,
                  json::value_from_json_str,
                  options::RenderOptions,
                  Value};


#[derive(clap::Parser, Debug)]
/// Print one HTML element, built from JSON attributes and contents.
struct Args {
    /// The tag name, e.g. "div"
    #[clap(required(true))]
    tag: String,

    /// Attributes as JSON, e.g. '{"class": ["a", {"b": true}],
    /// "disabled": true}'
    #[clap(long)]
    attributes: Option<String>,

    /// Contents as JSON; can be given multiple times. Object keys
    /// with a truthy value are used as text.
    #[clap(long, multiple_occurrences(true))]
    contents: Vec<String>,

    /// Don't HTML-escape the contents
    #[clap(long)]
    raw: bool,

    /// Quote character for attribute values, `"` or `'`
    #[clap(long)]
    quote: Option<char>,

    /// Options file (JSON) with `escape_contents`, `quote_char`,
    /// `line_width`; command line flags take precedence
    #[clap(long)]
    options: Option<PathBuf>,

    /// Report dropped contents and omitted attributes on stderr
    #[clap(long)]
    trace: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    HTMLELEMENT_TRACE.store(args.trace, Ordering::SeqCst);

    let mut options = match &args.options {
        Some(path) => RenderOptions::from_json_path(path)?,
        None => RenderOptions::default(),
    };
    if args.raw {
        options.escape_contents = false;
    }
    if let Some(q) = args.quote {
        if normalize_quote_char(q) != q {
            warn!("unsupported quote character {q:?}, using '\"'");
        }
        options.quote_char = q;
    }

    let attributes: Vec<Value> = match &args.attributes {
        Some(s) => vec![value_from_json_str(s).context("--attributes")?],
        None => vec![],
    };
    let contents = args.contents.iter()
        .map(|s| value_from_json_str(s).context("--contents"))
        .collect::<Result<Vec<_>>>()?;

    let html = options.build_html_element(&args.tag, &attributes, &contents)?;
    let mut out = std::io::stdout().lock();
    writeln!(&mut out, "{html}")?;
    out.flush()?;
    Ok(())
}
