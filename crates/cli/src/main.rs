use clap::{Parser, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use mxray_core::{
    format_output, from_json_str, from_path, from_url, get_theme, MapConfig, MindMap,
    OutputFormat, Style,
};
use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "mxray")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "X-ray nested data structures as mind-map trees")]
#[command(long_about = "Renders JSON, YAML, or TOML documents as ASCII/Unicode tree diagrams \
    for quick terminal inspection. Beyond plain rendering it can:\n\n\
    - Highlight nodes matching a search query\n\
    - Keep only nodes of a given data type\n\
    - Re-root the tree at a dotted path (user.tags[0])\n\
    - Annotate nodes with type names and approximate memory usage\n\
    - Export the node tree itself as JSON or YAML\n\n\
    Reads JSON from stdin when no file or URL is given.")]
pub struct Args {
    /// Input file (.json, .yaml/.yml, .toml; other extensions load as
    /// plain text)
    pub path: Option<PathBuf>,

    /// Fetch a remote JSON document instead of reading a file
    #[arg(long, conflicts_with = "path")]
    pub url: Option<String>,

    /// Connector style
    #[arg(short, long, value_enum, default_value_t = StyleArg::Tree)]
    pub style: StyleArg,

    /// Icon theme preset (default, professional, colorful, emoji)
    #[arg(long)]
    pub theme: Option<String>,

    /// Hide icons
    #[arg(long)]
    pub no_icons: bool,

    /// Annotate scalar lines with their data type
    #[arg(long)]
    pub types: bool,

    /// Annotate lines with approximate memory usage
    #[arg(long)]
    pub memory: bool,

    /// Maximum depth to descend (0 shows the root only)
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Highlight nodes matching this query
    #[arg(long)]
    pub search: Option<String>,

    /// Re-root the tree at this path, e.g. user.tags[0]
    #[arg(long)]
    pub focus: Option<String>,

    /// Keep only scalars of this data type (containers survive as ancestors)
    #[arg(long)]
    pub keep_type: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormatArg::Text)]
    pub format: OutputFormatArg,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Disable ANSI colors even on a terminal
    #[arg(long)]
    pub no_color: bool,

    /// Print tree statistics to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(ValueEnum, Clone, Debug, Default)]
pub enum StyleArg {
    #[default]
    Tree,
    Minimal,
    Boxed,
    Arrow,
}

impl From<StyleArg> for Style {
    fn from(arg: StyleArg) -> Self {
        match arg {
            StyleArg::Tree => Style::Tree,
            StyleArg::Minimal => Style::Minimal,
            StyleArg::Boxed => Style::Boxed,
            StyleArg::Arrow => Style::Arrow,
        }
    }
}

#[derive(ValueEnum, Clone, Debug, Default, PartialEq, Eq)]
pub enum OutputFormatArg {
    #[default]
    Text,
    Ansi,
    Json,
    Yaml,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Text => OutputFormat::Text,
            OutputFormatArg::Ansi => OutputFormat::Ansi,
            OutputFormatArg::Json => OutputFormat::Json,
            OutputFormatArg::Yaml => OutputFormat::Yaml,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = build_config(&args);
    let mut map = load_map(&args, config)?;

    if let Some(ref path) = args.focus {
        map.focus_on(path)?;
    }

    if let Some(ref keep) = args.keep_type {
        let keep = keep.clone();
        map.filter(move |node| !node.value.is_scalar() || node.data_type == keep);
    }

    if let Some(ref query) = args.search {
        map.search(query);
    }

    let format = resolve_format(&args);
    let output = format_output(&map, format)?;

    if let Some(ref path) = args.output {
        fs::write(path, &output)?;
        if args.verbose {
            eprintln!("Output written to: {}", path.display());
        }
    } else {
        println!("{}", output);
    }

    if args.verbose {
        let stats = map.stats();
        eprintln!(
            "--- {} nodes, max depth {}, {} objects, {} arrays, {} scalars ---",
            stats.total_nodes, stats.max_depth, stats.objects, stats.arrays, stats.scalars
        );
    }

    Ok(())
}

fn build_config(args: &Args) -> MapConfig {
    let mut config = MapConfig::new()
        .with_style(args.style.clone().into())
        .with_icons(!args.no_icons)
        .with_types(args.types)
        .with_memory(args.memory);

    if let Some(depth) = args.max_depth {
        config = config.with_max_depth(depth);
    }
    if let Some(ref name) = args.theme {
        config = config.with_theme(get_theme(name));
    }

    config
}

fn load_map(args: &Args, config: MapConfig) -> anyhow::Result<MindMap> {
    if let Some(ref url) = args.url {
        let spinner = if args.verbose {
            let pb = ProgressBar::new_spinner();
            pb.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner:.green} {msg}")
                    .unwrap(),
            );
            pb.enable_steady_tick(Duration::from_millis(100));
            pb.set_message("Fetching document...");
            Some(pb)
        } else {
            None
        };

        let map = from_url(url, config)?;

        if let Some(ref pb) = spinner {
            pb.finish_with_message(format!("Fetched {url}"));
        }
        return Ok(map);
    }

    if let Some(ref path) = args.path {
        return Ok(from_path(path, config)?);
    }

    let mut source = String::new();
    std::io::stdin().read_to_string(&mut source)?;
    Ok(from_json_str(&source, config)?)
}

/// Text output auto-upgrades to ANSI when writing to a terminal.
fn resolve_format(args: &Args) -> OutputFormat {
    let format: OutputFormat = args.format.clone().into();
    if format == OutputFormat::Text
        && args.output.is_none()
        && !args.no_color
        && atty::is(atty::Stream::Stdout)
    {
        OutputFormat::Ansi
    } else {
        format
    }
}
