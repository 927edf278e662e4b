use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};
use wikiblocks_config::{Config, OutputFormat};
use wikiblocks_engine::{Block, CommentMode, HeaderMode, parse_with_options, render};

#[derive(Parser, Debug)]
#[command(name = "wikiblocks", version)]
#[command(about = "Parse wiki markup into HTML text blocks and extracted references")]
struct Cli {
    /// Input file (reads stdin when omitted)
    input: Option<PathBuf>,

    /// Output format (overrides the config file)
    #[arg(short, long, value_enum)]
    format: Option<FormatArg>,

    /// Config file to use instead of ~/.config/wikiblocks/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// How `= Heading =` lines are handled
    #[arg(long, value_enum)]
    headers: Option<HeadersArg>,

    /// What happens to `<!-- -->` comments
    #[arg(long, value_enum)]
    comments: Option<CommentsArg>,

    /// Write the effective configuration to the config file and exit
    #[arg(long)]
    init_config: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Debug,
    Json,
    Html,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum HeadersArg {
    Block,
    Line,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CommentsArg {
    Drop,
    Block,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Debug => OutputFormat::Debug,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Html => OutputFormat::Html,
        }
    }
}

impl From<HeadersArg> for HeaderMode {
    fn from(arg: HeadersArg) -> Self {
        match arg {
            HeadersArg::Block => HeaderMode::Block,
            HeadersArg::Line => HeaderMode::Line,
        }
    }
}

impl From<CommentsArg> for CommentMode {
    fn from(arg: CommentsArg) -> Self {
        match arg {
            CommentsArg::Drop => CommentMode::Drop,
            CommentsArg::Block => CommentMode::Block,
        }
    }
}

impl Cli {
    fn config_path(&self) -> PathBuf {
        match &self.config {
            Some(path) => Config::expand_path(path),
            None => Config::config_path(),
        }
    }

    /// Command-line flags win over the config file.
    fn apply_overrides(&self, config: &mut Config) {
        if let Some(format) = self.format {
            config.output.format = format.into();
        }
        if let Some(headers) = self.headers {
            config.parser.headers = headers.into();
        }
        if let Some(comments) = self.comments {
            config.parser.comments = comments.into();
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config_path = cli.config_path();
    log::debug!("Config path: {}", config_path.display());

    let mut config = Config::load_from_path(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?
        .unwrap_or_default();
    cli.apply_overrides(&mut config);

    if cli.init_config {
        config
            .save_to_path(&config_path)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;
        eprintln!("Wrote config to {}", config_path.display());
        return Ok(());
    }

    let input = read_input(cli.input.as_deref())?;
    let blocks = parse_with_options(&input, &config.parser).context("Failed to parse input")?;
    log::info!("Parsed {} blocks", blocks.len());

    print!("{}", format_blocks(&blocks, config.output.format)?);
    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read stdin")?;
            Ok(input)
        }
    }
}

fn format_blocks(blocks: &[Block], format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Debug => render::debug_listing(blocks),
        OutputFormat::Json => {
            let mut json =
                serde_json::to_string_pretty(blocks).context("Failed to serialize blocks")?;
            json.push('\n');
            json
        }
        OutputFormat::Html => render::html(blocks),
    })
}
