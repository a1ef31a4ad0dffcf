mod project;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use linkmark_config::Config;
use linkmark_engine::{Block, HtmlOptions, ProjectContext, Renderer, WikiLinkService};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "linkmark", version, about = "Render markdown notes with cross-document links")]
struct Cli {
    /// Config file to use instead of ~/.config/linkmark/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a markdown file as a block list or an HTML document
    Render(RenderArgs),

    /// List the links in a markdown file and whether they resolve
    Links(LinksArgs),
}

#[derive(clap::Args)]
struct RenderArgs {
    /// Markdown file to render
    file: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Html)]
    format: Format,

    /// Notes directory links resolve against (defaults to notes_path from config)
    #[arg(short, long)]
    notes: Option<PathBuf>,

    /// HTML document title (defaults to the config title, then the file name)
    #[arg(short, long)]
    title: Option<String>,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(clap::Args)]
struct LinksArgs {
    /// Markdown file to inspect
    file: PathBuf,

    /// Notes directory links resolve against (defaults to notes_path from config)
    #[arg(short, long)]
    notes: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Structured blocks as JSON
    Blocks,
    /// Standalone styled HTML document
    Html,
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Render(args) => run_render(args, &config),
        Command::Links(args) => run_links(args, &config),
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let config_path = path.map_or_else(Config::config_path, Path::to_path_buf);
    log::debug!("Config path: {}", config_path.display());
    let config = Config::load_from_path(&config_path)?;
    Ok(config.unwrap_or_default())
}

fn run_render(args: RenderArgs, config: &Config) -> Result<()> {
    let markdown = read_markdown(&args.file)?;
    let project = load_project(args.notes.as_deref(), config)?;
    let renderer = Renderer::new(&WikiLinkService);

    let rendered = match args.format {
        Format::Blocks => {
            let blocks = renderer.render_to_blocks(&markdown, project.as_ref());
            let mut json = serde_json::to_string_pretty(&blocks)?;
            json.push('\n');
            json
        }
        Format::Html => {
            let options = html_options(&args, config)?;
            renderer.render_to_html_with(&markdown, &options, project.as_ref())
        }
    };

    match &args.output {
        Some(out) => {
            fs::write(out, rendered)
                .with_context(|| format!("Failed to write {}", out.display()))?;
            log::info!("Wrote {}", out.display());
        }
        None => print!("{rendered}"),
    }
    Ok(())
}

fn run_links(args: LinksArgs, config: &Config) -> Result<()> {
    let markdown = read_markdown(&args.file)?;
    let project = load_project(args.notes.as_deref(), config)?;
    let blocks = Renderer::new(&WikiLinkService).render_to_blocks(&markdown, project.as_ref());

    for line in link_report(&blocks) {
        println!("{line}");
    }
    Ok(())
}

/// One line per link: block index, byte range in the block's content,
/// display text, target and resolution status.
fn link_report(blocks: &[Block]) -> Vec<String> {
    blocks
        .iter()
        .enumerate()
        .flat_map(|(index, block)| {
            block.links.iter().map(move |link| {
                let range = link.range();
                format!(
                    "{index}\t{}..{}\t{:?}\t{}\t{}",
                    range.start,
                    range.end,
                    link.display_text,
                    link.target_identifier,
                    if link.resolved { "resolved" } else { "unresolved" },
                )
            })
        })
        .collect()
}

fn read_markdown(file: &Path) -> Result<String> {
    fs::read_to_string(file).with_context(|| format!("Failed to read {}", file.display()))
}

fn load_project(notes: Option<&Path>, config: &Config) -> Result<Option<ProjectContext>> {
    let Some(notes) = notes.or(config.notes_path.as_deref()) else {
        log::debug!("No notes directory; links stay unresolved");
        return Ok(None);
    };
    let project = project::load_project(notes)
        .with_context(|| format!("Failed to load notes from {}", notes.display()))?;
    Ok(Some(project))
}

fn html_options(args: &RenderArgs, config: &Config) -> Result<HtmlOptions> {
    let title = args
        .title
        .clone()
        .or_else(|| config.html.title.clone())
        .or_else(|| {
            args.file
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
        });

    let mut options = HtmlOptions::default();
    if let Some(title) = title {
        options = options.with_title(title);
    }
    if let Some(css) = &config.html.stylesheet_path {
        let stylesheet = fs::read_to_string(css)
            .with_context(|| format!("Failed to read stylesheet {}", css.display()))?;
        options = options.with_stylesheet(stylesheet);
    }
    Ok(options)
}
