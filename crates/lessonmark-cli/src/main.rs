use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lessonmark_config::{Config, OutputFormat};
use lessonmark_engine::{
    ContentType, RawContent, RenderMode,
    export::write_export,
    parsing::segment,
    render::{html::to_html, plain::to_plain_text, render},
};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "lessonmark")]
#[command(about = "Render and export AI-generated lesson content", long_about = None)]
#[command(version)]
struct Cli {
    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render generated text as display units
    Render {
        /// Content type the text was generated as
        #[arg(short = 't', long = "type")]
        content_type: Option<ContentType>,
        /// cards or blocks
        #[arg(short, long)]
        mode: Option<RenderMode>,
        /// html, text or json
        #[arg(short, long)]
        format: Option<OutputFormat>,
        /// Input file; stdin when absent or `-`
        file: Option<PathBuf>,
    },
    /// Print the segmented blocks as JSON
    Blocks { file: Option<PathBuf> },
    /// Write the verbatim text to a file named after a title
    Export {
        /// File title; defaults to the content type's title
        #[arg(long)]
        title: Option<String>,
        /// Content type whose title is used when `--title` is absent
        #[arg(short = 't', long = "type")]
        content_type: Option<ContentType>,
        /// Target directory; defaults to the configured export directory
        #[arg(short, long)]
        dir: Option<PathBuf>,
        file: Option<PathBuf>,
    },
    /// Print the verbatim text for copying
    Raw { file: Option<PathBuf> },
}

fn read_input(file: Option<&Path>) -> Result<RawContent> {
    let text = match file {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };
    Ok(RawContent::from(text))
}

fn render_output(
    raw: &RawContent,
    content_type: ContentType,
    mode: RenderMode,
    format: OutputFormat,
) -> Result<String> {
    let units = render(raw, content_type, mode);
    log::info!("Rendered {} units", units.len());
    Ok(match format {
        OutputFormat::Html => to_html(&units),
        OutputFormat::Text => to_plain_text(&units),
        OutputFormat::Json => serde_json::to_string_pretty(&units)?,
    })
}

fn run(cli: Cli, config: &Config) -> Result<()> {
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Commands::Render {
            content_type,
            mode,
            format,
            file,
        } => {
            let raw = read_input(file.as_deref())?;
            let output = render_output(
                &raw,
                content_type.unwrap_or(config.default_content_type),
                mode.unwrap_or(config.render_mode),
                format.unwrap_or(config.output_format),
            )?;
            writeln!(stdout, "{output}")?;
        }
        Commands::Blocks { file } => {
            let raw = read_input(file.as_deref())?;
            let blocks = segment(raw.as_str());
            writeln!(stdout, "{}", serde_json::to_string_pretty(&blocks)?)?;
        }
        Commands::Export {
            title,
            content_type,
            dir,
            file,
        } => {
            let raw = read_input(file.as_deref())?;
            let title = title.unwrap_or_else(|| {
                content_type
                    .unwrap_or(config.default_content_type)
                    .title()
                    .to_string()
            });
            let dir = dir.unwrap_or_else(|| config.export_dir.clone());
            let path = write_export(&dir, &title, &raw)
                .with_context(|| format!("Failed to export to {}", dir.display()))?;
            log::info!("Exported {}", path.display());
            writeln!(stdout, "{}", path.display())?;
        }
        Commands::Raw { file } => {
            let raw = read_input(file.as_deref())?;
            stdout.write_all(raw.clipboard_text().as_bytes())?;
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    start(cli)
}

/// Loads the config and runs the command. A config file that exists but
/// cannot be read or parsed stops the run before any output is written.
fn start(cli: Cli) -> Result<()> {
    let config = Config::load_or_default().context("Failed to load config")?;
    run(cli, &config)
}
