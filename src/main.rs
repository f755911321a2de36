use anyhow::{bail, Context};
use buttonbook::catalog::{buffer_to_ansi, render_story, Catalog};
use buttonbook::config::Config;
use buttonbook::logging::{init_tracing, LogTarget};
use buttonbook::stories;
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "buttonbook", version, about = "Browse button stories in the terminal")]
struct Cli {
    /// Print every story as Group/Label and exit
    #[arg(long)]
    list: bool,

    /// Print the listing as JSON
    #[arg(long, requires = "list")]
    json: bool,

    /// Render a single story to stdout and exit
    #[arg(long, value_name = "LABEL", conflicts_with = "list")]
    story: Option<String>,

    /// Group of the story given to --story
    #[arg(long, value_name = "NAME", default_value = stories::button::GROUP)]
    group: String,

    /// Maximum width of --story output
    #[arg(long, default_value_t = 80)]
    width: u16,

    /// Path to config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    let mut catalog = Catalog::new();

    if cli.list || cli.story.is_some() {
        init_tracing(&config.logging, LogTarget::Stderr)?;
        stories::register_all(&mut catalog).context("Failed to register stories")?;
        let stdout = io::stdout();
        let mut out = stdout.lock();

        if let Some(label) = cli.story.as_deref() {
            let Some(buf) = render_story(&catalog, &cli.group, label, cli.width) else {
                bail!("Story '{}' not found in group '{}'", label, cli.group);
            };
            out.write_all(buffer_to_ansi(&buf)?.as_bytes())?;
        } else if cli.json {
            serde_json::to_writer_pretty(&mut out, &catalog.index())?;
            writeln!(out)?;
        } else {
            for entry in catalog.entries() {
                writeln!(out, "{}", entry.path())?;
            }
        }
        out.flush()?;
        return Ok(());
    }

    let log_file = config.log_file();
    init_tracing(&config.logging, LogTarget::File(log_file.clone()))
        .with_context(|| format!("Failed to open log file '{}'", log_file.display()))?;
    stories::register_all(&mut catalog).context("Failed to register stories")?;
    buttonbook::ui::run(catalog, &config.browser)?;
    Ok(())
}
