use crate::config::Config;
use crate::sink::{FileSink, StdoutSink};
use anyhow::{Context, Result};
use blockpage_compiler_html::{CompileOptions, Export, ExportSink};
use blockpage_editor::{Action, Builder};
use blockpage_model::Layout;
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Debug, Args)]
pub struct BuildArgs {
    /// JSON file holding the list of builder actions to replay
    pub script: PathBuf,

    /// Output to stdout instead of a file
    #[arg(long)]
    pub stdout: bool,

    /// Output directory (overrides config)
    #[arg(short, long)]
    pub out_dir: Option<String>,

    /// Element placement mode (overrides config)
    #[arg(short, long)]
    pub layout: Option<Layout>,

    /// Reproduce canvas positions in the export
    #[arg(long)]
    pub positioned: bool,

    /// Wrap the export in a full HTML document
    #[arg(long)]
    pub standalone: bool,
}

pub fn build(args: BuildArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let script_path = PathBuf::from(cwd).join(&args.script);

    if !args.stdout {
        println!("{}", "🔨 Building website...".bright_blue().bold());
    }

    let actions = load_script(&script_path)?;
    let layout = args.layout.unwrap_or(config.layout);
    let builder = run_script(actions, layout, &config)?;

    let mut options = CompileOptions::from(&config.compiler_options);
    options.positioned |= args.positioned;
    options.standalone |= args.standalone;

    let export = Export::from_elements(builder.elements(), options);

    if args.stdout {
        StdoutSink.offer(&export)?;
        return Ok(());
    }

    let out_dir = match &args.out_dir {
        Some(out) => PathBuf::from(cwd).join(out),
        None => config.get_out_dir(cwd),
    };
    let mut sink = FileSink::new(out_dir);
    sink.offer(&export)?;

    for path in sink.written() {
        println!(
            "  {} {} elements → {}",
            "✓".green(),
            builder.elements().len(),
            path.display()
        );
    }

    Ok(())
}

fn load_script(path: &Path) -> Result<Vec<Action>> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("Cannot read script {}", path.display()))?;

    serde_json::from_str(&source)
        .with_context(|| format!("Invalid action script {}", path.display()))
}

/// Replay `actions` on a fresh builder
pub fn run_script(actions: Vec<Action>, layout: Layout, config: &Config) -> Result<Builder> {
    let mut builder = Builder::new(layout).with_canvas_rect(config.canvas.to_rect());

    for (i, action) in actions.into_iter().enumerate() {
        let description = format!("{:?}", action);
        builder
            .dispatch(action)
            .with_context(|| format!("Action {} failed: {}", i + 1, description))?;
    }

    if let Some(session) = builder.session() {
        warn!(index = session.index, "Script ended with unsaved edits");
        eprintln!(
            "{} element {} has unsaved edits; they are not exported",
            "⚠️".yellow(),
            session.index
        );
    }

    Ok(builder)
}
