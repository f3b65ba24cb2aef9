use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use blockpage_model::Layout;
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Element placement mode (flow, absolute)
    #[arg(short, long, default_value = "flow")]
    pub layout: Layout,

    /// Output directory for website.html
    #[arg(short, long, default_value = "dist")]
    pub out_dir: String,

    /// Force overwrite existing config
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

    // Check if config already exists
    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!("{}", "📝 Initializing Blockpage project...".bright_blue().bold());

    let config = Config {
        out_dir: args.out_dir.clone(),
        layout: args.layout,
        ..Config::default()
    };

    // Write config file
    let config_json = serde_json::to_string_pretty(&config)?;
    fs::write(&config_path, config_json)?;

    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);
    println!();
    println!("{}", "✅ Project initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Run: blockpage edit");
    println!("  2. Add elements, edit them, then type `export`");
    println!("  3. Check output in {}/website.html", args.out_dir);

    Ok(())
}
