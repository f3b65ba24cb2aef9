use blockpage_compiler_html::CompileOptions;
use blockpage_editor::CanvasRect;
use blockpage_model::Layout;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_CONFIG_NAME: &str = "blockpage.config.json";

/// Blockpage configuration file format
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory the exported website.html is written to
    #[serde(default = "default_out_dir")]
    pub out_dir: String,

    /// Element placement mode
    #[serde(default)]
    pub layout: Layout,

    /// Canvas size used when replaying click actions
    #[serde(default)]
    pub canvas: CanvasSize,

    /// Export options
    #[serde(default)]
    pub compiler_options: CompilerOptions,
}

fn default_out_dir() -> String {
    "dist".to_string()
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

impl CanvasSize {
    pub fn to_rect(self) -> CanvasRect {
        CanvasRect::new(0.0, 0.0, self.width, self.height)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompilerOptions {
    #[serde(default)]
    pub positioned: bool,

    #[serde(default)]
    pub standalone: bool,
}

impl From<&CompilerOptions> for CompileOptions {
    fn from(options: &CompilerOptions) -> Self {
        CompileOptions {
            positioned: options.positioned,
            standalone: options.standalone,
        }
    }
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            tracing::debug!(path = %config_path.display(), "Loaded config");
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    /// Get absolute path to output directory
    pub fn get_out_dir(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.out_dir)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            out_dir: default_out_dir(),
            layout: Layout::Flow,
            canvas: CanvasSize::default(),
            compiler_options: CompilerOptions::default(),
        }
    }
}
