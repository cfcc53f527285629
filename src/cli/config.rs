use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "layout-binding",
    version,
    about = "Derive binding field names and interaction flags from layout elements"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: layout-binding.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Derive field names and classification flags from an element dump
    Derive {
        /// Path to a JSON file holding an array of tag descriptors
        #[arg(long)]
        input: String,

        /// Field-name prefix (overrides the config file)
        #[arg(long)]
        prefix: Option<String>,

        /// Output format: console, json
        #[arg(long, default_value = "console")]
        format: String,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `layout-binding.yaml`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub generate: GenerateConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateConfig {
    /// Prefix prepended to every generated field name (e.g. "m")
    #[serde(default)]
    pub field_prefix: String,

    /// Whether to run the identifier check on generated field names
    #[serde(default = "default_true")]
    pub validate: bool,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            field_prefix: String::new(),
            validate: true,
        }
    }
}

// Serde default helpers
fn default_true() -> bool {
    true
}

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or("layout-binding.yaml");
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    }
}
