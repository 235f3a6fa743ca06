// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "scene-lab")]
#[command(about = "Animated forward-rendered scene demos", long_about = None)]
pub struct Cli {
    /// Scene to run: triangle, lab, or volcano
    #[arg(long, default_value = "volcano")]
    pub scene: String,

    /// Disable the FPS/stats overlay
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,

    /// Optional JSON file overriding scene tunables
    #[arg(long)]
    pub config: Option<PathBuf>,
}
