use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "gc-snapshot")]
#[command(about = "Size a headless canvas to a viewport, paint the scene, write a PPM", long_about = None)]
pub struct Cli {
    /// Viewport inner width
    #[arg(long, default_value_t = 800.0)]
    pub width: f64,

    /// Viewport inner height
    #[arg(long, default_value_t = 600.0)]
    pub height: f64,

    /// JSON scene config; defaults reproduce the stock scene
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output image
    #[arg(long, short, default_value = "snapshot.ppm")]
    pub out: PathBuf,
}
