//! Headless snapshot of the page scene.
//!
//! Runs the same initializer the browser runs, against an in-memory canvas,
//! and writes the result as a binary PPM.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use gc_core::{DrawingSurface, SceneConfig, Viewport, initialize};
use gc_render::{HeadlessHost, PixelBuffer};
use std::fs;

fn load_config(cli: &cli::Cli) -> Result<SceneConfig> {
    let Some(path) = &cli.config else {
        return Ok(SceneConfig::default());
    };
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read scene config {}", path.display()))?;
    SceneConfig::from_json(&json).map_err(anyhow::Error::msg)
}

fn render(viewport: Viewport, config: &SceneConfig) -> Result<PixelBuffer> {
    let mut host = HeadlessHost::with_canvas(viewport, &config.canvas_id);
    initialize(&mut host, config)?;
    host.surface(&config.canvas_id)
        .cloned()
        .context("canvas vanished after initialization")
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = cli::Cli::parse();

    let config = load_config(&cli)?;
    let viewport = Viewport {
        width: cli.width,
        height: cli.height,
    };
    let surface = render(viewport, &config)?;

    fs::write(&cli.out, surface.to_ppm())
        .with_context(|| format!("failed to write {}", cli.out.display()))?;
    let size = surface.size();
    log::info!(
        "wrote {}x{} snapshot to {}",
        size.width,
        size.height,
        cli.out.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn render_default_scene() {
        let surface = render(
            Viewport {
                width: 250.0,
                height: 250.0,
            },
            &SceneConfig::default(),
        )
        .unwrap();
        assert_eq!(surface.pixel(0, 0), Some([0, 0, 255, 255]));
        assert_eq!(surface.pixel(100, 100), Some([255, 0, 0, 255]));
        assert_eq!(surface.pixel(200, 200), Some([0, 0, 255, 255]));
    }

    #[test]
    fn render_oversized_viewport_fails_cleanly() {
        let err = render(
            Viewport {
                width: 1e12,
                height: 1e12,
            },
            &SceneConfig::default(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("exceeds the maximum canvas size"));
    }

    #[test]
    fn cli_defaults() {
        let cli = cli::Cli::parse_from(["gc-snapshot"]);
        assert_eq!(cli.width, 800.0);
        assert_eq!(cli.height, 600.0);
        assert_eq!(cli.out, std::path::PathBuf::from("snapshot.ppm"));
        assert!(cli.config.is_none());
        assert_eq!(load_config(&cli).unwrap(), SceneConfig::default());
    }

    #[test]
    fn missing_config_file_is_reported() {
        let cli = cli::Cli::parse_from(["gc-snapshot", "--config", "/nonexistent/scene.json"]);
        let err = load_config(&cli).unwrap_err();
        assert!(err.to_string().contains("failed to read scene config"));
    }
}
