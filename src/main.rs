//! orbit-cube - a spinning cube you can press and drag
//!
//! Press on the cube to highlight it, release to restore it, and drag to
//! orbit the camera around the origin.

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use orbit_cube::{AppConfig, CubeApp, InteractionMode};

#[derive(Parser, Debug)]
#[command(
    name = "orbit-cube",
    version,
    about = "Interactive spinning cube: press to highlight, drag to orbit",
    after_help = r#"
Environment Variables:
  ORBIT_CUBE_MODE=static-camera   Same as --mode
  RUST_LOG=debug                  Log filter (error, warn, info, debug, trace)
"#
)]
struct Cli {
    /// Interaction mode: drag-orbit or static-camera
    #[arg(long, env = "ORBIT_CUBE_MODE", default_value = "drag-orbit")]
    mode: InteractionMode,

    /// Window width in logical pixels
    #[arg(long, default_value = "1200", value_parser = clap::value_parser!(u32).range(1..))]
    width: u32,

    /// Window height in logical pixels
    #[arg(long, default_value = "800", value_parser = clap::value_parser!(u32).range(1..))]
    height: u32,

    /// Window title
    #[arg(long, default_value = "Orbit Cube")]
    title: String,
}

impl Cli {
    fn config(&self) -> AppConfig {
        AppConfig::default()
            .with_title(self.title.clone())
            .with_window_size(self.width, self.height)
            .with_mode(self.mode)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    log::info!("starting orbit-cube in {} mode", cli.mode);

    let app = CubeApp::new(cli.config()).context("failed to create application")?;
    app.run().context("application exited with an error")?;

    log::info!("bye");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["orbit-cube"]).unwrap();
        let config = cli.config();

        assert_eq!(config.window_size, (1200, 800));
        assert_eq!(config.title, "Orbit Cube");
        assert_eq!(config.max_pixel_ratio, 2.0);
    }

    #[test]
    fn test_mode_flag() {
        let cli = Cli::try_parse_from(["orbit-cube", "--mode", "static-camera"]).unwrap();
        assert_eq!(cli.mode, InteractionMode::StaticCamera);

        let cli = Cli::try_parse_from(["orbit-cube", "--mode", "drag-orbit"]).unwrap();
        assert_eq!(cli.mode, InteractionMode::DragOrbit);
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(Cli::try_parse_from(["orbit-cube", "--mode", "spin"]).is_err());
        assert!(Cli::try_parse_from(["orbit-cube", "--width", "0"]).is_err());
        assert!(Cli::try_parse_from(["orbit-cube", "--height", "-3"]).is_err());
    }

    #[test]
    fn test_size_and_title() {
        let cli = Cli::try_parse_from([
            "orbit-cube",
            "--width",
            "640",
            "--height",
            "480",
            "--title",
            "demo",
        ])
        .unwrap();
        let config = cli.config();

        assert_eq!(config.window_size, (640, 480));
        assert_eq!(config.title, "demo");
    }
}
