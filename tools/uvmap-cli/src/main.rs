//! uvmap - command line front end for the UV mapping lab
//!
//! # Commands
//!
//! - `uvmap texture` - Write the diagnostic grid texture as PNG
//! - `uvmap project` - Project a primitive and dump its UV buffers as JSON
//! - `uvmap summary` - Print the mode indicator and axis roles
//!
//! # Usage
//!
//! ```bash
//! # Reference texture
//! uvmap texture --output grid.png
//!
//! # Spherical projection around Y on the sphere, tiled twice, no repeat
//! uvmap project --shape sphere --projection spherical --axis y --tiling 2 --no-repeat
//!
//! # Same settings from a saved control state
//! uvmap project --config state.json --output uvs.json
//! ```
//!
//! Set `RUST_LOG=debug` for per-recomputation logging.

mod args;
mod project;
mod summary;
mod texture;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// uvmap - UV projection lab tools
#[derive(Parser)]
#[command(name = "uvmap")]
#[command(about = "Inspect UV projections and the diagnostic texture")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the diagnostic grid texture as PNG
    Texture(texture::TextureArgs),

    /// Project a primitive and dump its UV buffers as JSON
    Project(project::ProjectArgs),

    /// Print the mode indicator and axis roles
    Summary(summary::SummaryArgs),
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Texture(args) => texture::execute(args),
        Commands::Project(args) => project::execute(args),
        Commands::Summary(args) => summary::execute(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_project_flags() {
        let cli = Cli::try_parse_from([
            "uvmap",
            "project",
            "--shape",
            "sphere",
            "--projection",
            "Spherical",
            "--offset-y",
            "-1.5",
            "--tiling",
            "3",
            "--no-repeat",
        ])
        .unwrap();
        let Commands::Project(args) = cli.command else {
            panic!("expected project command");
        };
        let config = args.config.resolve().unwrap();
        assert_eq!(config.shape, uvmap_projection::Shape::Sphere);
        assert_eq!(config.projection, uvmap_projection::Projection::Spherical);
        assert_eq!(config.offset_y, -1.5);
        assert_eq!(config.tiling, 3);
        assert!(!config.repeat_texture);
    }

    #[test]
    fn rejects_unknown_projection() {
        assert!(Cli::try_parse_from(["uvmap", "project", "--projection", "conical"]).is_err());
    }

    #[test]
    fn rejects_out_of_range_tiling() {
        assert!(Cli::try_parse_from(["uvmap", "project", "--tiling", "11"]).is_err());
        assert!(Cli::try_parse_from(["uvmap", "project", "--tiling", "0"]).is_err());
    }
}
