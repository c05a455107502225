//! Texture command - write the diagnostic grid as PNG

use anyhow::{Context, Result};
use clap::Args;
use std::path::{Path, PathBuf};
use uvmap_texture::DiagnosticTexture;

/// Arguments for the texture command
#[derive(Args, Debug)]
pub struct TextureArgs {
    /// Output PNG path
    #[arg(short, long, default_value = "diagnostic_grid.png")]
    pub output: PathBuf,
}

/// Execute the texture command
pub fn execute(args: TextureArgs) -> Result<()> {
    write_texture(&args.output)?;
    println!("Wrote {}", args.output.display());
    Ok(())
}

fn write_texture(path: &Path) -> Result<()> {
    let texture = DiagnosticTexture::shared();
    let png = texture.to_png().context("Failed to encode diagnostic texture")?;
    std::fs::write(path, &png)
        .with_context(|| format!("Failed to write texture: {}", path.display()))?;
    log::info!(
        "Wrote {}x{} diagnostic texture ({} bytes)",
        texture.size(),
        texture.size(),
        png.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_png_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grid.png");
        execute(TextureArgs {
            output: path.clone(),
        })
        .unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn reports_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("grid.png");
        let err = write_texture(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to write texture"));
    }
}
