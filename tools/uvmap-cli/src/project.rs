//! Project command - compute UVs and dump the buffers as JSON
//!
//! The report mirrors what the renderer receives: raw UVs, tiled sampling
//! UVs and the per-vertex diagnostic flags.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use uvmap_projection::{ProjectionConfig, ProjectionSession};

use crate::args::ConfigArgs;

/// Arguments for the project command
#[derive(Args, Debug)]
pub struct ProjectArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Write JSON here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Pretty-print the JSON
    #[arg(long)]
    pub pretty: bool,
}

/// Serialized projection result
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionReport {
    pub config: ProjectionConfig,
    pub summary: String,
    pub vertex_count: usize,
    pub triangle_count: usize,
    pub uvs: Vec<[f64; 2]>,
    pub sampling_uvs: Vec<[f64; 2]>,
    pub out_of_range: Vec<bool>,
    pub out_of_range_count: usize,
}

impl ProjectionReport {
    pub fn build(config: ProjectionConfig) -> Self {
        let session = ProjectionSession::new(config);
        let geometry = session.geometry();
        let out_of_range = session.out_of_range_flags();

        Self {
            config,
            summary: config.summary().to_string(),
            vertex_count: geometry.vertex_count(),
            triangle_count: geometry.triangle_count(),
            uvs: geometry.uvs().iter().map(|uv| uv.to_array()).collect(),
            sampling_uvs: session
                .sampling_uvs()
                .iter()
                .map(|uv| uv.to_array())
                .collect(),
            out_of_range_count: out_of_range.iter().filter(|&&f| f).count(),
            out_of_range,
        }
    }
}

/// Execute the project command
pub fn execute(args: ProjectArgs) -> Result<()> {
    let config = args.config.resolve()?;
    let report = ProjectionReport::build(config);
    log::info!(
        "{}: {} vertices, {} out of range",
        report.summary,
        report.vertex_count,
        report.out_of_range_count
    );

    let json = if args.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };

    match &args.output {
        Some(path) => std::fs::write(path, json)
            .with_context(|| format!("Failed to write report: {}", path.display()))?,
        None => println!("{}", json),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use uvmap_projection::{Axis, Projection, Shape};

    #[test]
    fn report_has_one_uv_per_vertex() {
        let report = ProjectionReport::build(ProjectionConfig::default());
        assert_eq!(report.vertex_count, 6534);
        assert_eq!(report.uvs.len(), report.vertex_count);
        assert_eq!(report.sampling_uvs.len(), report.vertex_count);
        assert_eq!(report.out_of_range.len(), report.vertex_count);
        assert_eq!(report.out_of_range_count, 0);
    }

    #[test]
    fn report_flags_with_tiling_and_no_repeat() {
        let report = ProjectionReport::build(ProjectionConfig {
            shape: Shape::Sphere,
            projection: Projection::Spherical,
            axis: Axis::Y,
            tiling: 2,
            repeat_texture: false,
            ..Default::default()
        });
        assert!(report.out_of_range_count > 0);
        for (uv, flagged) in report.sampling_uvs.iter().zip(&report.out_of_range) {
            let outside = uv.iter().any(|&c| !(0.0..=1.0).contains(&c));
            assert_eq!(outside, *flagged);
        }
    }

    #[test]
    fn execute_writes_camel_case_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("uvs.json");
        execute(ProjectArgs {
            config: ConfigArgs {
                projection: Some(Projection::Box),
                ..Default::default()
            },
            output: Some(path.clone()),
            pretty: false,
        })
        .unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["vertexCount"], 6534);
        assert_eq!(value["config"]["projection"], "box");
        assert_eq!(value["summary"], "Box | cube");
        assert_eq!(value["samplingUvs"].as_array().map(Vec::len), Some(6534));
    }
}
