//! Summary command - print the mode indicator and axis roles

use anyhow::Result;
use clap::Args;
use uvmap_projection::{Axis, Named, ProjectionConfig, ProjectionSession};

use crate::args::ConfigArgs;

/// Arguments for the summary command
#[derive(Args, Debug)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub config: ConfigArgs,
}

/// Execute the summary command
pub fn execute(args: SummaryArgs) -> Result<()> {
    let config = args.config.resolve()?;
    let session = ProjectionSession::new(config);
    let flagged = session
        .out_of_range_flags()
        .into_iter()
        .filter(|&f| f)
        .count();
    print!("{}", render(&config, flagged));
    Ok(())
}

fn render(config: &ProjectionConfig, out_of_range: usize) -> String {
    let convention = config.convention();
    let frame = config.frame();
    let mut out = format!("{}\n", config.summary());
    for &axis in Axis::ALL {
        out.push_str(&format!(
            "  {}: {}\n",
            axis.name().to_ascii_uppercase(),
            axis.label(convention)
        ));
    }
    out.push_str(&format!(
        "  computes on {} with offset ({}, {}, {})\n",
        frame.axis.name().to_ascii_uppercase(),
        frame.offset.x,
        frame.offset.y,
        frame.offset.z
    ));
    out.push_str(&format!(
        "  tiling {} | repeat {} | {} vertices out of range\n",
        config.tiling,
        if config.repeat_texture { "on" } else { "off" },
        out_of_range
    ));
    out
}
