//! Command-line interface orchestration for kumo.
//!
//! The CLI offers a `cluster` command that loads either a comma-separated
//! point list or a text raster mask and groups the points into connected
//! components by radius.

mod commands;

pub use commands::{
    Cli, CliError, ClusterCommand, ClusterSource, Command, ExecutionSummary, MaskArgs, PointsArgs,
    render_summary, run_cli,
};
