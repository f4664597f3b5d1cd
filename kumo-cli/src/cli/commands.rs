//! Command implementations and argument parsing for the kumo CLI.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use kumo_core::{ClusterError, Clusterer, ClustererBuilder, Partition, Point};
use kumo_providers_raster::{Mask, RasterError, nonzero_points};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

const DEFAULT_RADIUS: f64 = 1.0;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "kumo", about = "Cluster 2-D points by radius connectivity.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Group points into connected components.
    Cluster(ClusterCommand),
}

/// Options accepted by the `cluster` command.
#[derive(Debug, Args, Clone)]
pub struct ClusterCommand {
    /// Neighbourhood radius; points at most this far apart join a cluster.
    #[arg(
        long = "radius",
        default_value_t = DEFAULT_RADIUS,
        value_parser = clap::value_parser!(f64),
    )]
    pub radius: f64,

    /// Number of worker threads (defaults to the available parallelism).
    #[arg(long = "threads")]
    pub threads: Option<usize>,

    /// Input source configuration.
    #[command(subcommand)]
    pub source: ClusterSource,
}

/// Input sources accepted by the `cluster` command.
#[derive(Debug, Subcommand, Clone)]
pub enum ClusterSource {
    /// Read points from a text file with one `x,y` pair per line.
    Points(PointsArgs),
    /// Read points from a text raster mask, clustering its non-zero pixels.
    Mask(MaskArgs),
}

/// Point-list ingestion arguments.
#[derive(Debug, Args, Clone)]
pub struct PointsArgs {
    /// Path to a UTF-8 file with one comma-separated `x,y` pair per line.
    pub path: PathBuf,

    /// Override name for the input source (defaults to the file name).
    #[arg(long)]
    pub name: Option<String>,
}

/// Raster mask ingestion arguments.
#[derive(Debug, Args, Clone)]
pub struct MaskArgs {
    /// Path to a text raster whose rows are runs of decimal digits.
    pub path: PathBuf,

    /// Override name for the input source (defaults to the file name).
    #[arg(long)]
    pub name: Option<String>,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// File I/O failed while loading an input source.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// A point-list line could not be parsed as an `x,y` pair.
    #[error("invalid point on line {line} of `{path}`: {message}")]
    PointParse {
        /// Path of the offending file.
        path: PathBuf,
        /// One-based line number of the malformed entry.
        line: usize,
        /// Description of the parse failure.
        message: String,
    },
    /// Raster mask ingestion failed.
    #[error(transparent)]
    Raster(#[from] RasterError),
    /// Core clustering failed.
    #[error(transparent)]
    Core(#[from] ClusterError),
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Name derived from the input source.
    pub source: String,
    /// Canonicalised clustering produced by the command.
    pub partition: Partition,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when ingestion or clustering fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use kumo_cli::cli::{Cli, ClusterCommand, ClusterSource, Command, PointsArgs, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "0.0,0.0\n10.0,0.0\n")?;
/// let cli = Cli {
///     command: Command::Cluster(ClusterCommand {
///         radius: 1.0,
///         threads: None,
///         source: ClusterSource::Points(PointsArgs {
///             path: file.path().to_path_buf(),
///             name: None,
///         }),
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.partition.cluster_count(), 2);
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Cluster(cluster) => {
            Span::current().record("command", field::display("cluster"));
            run_command(cluster)
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(radius = field::Empty, threads = field::Empty, source = field::Empty),
)]
pub(super) fn run_command(command: ClusterCommand) -> Result<ExecutionSummary, CliError> {
    let mut builder = ClustererBuilder::new().with_radius(command.radius);
    if let Some(threads) = command.threads {
        builder = builder.with_threads(threads);
    }
    let clusterer = builder.build()?;

    let span = Span::current();
    span.record("radius", field::display(command.radius));
    if let Some(threads) = command.threads {
        span.record("threads", field::display(threads));
    }

    let summary = match command.source {
        ClusterSource::Points(args) => {
            span.record("source", field::display("points"));
            run_points(&clusterer, args)?
        }
        ClusterSource::Mask(args) => {
            span.record("source", field::display("mask"));
            run_mask(&clusterer, args)?
        }
    };

    info!(
        source = summary.source.as_str(),
        clusters = summary.partition.cluster_count(),
        "command completed"
    );
    Ok(summary)
}

#[instrument(
    name = "cli.run_points",
    err,
    skip(clusterer, args),
    fields(path = field::Empty, override_name = field::Empty),
)]
pub(super) fn run_points(
    clusterer: &Clusterer,
    args: PointsArgs,
) -> Result<ExecutionSummary, CliError> {
    let PointsArgs { path, name } = args;
    let span = Span::current();
    span.record("path", field::display(path.display()));
    span.record(
        "override_name",
        field::display(name.as_deref().unwrap_or("<derived>")),
    );
    let source = derive_source_name(&path, name.as_deref());
    let points = parse_points(&path, open_reader(&path)?)?;
    let mut partition = clusterer.cluster(&points)?;
    partition.canonicalize();
    info!(
        source = source.as_str(),
        points = points.len(),
        clusters = partition.cluster_count(),
        "point-list execution completed"
    );
    Ok(ExecutionSummary { source, partition })
}

#[instrument(
    name = "cli.run_mask",
    err,
    skip(clusterer, args),
    fields(path = field::Empty, override_name = field::Empty),
)]
pub(super) fn run_mask(
    clusterer: &Clusterer,
    args: MaskArgs,
) -> Result<ExecutionSummary, CliError> {
    let MaskArgs { path, name } = args;
    let span = Span::current();
    span.record("path", field::display(path.display()));
    span.record(
        "override_name",
        field::display(name.as_deref().unwrap_or("<derived>")),
    );
    let source = derive_source_name(&path, name.as_deref());
    let mask = Mask::from_reader(open_reader(&path)?)?;
    let points = nonzero_points(&mask);
    let mut partition = clusterer.cluster(&points)?;
    partition.canonicalize();
    info!(
        source = source.as_str(),
        width = mask.width(),
        height = mask.height(),
        points = points.len(),
        clusters = partition.cluster_count(),
        "mask execution completed"
    );
    Ok(ExecutionSummary { source, partition })
}

#[instrument(name = "cli.open_reader", err, fields(path = field::Empty))]
pub(super) fn open_reader(path: &Path) -> Result<BufReader<File>, CliError> {
    Span::current().record("path", field::display(path.display()));
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

/// Parses a point list with one comma-separated `x,y` pair per line.
///
/// Blank lines are skipped so trailing newlines do not produce phantom
/// points. Line numbers in errors are one-based.
pub(super) fn parse_points(path: &Path, reader: impl BufRead) -> Result<Vec<Point>, CliError> {
    let mut points = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        points.push(parse_point(path, index + 1, trimmed)?);
    }
    Ok(points)
}

fn parse_point(path: &Path, line: usize, raw: &str) -> Result<Point, CliError> {
    let parse_error = |message: String| CliError::PointParse {
        path: path.to_path_buf(),
        line,
        message,
    };
    let (raw_x, raw_y) = raw
        .split_once(',')
        .ok_or_else(|| parse_error(format!("expected `x,y`, got `{raw}`")))?;
    let x: f64 = raw_x
        .trim()
        .parse()
        .map_err(|err| parse_error(format!("invalid x coordinate `{}`: {err}", raw_x.trim())))?;
    let y: f64 = raw_y
        .trim()
        .parse()
        .map_err(|err| parse_error(format!("invalid y coordinate `{}`: {err}", raw_y.trim())))?;
    Ok(Point::new(x, y))
}

pub(super) fn derive_source_name(path: &Path, override_name: Option<&str>) -> String {
    if let Some(name) = override_name {
        return name.to_owned();
    }

    path.file_stem()
        .and_then(|value| value.to_str())
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| "input".to_owned())
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use std::io::Cursor;
/// # use kumo_cli::cli::{ExecutionSummary, render_summary};
/// # use kumo_core::Partition;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = ExecutionSummary {
///     source: "demo".into(),
///     partition: Partition::from_clusters(vec![vec![0, 1], vec![2]]),
/// };
/// let mut buffer = Cursor::new(Vec::new());
/// render_summary(&summary, &mut buffer)?;
/// let text = String::from_utf8(buffer.into_inner())?;
/// assert!(text.contains("clusters: 2"));
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "source: {}", summary.source)?;
    writeln!(writer, "points: {}", summary.partition.point_count())?;
    writeln!(writer, "clusters: {}", summary.partition.cluster_count())?;
    for (index, cluster) in summary.partition.clusters().iter().enumerate() {
        let members: Vec<String> = cluster.iter().map(ToString::to_string).collect();
        writeln!(writer, "cluster {index}: {}", members.join(", "))?;
    }
    Ok(())
}
