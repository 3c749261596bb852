//! snaplist - list snapshot metadata for a file in a block-storage
//! cluster.
//!
//! Queries the snapshot management service over HTTP, pages through
//! the result set, and prints a sorted table grouped by file path.

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

use snaplist::{
    render_table, sort_records, HttpMetricClient, QueryParams, SnapshotLister,
};

/// List snapshot information for a file.
#[derive(Parser)]
#[command(name = "snaplist", about = "List snapshot information for a file", version)]
struct Args {
    /// Snapshot service endpoint candidates, comma-separated host:port.
    #[arg(
        long,
        default_value = "127.0.0.1:5555,127.0.0.1:5556,127.0.0.1:5557"
    )]
    snapshot_addr: String,

    /// Timeout for each page request, in milliseconds.
    #[arg(long, default_value = "500")]
    http_timeout: u64,

    /// Owning user of the file.
    #[arg(short, long, default_value = "root")]
    user: String,

    /// Path of the file whose snapshots are listed.
    #[arg(short, long)]
    file: String,

    /// Snapshot id filter; `*` lists every snapshot of the file.
    #[arg(long, default_value = "*")]
    snapshot_id: String,

    /// Output format.
    #[arg(long, value_enum, default_value = "table")]
    format: Format,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Table,
    Json,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let endpoints: Vec<String> = args
        .snapshot_addr
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect();

    let client =
        match HttpMetricClient::new(endpoints, Duration::from_millis(args.http_timeout)) {
            Ok(client) => client,
            Err(e) => {
                error!(error = %e, "invalid snapshot service configuration");
                return ExitCode::FAILURE;
            }
        };

    let lister = SnapshotLister::new(Arc::new(client));
    let params = QueryParams::new(&args.file, &args.user, &args.snapshot_id);

    match lister.list_snapshots(params).await {
        Ok(mut records) => {
            match args.format {
                Format::Table => println!("{}", render_table(&records)),
                Format::Json => {
                    sort_records(&mut records);
                    match serde_json::to_string_pretty(&records) {
                        Ok(json) => println!("{}", json),
                        Err(e) => {
                            error!(error = %e, "failed to encode listing as json");
                            return ExitCode::FAILURE;
                        }
                    }
                }
            }
            ExitCode::SUCCESS
        }
        Err(failure) => {
            if !failure.partial.is_empty() {
                warn!(
                    partial = failure.partial.len(),
                    "listing aborted mid-pagination; discarding partial results"
                );
            }
            error!(error = %failure, "failed to list snapshots");
            ExitCode::FAILURE
        }
    }
}
