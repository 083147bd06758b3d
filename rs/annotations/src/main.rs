use annotations::{
    cli::Cli,
    cluster::KubeCluster,
    error::InventoryError,
    inventory::run,
};
use clap::Parser;
use shared::tracing::setup_tracing;
use std::error::Error;
use std::process::ExitCode;
use tracing::{error, warn};

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn Error>> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    setup_tracing()?;

    match print_annotations(&cli).await {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            error!("{e}");
            Ok(ExitCode::FAILURE)
        }
    }
}

async fn print_annotations(cli: &Cli) -> Result<(), InventoryError> {
    let cluster = KubeCluster::connect(&cli.connection_options())
        .await
        .map_err(InventoryError::ClusterUnreachable)?;

    let report = run(&cluster, cli.workload).await?;
    if report.is_empty() {
        warn!("No namespaces found in the cluster");
    }
    print!("{report}");
    Ok(())
}
