use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use crate::cluster::ConnectionOptions;
use crate::constant::DEFAULT_WORKLOAD;
use crate::workload::WorkloadSelector;

#[derive(Debug, Parser)]
#[command(name = "annotations")]
#[command(about = "Print the annotations of workloads in every namespace", long_about = None)]
pub struct Cli {
    /// Workload to fetch annotations for (deployments, daemonsets, statefulset, cronjobs, all)
    #[arg(long, default_value = DEFAULT_WORKLOAD)]
    pub workload: WorkloadSelector,

    /// Kubeconfig file, defaults to $KUBECONFIG, ~/.kube/config or the in-cluster config
    #[arg(long)]
    pub kubeconfig: Option<PathBuf>,

    /// Kubeconfig context to use instead of the current one
    #[arg(long)]
    pub context: Option<String>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,
}

impl Cli {
    pub fn connection_options(&self) -> ConnectionOptions {
        ConnectionOptions {
            kubeconfig: self.kubeconfig.clone(),
            context: self.context.clone(),
            timeout: self.timeout.map(Duration::from_secs),
        }
    }
}
