use thiserror::Error;

use crate::cluster::ClusterError;
use crate::workload::WorkloadKind;

#[derive(Error, Debug)]
pub enum InventoryError {
    #[error("Unknown workload type: {0}")]
    InvalidSelector(String),
    #[error("Failed to reach cluster: {0}")]
    ClusterUnreachable(#[source] ClusterError),
    #[error("Failed to list {} in namespace {namespace}: {source}", .kind.plural())]
    ResourceListFailed {
        kind: WorkloadKind,
        namespace: String,
        source: ClusterError,
    },
}
