use std::future::Future;

use crate::workload::{WorkloadKind, WorkloadResource};

use super::{ClusterError, KubeCluster};

/// Read-only view of a cluster, as needed by the inventory.
pub trait Cluster {
    fn list_namespaces(&self) -> impl Future<Output = Result<Vec<String>, ClusterError>> + Send;

    fn list_workloads(
        &self,
        kind: WorkloadKind,
        namespace: &str,
    ) -> impl Future<Output = Result<Vec<WorkloadResource>, ClusterError>> + Send;
}

impl Cluster for KubeCluster {
    fn list_namespaces(&self) -> impl Future<Output = Result<Vec<String>, ClusterError>> + Send {
        self.list_namespaces()
    }

    fn list_workloads(
        &self,
        kind: WorkloadKind,
        namespace: &str,
    ) -> impl Future<Output = Result<Vec<WorkloadResource>, ClusterError>> + Send {
        self.list_workloads(kind, namespace)
    }
}
