use kube::core::ErrorResponse;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::workload::{WorkloadKind, WorkloadResource};

use super::{Cluster, ClusterError};

pub type WorkloadCall = (WorkloadKind, String);

/// In-memory cluster. Workload lists are keyed by kind and namespace; kinds
/// that were not seeded list as empty.
pub struct MockCluster {
    namespaces: Vec<String>,
    workloads: HashMap<WorkloadCall, Vec<WorkloadResource>>,
    fail_namespaces: bool,
    fail_workloads: Option<WorkloadCall>,
    calls: Arc<Mutex<Vec<WorkloadCall>>>,
}

impl MockCluster {
    pub fn new(namespaces: &[&str]) -> Self {
        MockCluster {
            namespaces: namespaces.iter().map(|ns| ns.to_string()).collect(),
            workloads: HashMap::new(),
            fail_namespaces: false,
            fail_workloads: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_workloads(
        mut self,
        kind: WorkloadKind,
        namespace: &str,
        workloads: Vec<WorkloadResource>,
    ) -> Self {
        self.workloads
            .insert((kind, namespace.to_owned()), workloads);
        self
    }

    pub fn failing_namespaces(mut self) -> Self {
        self.fail_namespaces = true;
        self
    }

    pub fn failing_workloads(mut self, kind: WorkloadKind, namespace: &str) -> Self {
        self.fail_workloads = Some((kind, namespace.to_owned()));
        self
    }

    /// Workload list calls in the order they were made.
    pub fn calls(&self) -> Vec<WorkloadCall> {
        self.calls.lock().unwrap().clone()
    }
}

fn forbidden(message: &str) -> ClusterError {
    ClusterError::KubeError(kube::Error::Api(ErrorResponse {
        status: "Failure".to_owned(),
        message: message.to_owned(),
        reason: "Forbidden".to_owned(),
        code: 403,
    }))
}

impl Cluster for MockCluster {
    async fn list_namespaces(&self) -> Result<Vec<String>, ClusterError> {
        if self.fail_namespaces {
            return Err(forbidden("namespaces is forbidden"));
        }
        Ok(self.namespaces.clone())
    }

    async fn list_workloads(
        &self,
        kind: WorkloadKind,
        namespace: &str,
    ) -> Result<Vec<WorkloadResource>, ClusterError> {
        let call = (kind, namespace.to_owned());
        self.calls.lock().unwrap().push(call.clone());
        if self.fail_workloads.as_ref() == Some(&call) {
            return Err(forbidden(&format!("{} is forbidden", kind.plural().to_lowercase())));
        }
        Ok(self.workloads.get(&call).cloned().unwrap_or_default())
    }
}
