use kube::config::{InferConfigError, KubeconfigError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClusterError {
    #[error("Kubeconfig error: {0}")]
    KubeconfigError(#[from] KubeconfigError),
    #[error("Config inference error: {0}")]
    InferConfigError(#[from] InferConfigError),
    #[error("Kubernetes client error: {0}")]
    KubeError(#[from] kube::Error),
}
