use k8s_openapi::api::core::v1::Namespace;
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Api, Client, Config, ResourceExt};
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

use crate::kubeapi::{list_all, WorkloadApi};
use crate::workload::{WorkloadKind, WorkloadResource};

use super::ClusterError;

#[derive(Debug, Clone, Default)]
pub struct ConnectionOptions {
    /// Explicit kubeconfig file. Without it the default kubeconfig is used,
    /// falling back to the in-cluster service account.
    pub kubeconfig: Option<PathBuf>,
    pub context: Option<String>,
    pub timeout: Option<Duration>,
}

#[derive(Clone)]
pub struct KubeCluster {
    client: Client,
}

impl KubeCluster {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn connect(options: &ConnectionOptions) -> Result<Self, ClusterError> {
        let config = load_config(options).await?;
        debug!("Connecting to {}", config.cluster_url);
        let client = Client::try_from(config)?;
        Ok(Self::new(client))
    }

    pub async fn list_namespaces(&self) -> Result<Vec<String>, ClusterError> {
        let api: Api<Namespace> = Api::all(self.client.clone());
        let namespaces = list_all(&api).await?;
        Ok(namespaces.iter().map(|ns| ns.name_any()).collect())
    }

    pub async fn list_workloads(
        &self,
        kind: WorkloadKind,
        namespace: &str,
    ) -> Result<Vec<WorkloadResource>, ClusterError> {
        let api = WorkloadApi::namespaced(kind, self.client.clone(), namespace);
        debug!("Listing {api}s in namespace {namespace}");
        Ok(api.list().await?)
    }
}

/// Resolves the client config. `KUBECONFIG` is left to kube's own loading so
/// that a colon-separated list of files is merged.
pub async fn load_config(options: &ConnectionOptions) -> Result<Config, ClusterError> {
    let kube_options = KubeConfigOptions {
        context: options.context.clone(),
        ..Default::default()
    };
    let mut config = match &options.kubeconfig {
        Some(path) => {
            let kubeconfig = Kubeconfig::read_from(path)?;
            Config::from_custom_kubeconfig(kubeconfig, &kube_options).await?
        }
        None if options.context.is_some() => Config::from_kubeconfig(&kube_options).await?,
        None => Config::infer().await?,
    };
    if let Some(timeout) = options.timeout {
        config.read_timeout = Some(timeout);
    }
    Ok(config)
}
