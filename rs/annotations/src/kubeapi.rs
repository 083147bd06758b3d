use k8s_openapi::api::{
    apps::v1::{DaemonSet, Deployment, StatefulSet},
    batch::v1::CronJob,
};
use kube::api::ListParams;
use kube::{Api, Client, ResourceExt};
use serde::de::DeserializeOwned;
use std::fmt::{self, Debug};

use crate::constant::LIST_PAGE_SIZE;
use crate::workload::{WorkloadKind, WorkloadResource};

pub enum WorkloadApi {
    Deployment(Api<Deployment>),
    DaemonSet(Api<DaemonSet>),
    StatefulSet(Api<StatefulSet>),
    CronJob(Api<CronJob>),
}

impl fmt::Display for WorkloadApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind())
    }
}

impl WorkloadApi {
    pub fn namespaced(kind: WorkloadKind, client: Client, namespace: &str) -> Self {
        match kind {
            WorkloadKind::Deployment => Self::Deployment(Api::namespaced(client, namespace)),
            WorkloadKind::DaemonSet => Self::DaemonSet(Api::namespaced(client, namespace)),
            WorkloadKind::StatefulSet => Self::StatefulSet(Api::namespaced(client, namespace)),
            WorkloadKind::CronJob => Self::CronJob(Api::namespaced(client, namespace)),
        }
    }

    pub const fn kind(&self) -> WorkloadKind {
        match self {
            Self::Deployment(_) => WorkloadKind::Deployment,
            Self::DaemonSet(_) => WorkloadKind::DaemonSet,
            Self::StatefulSet(_) => WorkloadKind::StatefulSet,
            Self::CronJob(_) => WorkloadKind::CronJob,
        }
    }

    pub async fn list(&self) -> Result<Vec<WorkloadResource>, kube::Error> {
        match self {
            Self::Deployment(api) => list_workload_resources(api).await,
            Self::DaemonSet(api) => list_workload_resources(api).await,
            Self::StatefulSet(api) => list_workload_resources(api).await,
            Self::CronJob(api) => list_workload_resources(api).await,
        }
    }
}

async fn list_workload_resources<K>(api: &Api<K>) -> Result<Vec<WorkloadResource>, kube::Error>
where
    K: kube::Resource + Clone + Debug + DeserializeOwned,
{
    let resources = list_all(api).await?;
    Ok(resources
        .iter()
        .map(|resource| WorkloadResource {
            name: resource.name_any(),
            annotations: resource.annotations().clone(),
        })
        .collect())
}

/// Lists every object behind `api`, following continue tokens. Items keep the
/// order the API server returned them in.
pub async fn list_all<K>(api: &Api<K>) -> Result<Vec<K>, kube::Error>
where
    K: Clone + Debug + DeserializeOwned,
{
    let mut items = Vec::new();
    let mut params = ListParams::default().limit(LIST_PAGE_SIZE);
    loop {
        let page = api.list(&params).await?;
        items.extend(page.items);
        match page.metadata.continue_ {
            Some(token) if !token.is_empty() => params = params.continue_token(&token),
            _ => break,
        }
    }
    Ok(items)
}
