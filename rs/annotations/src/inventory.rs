use tracing::{debug, info};

use crate::cluster::Cluster;
use crate::error::InventoryError;
use crate::report::{KindSection, NamespaceSection, Report};
use crate::workload::WorkloadSelector;

/// Collects the annotations of the selected workload kinds in every
/// namespace. The first failing list call aborts the run.
pub async fn run<C: Cluster>(
    cluster: &C,
    selector: WorkloadSelector,
) -> Result<Report, InventoryError> {
    info!("Collecting annotations for {selector}");
    let namespaces = cluster
        .list_namespaces()
        .await
        .map_err(InventoryError::ClusterUnreachable)?;
    debug!("Found {} namespaces", namespaces.len());

    let mut report = Report::default();
    for namespace in namespaces {
        let mut kinds = Vec::with_capacity(selector.kinds().len());
        for &kind in selector.kinds() {
            let workloads = cluster
                .list_workloads(kind, &namespace)
                .await
                .map_err(|source| InventoryError::ResourceListFailed {
                    kind,
                    namespace: namespace.clone(),
                    source,
                })?;
            debug!("{namespace}: {} {}", workloads.len(), kind.plural());
            kinds.push(KindSection { kind, workloads });
        }
        report.namespaces.push(NamespaceSection { namespace, kinds });
    }

    info!(
        "Collected {} workloads in {} namespaces",
        report.workload_count(),
        report.namespaces.len()
    );
    Ok(report)
}
