use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::InventoryError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkloadKind {
    Deployment,
    DaemonSet,
    StatefulSet,
    CronJob,
}

impl fmt::Display for WorkloadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Deployment => "Deployment",
            Self::DaemonSet => "DaemonSet",
            Self::StatefulSet => "StatefulSet",
            Self::CronJob => "CronJob",
        };
        write!(f, "{}", name)
    }
}

impl WorkloadKind {
    pub const fn plural(&self) -> &'static str {
        match self {
            Self::Deployment => "Deployments",
            Self::DaemonSet => "DaemonSets",
            Self::StatefulSet => "StatefulSets",
            Self::CronJob => "CronJobs",
        }
    }
}

/// Which workload kinds a run reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkloadSelector {
    Deployment,
    DaemonSet,
    StatefulSet,
    CronJob,
    /// Deployments, DaemonSets and CronJobs. StatefulSets are only reported
    /// when selected explicitly.
    All,
}

impl WorkloadSelector {
    pub const fn kinds(&self) -> &'static [WorkloadKind] {
        match self {
            Self::Deployment => &[WorkloadKind::Deployment],
            Self::DaemonSet => &[WorkloadKind::DaemonSet],
            Self::StatefulSet => &[WorkloadKind::StatefulSet],
            Self::CronJob => &[WorkloadKind::CronJob],
            Self::All => &[
                WorkloadKind::Deployment,
                WorkloadKind::DaemonSet,
                WorkloadKind::CronJob,
            ],
        }
    }
}

impl FromStr for WorkloadSelector {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "deployments" => Ok(Self::Deployment),
            "daemonsets" => Ok(Self::DaemonSet),
            "statefulset" => Ok(Self::StatefulSet),
            "cronjobs" => Ok(Self::CronJob),
            "all" => Ok(Self::All),
            other => Err(InventoryError::InvalidSelector(other.to_owned())),
        }
    }
}

impl fmt::Display for WorkloadSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Deployment => "deployments",
            Self::DaemonSet => "daemonsets",
            Self::StatefulSet => "statefulset",
            Self::CronJob => "cronjobs",
            Self::All => "all",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WorkloadResource {
    pub name: String,
    pub annotations: BTreeMap<String, String>,
}

impl WorkloadResource {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            annotations: BTreeMap::new(),
        }
    }

    pub fn with_annotation(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.annotations.insert(key.into(), value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("deployments", WorkloadSelector::Deployment)]
    #[case("daemonsets", WorkloadSelector::DaemonSet)]
    #[case("statefulset", WorkloadSelector::StatefulSet)]
    #[case("cronjobs", WorkloadSelector::CronJob)]
    #[case("all", WorkloadSelector::All)]
    fn test_parse_selector(#[case] input: &str, #[case] expected: WorkloadSelector) {
        let selector: WorkloadSelector = input.parse().unwrap();
        assert_eq!(selector, expected);
        assert_eq!(selector.to_string(), input);
    }

    #[rstest]
    #[case("statefulsets")]
    #[case("Deployments")]
    #[case("pods")]
    #[case("")]
    fn test_parse_selector_invalid(#[case] input: &str) {
        match input.parse::<WorkloadSelector>() {
            Err(InventoryError::InvalidSelector(value)) => assert_eq!(value, input),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[rstest]
    #[case(WorkloadSelector::Deployment, &[WorkloadKind::Deployment])]
    #[case(WorkloadSelector::DaemonSet, &[WorkloadKind::DaemonSet])]
    #[case(WorkloadSelector::StatefulSet, &[WorkloadKind::StatefulSet])]
    #[case(WorkloadSelector::CronJob, &[WorkloadKind::CronJob])]
    #[case(
        WorkloadSelector::All,
        &[WorkloadKind::Deployment, WorkloadKind::DaemonSet, WorkloadKind::CronJob]
    )]
    fn test_selector_kinds(#[case] selector: WorkloadSelector, #[case] expected: &[WorkloadKind]) {
        assert_eq!(selector.kinds(), expected);
    }

    #[test]
    fn test_all_excludes_statefulset() {
        assert!(!WorkloadSelector::All
            .kinds()
            .contains(&WorkloadKind::StatefulSet));
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(WorkloadKind::DaemonSet.to_string(), "DaemonSet");
        assert_eq!(WorkloadKind::DaemonSet.plural(), "DaemonSets");
        assert_eq!(WorkloadKind::CronJob.to_string(), "CronJob");
        assert_eq!(WorkloadKind::CronJob.plural(), "CronJobs");
    }
}
