use std::fmt;

use crate::constant::NO_ANNOTATIONS;
use crate::workload::{WorkloadKind, WorkloadResource};

/// Annotations of every reported workload, grouped by namespace and kind.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Report {
    pub namespaces: Vec<NamespaceSection>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceSection {
    pub namespace: String,
    pub kinds: Vec<KindSection>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KindSection {
    pub kind: WorkloadKind,
    pub workloads: Vec<WorkloadResource>,
}

impl Report {
    pub fn is_empty(&self) -> bool {
        self.namespaces.is_empty()
    }

    pub fn workload_count(&self) -> usize {
        self.namespaces
            .iter()
            .flat_map(|ns| &ns.kinds)
            .map(|section| section.workloads.len())
            .sum()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for section in &self.namespaces {
            write!(f, "{section}")?;
        }
        Ok(())
    }
}

impl fmt::Display for NamespaceSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Namespace: {}", self.namespace)?;
        for section in &self.kinds {
            write!(f, "{section}")?;
        }
        Ok(())
    }
}

impl fmt::Display for KindSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Annotations for {}:", self.kind.plural())?;
        for workload in &self.workloads {
            writeln!(f, "{}: {}", self.kind, workload.name)?;
            if workload.annotations.is_empty() {
                writeln!(f, "  {NO_ANNOTATIONS}")?;
            }
            for (key, value) in &workload.annotations {
                writeln!(f, "  {key}: {value}")?;
            }
        }
        Ok(())
    }
}
