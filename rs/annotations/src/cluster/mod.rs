mod client;
mod error;
#[cfg(test)]
pub mod mock;
mod r#trait;

pub use client::{load_config, ConnectionOptions, KubeCluster};
pub use error::ClusterError;
pub use r#trait::Cluster;

#[cfg(test)]
pub use mock::MockCluster;
