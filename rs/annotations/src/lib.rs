pub mod cli;
pub mod cluster;
pub mod constant;
pub mod error;
pub mod inventory;
pub mod kubeapi;
pub mod report;
pub mod workload;
