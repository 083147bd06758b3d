pub mod env;
pub mod tracing;
