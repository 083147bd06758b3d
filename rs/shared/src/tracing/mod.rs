mod error;
mod tracing;

pub use self::tracing::setup_tracing;
pub use error::TracingSetupError;
