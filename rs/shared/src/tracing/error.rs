use thiserror::Error;
use tracing::subscriber::SetGlobalDefaultError;

use crate::env::EnvError;

#[derive(Error, Debug)]
pub enum TracingSetupError {
    #[error("Failed to read log filter: {0}")]
    EnvError(#[from] EnvError),
    #[error("Failed to install subscriber: {0}")]
    SetGlobalDefaultError(#[from] SetGlobalDefaultError),
}
