use std::io::stderr;
use std::sync::Once;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::{fmt, EnvFilter, FmtSubscriber};

use super::error::TracingSetupError;
use crate::env::get_env_var_or;

static TRACING_INIT: Once = Once::new();

/// Installs the global subscriber. Log lines go to stderr so that stdout
/// stays reserved for program output.
pub fn setup_tracing() -> Result<(), TracingSetupError> {
    let mut init_result: Result<(), TracingSetupError> = Ok(());

    // ensures that the subscriber is only initialized once for all threads
    TRACING_INIT.call_once(|| {
        let directives = match get_env_var_or("RUST_LOG", "info") {
            Ok(directives) => directives,
            Err(e) => {
                init_result = Err(e.into());
                return;
            }
        };
        let filter = EnvFilter::new(directives);

        let subscriber = FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_timer(UtcTime::rfc_3339())
            .with_ansi(false)
            .with_writer(stderr)
            .fmt_fields(fmt::format::DefaultFields::new())
            .event_format(fmt::format().compact().with_line_number(true))
            .finish();

        if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
            init_result = Err(e.into());
        }
    });
    init_result
}
