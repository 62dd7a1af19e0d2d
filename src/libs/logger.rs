use crate::libs::messages::macros::is_debug_mode;
use tracing_subscriber::{fmt, EnvFilter};

/// Installs the tracing subscriber when running in debug mode.
///
/// Outside debug mode user output is printed directly by the `msg_*`
/// macros and no subscriber is needed.
pub fn init_logging(level: &str) {
    if !is_debug_mode() {
        return;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = fmt().with_env_filter(filter).with_target(false).compact().try_init();
}
