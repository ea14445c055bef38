use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::consts::LOG_ENV;

static INIT: Once = Once::new();

/// Install the stderr `tracing` subscriber.
///
/// `STUDYPLAN_LOG` takes a filter directive (e.g. `studyplan=trace`); without
/// it the level is `warn`, or `debug` when `debug` is set.
pub(crate) fn init_tracing(debug: bool) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(default_directive(debug)));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false),
            )
            .with(filter)
            .init();
    });
}

fn default_directive(debug: bool) -> &'static str {
    if debug { "studyplan=debug" } else { "studyplan=warn" }
}
