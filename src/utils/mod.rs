pub(crate) mod date;
pub(crate) mod logging;

pub(crate) use date::today;
pub(crate) use logging::init_tracing;
