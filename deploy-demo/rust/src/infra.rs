pub(crate) mod clock;
pub(crate) mod config;
pub(crate) mod env;
pub(crate) mod os;
pub(crate) mod telemetry;
