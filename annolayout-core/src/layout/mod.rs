pub(crate) mod config;
pub(crate) mod group;
pub(crate) mod metrics;
pub(crate) mod pack;
