//! Tracing setup
//!
//! `scoped_subscriber` builds a subscriber meant to be installed with
//! `tracing::subscriber::set_default`, which keeps it bound to the current
//! thread until the returned guard is dropped.

use tracing::Subscriber;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter};

use crate::config::Config;

fn env_filter(config: &Config) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter))
}

/// Subscriber that writes through the test harness's captured output
pub fn scoped_subscriber(config: &Config) -> impl Subscriber + Send + Sync + 'static {
    tracing_subscriber::registry().with(env_filter(config)).with(
        tracing_subscriber::fmt::layer()
            .with_ansi(config.log_ansi)
            .with_test_writer(),
    )
}
