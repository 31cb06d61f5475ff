use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub fn init() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_thread_ids(false)
                .with_thread_names(false),
        )
        .with(EnvFilter::from_env(format!(
            "{}_LOG",
            env!("CARGO_PKG_NAME").to_uppercase()
        )))
        .init();
    Ok(())
}
