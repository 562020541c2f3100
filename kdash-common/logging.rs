use anyhow::Result;
use std::path::PathBuf;
use tracing_error::ErrorLayer;
use tracing_subscriber::{Layer, layer::SubscriberExt, util::SubscriberInitExt};

/// Initializes new logging to file and returns worker guard that will flush logs on drop.\
/// **Note** that `filter` overrides both the `RUST_LOG` variable and the build default.
pub fn initialize(app_name: &str, filter: Option<&str>) -> Result<tracing_appender::non_blocking::WorkerGuard> {
    let appender = tracing_appender::rolling::daily(logs_dir(app_name), format!("{app_name}.log"));
    let (non_blocking_appender, guard) = tracing_appender::non_blocking(appender);

    let timer = time::format_description::parse("[year]-[month padding:zero]-[day padding:zero] [hour]:[minute]:[second]")?;
    let time_offset = time::UtcOffset::current_local_offset().unwrap_or(time::UtcOffset::UTC);
    let timer = tracing_subscriber::fmt::time::OffsetTime::new(time_offset, timer);

    let env_filter = match filter {
        Some(filter) => tracing_subscriber::filter::EnvFilter::try_new(filter)?,
        None => tracing_subscriber::filter::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::filter::EnvFilter::new(default_filter(app_name))),
    };

    let file_subscriber = tracing_subscriber::fmt::layer()
        .compact()
        .with_file(cfg!(debug_assertions))
        .with_line_number(cfg!(debug_assertions))
        .with_target(true)
        .with_thread_ids(true)
        .with_timer(timer)
        .with_ansi(false)
        .with_writer(non_blocking_appender)
        .with_filter(env_filter);

    tracing_subscriber::registry()
        .with(file_subscriber)
        .with(ErrorLayer::default())
        .try_init()?;

    Ok(guard)
}

/// Returns the directory that holds log files: `HOME/.{app_name}/logs`.
pub fn logs_dir(app_name: &str) -> PathBuf {
    match std::env::home_dir() {
        Some(path) => path.join(format!(".{app_name}")).join("logs"),
        None => PathBuf::from("logs"),
    }
}

fn default_filter(app_name: &str) -> String {
    let target = app_name.replace('-', "_");
    if cfg!(debug_assertions) {
        format!("warn,{target}=debug,{target}_printer=debug,{target}_kube=debug")
    } else {
        format!("warn,{target}=info")
    }
}
