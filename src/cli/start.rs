use crate::cli::{actions::Action, commands, dispatch::handler, globals::GlobalArgs};
use anyhow::Result;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt};

/// Start the CLI
pub fn start() -> Result<(Action, GlobalArgs)> {
    let matches = commands::new().get_matches();

    let verbosity_level = match matches.get_one::<u8>("verbosity").map_or(0, |&v| v) {
        0 => tracing::Level::ERROR,
        1 => tracing::Level::WARN,
        2 => tracing::Level::INFO,
        3 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    let fmt_layer = fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .with_thread_ids(true)
        .with_target(false);

    // RUST_LOG=
    let env_filter = EnvFilter::builder()
        .with_default_directive(verbosity_level.into())
        .from_env_lossy();

    let subscriber = Registry::default().with(fmt_layer).with(env_filter);

    tracing::subscriber::set_global_default(subscriber)?;

    let action = handler(&matches)?;

    let api_url = matches
        .get_one::<String>("api-url")
        .map(String::to_string)
        .unwrap_or_else(|| crate::config::DEFAULT_API_BASE_URL.to_string());

    let data_dir = matches
        .get_one::<String>("data-dir")
        .map(PathBuf::from)
        .unwrap_or_else(default_data_dir);

    Ok((action, GlobalArgs::new(api_url, data_dir)))
}

/// Default location of the persisted session, e.g. `~/.local/share/nudge`.
fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("nudge"))
        .unwrap_or_else(|| PathBuf::from(".nudge"))
}
