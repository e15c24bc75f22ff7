pub mod config;
pub mod paths;
pub mod pipeline;
pub mod profile;
pub mod transcript;
pub mod transcription;
pub mod vimeo;

mod server;

use log::info;

fn init_logger() -> Result<std::path::PathBuf, fern::InitError> {
    let log_dir = paths::data_dir().join("logs");
    std::fs::create_dir_all(&log_dir).ok();
    let log_file = log_dir.join("vimeo-scribe.log");

    let format = |out: fern::FormatCallback<'_>, message: &std::fmt::Arguments<'_>, record: &log::Record| {
        out.finish(format_args!(
            "[{}][{}][{}][{:?}] {}",
            chrono::Local::now().format("%Y-%m-%d"),
            chrono::Local::now().format("%H:%M:%S"),
            record.target(),
            record.level(),
            message
        ))
    };

    fern::Dispatch::new()
        .format(format)
        .level(log::LevelFilter::Debug)
        .level_for("hyper", log::LevelFilter::Info)
        .level_for("reqwest", log::LevelFilter::Info)
        .chain(std::io::stdout())
        .chain(fern::log_file(&log_file)?)
        .apply()?;

    Ok(log_file)
}

/// Load configuration, set up logging and directories, and serve the HTTP
/// surface until the process exits.
pub async fn run() -> Result<(), String> {
    dotenvy::dotenv().ok();
    if let Ok(log_file) = init_logger() {
        info!("[vimeo-scribe] logging to {}", log_file.to_string_lossy());
    }

    let config = config::Config::from_env()?;
    paths::ensure_directories()?;
    server::serve_http(config).await
}
