use tracing_subscriber::EnvFilter;

use fraudguard_portal::client::render;
use fraudguard_portal::client::state::{RelayClient, SelectedFile, UploadState, CSV_MEDIA_TYPE};
use fraudguard_portal::config::Config;
use fraudguard_portal::relay;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    // Initialize structured logging (set RUST_LOG=info for output)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        Some("analyze") => {
            let file_path = args.get(1).ok_or_else(|| {
                eyre::eyre!("Usage: fraudguard-portal analyze <file.csv> [config.toml]")
            })?;
            let config_path = args.get(2).map(String::as_str).unwrap_or("config.toml");
            let config = Config::load_or_default(config_path)?;
            analyze(file_path, &config).await
        }
        _ => {
            let config_path = args.first().map(String::as_str).unwrap_or("config.toml");
            let config = Config::load_or_default(config_path)?;
            tracing::info!(
                backend = %config.backend.predict_url,
                "FraudGuard portal starting"
            );
            relay::serve(config.backend, &config.server.host, config.server.port).await
        }
    }
}

/// Drive the upload client from the terminal: select the file, submit it
/// to the relay, and render the settled state.
async fn analyze(path: &str, config: &Config) -> eyre::Result<()> {
    let bytes =
        std::fs::read(path).map_err(|e| eyre::eyre!("Failed to read '{}': {}", path, e))?;
    let name = std::path::Path::new(path)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string());

    // The terminal stands in for the browser: the declared media type comes
    // from the extension, and validation stays in the client state machine.
    let media_type = if std::path::Path::new(path)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
    {
        CSV_MEDIA_TYPE
    } else {
        "application/octet-stream"
    };

    let mut state = UploadState::new();
    state.select_file(SelectedFile {
        name,
        media_type: media_type.to_string(),
        bytes,
    });

    if state.error.is_none() {
        tracing::info!(relay = %config.client.relay_url, "Submitting file for analysis");
        let backend = RelayClient::new(config.client.relay_url.clone());
        state.submit(&backend).await;
    }

    render::render(&state);
    Ok(())
}
