//! Server commands.

use console::style;

use wasteboard::config::Settings;

/// Default port when a bind address names only a host.
const DEFAULT_PORT: u16 = 8000;

/// Start the query service.
pub async fn cmd_backend(settings: &Settings, bind: &str) -> anyhow::Result<()> {
    let (host, port) = parse_bind_address(bind)?;

    if !settings.dataset_path.exists() {
        eprintln!(
            "{} Dataset not found at {} (requests will report it as unavailable)",
            style("!").yellow(),
            settings.dataset_path.display()
        );
    }

    println!(
        "{} Starting query service at http://{}:{}",
        style("→").cyan(),
        host,
        port
    );
    println!("  Press Ctrl+C to stop");

    wasteboard::server::serve(settings, &host, port).await
}

/// Start the web frontend.
pub async fn cmd_frontend(settings: &Settings, bind: &str) -> anyhow::Result<()> {
    let (host, port) = parse_bind_address(bind)?;

    println!(
        "{} Starting web frontend at http://{}:{} (backend: {})",
        style("→").cyan(),
        host,
        port,
        style(&settings.backend_url).dim()
    );
    println!("  Press Ctrl+C to stop");

    wasteboard::web::serve(settings, &host, port).await
}

/// Parse a bind address that can be:
/// - Just a port: "8000" -> 127.0.0.1:8000
/// - Just a host: "0.0.0.0" -> 0.0.0.0:8000
/// - Host and port: "0.0.0.0:8000" -> 0.0.0.0:8000
fn parse_bind_address(bind: &str) -> anyhow::Result<(String, u16)> {
    let bind = bind.trim();
    if bind.is_empty() {
        anyhow::bail!("Empty bind address");
    }

    // Try parsing as just a port number
    if let Ok(port) = bind.parse::<u16>() {
        return Ok(("127.0.0.1".to_string(), port));
    }

    // Try parsing as host:port
    if let Some((host, port_str)) = bind.rsplit_once(':') {
        if let Ok(port) = port_str.parse::<u16>() {
            return Ok((host.to_string(), port));
        }
    }

    // Must be just a host, use default port
    Ok((bind.to_string(), DEFAULT_PORT))
}
