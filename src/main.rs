//! vecmath - vector math demo
//!
//! Prints the results of the demo scenarios for the configured vectors.

use vecmath::config::AppConfig;
use vecmath::demo;

fn main() {
    // Load configuration before logging so the configured level applies
    let (config, load_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // Initialize logging; RUST_LOG still takes precedence
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();

    if let Some(e) = load_error {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }
    log::info!("Starting vecmath demo");

    match demo::run(&config) {
        Ok(lines) => {
            for line in lines {
                println!("{}", line);
            }
        }
        Err(e) => {
            log::error!("Demo failed: {}", e);
            std::process::exit(1);
        }
    }
}
