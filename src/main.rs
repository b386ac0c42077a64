use customer_desk::config::Config;
use customer_desk::customers::CustomerService;
use customer_desk::ui::{make_config, App};
use tracing::error;

fn main() {
    // Use RUST_LOG env var if set, otherwise default to info level
    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt().with_env_filter(log_filter).init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    let service = CustomerService::from_config(&config);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(make_config())
        .with_context(service)
        .launch(App);
}
