//! Contact Demo Binary
//!
//! Builds a sample contact, gives it a postal address, and prints it.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin contact-demo
//!
//! # JSON logs at debug level
//! CONTACT_DEMO_LOG_LEVEL=debug CONTACT_DEMO_LOG_FORMAT=json cargo run --bin contact-demo
//! ```
//!
//! # Environment Variables
//!
//! * `CONTACT_DEMO_LOG_LEVEL` - Log level or filter directive (default: info)
//! * `CONTACT_DEMO_LOG_FORMAT` - `text` or `json` (default: text)
//! * `RUST_LOG` - Overrides `CONTACT_DEMO_LOG_LEVEL` when set

use interface_cli::{demo, telemetry, DemoConfig};

fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = DemoConfig::from_env()?;
    telemetry::init_tracing(&config);

    tracing::info!(log_format = ?config.log_format, "Starting contact demo");

    let stdout = std::io::stdout();
    demo::run(&mut stdout.lock())?;

    Ok(())
}
