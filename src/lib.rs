//! # Classic Object-Oriented Design Patterns in Rust
//!
//! Three independent demos, each a small program under `src/bin/`:
//!
//! ## Bridge
//! - A remote control (abstraction) drives a television (implementation)
//! - Either side can be swapped without touching the other
//!
//! ## Command
//! - Commands bind a receiver to one action
//! - An invoker fires a command without knowing the receiver
//!
//! ## State
//! - A context delegates to its current state object
//! - States choose the context's next state
//!
//! Run with: `cargo run --bin <bridge_demo|command_demo|state_demo>`

pub mod bridge;
pub mod command;
pub mod config;
pub mod console;
pub mod error;
pub mod logging;
pub mod state;

pub use config::DemoConfig;
pub use console::{Console, Stdout, Transcript};
pub use error::{PatternError, Result};

use logging::LoggingConfig;

/// Loads the config and installs logging. An unreadable or invalid config
/// file is reported as a warning and the defaults are used instead.
pub fn setup() -> Result<DemoConfig> {
    let (config, rejected) = DemoConfig::or_default(DemoConfig::load());
    LoggingConfig::new(config.logging.log_format()?, config.logging.level.clone()).init()?;

    if let Some(err) = rejected {
        tracing::warn!(error = %err, "ignoring config file, using defaults");
    }
    tracing::debug!(?config, "demo configured");
    Ok(config)
}
