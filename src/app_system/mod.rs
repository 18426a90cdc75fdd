//! System wiring, startup, and observability configuration.

pub mod config;
pub mod dashboard_system;
pub mod tracing;

pub use self::config::*;
pub use self::dashboard_system::*;
pub use self::tracing::*;
