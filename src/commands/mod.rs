//! Command Wrappers
//!
//! Browser bindings and the simulated marketplace backend, organized by domain.

mod browser;
mod auth;
mod booking;
mod provider;

use gloo_timers::future::TimeoutFuture;

// Re-export all public items
pub use browser::*;
pub use auth::*;
pub use booking::*;
pub use provider::*;

/// Stand-in for network latency
async fn simulate_latency(delay_ms: u32) {
    if delay_ms > 0 {
        TimeoutFuture::new(delay_ms).await;
    }
}
