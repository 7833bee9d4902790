//! Customer Auth Commands
//!
//! Simulated OTP delivery and verification.

use super::simulate_latency;
use crate::forms::{self, FormError};
use crate::models::CustomerData;
use crate::routes::Route;

pub async fn send_otp(customer: &CustomerData, delay_ms: u32) {
    simulate_latency(delay_ms).await;
    log::info!("OTP sent to {}", customer.email);
}

/// Compare against the demo code after the simulated round trip.
/// An incomplete code is refused without waiting.
pub async fn verify_otp(customer: CustomerData, code: &str, expected: &str, delay_ms: u32) -> Result<Route, FormError> {
    forms::check_otp_complete(code)?;
    simulate_latency(delay_ms).await;
    forms::otp_outcome(customer, code, expected)
}
