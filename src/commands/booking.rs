//! Booking Commands

use chrono::NaiveDate;

use super::simulate_latency;
use crate::models::{BookingDetails, Provider};

/// Simulated booking confirmation; the id comes from the confirmation time
pub async fn confirm_booking(provider: &Provider, date: NaiveDate, time: String, delay_ms: u32) -> BookingDetails {
    simulate_latency(delay_ms).await;
    let details = BookingDetails::new(date, time, chrono::Utc::now().timestamp_millis());
    log::info!("Booking {} confirmed with provider {}", details.booking_id, provider.id);
    details
}
