//! Provider Commands

use super::simulate_latency;
use crate::models::ProviderData;

pub async fn register_provider(provider: &ProviderData, delay_ms: u32) {
    simulate_latency(delay_ms).await;
    log::info!("Provider {} registered for {}", provider.name, provider.service_type.id());
}
