//! Mock Catalog
//!
//! Hardcoded marketplace data standing in for a backend.

use chrono::NaiveDate;

use crate::models::{Availability, BookingRequest, PriceRange, Provider, RequestStatus, ServiceKind};

/// Bookable time slots
pub const TIME_SLOTS: &[&str] = &[
    "09:00 AM", "10:00 AM", "11:00 AM", "12:00 PM",
    "01:00 PM", "02:00 PM", "03:00 PM", "04:00 PM", "05:00 PM",
];

pub fn is_time_slot(value: &str) -> bool {
    TIME_SLOTS.contains(&value)
}

#[allow(clippy::too_many_arguments)]
fn provider(
    id: u32,
    name: &str,
    city: &str,
    phone: &str,
    rating: f32,
    experience_years: u8,
    availability: Availability,
    (min, max): (u32, u32),
) -> Provider {
    Provider {
        id,
        name: name.to_string(),
        city: city.to_string(),
        phone: phone.to_string(),
        rating,
        experience_years,
        availability,
        price_range: PriceRange { min, max },
    }
}

/// Providers listed for a service. Every service currently shares one list.
pub fn providers_for(_service: ServiceKind) -> Vec<Provider> {
    vec![
        provider(1, "ABC Construction Services", "Mumbai", "+91 98765 43210", 4.8, 8, Availability::Today, (2_000, 5_000)),
        provider(2, "Quick Fix Solutions", "Mumbai", "+91 98765 43211", 4.5, 5, Availability::Tomorrow, (1_500, 4_000)),
        provider(3, "Professional Equipment Co.", "Navi Mumbai", "+91 98765 43212", 4.9, 12, Availability::Now, (3_000, 7_000)),
        provider(4, "City Service Group", "Pune", "+91 98765 43213", 4.3, 6, Availability::Today, (2_500, 6_000)),
        provider(5, "Elite Construction", "Mumbai", "+91 98765 43214", 4.7, 10, Availability::Tomorrow, (4_000, 8_000)),
    ]
}

/// Pending requests shown on the provider dashboard
pub fn booking_requests() -> Vec<BookingRequest> {
    let mut requests = Vec::new();
    if let Some(date) = NaiveDate::from_ymd_opt(2024, 3, 15) {
        requests.push(BookingRequest {
            id: 1,
            customer_name: "John Doe",
            customer_phone: "+91 98765 43210",
            service: ServiceKind::Backhoe,
            date,
            time: "10:00 AM",
            status: RequestStatus::Pending,
        });
    }
    if let Some(date) = NaiveDate::from_ymd_opt(2024, 3, 16) {
        requests.push(BookingRequest {
            id: 2,
            customer_name: "Jane Smith",
            customer_phone: "+91 98765 43211",
            service: ServiceKind::Crane,
            date,
            time: "2:00 PM",
            status: RequestStatus::Pending,
        });
    }
    requests
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_provider_ids_unique() {
        let providers = providers_for(ServiceKind::Crane);
        assert_eq!(providers.len(), 5);
        let ids: HashSet<u32> = providers.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), providers.len());
    }

    #[test]
    fn test_same_list_for_every_service() {
        let backhoe = providers_for(ServiceKind::Backhoe);
        for kind in ServiceKind::ALL {
            assert_eq!(providers_for(kind), backhoe);
        }
    }

    #[test]
    fn test_time_slots() {
        assert_eq!(TIME_SLOTS.len(), 9);
        assert!(is_time_slot("12:00 PM"));
        assert!(!is_time_slot("06:00 PM"));
        assert!(!is_time_slot(""));
    }

    #[test]
    fn test_requests_are_pending() {
        let requests = booking_requests();
        assert_eq!(requests.len(), 2);
        assert!(requests.iter().all(|r| r.status == RequestStatus::Pending));
    }
}
