//! Frontend Models
//!
//! Records passed between pages as navigation payloads.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Service categories offered on the marketplace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceKind {
    Backhoe,
    Crane,
    Towing,
}

impl ServiceKind {
    pub const ALL: [ServiceKind; 3] = [ServiceKind::Backhoe, ServiceKind::Crane, ServiceKind::Towing];

    /// Id used in route paths and form values
    pub fn id(self) -> &'static str {
        match self {
            ServiceKind::Backhoe => "backhoe",
            ServiceKind::Crane => "crane",
            ServiceKind::Towing => "towing",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ServiceKind::Backhoe => "Backhoe Loader",
            ServiceKind::Crane => "Crane Services",
            ServiceKind::Towing => "Towing Vehicle",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ServiceKind::Backhoe => "Professional excavation and construction services",
            ServiceKind::Crane => "Heavy lifting and construction support",
            ServiceKind::Towing => "24/7 vehicle recovery and towing services",
        }
    }

    /// Advertised number of providers on the home page
    pub fn provider_count(self) -> u32 {
        match self {
            ServiceKind::Backhoe => 8,
            ServiceKind::Crane => 5,
            ServiceKind::Towing => 12,
        }
    }

    pub fn image(self) -> &'static str {
        match self {
            ServiceKind::Backhoe => "/public/backhoe-loader.jpg",
            ServiceKind::Crane => "/public/crane.jpg",
            ServiceKind::Towing => "/public/towing-vehicle.jpg",
        }
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ServiceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ServiceKind::ALL
            .into_iter()
            .find(|kind| kind.id() == s)
            .ok_or_else(|| format!("unknown service: {}", s))
    }
}

/// Customer details captured at login
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerData {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// When a provider can take the job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Availability {
    Now,
    Today,
    Tomorrow,
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Availability::Now => f.write_str("Available Now"),
            Availability::Today => f.write_str("Available Today"),
            Availability::Tomorrow => f.write_str("Available Tomorrow"),
        }
    }
}

/// Price band in whole rupees
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: u32,
    pub max: u32,
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}",
            crate::display::format_rupees(self.min),
            crate::display::format_rupees(self.max)
        )
    }
}

/// Listed service provider (static mock data)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provider {
    pub id: u32,
    pub name: String,
    pub city: String,
    pub phone: String,
    pub rating: f32,
    pub experience_years: u8,
    pub availability: Availability,
    pub price_range: PriceRange,
}

impl Provider {
    pub fn experience_label(&self) -> String {
        format!("{}+ years", self.experience_years)
    }
}

/// Result of a confirmed booking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingDetails {
    pub date: NaiveDate,
    pub time: String,
    pub booking_id: String,
}

impl BookingDetails {
    /// Build the details, deriving the id from a unix timestamp in milliseconds
    pub fn new(date: NaiveDate, time: impl Into<String>, timestamp_millis: i64) -> Self {
        Self {
            date,
            time: time.into(),
            booking_id: format!("BOOK-{}", timestamp_millis),
        }
    }
}

/// Provider details captured at registration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderData {
    pub name: String,
    pub phone: String,
    pub city: String,
    pub service_type: ServiceKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestStatus {
    Pending,
}

impl RequestStatus {
    pub fn label(self) -> &'static str {
        match self {
            RequestStatus::Pending => "Pending Response",
        }
    }
}

/// Incoming request shown on the provider dashboard
#[derive(Debug, Clone, PartialEq)]
pub struct BookingRequest {
    pub id: u32,
    pub customer_name: &'static str,
    pub customer_phone: &'static str,
    pub service: ServiceKind,
    pub date: NaiveDate,
    pub time: &'static str,
    pub status: RequestStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_kind_ids_parse_back() {
        for kind in ServiceKind::ALL {
            assert_eq!(kind.id().parse::<ServiceKind>(), Ok(kind));
        }
        assert!("bulldozer".parse::<ServiceKind>().is_err());
        assert!("Crane".parse::<ServiceKind>().is_err());
    }

    #[test]
    fn test_booking_id_is_timestamp_derived() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 20).unwrap();
        let details = BookingDetails::new(date, "09:00 AM", 1_760_000_000_123);
        assert_eq!(details.booking_id, "BOOK-1760000000123");
        assert_eq!(details.time, "09:00 AM");
    }

    #[test]
    fn test_provider_labels() {
        let range = PriceRange { min: 2_000, max: 5_000 };
        assert_eq!(range.to_string(), "₹2,000 - ₹5,000");
        assert_eq!(Availability::Now.to_string(), "Available Now");
        assert_eq!(RequestStatus::Pending.label(), "Pending Response");
    }
}
