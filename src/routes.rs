//! Client-side Routes
//!
//! Every page is a `Route` variant that owns the payload handed over by the
//! previous page. The serialized route doubles as the browser history state.

use serde::{Deserialize, Serialize};

use crate::models::{BookingDetails, CustomerData, Provider, ProviderData, ServiceKind};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum Route {
    #[default]
    RoleSelection,
    CustomerLogin,
    OtpVerification {
        customer: CustomerData,
    },
    CustomerHome {
        customer: CustomerData,
    },
    ProviderListing {
        customer: CustomerData,
        service: ServiceKind,
    },
    Booking {
        customer: CustomerData,
        service: ServiceKind,
        provider: Provider,
    },
    BookingSuccess {
        customer: CustomerData,
        service: ServiceKind,
        provider: Provider,
        booking: BookingDetails,
    },
    ProviderRegister,
    ProviderDashboard {
        provider: ProviderData,
    },
    NotFound {
        path: String,
    },
}

impl Route {
    /// URL path shown in the address bar
    pub fn path(&self) -> String {
        match self {
            Route::RoleSelection => "/".to_string(),
            Route::CustomerLogin => "/customer/login".to_string(),
            Route::OtpVerification { .. } => "/customer/verify-otp".to_string(),
            Route::CustomerHome { .. } => "/customer/home".to_string(),
            Route::ProviderListing { service, .. } => format!("/customer/providers/{}", service.id()),
            Route::Booking { .. } => "/customer/booking".to_string(),
            Route::BookingSuccess { .. } => "/customer/booking-success".to_string(),
            Route::ProviderRegister => "/provider/register".to_string(),
            Route::ProviderDashboard { .. } => "/provider/dashboard".to_string(),
            Route::NotFound { path } => path.clone(),
        }
    }

    /// Short name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Route::RoleSelection => "role_selection",
            Route::CustomerLogin => "customer_login",
            Route::OtpVerification { .. } => "otp_verification",
            Route::CustomerHome { .. } => "customer_home",
            Route::ProviderListing { .. } => "provider_listing",
            Route::Booking { .. } => "booking",
            Route::BookingSuccess { .. } => "booking_success",
            Route::ProviderRegister => "provider_register",
            Route::ProviderDashboard { .. } => "provider_dashboard",
            Route::NotFound { .. } => "not_found",
        }
    }

    /// Resolve a URL path plus optional history state into a route.
    ///
    /// State wins when its path matches the URL. Pages that need a payload
    /// fall back to role selection when no usable state is present.
    pub fn resolve(path: &str, state: Option<Route>) -> Route {
        let path = normalize_path(path);
        if let Some(route) = state {
            if route.path() == path && !matches!(route, Route::NotFound { .. }) {
                return route;
            }
        }
        match match_path(&path) {
            PathMatch::Page(route) => route,
            PathMatch::NeedsPayload => Route::RoleSelection,
            PathMatch::Unknown => Route::NotFound { path },
        }
    }
}

enum PathMatch {
    Page(Route),
    NeedsPayload,
    Unknown,
}

fn match_path(path: &str) -> PathMatch {
    match path {
        "/" => PathMatch::Page(Route::RoleSelection),
        "/customer/login" => PathMatch::Page(Route::CustomerLogin),
        "/provider/register" => PathMatch::Page(Route::ProviderRegister),
        "/customer/verify-otp"
        | "/customer/home"
        | "/customer/booking"
        | "/customer/booking-success"
        | "/provider/dashboard" => PathMatch::NeedsPayload,
        _ => match path.strip_prefix("/customer/providers/") {
            Some(id) if id.parse::<ServiceKind>().is_ok() => PathMatch::NeedsPayload,
            _ => PathMatch::Unknown,
        },
    }
}

/// Drop a trailing slash (except for the root) and make the path absolute
pub fn normalize_path(path: &str) -> String {
    let trimmed = path.trim();
    let trimmed = trimmed.trim_end_matches('/');
    if trimmed.is_empty() {
        return "/".to_string();
    }
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use chrono::NaiveDate;

    fn customer() -> CustomerData {
        CustomerData {
            name: "Asha Rao".into(),
            email: "asha@example.com".into(),
            phone: "+91 90000 00000".into(),
        }
    }

    fn all_routes() -> Vec<Route> {
        let provider = catalog::providers_for(ServiceKind::Crane).remove(0);
        let date = NaiveDate::from_ymd_opt(2026, 10, 20).unwrap();
        vec![
            Route::RoleSelection,
            Route::CustomerLogin,
            Route::OtpVerification { customer: customer() },
            Route::CustomerHome { customer: customer() },
            Route::ProviderListing { customer: customer(), service: ServiceKind::Crane },
            Route::Booking { customer: customer(), service: ServiceKind::Crane, provider: provider.clone() },
            Route::BookingSuccess {
                customer: customer(),
                service: ServiceKind::Crane,
                provider,
                booking: BookingDetails::new(date, "10:00 AM", 42),
            },
            Route::ProviderRegister,
            Route::ProviderDashboard {
                provider: ProviderData {
                    name: "Ravi".into(),
                    phone: "1".into(),
                    city: "Pune".into(),
                    service_type: ServiceKind::Towing,
                },
            },
        ]
    }

    #[test]
    fn test_route_with_matching_state_resolves_to_state() {
        for route in all_routes() {
            let resolved = Route::resolve(&route.path(), Some(route.clone()));
            assert_eq!(resolved, route);
        }
    }

    #[test]
    fn test_payload_free_paths_resolve_without_state() {
        assert_eq!(Route::resolve("/", None), Route::RoleSelection);
        assert_eq!(Route::resolve("/customer/login/", None), Route::CustomerLogin);
        assert_eq!(Route::resolve("/provider/register", None), Route::ProviderRegister);
    }

    #[test]
    fn test_payload_paths_without_state_redirect_home() {
        for path in ["/customer/verify-otp", "/customer/home", "/customer/booking",
            "/customer/booking-success", "/provider/dashboard", "/customer/providers/towing"] {
            assert_eq!(Route::resolve(path, None), Route::RoleSelection, "{}", path);
        }
    }

    #[test]
    fn test_state_for_other_path_is_ignored() {
        let state = Route::CustomerHome { customer: customer() };
        assert_eq!(Route::resolve("/customer/booking", Some(state)), Route::RoleSelection);

        let listing = Route::ProviderListing { customer: customer(), service: ServiceKind::Crane };
        assert_eq!(Route::resolve("/customer/providers/towing", Some(listing)), Route::RoleSelection);
    }

    #[test]
    fn test_unknown_paths_are_not_found() {
        assert_eq!(
            Route::resolve("/admin", None),
            Route::NotFound { path: "/admin".into() }
        );
        assert_eq!(
            Route::resolve("/customer/providers/bulldozer", None),
            Route::NotFound { path: "/customer/providers/bulldozer".into() }
        );
    }

    #[test]
    fn test_history_state_json_shape() {
        let route = Route::ProviderListing { customer: customer(), service: ServiceKind::Backhoe };
        let json = serde_json::to_value(&route).unwrap();
        assert_eq!(json["page"], "provider_listing");
        assert_eq!(json["service"], "backhoe");
        let back: Route = serde_json::from_value(json).unwrap();
        assert_eq!(back, route);
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("///"), "/");
        assert_eq!(normalize_path("customer/home/"), "/customer/home");
    }
}
