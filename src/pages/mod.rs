//! Pages
//!
//! One component per route.

mod role_selection;
mod customer_login;
mod otp_verification;
mod customer_home;
mod provider_listing;
mod booking_page;
mod booking_success;
mod provider_register;
mod provider_dashboard;
mod not_found;

pub use role_selection::RoleSelection;
pub use customer_login::CustomerLogin;
pub use otp_verification::OtpVerification;
pub use customer_home::CustomerHome;
pub use provider_listing::ProviderListing;
pub use booking_page::BookingPage;
pub use booking_success::BookingSuccess;
pub use provider_register::ProviderRegister;
pub use provider_dashboard::ProviderDashboard;
pub use not_found::NotFound;
