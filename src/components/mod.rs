//! UI Components
//!
//! Reusable Leptos components shared by the pages.

mod toaster;
mod page_header;
mod detail_row;
mod star_rating;
mod otp_input;

pub use toaster::Toaster;
pub use page_header::{AccountHeader, BackHeader, BackLink};
pub use detail_row::DetailRow;
pub use star_rating::StarRating;
pub use otp_input::OtpInput;
