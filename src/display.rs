//! Display Helpers
//!
//! Formatting shared by the pages: dates, money, ratings and badges.

use chrono::{Datelike, NaiveDate};

use crate::models::Availability;

/// Badge colour classes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeVariant {
    Success,
    Warning,
    Secondary,
}

impl BadgeVariant {
    pub fn for_availability(availability: Availability) -> Self {
        match availability {
            Availability::Now => BadgeVariant::Success,
            Availability::Today => BadgeVariant::Warning,
            Availability::Tomorrow => BadgeVariant::Secondary,
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            BadgeVariant::Success => "badge badge-success",
            BadgeVariant::Warning => "badge badge-warning",
            BadgeVariant::Secondary => "badge badge-secondary",
        }
    }
}

/// `Mar 15, 2024`
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%b %d, %Y").to_string()
}

/// `March 15, 2024`
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%B %d, %Y").to_string()
}

/// `March 15th, 2024`, used by the date picker
pub fn format_picker_date(date: NaiveDate) -> String {
    format!(
        "{} {}, {}",
        date.format("%B"),
        ordinal(date.day()),
        date.year()
    )
}

/// Value for `<input type="date">`
pub fn format_input_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}

/// Rupees with Indian digit grouping: `₹1,25,000`
pub fn format_rupees(amount: u32) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return format!("₹{}", digits);
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (left, right) = rest.split_at(rest.len() - 2);
        groups.push(right);
        rest = left;
    }
    groups.push(rest);
    groups.reverse();
    format!("₹{},{}", groups.join(","), tail)
}

/// Number of filled stars out of five
pub fn filled_stars(rating: f32) -> usize {
    if !rating.is_finite() || rating <= 0.0 {
        return 0;
    }
    (rating.floor() as usize).min(5)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_date_formats() {
        let d = date(2024, 3, 5);
        assert_eq!(format_short_date(d), "Mar 05, 2024");
        assert_eq!(format_long_date(d), "March 05, 2024");
        assert_eq!(format_picker_date(d), "March 5th, 2024");
        assert_eq!(format_input_date(d), "2024-03-05");
    }

    #[test]
    fn test_ordinal_suffixes() {
        let cases = [(1, "1st"), (2, "2nd"), (3, "3rd"), (4, "4th"), (11, "11th"),
            (12, "12th"), (13, "13th"), (21, "21st"), (22, "22nd"), (23, "23rd"), (31, "31st")];
        for (n, expected) in cases {
            assert_eq!(ordinal(n), expected);
        }
    }

    #[test]
    fn test_rupee_grouping() {
        assert_eq!(format_rupees(0), "₹0");
        assert_eq!(format_rupees(999), "₹999");
        assert_eq!(format_rupees(1_500), "₹1,500");
        assert_eq!(format_rupees(125_000), "₹1,25,000");
        assert_eq!(format_rupees(12_345_678), "₹1,23,45,678");
    }

    #[test]
    fn test_filled_stars() {
        assert_eq!(filled_stars(4.8), 4);
        assert_eq!(filled_stars(5.0), 5);
        assert_eq!(filled_stars(7.2), 5);
        assert_eq!(filled_stars(-1.0), 0);
        assert_eq!(filled_stars(f32::NAN), 0);
    }

    #[test]
    fn test_availability_badges() {
        assert_eq!(BadgeVariant::for_availability(Availability::Now), BadgeVariant::Success);
        assert_eq!(BadgeVariant::for_availability(Availability::Today), BadgeVariant::Warning);
        assert_eq!(BadgeVariant::for_availability(Availability::Tomorrow), BadgeVariant::Secondary);
    }
}
