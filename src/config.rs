//! Application Configuration
//!
//! Read from an inline JSON `<script id="app-config">` in `index.html`.
//! Every key is optional.

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::forms;

pub const CONFIG_ELEMENT_ID: &str = "app-config";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    pub brand: String,
    pub demo_otp: String,
    pub show_demo_otp: bool,
    pub otp_send_delay_ms: u32,
    pub otp_verify_delay_ms: u32,
    pub booking_delay_ms: u32,
    pub registration_delay_ms: u32,
    pub toast_duration_ms: u32,
    pub toast_limit: usize,
    pub log_level: String,
    pub log_capacity: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            brand: "TOWHOECR".to_string(),
            demo_otp: "123456".to_string(),
            show_demo_otp: true,
            otp_send_delay_ms: 1500,
            otp_verify_delay_ms: 1500,
            booking_delay_ms: 2000,
            registration_delay_ms: 1500,
            toast_duration_ms: 4000,
            toast_limit: 1,
            log_level: "info".to_string(),
            log_capacity: 200,
        }
    }
}

impl AppConfig {
    pub fn from_json(raw: &str) -> Result<Self, String> {
        let config: AppConfig = serde_json::from_str(raw).map_err(|e| e.to_string())?;
        if !forms::is_valid_otp_format(&config.demo_otp) {
            return Err(format!(
                "demoOtp must be {} ASCII digits, got {:?}",
                forms::OTP_LENGTH,
                config.demo_otp
            ));
        }
        Ok(config)
    }

    /// Unknown level names fall back to `Info`
    pub fn log_level(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }

    /// Load from the page. Returns the config plus a warning to log once
    /// the logger is up.
    pub fn load() -> (Self, Option<String>) {
        match read_config_element() {
            None => (Self::default(), None),
            Some(raw) if raw.trim().is_empty() => (Self::default(), None),
            Some(raw) => match Self::from_json(&raw) {
                Ok(config) => (config, None),
                Err(e) => (Self::default(), Some(format!("Ignoring #{}: {}", CONFIG_ELEMENT_ID, e))),
            },
        }
    }
}

fn read_config_element() -> Option<String> {
    web_sys::window()?
        .document()?
        .get_element_by_id(CONFIG_ELEMENT_ID)?
        .text_content()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_gives_defaults() {
        let config = AppConfig::from_json("{}").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.demo_otp, "123456");
        assert_eq!(config.booking_delay_ms, 2000);
    }

    #[test]
    fn test_partial_override() {
        let config = AppConfig::from_json(r#"{"bookingDelayMs": 10, "toastLimit": 3, "logLevel": "debug"}"#).unwrap();
        assert_eq!(config.booking_delay_ms, 10);
        assert_eq!(config.toast_limit, 3);
        assert_eq!(config.otp_verify_delay_ms, 1500);
        assert_eq!(config.log_level(), LevelFilter::Debug);
    }

    #[test]
    fn test_bad_demo_otp_rejected() {
        assert!(AppConfig::from_json(r#"{"demoOtp": "12345"}"#).is_err());
        assert!(AppConfig::from_json(r#"{"demoOtp": "abcdef"}"#).is_err());
        assert!(AppConfig::from_json(r#"{"demoOtp": "654321"}"#).is_ok());
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(AppConfig::from_json("{brand:").is_err());
    }

    #[test]
    fn test_unknown_log_level_falls_back() {
        let config = AppConfig { log_level: "loud".into(), ..AppConfig::default() };
        assert_eq!(config.log_level(), LevelFilter::Info);
    }
}
