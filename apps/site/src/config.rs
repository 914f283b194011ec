use std::time::Duration;

use anyhow::{bail, Context, Result};

const DEFAULT_API_BASE_URL: &str = "https://edu-aura-backend-t1du.vercel.app/api";

/// How a completed admission form leaves the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdmissionsDelivery {
    /// Hand the application to the admissions desk as a prefilled WhatsApp message.
    WhatsApp,
    /// POST the application to `/admissions/apply`.
    Api,
}

impl AdmissionsDelivery {
    fn parse(raw: &str) -> Result<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "whatsapp" | "wa" => Ok(Self::WhatsApp),
            "api" => Ok(Self::Api),
            other => bail!("ADMISSIONS_DELIVERY must be 'whatsapp' or 'api', got '{other}'"),
        }
    }
}

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values abort startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub api_timeout: Duration,
    pub whatsapp_number: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub admissions_delivery: AdmissionsDelivery,
    pub chat_reply_delay: Duration,
    pub cookie_secure: bool,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            api_base_url: env_or("API_BASE_URL", DEFAULT_API_BASE_URL),
            api_timeout: Duration::from_secs(
                env_or("API_TIMEOUT_SECS", "30")
                    .parse::<u64>()
                    .context("API_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
            whatsapp_number: env_or("WHATSAPP_NUMBER", "918830772432"),
            contact_email: env_or("CONTACT_EMAIL", "principal@ssbesitm.org"),
            contact_phone: env_or("CONTACT_PHONE", "+91 88307 72432"),
            admissions_delivery: AdmissionsDelivery::parse(&env_or(
                "ADMISSIONS_DELIVERY",
                "whatsapp",
            ))?,
            chat_reply_delay: Duration::from_millis(
                env_or("CHAT_REPLY_DELAY_MS", "1200")
                    .parse::<u64>()
                    .context("CHAT_REPLY_DELAY_MS must be a whole number of milliseconds")?,
            ),
            cookie_secure: env_bool("COOKIE_SECURE").unwrap_or(false),
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }

    /// `tel:` target derived from the display phone number.
    pub fn phone_href(&self) -> String {
        let digits: String = self
            .contact_phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();
        format!("tel:{digits}")
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}

#[cfg(test)]
impl Config {
    /// Defaults with no environment lookups, for handler tests.
    pub fn for_tests() -> Self {
        Config {
            api_base_url: "http://127.0.0.1:9/api".to_string(),
            api_timeout: Duration::from_secs(5),
            whatsapp_number: "918830772432".to_string(),
            contact_email: "principal@ssbesitm.org".to_string(),
            contact_phone: "+91 88307 72432".to_string(),
            admissions_delivery: AdmissionsDelivery::WhatsApp,
            chat_reply_delay: Duration::ZERO,
            cookie_secure: false,
            port: 0,
            rust_log: "info".to_string(),
        }
    }
}
