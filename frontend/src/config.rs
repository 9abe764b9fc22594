use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output while running `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(debug_assertions)]
pub fn get_contact_email() -> &'static str {
    "test@salemballama.com"  // Keeps local form testing out of the real inbox
}

#[cfg(not(debug_assertions))]
pub fn get_contact_email() -> &'static str {
    "info@salemballama.com"
}

pub const CONTACT_EMAIL_DISPLAY: &str = "info@salemballama.com";
pub const CONTACT_PHONE: &str = "+971 04 441 1000";
pub const OFFICE_HOURS: &str = "Mon - Sat, 9:00 AM - 5:00 PM";
pub const OFFICE_ADDRESS: [&str; 2] = [
    "Empire Heights Tower A, Business Bay",
    "Dubai, United Arab Emirates",
];

pub const CHAIRMAN_IMAGE: &str = "/salempic.png";

/// Profit up to this amount (AED) is taxed at 0%.
pub const TAX_THRESHOLD: f64 = 375_000.0;
/// Rate applied to profit above [`TAX_THRESHOLD`].
pub const TAX_RATE: f64 = 0.09;

/// Window scroll offset (px) after which the navbar turns opaque.
pub const NAV_SCROLL_THRESHOLD: f64 = 50.0;
