#[cfg(debug_assertions)]
pub fn get_webhook_url() -> &'static str {
    "http://localhost:5678/webhook/landing-form1" // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_webhook_url() -> &'static str {
    "https://api.rakurs.cloud/webhook/landing-form1"
}

// Drawer collapses below this width.
pub const DESKTOP_MEDIA_QUERY: &str = "(min-width: 768px)";

pub const CAPTCHA_SITE_KEY: &str = "ysc1_ByjWwwiL5Udzh4gn2NacBVdbczfudJSTcAdvb7xh23d5a2be";
pub const CAPTCHA_CONTAINER_ID: &str = "smartcaptcha-container";
