// Local `trunk serve` runs on its own port, so point at the backend directly.
#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3000"
}

// In production the backend serves the app, so API paths are same-origin.
#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""
}

pub fn api_url(path: &str) -> String {
    format!("{}{}", get_backend_url(), path)
}

pub const STUDIO_NAME: &str = "Sarvian Design Group";
pub const STUDIO_PHONE_DISPLAY: &str = "954-444-4803";
pub const STUDIO_PHONE_TEL: &str = "tel:+19544444803";
