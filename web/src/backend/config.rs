pub const API_URL_VAR: &str = "HOTEL_API_URL";
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8080";

/// Where the hotel REST API lives. Read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    base_url: String,
}

impl BackendConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Reads `HOTEL_API_URL`, falling back to a local development address.
    /// Expects `.env` to have been loaded already.
    pub fn from_env() -> Self {
        match std::env::var(API_URL_VAR) {
            Ok(url) if !url.trim().is_empty() => Self::new(url),
            _ => Self::new(DEFAULT_API_URL),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_without_double_slashes() {
        let config = BackendConfig::new("https://api.hotel.test/");
        assert_eq!(
            config.endpoint("/api/bookings"),
            "https://api.hotel.test/api/bookings"
        );
        assert_eq!(
            config.endpoint("api/rooms/7"),
            "https://api.hotel.test/api/rooms/7"
        );
    }

    #[test]
    fn default_points_at_local_api() {
        assert_eq!(BackendConfig::default().base_url(), DEFAULT_API_URL);
    }
}
