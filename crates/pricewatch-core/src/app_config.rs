use std::path::PathBuf;

#[derive(Clone)]
pub struct AppConfig {
    /// Scraping-gateway API key. When unset, pages are fetched directly.
    pub scraper_api_key: Option<String>,
    /// Routing toggle: when false, fetch directly even if a key is set.
    pub use_scraper_api: bool,
    pub scraper_api_url: String,
    /// Cost ceiling parameter passed through to the gateway.
    pub scraper_api_max_cost: String,
    /// Base URL of the downstream price-tracking API.
    pub backend_api_url: String,
    pub urls_path: PathBuf,
    pub log_level: String,
    pub fetch_timeout_secs: u64,
    pub send_timeout_secs: u64,
    /// Fixed politeness delay between sequential fetches.
    pub pacing_secs: u64,
    pub user_agent: String,
}

impl AppConfig {
    /// Whether page fetches are routed through the scraping gateway.
    #[must_use]
    pub fn proxy_enabled(&self) -> bool {
        self.use_scraper_api && self.scraper_api_key.is_some()
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field(
                "scraper_api_key",
                &self.scraper_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("use_scraper_api", &self.use_scraper_api)
            .field("scraper_api_url", &self.scraper_api_url)
            .field("scraper_api_max_cost", &self.scraper_api_max_cost)
            .field("backend_api_url", &self.backend_api_url)
            .field("urls_path", &self.urls_path)
            .field("log_level", &self.log_level)
            .field("fetch_timeout_secs", &self.fetch_timeout_secs)
            .field("send_timeout_secs", &self.send_timeout_secs)
            .field("pacing_secs", &self.pacing_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
