use std::env;

#[derive(Clone)]
pub struct Config {
    /// Base URL of the portfolio site to scrape.
    pub site_url: String,
    /// Deployment host used for the feed's self-referencing URL; absent
    /// outside the hosting platform.
    pub deploy_host: Option<String>,
    /// HTTP listen port.
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            site_url: env::var("SITE_URL")
                .unwrap_or_else(|_| "https://jasonspielman.com".to_string()),
            deploy_host: env::var("VERCEL_URL").ok(),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
        }
    }
}
