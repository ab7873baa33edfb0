use std::time::Duration;

/// Default endpoint of the statistics web service.
pub const DEFAULT_BASE_URL: &str = "https://si3.bcentral.cl/SieteRestWS/SieteRestWS.ashx";

/// Connection settings for [`BCentralClient`](crate::BCentralClient).
#[derive(Debug, Clone)]
pub struct BCentralConfig {
    pub base_url: String,
    pub user: Option<String>,
    pub password: Option<String>,
    pub timeout: Duration,
}

impl Default for BCentralConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user: None,
            password: None,
            timeout: Duration::from_secs(30),
        }
    }
}

impl BCentralConfig {
    pub fn with_credentials(mut self, user: impl Into<String>, password: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self.password = Some(password.into());
        self
    }

    /// Both user and password are set and non-empty.
    pub fn has_credentials(&self) -> bool {
        let set = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.is_empty());
        set(&self.user) && set(&self.password)
    }
}
