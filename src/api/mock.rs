use std::collections::HashSet;
use std::time::Duration;

use async_trait::async_trait;

use super::{ApiError, LocationSource, NameValidator};
use crate::config::Config;
use crate::model::Location;

/// In-process stand-in for the remote location and name services.
///
/// Every call waits for the configured latency before answering, so the
/// UI sees the same asynchronous behaviour a real network would give it.
#[derive(Debug, Clone)]
pub struct MockApi {
    locations: Vec<Location>,
    taken_names: HashSet<String>,
    latency: Duration,
    offline: bool,
}

impl MockApi {
    pub fn new(
        locations: Vec<Location>,
        taken_names: impl IntoIterator<Item = String>,
        latency: Duration,
    ) -> Self {
        Self {
            locations,
            taken_names: taken_names.into_iter().collect(),
            latency,
            offline: false,
        }
    }

    /// Builds a mock from the user's configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.locations.clone(),
            config.taken_names.iter().cloned(),
            config.api_latency(),
        )
    }

    /// A mock whose every call fails with [`ApiError::Unavailable`].
    pub fn failing() -> Self {
        Self {
            offline: true,
            ..Self::new(Vec::new(), Vec::new(), Duration::ZERO)
        }
    }

    async fn round_trip(&self) -> Result<(), ApiError> {
        tokio::time::sleep(self.latency).await;
        if self.offline {
            return Err(ApiError::Unavailable("mock api is offline".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl LocationSource for MockApi {
    async fn fetch_locations(&self) -> Result<Vec<Location>, ApiError> {
        self.round_trip().await?;
        tracing::debug!(count = self.locations.len(), "mock api served locations");
        Ok(self.locations.clone())
    }
}

#[async_trait]
impl NameValidator for MockApi {
    async fn check_name_valid(&self, candidate: &str) -> Result<bool, ApiError> {
        self.round_trip().await?;
        Ok(!self.taken_names.contains(candidate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api() -> MockApi {
        MockApi::new(
            vec!["Canada".into(), "USA".into()],
            vec!["Alice".to_string()],
            Duration::from_millis(100),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn serves_locations_in_order() {
        let locations = api().fetch_locations().await.unwrap();
        assert_eq!(locations, vec![Location::new("Canada"), Location::new("USA")]);
    }

    #[tokio::test(start_paused = true)]
    async fn taken_name_is_invalid() {
        assert_eq!(api().check_name_valid("Alice").await, Ok(false));
    }

    #[tokio::test(start_paused = true)]
    async fn other_names_are_valid() {
        assert_eq!(api().check_name_valid("Bob").await, Ok(true));
        assert_eq!(api().check_name_valid("alice").await, Ok(true));
    }

    #[tokio::test(start_paused = true)]
    async fn calls_wait_for_latency() {
        let start = tokio::time::Instant::now();
        api().check_name_valid("Bob").await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(100));
    }

    #[tokio::test]
    async fn failing_mock_reports_unavailable() {
        let api = MockApi::failing();
        assert!(matches!(
            api.fetch_locations().await,
            Err(ApiError::Unavailable(_))
        ));
        assert!(matches!(
            api.check_name_valid("Bob").await,
            Err(ApiError::Unavailable(_))
        ));
    }

    #[test]
    fn from_config_uses_configured_lists() {
        let config = Config::default();
        let api = MockApi::from_config(&config);
        assert_eq!(api.locations, config.locations);
        assert!(api.taken_names.contains("invalid name"));
        assert_eq!(api.latency, config.api_latency());
    }
}
