//! OSRM HTTP distance service.

use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, warn};

use super::DistanceService;
use crate::error::{CvrpError, CvrpResult};
use crate::models::Point;

/// Connection settings for an OSRM `route` endpoint.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use cvrp_swarm::distance::OsrmConfig;
///
/// let config = OsrmConfig::default()
///     .with_base_url("http://osrm.internal:5000")
///     .with_timeout(Duration::from_secs(2))
///     .with_max_retries(1);
/// assert_eq!(config.profile, "drive");
/// ```
#[derive(Debug, Clone)]
pub struct OsrmConfig {
    /// Server root, without trailing slash.
    pub base_url: String,
    /// Routing profile segment of the URL.
    pub profile: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Extra attempts after a transport error or a 5xx response.
    pub max_retries: usize,
}

impl Default for OsrmConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".into(),
            profile: "drive".into(),
            timeout: Duration::from_secs(10),
            max_retries: 0,
        }
    }
}

impl OsrmConfig {
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = profile.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_retries(mut self, n: usize) -> Self {
        self.max_retries = n;
        self
    }

    /// Route URL for a single directed leg. OSRM expects `lng,lat` order.
    pub fn route_url(&self, origin: &Point, destination: &Point) -> String {
        format!(
            "{}/route/v1/{}/{},{};{},{}",
            self.base_url, self.profile, origin.lng, origin.lat, destination.lng, destination.lat
        )
    }
}

#[derive(Debug, Deserialize)]
struct RouteResponse {
    routes: Vec<RouteSummary>,
}

#[derive(Debug, Deserialize)]
struct RouteSummary {
    distance: f64,
}

fn parse_route_distance(body: &[u8]) -> Option<f64> {
    let response: RouteResponse = serde_json::from_slice(body).ok()?;
    response.routes.first().map(|r| r.distance)
}

/// Blocking OSRM client implementing [`DistanceService`].
///
/// Non-2xx responses, transport failures and unparseable bodies are logged
/// and reported as `0.0`.
pub struct OsrmClient {
    config: OsrmConfig,
    client: reqwest::blocking::Client,
}

impl OsrmClient {
    /// Builds a client with the configured timeout.
    pub fn new(config: OsrmConfig) -> CvrpResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| CvrpError::InvalidConfig(format!("cannot build OSRM client: {e}")))?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &OsrmConfig {
        &self.config
    }

    fn query(&self, url: &str) -> f64 {
        let mut attempt = 0;
        loop {
            let response = self
                .client
                .get(url)
                .query(&[
                    ("alternatives", "false"),
                    ("steps", "false"),
                    ("overview", "false"),
                ])
                .send();

            let retry_left = attempt < self.config.max_retries;
            attempt += 1;

            match response {
                Err(e) if retry_left => {
                    debug!(url, attempt, error = %e, "retrying OSRM request");
                }
                Err(e) => {
                    warn!(url, error = %e, "OSRM request failed");
                    return 0.0;
                }
                Ok(resp) if resp.status().is_server_error() && retry_left => {
                    debug!(url, attempt, status = %resp.status(), "retrying OSRM request");
                }
                Ok(resp) if resp.status().is_success() => {
                    let parsed = resp.bytes().ok().and_then(|b| parse_route_distance(&b));
                    return match parsed {
                        Some(d) => d,
                        None => {
                            warn!(url, "unreadable OSRM response");
                            0.0
                        }
                    };
                }
                Ok(resp) => {
                    warn!(url, status = %resp.status(), "error on GET request");
                    return 0.0;
                }
            }
        }
    }
}

impl DistanceService for OsrmClient {
    fn distance(&self, origin: &Point, destination: &Point) -> f64 {
        self.query(&self.config.route_url(origin, destination))
    }
}
