use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::core::constants::{status_labels, strategies};
use crate::core::error::SitePulseError;

/// Outcome of probing a single target.
///
/// Created once per completed probe and never mutated afterwards.
/// `reachable` is the only field that decides whether a target is up;
/// `status_code` and `error` are carried for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeResult {
    /// The URL that was probed
    pub url: String,
    /// Whether any response was obtained
    pub reachable: bool,
    /// Time from issuing the request until the response headers arrived or the request failed
    #[serde(rename = "elapsed_ms", serialize_with = "serialize_millis")]
    pub elapsed: Duration,
    /// HTTP status of the response, if one was obtained
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    /// Transport error text, if the request failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ProbeResult {
    /// Create a result for a target that answered.
    pub fn up(url: impl Into<String>, elapsed: Duration, status_code: u16) -> Self {
        Self {
            url: url.into(),
            reachable: true,
            elapsed,
            status_code: Some(status_code),
            error: None,
        }
    }

    /// Create a result for a target that could not be reached.
    pub fn down(url: impl Into<String>, elapsed: Duration, error: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            reachable: false,
            elapsed,
            status_code: None,
            error: Some(error.into()),
        }
    }

    /// Label shown for this result, `UP` or `DOWN`.
    pub fn status_label(&self) -> &'static str {
        if self.reachable {
            status_labels::UP
        } else {
            status_labels::DOWN
        }
    }
}

impl fmt::Display for ProbeResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} ({}ms)",
            self.status_label(),
            self.url,
            self.elapsed.as_millis()
        )
    }
}

/// How the dispatcher drives probes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// One probe at a time, results in input order
    Sequential,
    /// One task per target, results in completion order
    #[default]
    Concurrent,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Sequential => write!(f, "{}", strategies::SEQUENTIAL),
            Strategy::Concurrent => write!(f, "{}", strategies::CONCURRENT),
        }
    }
}

impl FromStr for Strategy {
    type Err = SitePulseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            strategies::SEQUENTIAL => Ok(Strategy::Sequential),
            strategies::CONCURRENT => Ok(Strategy::Concurrent),
            other => Err(SitePulseError::Config(format!(
                "Invalid strategy '{other}'. Expected one of: {}.",
                strategies::ALL.join(", ")
            ))),
        }
    }
}

/// Summary of one run. Recomputed for every run and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub results: Vec<ProbeResult>,
    pub total_count: usize,
    pub success_count: usize,
    pub failure_count: usize,
    /// Mean probe time; zero for an empty run
    #[serde(rename = "average_elapsed_ms", serialize_with = "serialize_millis")]
    pub average_elapsed: Duration,
    #[serde(rename = "wall_clock_elapsed_ms", serialize_with = "serialize_millis")]
    pub wall_clock_elapsed: Duration,
}

impl Report {
    /// Percentage of reachable targets. An empty report counts as fully reachable.
    pub fn success_rate(&self) -> f64 {
        if self.total_count == 0 {
            100.0
        } else {
            self.success_count as f64 / self.total_count as f64 * 100.0
        }
    }

    pub fn is_all_reachable(&self) -> bool {
        self.failure_count == 0
    }
}

fn serialize_millis<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(duration.as_nanos() as f64 / 1_000_000.0)
}
