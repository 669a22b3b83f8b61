// src/config.rs
// Environment-based configuration - single source of truth for all env vars

use crate::report::DEFAULT_GAUGE_WIDTH;
use tracing::{debug, warn};

/// Environment configuration - all env vars in one place
#[derive(Debug, Clone)]
pub struct EnvConfig {
    /// Default reference document spec, path or URL (SIMCHECK_REFERENCE)
    pub reference: Option<String>,
    /// Gauge width in cells (SIMCHECK_GAUGE_WIDTH)
    pub gauge_width: usize,
}

impl EnvConfig {
    /// Load all environment configuration (call once at startup)
    pub fn load() -> Self {
        let reference = read_var("SIMCHECK_REFERENCE");

        let gauge_width = read_var("SIMCHECK_GAUGE_WIDTH")
            .and_then(|w| match w.parse::<usize>() {
                Ok(n) if n > 0 => Some(n),
                _ => {
                    warn!(value = w.as_str(), "Invalid SIMCHECK_GAUGE_WIDTH, using default");
                    None
                }
            })
            .unwrap_or(DEFAULT_GAUGE_WIDTH);

        if let Some(ref r) = reference {
            debug!(reference = r.as_str(), "Default reference configured");
        }

        Self {
            reference,
            gauge_width,
        }
    }

    /// Validate the configuration, collecting human-readable warnings
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if self.reference.is_none() {
            warnings.push(
                "No default reference configured. Set SIMCHECK_REFERENCE or pass --reference."
                    .to_string(),
            );
        }

        if self.gauge_width > 200 {
            warnings.push(format!(
                "Gauge width {} is wider than most terminals",
                self.gauge_width
            ));
        }

        warnings
    }
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            reference: None,
            gauge_width: DEFAULT_GAUGE_WIDTH,
        }
    }
}

/// Read a single env var, filtering empty values
fn read_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
