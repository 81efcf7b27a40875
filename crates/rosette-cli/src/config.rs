//! Runtime configuration for the `rosette` binary.

/// Default number of rose petals.
const DEFAULT_PETALS: usize = 20;
/// Default working-resolution pixel budget.
const DEFAULT_MAX_PIXELS: u32 = 500_000;

/// Analysis settings. Environment variables provide the defaults and
/// command-line flags override them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Number of hue petals in the rose (`ROSETTE_PETALS`).
    pub petals: usize,
    /// Images larger than this many pixels are downscaled before analysis
    /// (`ROSETTE_MAX_PIXELS`).
    pub max_pixels: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            petals: env_or("ROSETTE_PETALS", DEFAULT_PETALS),
            max_pixels: env_or("ROSETTE_MAX_PIXELS", DEFAULT_MAX_PIXELS),
        }
    }
}

impl AppConfig {
    /// Apply command-line overrides on top of the environment defaults.
    pub fn with_overrides(mut self, petals: Option<usize>, max_pixels: Option<u32>) -> Self {
        if let Some(petals) = petals {
            self.petals = petals;
        }
        if let Some(max_pixels) = max_pixels {
            self.max_pixels = max_pixels;
        }
        self
    }

    /// Reject settings the pipeline cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.petals == 0 {
            return Err(ConfigError::ZeroPetals);
        }
        if self.max_pixels == 0 {
            return Err(ConfigError::ZeroPixelBudget);
        }
        Ok(())
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

/// Invalid analysis settings.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("petal count must be at least 1")]
    ZeroPetals,
    #[error("pixel budget must be at least 1")]
    ZeroPixelBudget,
}
