//! Periodogram configuration and named parameter registry
//!
//! Parameters are registered with string defaults and a dynamic flag. Dynamic
//! parameters may be changed between cycles through a [`ConfigHandle`]; the
//! processor swaps the staged snapshot in before the next cycle starts.

use crate::error::{PeriodogramError, Result};
use std::sync::{Arc, Mutex};

/// Description of a named configuration parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub default: &'static str,
    pub dynamic: bool,
}

pub const NUMBER_OF_COMPLEX_SAMPLES: &str = "number_of_complex_samples";
pub const BLOCKSIZE: &str = "blocksize";
pub const SHIFT: &str = "shift";
pub const WINDOW: &str = "window";

/// All parameters understood by the periodogram
pub const PARAMETERS: &[ParameterSpec] = &[
    ParameterSpec {
        name: NUMBER_OF_COMPLEX_SAMPLES,
        description: "incoming complex samples",
        default: "16384",
        dynamic: true,
    },
    ParameterSpec {
        name: BLOCKSIZE,
        description: "output block size by periodogram",
        default: "1024",
        dynamic: true,
    },
    ParameterSpec {
        name: SHIFT,
        description: "if fftshift is requested, 1 means yes",
        default: "1",
        dynamic: false,
    },
    ParameterSpec {
        name: WINDOW,
        description: "if hann window is applied, 1 means yes",
        default: "1",
        dynamic: false,
    },
];

/// Look up a parameter by name
pub fn parameter_spec(name: &str) -> Option<&'static ParameterSpec> {
    PARAMETERS.iter().find(|p| p.name == name)
}

/// Periodogram configuration snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodogramConfig {
    /// Expected number of complex samples per input block
    pub number_of_complex_samples: usize,

    /// FFT length and output block length (power of two, at least 2)
    pub blocksize: usize,

    /// Move the zero-frequency bin to the centre of the output
    pub shift: bool,

    /// Apply a Hann window to every segment before transforming
    pub window: bool,
}

impl Default for PeriodogramConfig {
    fn default() -> Self {
        Self {
            number_of_complex_samples: 16384,
            blocksize: 1024,
            shift: true,
            window: true,
        }
    }
}

impl PeriodogramConfig {
    /// Build a validated configuration from `(name, value)` pairs
    ///
    /// Parameters not mentioned keep their registered defaults.
    pub fn from_parameters<I, K, V>(parameters: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut config = Self::default();
        for (name, value) in parameters {
            config.set_parameter(name.as_ref(), value.as_ref())?;
        }
        config.validate()?;
        Ok(config)
    }

    /// Set a single parameter from its string form
    ///
    /// Does not validate the resulting configuration.
    pub fn set_parameter(&mut self, name: &str, value: &str) -> Result<()> {
        let invalid = || PeriodogramError::InvalidParameterValue {
            name: name.to_string(),
            value: value.to_string(),
        };

        match name {
            NUMBER_OF_COMPLEX_SAMPLES => {
                self.number_of_complex_samples = value.trim().parse().map_err(|_| invalid())?;
            }
            BLOCKSIZE => {
                self.blocksize = value.trim().parse().map_err(|_| invalid())?;
            }
            SHIFT => {
                self.shift = parse_flag(value).ok_or_else(invalid)?;
            }
            WINDOW => {
                self.window = parse_flag(value).ok_or_else(invalid)?;
            }
            _ => return Err(PeriodogramError::UnknownParameter(name.to_string())),
        }
        Ok(())
    }

    /// Check the invariants the transform and averager rely on
    pub fn validate(&self) -> Result<()> {
        if self.blocksize < 2 || !self.blocksize.is_power_of_two() {
            return Err(PeriodogramError::InvalidConfiguration(format!(
                "blocksize must be a power of two of at least 2, got {}",
                self.blocksize
            )));
        }
        if self.number_of_complex_samples == 0 {
            return Err(PeriodogramError::InvalidConfiguration(
                "number_of_complex_samples must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Accepts `1`/`0` as the registry defaults use, plus `true`/`false`
fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}

#[derive(Debug)]
struct SharedConfig {
    active: Arc<PeriodogramConfig>,
    staged: Option<PeriodogramConfig>,
}

/// Cloneable handle for staging configuration updates between cycles
#[derive(Debug, Clone)]
pub struct ConfigHandle {
    shared: Arc<Mutex<SharedConfig>>,
}

impl ConfigHandle {
    /// Create a handle around a validated initial configuration
    pub fn new(config: PeriodogramConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            shared: Arc::new(Mutex::new(SharedConfig {
                active: Arc::new(config),
                staged: None,
            })),
        })
    }

    /// Snapshot currently used by the processor
    pub fn active(&self) -> Arc<PeriodogramConfig> {
        Arc::clone(&self.lock().active)
    }

    /// Stage a dynamic parameter change for the next cycle
    ///
    /// Changes accumulate on top of any configuration already staged.
    pub fn update_parameter(&self, name: &str, value: &str) -> Result<()> {
        let spec = parameter_spec(name)
            .ok_or_else(|| PeriodogramError::UnknownParameter(name.to_string()))?;
        if !spec.dynamic {
            return Err(PeriodogramError::StaticParameter(name.to_string()));
        }

        let mut guard = self.lock();
        let mut next = guard
            .staged
            .clone()
            .unwrap_or_else(|| (*guard.active).clone());
        next.set_parameter(name, value)?;
        next.validate()?;
        guard.staged = Some(next);
        Ok(())
    }

    /// Swap in the staged configuration, if any
    ///
    /// Returns the new snapshot when a swap happened.
    pub fn commit_staged(&self) -> Option<Arc<PeriodogramConfig>> {
        let mut guard = self.lock();
        let staged = guard.staged.take()?;
        let snapshot = Arc::new(staged);
        guard.active = Arc::clone(&snapshot);
        Some(snapshot)
    }

    /// Check whether an update is waiting to be swapped in
    pub fn has_staged(&self) -> bool {
        self.lock().staged.is_some()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, SharedConfig> {
        self.shared
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
