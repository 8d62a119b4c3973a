//! Simulation configuration with documented constants
//!
//! The tuning knobs are collected here with explanations of their purpose.
//! Rule sets and configuration are fixed at startup; there is no file
//! loading layer.

/// Configuration for world initialization and rendering
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    /// Default grid width in slots
    pub default_width: usize,

    /// Default grid height in slots
    pub default_height: usize,

    /// Number of placement attempts for randomly scattered singleton cells
    ///
    /// Each attempt picks a uniform random slot; attempts that land on an
    /// occupied slot are skipped, so the initial population can be slightly
    /// below this count plus the seed structure.
    pub scatter_count: usize,

    /// Grid column where the fixed seed structure is placed
    ///
    /// The seed structure is a 5-cell vertical strip centered on the grid's
    /// mid row. Initialization fails if the grid cannot fit it.
    pub seed_column: usize,

    /// Minimum render scale (pixels per slot) at which the mnemonic+state
    /// label is drawn on top of the cell color
    pub label_min_scale: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            default_width: 50,
            default_height: 50,
            scatter_count: 200,
            seed_column: 10,
            label_min_scale: 12.0,
        }
    }
}

impl SimulationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.default_width == 0 || self.default_height == 0 {
            return Err("grid dimensions must be non-zero".into());
        }

        if self.seed_column >= self.default_width {
            return Err(format!(
                "seed_column ({}) must be < default_width ({})",
                self.seed_column, self.default_width
            ));
        }

        if self.label_min_scale <= 0.0 {
            return Err("label_min_scale must be positive".into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(SimulationConfig::default().validate().is_ok());
    }

    #[test]
    fn test_seed_column_must_fit() {
        let mut config = SimulationConfig::default();
        config.seed_column = config.default_width;
        assert!(config.validate().is_err());
    }
}
