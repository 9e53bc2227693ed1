use serde::{Deserialize, Serialize};

use crate::core::errors::{Result, SeqflowError};

/// Configuration for bounded-parallel iteration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParallelConfig {
    /// Maximum number of element actions in flight at once (default: 3)
    #[serde(default = "default_max_parallel")]
    pub max_parallel: usize,
}

fn default_max_parallel() -> usize {
    3
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            max_parallel: default_max_parallel(),
        }
    }
}

impl ParallelConfig {
    pub fn with_max_parallel(max_parallel: usize) -> Self {
        Self { max_parallel }
    }

    /// Validates configuration values
    pub fn validate(&self) -> Result<()> {
        if self.max_parallel == 0 {
            return Err(SeqflowError::configuration_field(
                "max_parallel must be greater than 0",
                "max_parallel",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_is_valid() {
        let config = ParallelConfig::default();
        assert_eq!(config.max_parallel, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_parallelism_is_rejected() {
        let config = ParallelConfig::with_max_parallel(0);
        let err = config.validate().unwrap_err();
        assert_eq!(err.category(), "configuration");
    }

    #[test]
    fn test_missing_field_deserializes_to_default() {
        let config: ParallelConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.max_parallel, 3);
    }
}
