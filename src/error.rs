//! Error types for marga

use thiserror::Error;

use crate::config::ConfigLoadError;

/// Result type alias
pub type Result<T> = std::result::Result<T, MargaError>;

/// Marga error types
///
/// Unknown ids and unreachable goals are not errors; they degrade to no-ops
/// and empty paths. What remains are broken invariants and configuration.
#[derive(Error, Debug)]
pub enum MargaError {
    /// An obstacle's corner node was not synthesized before pruning.
    #[error("obstacle '{obstacle}' is missing corner node '{corner}'")]
    MissingCorner {
        /// Obstacle id
        obstacle: String,
        /// Expected corner node id
        corner: String,
    },

    /// A synthesized node would take an id already in use.
    #[error("node id '{id}' is already registered")]
    IdConflict {
        /// Conflicting node id
        id: String,
    },

    /// Configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigLoadError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_corner_message() {
        let err = MargaError::MissingCorner {
            obstacle: "crate".to_string(),
            corner: "crate_ULF".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "obstacle 'crate' is missing corner node 'crate_ULF'"
        );
    }

    #[test]
    fn test_id_conflict_message() {
        let err = MargaError::IdConflict {
            id: "rock_ULF".to_string(),
        };
        assert_eq!(err.to_string(), "node id 'rock_ULF' is already registered");
    }

    #[test]
    fn test_from_config_error() {
        let err: MargaError = ConfigLoadError::Parse("bad yaml".to_string()).into();
        assert!(matches!(err, MargaError::Config(_)));
        assert!(err.to_string().contains("bad yaml"));
    }
}
