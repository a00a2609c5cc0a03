use thiserror::Error;

/// Errors that can occur in the node.
#[derive(Debug, Error)]
pub enum NodeError {
    #[error("config error: {reason}")]
    ConfigError { reason: String },

    #[error("chain error: {0}")]
    ChainError(#[from] plasma_types::error::ChainError),

    #[error("block file error: {0}")]
    BlockFileError(#[from] serde_json::Error),

    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = NodeError::ConfigError {
            reason: "missing field".to_string(),
        };
        assert!(err.to_string().contains("missing field"));
    }

    #[test]
    fn test_chain_error_from() {
        let chain_err = plasma_types::error::ChainError::BlockNotFound { number: 4 };
        let node_err: NodeError = chain_err.into();
        assert!(matches!(node_err, NodeError::ChainError(_)));
        assert!(node_err.to_string().contains("block not found: 4"));
    }

    #[test]
    fn test_io_error_from() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let node_err: NodeError = io_err.into();
        assert!(matches!(node_err, NodeError::IoError(_)));
    }
}
