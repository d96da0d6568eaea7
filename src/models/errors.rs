use thiserror::Error;

/// Service-level errors returned by cart operations
#[derive(Debug, Error)]
pub enum CartError {
    #[error("Product not in cart: {product_id}")]
    ItemNotFound { product_id: u64 },

    #[error("Requested amount exceeds stock: product_id={product_id}, requested={requested}, available={available}")]
    StockExceeded {
        product_id: u64,
        requested: u32,
        available: u32,
    },

    #[error("Repository error: {source}")]
    Repository {
        #[from]
        source: RepositoryError,
    },
}

/// Repository-level errors for the local snapshot store and the remote
/// stock and catalog services
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Transport error: {source}")]
    Transport {
        #[from]
        source: reqwest::Error,
    },

    #[error("Unexpected response status: {status}")]
    UnexpectedStatus { status: u16 },

    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },

    #[error("Storage I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

/// Result type alias for cart operations
pub type CartResult<T> = Result<T, CartError>;

/// Result type alias for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = CartError::ItemNotFound { product_id: 42 };
        assert_eq!(error.to_string(), "Product not in cart: 42");

        let error = CartError::StockExceeded {
            product_id: 1,
            requested: 4,
            available: 3,
        };
        assert_eq!(
            error.to_string(),
            "Requested amount exceeds stock: product_id=1, requested=4, available=3"
        );
    }

    #[test]
    fn test_repository_error_from_serde() {
        let json_error = serde_json::from_str::<serde_json::Value>("not json");
        assert!(json_error.is_err());

        let repo_error: RepositoryError = json_error.unwrap_err().into();
        match repo_error {
            RepositoryError::Serialization { .. } => {}
            _ => panic!("Expected Serialization error"),
        }
    }

    #[test]
    fn test_cart_error_from_repository_error() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let repo_error: RepositoryError = io_error.into();
        let cart_error: CartError = repo_error.into();

        match cart_error {
            CartError::Repository {
                source: RepositoryError::Io { .. },
            } => {}
            _ => panic!("Expected Repository(Io) error"),
        }
    }
}
