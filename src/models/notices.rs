use std::fmt;

use super::CartError;

/// The three cart mutations, used to pick the generic notice for a failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartOperation {
    Add,
    Remove,
    Update,
}

/// Ephemeral user-facing message reporting an operation outcome.
///
/// Rendering is the UI layer's job: operations return a typed [`CartError`]
/// and the UI maps it to one of these fixed messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    StockExceeded,
    AddFailed,
    RemoveFailed,
    UpdateFailed,
}

impl Notice {
    /// Map a failed operation to the notice the UI should show.
    ///
    /// Stock-exceeded failures share one message across add and update;
    /// every other failure gets the operation's generic message.
    pub fn for_failure(operation: CartOperation, error: &CartError) -> Self {
        match error {
            CartError::StockExceeded { .. } => Notice::StockExceeded,
            _ => match operation {
                CartOperation::Add => Notice::AddFailed,
                CartOperation::Remove => Notice::RemoveFailed,
                CartOperation::Update => Notice::UpdateFailed,
            },
        }
    }

    /// The fixed message text for this notice
    pub fn message(&self) -> &'static str {
        match self {
            Notice::StockExceeded => "Requested quantity is out of stock",
            Notice::AddFailed => "Could not add the product",
            Notice::RemoveFailed => "Could not remove the product",
            Notice::UpdateFailed => "Could not update the product quantity",
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RepositoryError;

    #[test]
    fn test_stock_exceeded_shared_by_add_and_update() {
        let error = CartError::StockExceeded {
            product_id: 1,
            requested: 4,
            available: 3,
        };

        assert_eq!(
            Notice::for_failure(CartOperation::Add, &error),
            Notice::StockExceeded
        );
        assert_eq!(
            Notice::for_failure(CartOperation::Update, &error),
            Notice::StockExceeded
        );
    }

    #[test]
    fn test_generic_notice_per_operation() {
        let not_found = CartError::ItemNotFound { product_id: 9 };
        assert_eq!(
            Notice::for_failure(CartOperation::Remove, &not_found),
            Notice::RemoveFailed
        );
        assert_eq!(
            Notice::for_failure(CartOperation::Update, &not_found),
            Notice::UpdateFailed
        );

        let transport = CartError::Repository {
            source: RepositoryError::UnexpectedStatus { status: 500 },
        };
        assert_eq!(
            Notice::for_failure(CartOperation::Add, &transport),
            Notice::AddFailed
        );
    }

    #[test]
    fn test_notice_messages() {
        assert_eq!(
            Notice::StockExceeded.to_string(),
            "Requested quantity is out of stock"
        );
        assert_eq!(Notice::AddFailed.to_string(), "Could not add the product");
        assert_eq!(
            Notice::RemoveFailed.to_string(),
            "Could not remove the product"
        );
        assert_eq!(
            Notice::UpdateFailed.to_string(),
            "Could not update the product quantity"
        );
    }
}
