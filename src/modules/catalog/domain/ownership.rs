use super::entities::Product;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnershipDecision {
    Allowed,
    Denied,
}

/// Only the creator of a live product may read or mutate it. Soft-deleted
/// rows are denied outright, whoever asks.
pub fn authorize(principal_account_id: i32, product: &Product) -> OwnershipDecision {
    if product.is_deleted || product.creator_account_id != principal_account_id {
        OwnershipDecision::Denied
    } else {
        OwnershipDecision::Allowed
    }
}
