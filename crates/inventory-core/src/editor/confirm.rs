//! Delete Confirmation
//!
//! Two-step gate in front of every delete: a request parks the id as
//! pending, and only an explicit confirm releases it.

use crate::domain::ProductId;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DeleteConfirmation {
    #[default]
    Idle,
    Pending(ProductId),
}

/// How a pending confirmation was resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmOutcome {
    Confirmed(ProductId),
    Cancelled,
}

impl DeleteConfirmation {
    /// Ask for confirmation to delete `id`, replacing any earlier request
    pub fn request(&mut self, id: ProductId) {
        *self = DeleteConfirmation::Pending(id);
    }

    pub fn pending(&self) -> Option<ProductId> {
        match self {
            DeleteConfirmation::Pending(id) => Some(*id),
            DeleteConfirmation::Idle => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending().is_some()
    }

    /// Resolve the pending request. Returns `None` when nothing was pending.
    pub fn resolve(&mut self, confirmed: bool) -> Option<ConfirmOutcome> {
        let id = self.pending()?;
        *self = DeleteConfirmation::Idle;
        Some(if confirmed {
            ConfirmOutcome::Confirmed(id)
        } else {
            ConfirmOutcome::Cancelled
        })
    }

    /// Confirm and take the id to delete
    pub fn confirm(&mut self) -> Option<ProductId> {
        match self.resolve(true) {
            Some(ConfirmOutcome::Confirmed(id)) => Some(id),
            _ => None,
        }
    }

    pub fn cancel(&mut self) {
        self.resolve(false);
    }
}
