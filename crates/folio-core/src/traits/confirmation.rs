//! Human confirmation step required before destructive folder edits.

use async_trait::async_trait;

/// Asks a person to approve a destructive action.
///
/// The folder orchestrator awaits this before issuing a delete; the CLI
/// implements it with an interactive prompt and tests with fixed answers.
#[async_trait]
pub trait Confirmation: Send + Sync + std::fmt::Debug + 'static {
    /// Return `true` to proceed with deleting the folder named `name`.
    async fn confirm_delete(&self, name: &str) -> bool;
}

/// A confirmation that always answers the same way.
#[derive(Debug, Clone, Copy)]
pub struct AutoConfirm(pub bool);

#[async_trait]
impl Confirmation for AutoConfirm {
    async fn confirm_delete(&self, _name: &str) -> bool {
        self.0
    }
}
