use async_trait::async_trait;

/// Outbound port for the dialog/notification collaborator.
///
/// Messages are fire-and-forget; only `confirm` feeds an answer back, used
/// to gate destructive bulk actions.
#[async_trait]
pub trait Notifier: Send + Sync + 'static {
    /// Ask the user to confirm a destructive action.
    async fn confirm(&self, message: &str) -> bool;

    fn info(&self, message: &str);

    fn success(&self, message: &str);

    fn error(&self, message: &str);
}
