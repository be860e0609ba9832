use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum AccountNotificationError {
    #[error("Email sending failed: {0}")]
    SendFailed(String),
}

/// Outgoing port for account-lifecycle notifications.
///
/// Registration treats a failure here as fatal to the attempt, so
/// implementations must report delivery errors instead of swallowing them.
#[async_trait]
pub trait AccountNotifier: Send + Sync {
    async fn send_confirmation_email(
        &self,
        to: &str,
        name: &str,
        activation_token: &str,
    ) -> Result<(), AccountNotificationError>;
}
