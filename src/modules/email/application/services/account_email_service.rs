use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::email::application::ports::outgoing::{
    AccountNotificationError, AccountNotifier, EmailSender,
};

/// Renders and dispatches account-lifecycle emails.
///
/// Owns the confirmation-link format; the activation token itself comes from
/// the identity module and is treated as an opaque string here.
#[derive(Clone)]
pub struct AccountEmailService {
    sender: Arc<dyn EmailSender + Send + Sync>,
    app_url: String,
}

impl fmt::Debug for AccountEmailService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccountEmailService")
            .field("sender", &"<dyn EmailSender>")
            .field("app_url", &self.app_url)
            .finish()
    }
}

impl AccountEmailService {
    pub fn new(sender: Arc<dyn EmailSender + Send + Sync>, app_url: String) -> Self {
        Self { sender, app_url }
    }

    fn confirmation_body(&self, name: &str, activation_token: &str) -> String {
        let confirmation_link = format!(
            "{}/api/accounts/confirm-email?token={}",
            self.app_url, activation_token
        );
        format!(
            r#"
            <p>Hi {},</p>
            <p>Thanks for registering. Please confirm your account by clicking the button below:</p>
            <p>
                <a href="{}" style="
                    display: inline-block;
                    padding: 10px 20px;
                    background-color: #007BFF;
                    color: white;
                    text-decoration: none;
                    border-radius: 5px;
                ">Confirm your account</a>
            </p>
            <p>If you did not create this account, you can safely ignore this email.</p>
            "#,
            name, confirmation_link
        )
    }
}

#[async_trait]
impl AccountNotifier for AccountEmailService {
    async fn send_confirmation_email(
        &self,
        to: &str,
        name: &str,
        activation_token: &str,
    ) -> Result<(), AccountNotificationError> {
        let html_body = self.confirmation_body(name, activation_token);

        self.sender
            .send_email(to, "Confirm your account", &html_body)
            .await
            .map_err(AccountNotificationError::SendFailed)
    }
}
