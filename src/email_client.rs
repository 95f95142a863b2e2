use std::time::Duration;

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};

use crate::domain::{ContactEmail, SenderEmail};

/// Talks to the mail provider's HTTP API. One `send_email` is one request.
#[derive(Debug)]
pub struct EmailClient {
    http_client: Client,
    base_url: String,
    sender: SenderEmail,
    authorization_token: SecretString,
}

impl EmailClient {
    pub fn new(
        sender: SenderEmail,
        base_url: String,
        authorization_token: SecretString,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let http_client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http_client,
            base_url,
            sender,
            authorization_token,
        })
    }

    #[tracing::instrument(
        name = "Sending an email through the provider",
        skip(self, reply_to, text_content),
        fields(recipient = %recipient, sender = %self.sender)
    )]
    pub async fn send_email(
        &self,
        recipient: &ContactEmail,
        reply_to: Option<&ContactEmail>,
        subject: &str,
        text_content: &str,
    ) -> Result<(), reqwest::Error> {
        let url = format!("{}/email", self.base_url);
        let request_body = SendEmailRequest {
            from: self.sender.as_ref(),
            to: recipient.as_ref(),
            reply_to: reply_to.map(|address| address.as_ref()),
            subject,
            text_body: text_content,
        };
        self.http_client
            .post(&url)
            .header(
                "X-Postmark-Server-Token",
                self.authorization_token.expose_secret(),
            )
            .json(&request_body)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

#[derive(serde::Serialize)]
#[serde(rename_all = "PascalCase")]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to: Option<&'a str>,
    subject: &'a str,
    text_body: &'a str,
}
