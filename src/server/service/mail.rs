//! Outgoing email.
//!
//! With `MAIL_SERVER` configured, messages go out through an async SMTP relay. Without
//! it they are kept in a small in-process outbox and logged, which is also what the
//! tests read back.

use std::sync::{Arc, Mutex};

use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::server::{
    config::MailConfig,
    error::{internal::InternalError, AppError},
};

const OUTBOX_CAPACITY: usize = 100;

/// A message as handed to the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMail {
    pub recipients: Vec<String>,
    pub subject: String,
    pub html: String,
}

#[derive(Clone)]
enum MailTransport {
    Smtp(AsyncSmtpTransport<Tokio1Executor>),
    Memory(Arc<Mutex<Vec<OutgoingMail>>>),
}

/// Sends HTML mail from the configured sender and builds links back to the API.
#[derive(Clone)]
pub struct Mailer {
    transport: MailTransport,
    from: Mailbox,
    link_base: String,
}

impl Mailer {
    pub fn smtp(config: &MailConfig, from: Mailbox, domain: &str) -> Result<Self, AppError> {
        let builder = if config.ssl_tls {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.server)
                .map_err(InternalError::MailTransport)?
        } else if config.starttls {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.server)
                .map_err(InternalError::MailTransport)?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.server)
        };

        let mut builder = builder.port(config.port);
        if let Some(username) = &config.username {
            builder = builder.credentials(Credentials::new(
                username.clone(),
                config.password.clone().unwrap_or_default(),
            ));
        }

        Ok(Self {
            transport: MailTransport::Smtp(builder.build()),
            from,
            link_base: link_base(domain),
        })
    }

    pub fn memory(from: Mailbox, domain: &str) -> Self {
        Self {
            transport: MailTransport::Memory(Arc::new(Mutex::new(Vec::new()))),
            from,
            link_base: link_base(domain),
        }
    }

    /// Absolute URL for an API path such as `/api/v1/auth/verify/{token}`.
    pub fn link(&self, path: &str) -> String {
        format!("{}{}", self.link_base, path)
    }

    /// Sends one message addressed to every recipient.
    ///
    /// # Returns
    /// - `Ok(())` - The relay accepted the message, or it was stored in the outbox
    /// - `Err(AppError::Unprocessable)` - A recipient is not a valid mailbox
    /// - `Err(AppError::InternalErr)` - The message could not be built or delivered
    pub async fn send(&self, recipients: &[String], subject: &str, html: &str) -> Result<(), AppError> {
        let mut builder = Message::builder()
            .from(self.from.clone())
            .subject(subject)
            .header(ContentType::TEXT_HTML);

        for recipient in recipients {
            let mailbox: Mailbox = recipient
                .parse()
                .map_err(|_| AppError::Unprocessable(format!("Invalid email address: {}", recipient)))?;
            builder = builder.to(mailbox);
        }

        let message = builder
            .body(html.to_string())
            .map_err(InternalError::MailMessage)?;

        match &self.transport {
            MailTransport::Smtp(transport) => {
                transport
                    .send(message)
                    .await
                    .map_err(InternalError::MailTransport)?;
            }
            MailTransport::Memory(outbox) => {
                let mut outbox = outbox.lock().unwrap_or_else(|e| e.into_inner());
                if outbox.len() >= OUTBOX_CAPACITY {
                    outbox.remove(0);
                }
                outbox.push(OutgoingMail {
                    recipients: recipients.to_vec(),
                    subject: subject.to_string(),
                    html: html.to_string(),
                });
            }
        }

        tracing::info!("Sent '{}' to {} recipient(s)", subject, recipients.len());

        Ok(())
    }

    /// Messages kept by the in-process transport, oldest first.
    #[cfg(test)]
    pub fn sent(&self) -> Vec<OutgoingMail> {
        match &self.transport {
            MailTransport::Memory(outbox) => outbox.lock().unwrap_or_else(|e| e.into_inner()).clone(),
            MailTransport::Smtp(_) => Vec::new(),
        }
    }
}

fn link_base(domain: &str) -> String {
    let domain = domain.trim_end_matches('/');
    if domain.starts_with("http://") || domain.starts_with("https://") {
        domain.to_string()
    } else {
        format!("http://{}", domain)
    }
}
