// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Email delivery over SMTP.

use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Address, Message, SmtpTransport, Transport};

use dt_core::Assignee;

use crate::config::SmtpConfig;
use crate::error::{Error, Result};
use crate::render::Rendered;

/// Sends a rendered report to one person.
pub trait Deliver {
    fn deliver(&self, to: &Assignee, body: &Rendered) -> Result<()>;
}

/// Delivery through the SMTP relay named in the config.
pub struct SmtpMailer {
    config: SmtpConfig,
}

impl SmtpMailer {
    pub fn new(config: SmtpConfig) -> Self {
        SmtpMailer { config }
    }

    fn transport(&self) -> Result<SmtpTransport> {
        let config = &self.config;
        let credentials = Credentials::new(config.username.clone(), config.password.clone());

        let transport = if config.tls {
            SmtpTransport::starttls_relay(&config.server)?
                .port(config.port)
                .credentials(credentials)
                .build()
        } else {
            tracing::warn!(server = %config.server, "sending mail without TLS");
            SmtpTransport::builder_dangerous(&config.server)
                .port(config.port)
                .credentials(credentials)
                .build()
        };
        Ok(transport)
    }
}

impl Deliver for SmtpMailer {
    fn deliver(&self, to: &Assignee, body: &Rendered) -> Result<()> {
        let message = build_message(&self.config, to, body)?;
        self.transport()?.send(&message)?;
        tracing::info!(to = %to, "report emailed");
        Ok(())
    }
}

/// The recipient mailbox. Assignees without an address cannot receive mail.
pub fn recipient_mailbox(to: &Assignee) -> Result<Mailbox> {
    let email = to
        .email
        .as_deref()
        .ok_or_else(|| Error::MissingRecipientAddress(to.display_name.clone()))?;
    let address: Address = email.parse()?;
    Ok(Mailbox::new(Some(to.display_name.clone()), address))
}

/// Build a `multipart/alternative` message carrying the text and HTML bodies.
pub fn build_message(config: &SmtpConfig, to: &Assignee, body: &Rendered) -> Result<Message> {
    let from_address: Address = config.from_address.parse()?;
    let from = Mailbox::new(Some(config.from_name.clone()), from_address);

    let message = Message::builder()
        .from(from)
        .to(recipient_mailbox(to)?)
        .subject(config.subject.clone())
        .multipart(MultiPart::alternative_plain_html(
            body.text.clone(),
            body.html.clone(),
        ))?;
    Ok(message)
}

#[cfg(test)]
#[path = "mail_tests.rs"]
mod tests;
