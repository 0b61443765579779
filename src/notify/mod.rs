//! Notification stage
//!
//! Zips the bundle directory and emails it as an attachment over
//! authenticated SMTP with STARTTLS. Every failure here is fatal: there is no
//! retry and no delivery confirmation beyond SMTP acceptance.

mod archive;

pub use archive::archive_bundle;

use std::path::{Path, PathBuf};

use lettre::message::header::ContentType;
use lettre::message::{Attachment, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::SmtpConfig;
use crate::{HarvestError, Result};

/// Archives the bundle and emails it to the recipient
///
/// The archive is written to `<cwd>/<title>.zip`, alongside the bundle
/// directory rather than inside it, and is left on disk after sending. The
/// message subject is `<title> compiled data` and the sender is the SMTP
/// login identity.
///
/// # Errors
///
/// * [`HarvestError::MissingCredentials`] - login or password not configured
/// * [`HarvestError::Archive`] / [`HarvestError::Io`] - archive failure
/// * [`HarvestError::Smtp`] - connection or authentication failure
pub async fn send_report(
    smtp: &SmtpConfig,
    bundle_dir: &Path,
    title: &str,
    recipient: &str,
) -> Result<PathBuf> {
    let (login, password) = match (&smtp.login, &smtp.password) {
        (Some(login), Some(password)) => (login.clone(), password.clone()),
        _ => return Err(HarvestError::MissingCredentials),
    };

    let zip_name = format!("{}.zip", title);
    let zip_path = PathBuf::from(&zip_name);
    archive_bundle(bundle_dir, &zip_path)?;

    let message = build_message(&login, recipient, title, &zip_name, std::fs::read(&zip_path)?)?;

    let mailer = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&smtp.host)?
        .credentials(Credentials::new(login, password))
        .build();

    tracing::info!("Sending report to {} via {}", recipient, smtp.host);
    mailer.send(message).await?;

    Ok(zip_path)
}

/// Builds the notification message with the zip attached
fn build_message(
    sender: &str,
    recipient: &str,
    title: &str,
    zip_name: &str,
    zip_bytes: Vec<u8>,
) -> Result<Message> {
    // Constant media type; parsing cannot fail.
    let content_type =
        ContentType::parse("application/octet-stream").expect("valid media type literal");

    let attachment = Attachment::new(zip_name.to_string()).body(zip_bytes, content_type);

    let message = Message::builder()
        .from(sender.parse()?)
        .to(recipient.parse()?)
        .subject(format!("{} compiled data", title))
        .multipart(MultiPart::mixed().singlepart(attachment))?;

    Ok(message)
}
