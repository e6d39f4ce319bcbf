use anyhow::Context;
use greatmail::configuration::get_configuration;
use greatmail::email::{Email, EmailClient};
use greatmail::telemetry::{get_subscriber, init_subscriber};
use tokio::io::AsyncReadExt;

/// Sends one email read as JSON from the file given as first argument, or
/// from stdin when no argument is given.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let configuration = get_configuration().context("Failed to read configuration.")?;

    let subscriber = get_subscriber(
        "greatmail".into(),
        configuration.application.log_level.clone(),
        std::io::stdout,
    );
    init_subscriber(subscriber);

    let email = read_email(std::env::args().nth(1)).await?;
    let email_client = EmailClient::from_settings(&configuration.email_client);

    email_client
        .send_email(&email)
        .await
        .context("Failed to send the email through GreatMail.")?;
    tracing::info!("Email sent");
    Ok(())
}

async fn read_email(path: Option<String>) -> anyhow::Result<Email> {
    let raw = match path {
        Some(path) => tokio::fs::read(&path)
            .await
            .with_context(|| format!("Failed to read {}", path))?,
        None => {
            let mut raw = Vec::new();
            tokio::io::stdin()
                .read_to_end(&mut raw)
                .await
                .context("Failed to read the email from stdin.")?;
            raw
        }
    };
    serde_json::from_slice(&raw).context("The input is not a valid email.")
}
