use std::sync::Arc;

use anyhow::bail;
use clap::Subcommand;
use folio_config::Config;
use folio_core_contact_contracts::ContactFormAlertService;
use folio_core_contact_impl::{ContactForm, ContactFormConfig};
use folio_extern_impl::relay::{RelayApiServiceConfig, RelayApiServiceImpl};
use folio_models::contact::ContactField;

#[derive(Debug, Subcommand)]
pub enum ContactCommand {
    /// Validate and submit a contact message to the relay endpoint
    Send {
        /// Sender name
        #[arg(long)]
        name: String,
        /// Sender email address
        #[arg(long)]
        email: String,
        /// Message content
        #[arg(long)]
        message: String,
    },
}

impl ContactCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        match self {
            ContactCommand::Send {
                name,
                email,
                message,
            } => send(config, name, email, message).await,
        }
    }
}

async fn send(config: Config, name: String, email: String, message: String) -> anyhow::Result<()> {
    let relay = RelayApiServiceImpl::new(RelayApiServiceConfig::new(
        config.relay.submit_endpoint_override,
    ));
    let form = ContactForm::new(
        relay,
        TerminalAlert,
        ContactFormConfig {
            access_key: config.relay.access_key,
            owner_email: Arc::new(config.contact.email),
            success_reset: config.contact.success_reset.into(),
        },
    );

    form.edit(ContactField::Name, name);
    form.edit(ContactField::Email, email);
    form.edit(ContactField::Message, message);

    let errors = form.validate();
    if !errors.is_empty() {
        for (field, error) in errors.iter() {
            eprintln!("{field}: {error}");
        }
        bail!("The message was not sent because some fields are invalid");
    }

    form.submit().await?;

    println!("Message sent! Thank you for reaching out.");

    Ok(())
}

/// Terminal stand-in for the browser alert: failures are printed to stderr.
struct TerminalAlert;

impl ContactFormAlertService for TerminalAlert {
    fn alert(&self, message: &str) {
        eprintln!("{message}");
    }
}
