use std::{
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::Duration,
};

use email_address::EmailAddress;
use folio_core_contact_contracts::{ContactFormAlertService, ContactSubmitError};
use folio_extern_contracts::relay::{RelayApiService, RelayRequest, RelaySendResponse};
use folio_models::contact::{
    ContactField, ContactFormInput, ContactMessage, SubmissionState, ValidationErrors,
};
use tokio::task::AbortHandle;
use tracing::{debug, info, warn};

#[cfg(test)]
mod tests;

/// One rendered contact form. Each session owns its input, inline errors
/// and submission status exclusively; dropping the session cancels any
/// pending auto-reset so no callback outlives its form.
pub struct ContactForm<Relay, Alert> {
    relay: Relay,
    alert: Alert,
    config: ContactFormConfig,
    state: Arc<Mutex<FormState>>,
}

#[derive(Debug, Clone)]
pub struct ContactFormConfig {
    /// Pre-shared key identifying the site to the relay endpoint.
    pub access_key: String,
    /// Fallback address named in the failure alert.
    pub owner_email: Arc<EmailAddress>,
    /// How long the success confirmation is shown before the form resets
    /// to editable.
    pub success_reset: Duration,
}

#[derive(Debug, Default)]
struct FormState {
    input: ContactFormInput,
    errors: ValidationErrors,
    status: SubmissionState,
    reset_task: Option<AbortHandle>,
}

impl<Relay, Alert> ContactForm<Relay, Alert>
where
    Relay: RelayApiService,
    Alert: ContactFormAlertService,
{
    pub fn new(relay: Relay, alert: Alert, config: ContactFormConfig) -> Self {
        Self {
            relay,
            alert,
            config,
            state: Arc::default(),
        }
    }

    pub fn input(&self) -> ContactFormInput {
        self.lock().input.clone()
    }

    pub fn errors(&self) -> ValidationErrors {
        self.lock().errors.clone()
    }

    pub fn status(&self) -> SubmissionState {
        self.lock().status
    }

    /// Stores a new raw value for `field` and optimistically clears that
    /// field's inline error. The other fields' errors are untouched and the
    /// mapping is not recomputed until the next [`validate`](Self::validate).
    pub fn edit(&self, field: ContactField, value: impl Into<String>) {
        let mut state = self.lock();
        let value = value.into();
        match field {
            ContactField::Name => state.input.name = value,
            ContactField::Email => state.input.email = value,
            ContactField::Message => state.input.message = value,
        }
        state.errors.remove(field);
    }

    /// Recomputes the full rule set and stores the result for inline
    /// display. No submission state transition happens here.
    pub fn validate(&self) -> ValidationErrors {
        let mut state = self.lock();
        let errors = state.input.validate();
        state.errors = errors.clone();
        errors
    }

    /// Dispatches the current input to the relay endpoint.
    ///
    /// Callers are expected to run [`validate`](Self::validate) first and
    /// submit only on an empty error mapping; input that does not parse is
    /// rejected here without being dispatched. While a submission is in
    /// flight, further calls return
    /// [`ContactSubmitError::AlreadySubmitting`] without dispatching.
    ///
    /// On success the input is cleared and the status resets to
    /// [`SubmissionState::Idle`] after the configured delay. On failure the
    /// typed values stay in place so the user can retry without re-entering
    /// them, and the alert service is invoked exactly once.
    pub async fn submit(&self) -> Result<(), ContactSubmitError> {
        let message = {
            let mut state = self.lock();
            if state.status == SubmissionState::Submitting {
                return Err(ContactSubmitError::AlreadySubmitting);
            }
            let message = ContactMessage::try_from(state.input.clone())
                .map_err(ContactSubmitError::Invalid)?;
            if let Some(reset) = state.reset_task.take() {
                reset.abort();
            }
            state.status = SubmissionState::Submitting;
            message
        };

        let subject = format!("New Portfolio Contact from {}", *message.name);
        debug!(%subject, "dispatching contact message");

        let result = self
            .relay
            .send(RelayRequest { subject, message }, &self.config.access_key)
            .await;

        let outcome = match result {
            Ok(RelaySendResponse { success: true, .. }) => Ok(()),
            Ok(RelaySendResponse {
                success: false,
                message,
            }) => {
                warn!(?message, "relay rejected the contact message");
                Err(ContactSubmitError::Rejected)
            }
            Err(err) => {
                warn!(error = %err, "failed to submit contact message");
                Err(ContactSubmitError::Relay(err))
            }
        };

        {
            let mut state = self.lock();
            match &outcome {
                Ok(()) => {
                    state.status = SubmissionState::Succeeded;
                    state.input = ContactFormInput::default();
                    state.reset_task = Some(self.schedule_reset());
                    info!("contact message submitted");
                }
                Err(_) => {
                    state.status = SubmissionState::Idle;
                }
            }
        }

        if outcome.is_err() {
            self.alert
                .alert(&failure_alert(&self.config.owner_email));
        }

        outcome
    }

    fn schedule_reset(&self) -> AbortHandle {
        let state = Arc::clone(&self.state);
        let delay = self.config.success_reset;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let mut state = state.lock().unwrap_or_else(PoisonError::into_inner);
            if state.status == SubmissionState::Succeeded {
                state.status = SubmissionState::Idle;
            }
            state.reset_task = None;
        })
        .abort_handle()
    }
}

impl<Relay, Alert> ContactForm<Relay, Alert> {
    fn lock(&self) -> MutexGuard<'_, FormState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<Relay, Alert> Drop for ContactForm<Relay, Alert> {
    fn drop(&mut self) {
        if let Some(reset) = self.lock().reset_task.take() {
            reset.abort();
        }
    }
}

/// Alert text shown when a submission fails, naming the direct-email
/// fallback channel.
pub fn failure_alert(owner_email: &EmailAddress) -> String {
    format!("Your message could not be sent. Please email me directly at {owner_email}.")
}
