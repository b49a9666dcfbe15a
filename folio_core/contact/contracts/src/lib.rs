use folio_extern_contracts::relay::RelaySendError;
use folio_models::contact::ValidationErrors;
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFormAlertService: Send + Sync + 'static {
    /// Shows a blocking alert to the person filling in the form.
    fn alert(&self, message: &str);
}

#[derive(Debug, Error)]
pub enum ContactSubmitError {
    /// A submission is already in flight; nothing was dispatched.
    #[error("A submission is already in flight.")]
    AlreadySubmitting,
    /// The input does not pass validation; nothing was dispatched.
    #[error("The input has not passed validation.")]
    Invalid(ValidationErrors),
    /// The relay answered, but with `success: false`.
    #[error("The relay endpoint rejected the message.")]
    Rejected,
    #[error(transparent)]
    Relay(#[from] RelaySendError),
}

#[cfg(feature = "mock")]
impl MockContactFormAlertService {
    pub fn with_alert(mut self, message: String) -> Self {
        self.expect_alert()
            .once()
            .with(mockall::predicate::eq(message))
            .return_const(());
        self
    }
}
