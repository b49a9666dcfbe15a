use std::{sync::Arc, time::Duration};

use folio_core_contact_contracts::MockContactFormAlertService;
use folio_extern_contracts::relay::{MockRelayApiService, RelayRequest};
use folio_models::contact::{ContactField, ContactFormInput, ContactMessage};

use crate::{ContactForm, ContactFormConfig};

mod edit;

pub type Sut = ContactForm<MockRelayApiService, MockContactFormAlertService>;

pub const ACCESS_KEY: &str = "test-access-key";
pub const OWNER_EMAIL: &str = "owner@example.com";

pub fn make_sut(relay: MockRelayApiService, alert: MockContactFormAlertService) -> Sut {
    ContactForm::new(
        relay,
        alert,
        ContactFormConfig {
            access_key: ACCESS_KEY.into(),
            owner_email: Arc::new(OWNER_EMAIL.parse().unwrap()),
            success_reset: Duration::from_secs(5),
        },
    )
}

pub fn valid_input() -> ContactFormInput {
    ContactFormInput {
        name: "Jane Doe".into(),
        email: "jane@example.com".into(),
        message: "Let's work together!".into(),
    }
}

pub fn fill(form: &Sut, input: &ContactFormInput) {
    form.edit(ContactField::Name, &*input.name);
    form.edit(ContactField::Email, &*input.email);
    form.edit(ContactField::Message, &*input.message);
}

pub fn expected_request() -> RelayRequest {
    RelayRequest {
        subject: "New Portfolio Contact from Jane Doe".into(),
        message: ContactMessage::try_from(valid_input()).unwrap(),
    }
}

pub fn expected_alert() -> String {
    crate::failure_alert(&OWNER_EMAIL.parse().unwrap())
}
