use folio_core_contact_contracts::MockContactFormAlertService;
use folio_extern_contracts::relay::MockRelayApiService;
use folio_models::contact::{ContactField, ValidationError};
use pretty_assertions::assert_eq;

use crate::tests::make_sut;

#[test]
fn clears_only_the_edited_fields_error() {
    // Arrange
    let sut = make_sut(MockRelayApiService::new(), MockContactFormAlertService::new());
    sut.validate();

    // Act
    sut.edit(ContactField::Email, "jane@example.com");

    // Assert
    let errors = sut.errors();
    assert_eq!(errors.get(ContactField::Email), None);
    assert_eq!(
        errors.get(ContactField::Name),
        Some(ValidationError::NameRequired)
    );
    assert_eq!(
        errors.get(ContactField::Message),
        Some(ValidationError::MessageRequired)
    );
}

#[test]
fn clears_the_error_even_for_another_invalid_value() {
    // Arrange
    let sut = make_sut(MockRelayApiService::new(), MockContactFormAlertService::new());
    sut.validate();

    // Act
    sut.edit(ContactField::Email, "still-not-an-email");

    // Assert: the error stays gone until the next full validation.
    assert_eq!(sut.errors().get(ContactField::Email), None);

    let errors = sut.validate();
    assert_eq!(
        errors.get(ContactField::Email),
        Some(ValidationError::EmailInvalid)
    );
}

#[test]
fn stores_the_raw_value() {
    // Arrange
    let sut = make_sut(MockRelayApiService::new(), MockContactFormAlertService::new());

    // Act
    sut.edit(ContactField::Name, "  Jane Doe  ");

    // Assert
    assert_eq!(sut.input().name, "  Jane Doe  ");
}
