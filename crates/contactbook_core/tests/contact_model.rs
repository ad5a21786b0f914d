use contactbook_core::{Contact, ContactValidationError};

#[test]
fn new_trims_all_fields() {
    let contact = Contact::new("  Ana  ", "\t555-0000 ", " ana@test.com\n");

    assert_eq!(contact.name(), "Ana");
    assert_eq!(contact.phone(), "555-0000");
    assert_eq!(contact.email(), "ana@test.com");
}

#[test]
fn try_new_rejects_blank_fields() {
    for (name, phone, email) in [
        ("", "555", "a@b.com"),
        ("Ana", "   ", "a@b.com"),
        ("Ana", "555", "\t"),
    ] {
        assert_eq!(
            Contact::try_new(name, phone, email).unwrap_err(),
            ContactValidationError::RequiredFields
        );
    }
}

#[test]
fn try_new_rejects_bad_email() {
    for email in ["ana", "ana@test", "ana@test.c", "ana@@test.com", "a na@test.com"] {
        assert_eq!(
            Contact::try_new("Ana", "555", email).unwrap_err(),
            ContactValidationError::InvalidEmail,
            "email `{email}` should be rejected"
        );
    }
}

#[test]
fn try_new_validates_trimmed_email() {
    let contact = Contact::try_new("Ana", "555", "  ana@test.com  ").unwrap();
    assert_eq!(contact.email(), "ana@test.com");
}

#[test]
fn try_new_rejects_delimiter_in_name_and_phone() {
    assert_eq!(
        Contact::try_new("Ana;Bob", "555", "ana@test.com").unwrap_err(),
        ContactValidationError::ForbiddenCharacter {
            field: "name",
            character: ';',
        }
    );
    assert_eq!(
        Contact::try_new("Ana", "555\n666", "ana@test.com").unwrap_err(),
        ContactValidationError::ForbiddenCharacter {
            field: "phone",
            character: '\n',
        }
    );
}

#[test]
fn matches_name_ignores_case_and_surrounding_whitespace() {
    let contact = Contact::new("Ángel", "555", "angel@test.com");

    assert!(contact.matches_name("ángel"));
    assert!(contact.matches_name("  ÁNGEL "));
    assert!(!contact.matches_name("angel"));
    assert!(!contact.matches_name("Ángela"));
}

#[test]
fn display_uses_labelled_fields() {
    let contact = Contact::new("Bob", "555-1234", "bob@test.com");
    assert_eq!(
        contact.to_string(),
        "Name: Bob, Phone: 555-1234, Email: bob@test.com"
    );
}

#[test]
fn serialization_uses_expected_fields() {
    let contact = Contact::new("Bob", "555-1234", "bob@test.com");

    let json = serde_json::to_value(&contact).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "name": "Bob",
            "phone": "555-1234",
            "email": "bob@test.com"
        })
    );

    let decoded: Contact = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, contact);
}

#[test]
fn deserialization_trims_fields() {
    let json = serde_json::json!({
        "name": "  Bob ",
        "phone": " 555-1234",
        "email": "bob@test.com  "
    });

    let contact: Contact = serde_json::from_value(json).unwrap();
    assert_eq!(contact, Contact::new("Bob", "555-1234", "bob@test.com"));
}

#[test]
fn deserialization_rejects_fields_that_break_the_record_shape() {
    let json = serde_json::json!({
        "name": "Bob;Ana",
        "phone": "555-1234",
        "email": "bob@test.com"
    });

    let err = serde_json::from_value::<Contact>(json).unwrap_err();
    assert!(
        err.to_string().contains("name must not contain ';'"),
        "unexpected error: {err}"
    );
}
