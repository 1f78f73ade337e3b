use super::*;

fn form(email: &str, phone: &str) -> ContactForm {
    ContactForm { email: email.into(), phone: phone.into(), ..ContactForm::default() }
}

// =============================================================
// is_valid_phone
// =============================================================

#[test]
fn phone_accepts_plain_and_plus_prefixed_digits() {
    assert!(is_valid_phone("0244123456"));
    assert!(is_valid_phone("+233244123456"));
    assert!(is_valid_phone("123456789012345"));
}

#[test]
fn phone_rejects_wrong_length_or_characters() {
    assert!(!is_valid_phone("024412345"));
    assert!(!is_valid_phone("1234567890123456"));
    assert!(!is_valid_phone("024-412-3456"));
    assert!(!is_valid_phone("++233244123456"));
    assert!(!is_valid_phone("+"));
}

// =============================================================
// ContactForm::validate
// =============================================================

#[test]
fn empty_email_and_phone_blocks_submission() {
    let err = form("", "").validate().unwrap_err();
    assert_eq!(err, FormError::MissingContact);
    assert_eq!(err.to_string(), "Please provide either an email or phone number.");
}

#[test]
fn whitespace_only_contact_counts_as_empty() {
    assert_eq!(form("   ", "\t").validate(), Err(FormError::MissingContact));
}

#[test]
fn email_alone_is_enough() {
    assert_eq!(form("ama@example.com", "").validate(), Ok(()));
}

#[test]
fn invalid_phone_is_rejected_even_with_email() {
    let err = form("ama@example.com", "12345").validate().unwrap_err();
    assert_eq!(err, FormError::InvalidPhone);
    assert!(err.to_string().contains("10-15 digits"));
}

#[test]
fn trimmed_phone_alone_is_enough() {
    assert_eq!(form("", "  +233244123456 ").validate(), Ok(()));
}

#[test]
fn present_optional_fields_are_checked() {
    let mut f = form("ama@example.com", "");
    f.name = Some("A".into());
    assert_eq!(f.validate(), Err(FormError::NameTooShort));

    f.name = Some("Ama".into());
    f.request_type = Some("repair".into());
    assert_eq!(f.validate(), Err(FormError::InvalidRequestType));

    f.request_type = Some("alteration".into());
    f.message = Some("  ".into());
    assert_eq!(f.validate(), Err(FormError::MissingMessage));

    f.message = Some("Please hem my trousers".into());
    assert_eq!(f.validate(), Ok(()));
}

#[test]
fn request_type_parses_known_values() {
    assert_eq!("custom".parse::<RequestType>(), Ok(RequestType::Custom));
    assert_eq!("consultation".parse::<RequestType>(), Ok(RequestType::Consultation));
}
