use super::*;

#[test]
fn validate_registration_input_trims_name_and_email() {
    assert_eq!(
        validate_registration_input("  Mona  ", " mona@example.com ", "secret1", "secret1"),
        Ok(Registration {
            name: "Mona".to_owned(),
            email: "mona@example.com".to_owned(),
            password: "secret1".to_owned(),
        })
    );
}

#[test]
fn validate_registration_input_requires_every_field() {
    let expected = Err("Fill in your name, email and password.");
    assert_eq!(validate_registration_input("   ", "a@b.com", "secret1", "secret1"), expected);
    assert_eq!(validate_registration_input("Mona", "", "secret1", "secret1"), expected);
    assert_eq!(validate_registration_input("Mona", "a@b.com", "", ""), expected);
}

#[test]
fn validate_registration_input_rejects_mismatched_confirmation() {
    assert_eq!(
        validate_registration_input("Mona", "a@b.com", "secret1", "secret2"),
        Err("Passwords do not match.")
    );
}

#[test]
fn validate_registration_input_enforces_minimum_length() {
    assert_eq!(
        validate_registration_input("Mona", "a@b.com", "abc12", "abc12"),
        Err("Password must be at least 6 characters.")
    );
    assert!(validate_registration_input("Mona", "a@b.com", "abc123", "abc123").is_ok());
}
