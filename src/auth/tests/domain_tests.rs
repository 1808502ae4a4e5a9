//! Unit tests for auth domain types.

use crate::auth::domain::{AuthDomainError, Email, User, UserId};
use mockable::DefaultClock;
use rstest::rstest;

#[rstest]
#[case("alice@example.com")]
#[case("  bob@example.org  ")]
#[case("first.last@sub.domain.io")]
fn email_accepts_plausible_addresses(#[case] raw: &str) {
    let email = Email::new(raw).expect("address should validate");
    assert_eq!(email.as_str(), raw.trim());
}

#[rstest]
#[case("")]
#[case("plainaddress")]
#[case("@no-local.com")]
#[case("no-domain@")]
#[case("two@@example.com")]
#[case("spaced name@example.com")]
fn email_rejects_malformed_addresses(#[case] raw: &str) {
    let result = Email::new(raw);
    assert!(matches!(result, Err(AuthDomainError::InvalidEmail(_))));
}

#[rstest]
fn user_ids_are_unique() {
    assert_ne!(UserId::new(), UserId::new());
}

#[rstest]
fn new_user_carries_registration_data() {
    let email = Email::new("carol@example.com").expect("valid address");
    let user = User::new(email.clone(), "$argon2id$stub".to_owned(), &DefaultClock);

    assert_eq!(user.email(), &email);
    assert_eq!(user.password_hash(), "$argon2id$stub");
}

#[rstest]
fn user_round_trips_through_persisted_form() {
    let email = Email::new("dave@example.com").expect("valid address");
    let user = User::new(email, "$argon2id$stub".to_owned(), &DefaultClock);

    let restored = User::from_persisted(crate::auth::domain::PersistedUserData {
        id: user.id(),
        email: user.email().clone(),
        password_hash: user.password_hash().to_owned(),
        created_at: user.created_at(),
    });

    assert_eq!(restored, user);
}
