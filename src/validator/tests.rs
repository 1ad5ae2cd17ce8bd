use std::sync::Arc;
use std::time::{Duration, Instant};

use proptest::prelude::*;

use super::*;
use crate::mx::tests::StubLookup;
use crate::tables::DomainSet;

struct Fixture {
    email: &'static str,
    free: ValidationState,
    disposable: ValidationState,
    blacklist: ValidationState,
}

const T: ValidationState = ValidationState::True;
const F: ValidationState = ValidationState::False;

fn offline() -> Validator {
    Validator::new().with_lookup(StubLookup::failing())
}

fn fail_kind(email: &str) -> ErrorKind {
    offline()
        .validate(email, &Options::default())
        .expect_err(email)
        .kind()
}

#[test]
fn classification_fixtures() {
    let fixtures = [
        Fixture { email: "test.with.dot@gmail.com", free: T, disposable: F, blacklist: F },
        Fixture { email: "test.with.dot+extra@gmail.com", free: T, disposable: F, blacklist: F },
        Fixture { email: "test@things.10mail.org", free: F, disposable: T, blacklist: F },
        Fixture { email: "test@things.more.10mail.org", free: F, disposable: T, blacklist: F },
        Fixture { email: "iub65391@bcaoo.com", free: F, disposable: T, blacklist: F },
        Fixture { email: "abuse@example.com", free: F, disposable: F, blacklist: T },
        Fixture { email: "Abuse@Example.com", free: F, disposable: F, blacklist: T },
        Fixture { email: "@example.com", free: F, disposable: F, blacklist: F },
        Fixture { email: "a@example..com", free: F, disposable: F, blacklist: F },
    ];

    for fx in fixtures {
        let res = offline()
            .validate(fx.email, &Options::default())
            .unwrap_or_else(|err| panic!("{}: {err}", fx.email));
        assert_eq!(res.free_provider, fx.free, "{}", fx.email);
        assert_eq!(res.disposable, fx.disposable, "{}", fx.email);
        assert_eq!(res.blacklist, fx.blacklist, "{}", fx.email);
        assert_eq!(res.mail_exchange, ValidationState::NotChecked, "{}", fx.email);
    }
}

#[test]
fn failure_fixtures() {
    let cases = [
        ("fail@iub65391@bcaoo.com", ErrorKind::MalformedAddress),
        ("fail@localhost", ErrorKind::MalformedAddress),
        ("fail@localhost.invalidtld", ErrorKind::UnknownTld),
        ("fa illong@gmail.com", ErrorKind::InvalidCharacter),
        ("fa il@mysite.com", ErrorKind::InvalidCharacter),
        (".fail@mysite.com", ErrorKind::InvalidCharacter),
        ("fail.@mysite.com", ErrorKind::InvalidCharacter),
        (".fail@gmail.com", ErrorKind::InvalidCharacter),
        ("fail.@gmail.com", ErrorKind::InvalidCharacter),
        ("fail@gmail.com", ErrorKind::UsernameTooShort),
        ("fail+extra@gmail.com", ErrorKind::UsernameTooShort),
        ("faillong+ex tra@gmail.com", ErrorKind::InvalidCharacter),
        ("faillong+ex,tra@gmail.com", ErrorKind::InvalidCharacter),
        ("fail.+extra@gmail.com", ErrorKind::InvalidCharacter),
        ("fail<user>@gmail.com", ErrorKind::InvalidCharacter),
        ("a@example.", ErrorKind::UnknownTld),
        ("@gmail.com", ErrorKind::UsernameTooShort),
    ];
    for (email, kind) in cases {
        assert_eq!(fail_kind(email), kind, "{email}");
    }

    let long_local = format!("{}@mydomain.com", "a".repeat(65));
    assert_eq!(fail_kind(&long_local), ErrorKind::LocalPartTooLong);
    let long_domain = format!("valid@mydomain{}.com", "a".repeat(255));
    assert_eq!(fail_kind(&long_domain), ErrorKind::AddressTooLong);
}

#[test]
fn tld_is_checked_before_username_rules() {
    assert_eq!(fail_kind(".fail@example.invalidtld"), ErrorKind::UnknownTld);
}

#[test]
fn gmail_rule_does_not_apply_to_subdomains() {
    let res = offline()
        .validate("fail@mail.gmail.com", &Options::default())
        .expect("default rule accepts short usernames");
    assert_eq!(res.free_provider, F);
}

#[test]
fn invalid_configuration_aborts_before_parsing() {
    let options = Options {
        enable_mx_check: true,
        mx_timeout: Duration::from_nanos(500),
        force_mx_check: false,
    };
    let err = offline().validate("not an address", &options).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidConfiguration);
}

#[test]
fn validation_is_idempotent() {
    let validator = offline();
    let options = Options::default();
    let first = validator.validate("test.with.dot@gmail.com", &options);
    let second = validator.validate("test.with.dot@gmail.com", &options);
    assert_eq!(first, second);
}

#[test]
fn free_function_uses_builtin_tables() {
    let res = validate("abuse@example.com", &Options::default()).expect("valid");
    assert_eq!(res.blacklist, T);
    assert_eq!(res.mail_exchange, ValidationState::NotChecked);
}

#[test]
fn mx_skipped_for_disposable_without_force() {
    let stub = Arc::new(StubLookup::answering());
    let validator = Validator::new().with_shared_lookup(stub.clone());
    let options = Options::with_mx_check(Duration::from_secs(1), false).unwrap();

    let res = validator.validate("test@things.10mail.org", &options).unwrap();
    assert_eq!(res.disposable, T);
    assert_eq!(res.mail_exchange, ValidationState::NotChecked);
    assert_eq!(stub.calls(), 0);

    let res = validator.validate("test.with.dot@gmail.com", &options).unwrap();
    assert_eq!(res.mail_exchange, ValidationState::NotChecked);
    assert_eq!(stub.calls(), 0);
}

#[test]
fn mx_forced_for_disposable() {
    let stub = Arc::new(StubLookup::answering());
    let validator = Validator::new().with_shared_lookup(stub.clone());
    let options = Options::with_mx_check(Duration::from_secs(1), true).unwrap();

    let res = validator.validate("test@things.10mail.org", &options).unwrap();
    assert_eq!(res.disposable, T);
    assert_eq!(res.mail_exchange, T);
    assert_eq!(stub.calls(), 1);
}

#[test]
fn mx_runs_for_unclassified_domain() {
    let stub = Arc::new(StubLookup::answering());
    let validator = Validator::new().with_shared_lookup(stub.clone());
    let options = Options::with_mx_check(Duration::from_secs(1), false).unwrap();

    let res = validator.validate("email@example.com", &options).unwrap();
    assert_eq!(res.mail_exchange, T);
    assert_eq!(res.disposable, F);
    assert_eq!(res.free_provider, F);
    assert_eq!(stub.calls(), 1);
}

#[test]
fn mx_failure_is_a_result_field_not_an_error() {
    let validator = offline();
    let options = Options::with_mx_check(Duration::from_secs(1), true).unwrap();
    let res = validator
        .validate("email@ifsomeonebuythisdomainthistestfails.com", &options)
        .expect("resolver failure must not fail the call");
    assert_eq!(res.mail_exchange, F);
    assert_eq!(res.disposable, F);
    assert_eq!(res.free_provider, F);
}

#[test]
fn mx_not_run_when_disabled() {
    let stub = Arc::new(StubLookup::answering());
    let validator = Validator::new().with_shared_lookup(stub.clone());
    let res = validator.validate("email@example.com", &Options::default()).unwrap();
    assert_eq!(res.mail_exchange, ValidationState::NotChecked);
    assert_eq!(stub.calls(), 0);
}

#[test]
fn caller_deadline_bounds_mx_step() {
    let stub = StubLookup::answering().with_delay(Duration::from_secs(2));
    let validator = Validator::new().with_lookup(stub);
    let options = Options::with_mx_check(Duration::from_secs(30), false).unwrap();

    let started = Instant::now();
    let res = validator
        .validate_with_deadline(Deadline::after(Duration::from_millis(50)), "email@example.com", &options)
        .unwrap();
    assert_eq!(res.mail_exchange, F);
    assert!(started.elapsed() < Duration::from_secs(1));
}

#[test]
fn mx_timeout_bounds_mx_step() {
    let stub = StubLookup::answering().with_delay(Duration::from_secs(2));
    let validator = Validator::new().with_lookup(stub);
    let options = Options::with_mx_check(Duration::from_millis(50), false).unwrap();

    let res = validator
        .validate_with_deadline(Deadline::after(Duration::from_secs(30)), "email@example.com", &options)
        .unwrap();
    assert_eq!(res.mail_exchange, F);
}

#[test]
fn custom_tables_and_rules() {
    let tables = ClassificationTables {
        disposable: DomainSet::from_entries(["burner.test"]),
        tlds: DomainSet::from_entries(["test"]),
        ..ClassificationTables::builtin()
    };
    let mut rules = UsernameRules::empty();
    rules.register("corp.test", |local: &str| {
        if local.contains('.') {
            Err(EmailError::InvalidCharacter { character: '.', index: local.find('.').unwrap_or(0) })
        } else {
            Ok(())
        }
    });
    let validator = offline().with_tables(tables).with_rules(rules);

    let res = validator.validate("someone@burner.test", &Options::default()).unwrap();
    assert_eq!(res.disposable, T);
    let err = validator.validate("first.last@corp.test", &Options::default()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidCharacter);
    // .com is not in the custom TLD table
    assert_eq!(
        validator.validate("someone@example.com", &Options::default()).unwrap_err().kind(),
        ErrorKind::UnknownTld
    );
}

proptest! {
    #[test]
    fn trailing_dot_means_unknown_tld(local in "[a-z]{1,20}", domain in "[a-z]{1,20}") {
        let address = format!("{local}@{domain}.");
        prop_assert_eq!(fail_kind(&address), ErrorKind::UnknownTld);
    }

    #[test]
    fn more_than_one_at_is_malformed(
        local in "[a-z]{1,20}",
        middle in "[a-z]{1,10}",
        domain in "[a-z]{1,10}\\.com",
    ) {
        let address = format!("{local}@{middle}@{domain}");
        prop_assert_eq!(fail_kind(&address), ErrorKind::MalformedAddress);
    }

    #[test]
    fn domain_without_dot_is_malformed(local in "[a-z]{6,20}", domain in "[a-z0-9-]{1,30}") {
        let address = format!("{local}@{domain}");
        prop_assert_eq!(fail_kind(&address), ErrorKind::MalformedAddress);
    }

    #[test]
    fn oversized_local_part(local in "[a-z]{65,100}") {
        let address = format!("{local}@example.com");
        prop_assert_eq!(fail_kind(&address), ErrorKind::LocalPartTooLong);
    }

    #[test]
    fn oversized_address(label in "[a-z]{60,63}", count in 4usize..8) {
        let domain = vec![label; count].join(".");
        let address = format!("user@{domain}.com");
        prop_assume!(address.len() > MAX_ADDRESS_LEN);
        prop_assert_eq!(fail_kind(&address), ErrorKind::AddressTooLong);
    }

    #[test]
    fn unknown_tld_wins_over_username(local in "[ ._a-z]{1,20}", tld in "zzq[a-z]{2,5}") {
        let address = format!("{local}@example.{tld}");
        prop_assert_eq!(fail_kind(&address), ErrorKind::UnknownTld);
    }
}
