#![forbid(unsafe_code)]
//! mailsift_lib : classification d'adresses e-mail.
//!
//! Beyond a pragmatic syntax check, [`validate`] tells whether the domain is a
//! disposable or free provider, whether the local part is a blacklisted role
//! account, and optionally whether the domain can receive mail.
//!
//! ```no_run
//! use std::time::Duration;
//! use mailsift_lib::{Options, ValidationState, validate};
//!
//! let options = Options::with_mx_check(Duration::from_secs(2), false)?;
//! let res = validate("someone@example.com", &options)?;
//! assert_eq!(res.disposable, ValidationState::False);
//! # Ok::<(), mailsift_lib::EmailError>(())
//! ```

pub mod mx;
pub mod tables;
pub mod validator;

pub use mx::{Deadline, Error as MxError, LookupMailHost, MailHost, MxRecord, SystemResolver};
pub use tables::{ClassificationTables, DomainSet, load_domain_list, parse_domain_list};
pub use validator::{
    EmailError, EmailParts, ErrorKind, Options, UsernameRules, ValidationResult, ValidationState,
    Validator, decompose, validate, validate_with_deadline,
};
