//! Mail-exchange resolution.
//!
//! [`check_mail_exchange`] is the only network-bound operation of the crate.
//! It runs an MX lookup, falls back to a host-address lookup (RFC 5321), and
//! gives up when the [`Deadline`] passes.

mod error;
mod resolver;
mod types;

pub use error::MxError as Error;
pub use resolver::{LookupMailHost, SystemResolver, check_mail_exchange};
pub use types::{Deadline, MailHost, MxRecord};
