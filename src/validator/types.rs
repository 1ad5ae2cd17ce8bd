use std::time::Duration;

use thiserror::Error;

/// Outcome of one optional check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationState {
    /// The check did not run.
    #[default]
    NotChecked,
    True,
    False,
}

impl ValidationState {
    pub fn is_true(self) -> bool {
        matches!(self, Self::True)
    }

    pub fn as_option(self) -> Option<bool> {
        match self {
            Self::NotChecked => None,
            Self::True => Some(true),
            Self::False => Some(false),
        }
    }
}

impl From<bool> for ValidationState {
    fn from(value: bool) -> Self {
        if value { Self::True } else { Self::False }
    }
}

// null / true / false, rien d'autre
#[cfg(feature = "with-serde")]
impl serde::Serialize for ValidationState {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::NotChecked => serializer.serialize_none(),
            Self::True => serializer.serialize_bool(true),
            Self::False => serializer.serialize_bool(false),
        }
    }
}

#[cfg(feature = "with-serde")]
impl<'de> serde::Deserialize<'de> for ValidationState {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = <Option<bool> as serde::Deserialize>::deserialize(deserializer)?;
        Ok(match value {
            None => Self::NotChecked,
            Some(flag) => flag.into(),
        })
    }
}

/// Classification of one address. Disposable, free-provider and blacklist are
/// always set on success; `mail_exchange` stays [`ValidationState::NotChecked`]
/// unless the resolver ran.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidationResult {
    pub free_provider: ValidationState,
    pub disposable: ValidationState,
    #[cfg_attr(feature = "with-serde", serde(rename = "mx_validation"))]
    pub mail_exchange: ValidationState,
    #[cfg_attr(feature = "with-serde", serde(rename = "black_list"))]
    pub blacklist: ValidationState,
}

/// Per-call settings.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Options {
    pub enable_mx_check: bool,
    /// Upper bound for the whole MX step. Must be at least one microsecond
    /// when `enable_mx_check` is set.
    pub mx_timeout: Duration,
    /// Run the MX step even for domains already known disposable or free.
    pub force_mx_check: bool,
}

impl Options {
    pub const MIN_MX_TIMEOUT: Duration = Duration::from_micros(1);

    /// Enables the MX step.
    pub fn with_mx_check(timeout: Duration, force: bool) -> Result<Self, EmailError> {
        let options = Self {
            enable_mx_check: true,
            mx_timeout: timeout,
            force_mx_check: force,
        };
        options.ensure_valid()?;
        Ok(options)
    }

    pub fn ensure_valid(&self) -> Result<(), EmailError> {
        if self.enable_mx_check && self.mx_timeout < Self::MIN_MX_TIMEOUT {
            return Err(EmailError::InvalidConfiguration(format!(
                "MX timeout {:?} is below {:?}",
                self.mx_timeout,
                Self::MIN_MX_TIMEOUT
            )));
        }
        Ok(())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EmailError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("address length {len} > 254")]
    AddressTooLong { len: usize },
    #[error("local part length {len} > 64")]
    LocalPartTooLong { len: usize },
    #[error("malformed address: {0}")]
    MalformedAddress(String),
    #[error("unknown top-level domain '{0}'")]
    UnknownTld(String),
    #[error("invalid character {character:?} at index {index} in local part")]
    InvalidCharacter { character: char, index: usize },
    #[error("username too short: {effective} < {minimum}")]
    UsernameTooShort { effective: usize, minimum: usize },
}

impl EmailError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidConfiguration(_) => ErrorKind::InvalidConfiguration,
            Self::AddressTooLong { .. } => ErrorKind::AddressTooLong,
            Self::LocalPartTooLong { .. } => ErrorKind::LocalPartTooLong,
            Self::MalformedAddress(_) => ErrorKind::MalformedAddress,
            Self::UnknownTld(_) => ErrorKind::UnknownTld,
            Self::InvalidCharacter { .. } => ErrorKind::InvalidCharacter,
            Self::UsernameTooShort { .. } => ErrorKind::UsernameTooShort,
        }
    }

    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedAddress(reason.into())
    }

    pub(crate) fn invalid_char(character: char, index: usize) -> Self {
        Self::InvalidCharacter { character, index }
    }
}

/// Field-less view of [`EmailError`].
#[cfg_attr(
    feature = "with-serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidConfiguration,
    AddressTooLong,
    LocalPartTooLong,
    MalformedAddress,
    UnknownTld,
    InvalidCharacter,
    UsernameTooShort,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InvalidConfiguration => "invalid_configuration",
            Self::AddressTooLong => "address_too_long",
            Self::LocalPartTooLong => "local_part_too_long",
            Self::MalformedAddress => "malformed_address",
            Self::UnknownTld => "unknown_tld",
            Self::InvalidCharacter => "invalid_character",
            Self::UsernameTooShort => "username_too_short",
        }
    }
}
