mod address;
mod local;
mod types;

pub use address::{EmailParts, MAX_ADDRESS_LEN, MAX_LOCAL_LEN, decompose};
pub use local::{GMAIL_MIN_LEN, UsernameRule, UsernameRules, default_rule, gmail_rule};
pub use types::{EmailError, ErrorKind, Options, ValidationResult, ValidationState};

use std::sync::{Arc, LazyLock};

use tracing::debug;

use crate::mx::{Deadline, LookupMailHost, SystemResolver, check_mail_exchange};
use crate::tables::ClassificationTables;
use address::check_lengths;

static DEFAULT_VALIDATOR: LazyLock<Validator> = LazyLock::new(Validator::new);

/// Validates `address` with the built-in tables and rules.
///
/// No network access happens unless `options.enable_mx_check` is set.
pub fn validate(address: &str, options: &Options) -> Result<ValidationResult, EmailError> {
    DEFAULT_VALIDATOR.validate(address, options)
}

/// Like [`validate`], with `deadline` also bounding the MX step.
pub fn validate_with_deadline(
    deadline: Deadline,
    address: &str,
    options: &Options,
) -> Result<ValidationResult, EmailError> {
    DEFAULT_VALIDATOR.validate_with_deadline(deadline, address, options)
}

/// Validation engine: classification tables, username rules and the
/// mail-host lookup. Immutable once built; share it freely.
#[derive(Clone)]
pub struct Validator {
    tables: ClassificationTables,
    rules: UsernameRules,
    lookup: Arc<dyn LookupMailHost>,
}

impl Validator {
    pub fn new() -> Self {
        Self {
            tables: ClassificationTables::builtin(),
            rules: UsernameRules::builtin(),
            lookup: Arc::new(SystemResolver),
        }
    }

    pub fn with_tables(mut self, tables: ClassificationTables) -> Self {
        self.tables = tables;
        self
    }

    pub fn with_rules(mut self, rules: UsernameRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn with_lookup<L: LookupMailHost + 'static>(self, lookup: L) -> Self {
        self.with_shared_lookup(Arc::new(lookup))
    }

    pub fn with_shared_lookup(mut self, lookup: Arc<dyn LookupMailHost>) -> Self {
        self.lookup = lookup;
        self
    }

    pub fn tables(&self) -> &ClassificationTables {
        &self.tables
    }

    pub fn rules(&self) -> &UsernameRules {
        &self.rules
    }

    pub fn validate(&self, address: &str, options: &Options) -> Result<ValidationResult, EmailError> {
        self.run(address, options, None)
    }

    pub fn validate_with_deadline(
        &self,
        deadline: Deadline,
        address: &str,
        options: &Options,
    ) -> Result<ValidationResult, EmailError> {
        self.run(address, options, Some(deadline))
    }

    fn run(
        &self,
        address: &str,
        options: &Options,
        outer: Option<Deadline>,
    ) -> Result<ValidationResult, EmailError> {
        options.ensure_valid()?;
        check_lengths(address)?;
        let parts = decompose(address)?;

        if !self.tables.is_valid_tld(&parts.tld) {
            return Err(EmailError::UnknownTld(parts.tld));
        }

        self.rules.check(&parts.local, &parts.domain)?;

        let disposable = self.tables.is_disposable(&parts.domain);
        let free_provider = self.tables.is_free_provider(&parts.domain);
        let mut result = ValidationResult {
            free_provider: free_provider.into(),
            disposable: disposable.into(),
            mail_exchange: ValidationState::NotChecked,
            blacklist: self.tables.is_blacklisted(&parts.local).into(),
        };

        let known_resolved = disposable || free_provider;
        if !should_check_mx(options, known_resolved) {
            if options.enable_mx_check {
                debug!(domain = %parts.domain, "MX check skipped, domain already classified");
            }
            return Ok(result);
        }

        let mut deadline = Deadline::after(options.mx_timeout);
        if let Some(outer) = outer {
            deadline = deadline.earliest(outer);
        }

        // un échec DNS n'est pas une erreur de validation
        result.mail_exchange = match check_mail_exchange(Arc::clone(&self.lookup), &parts.domain, deadline) {
            Ok(host) => {
                debug!(domain = %parts.domain, ?host, "mail exchange found");
                ValidationState::True
            }
            Err(err) => {
                debug!(domain = %parts.domain, error = %err, "mail exchange check failed");
                ValidationState::False
            }
        };

        Ok(result)
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Validator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Validator")
            .field("tables", &self.tables)
            .field("rules", &self.rules)
            .finish_non_exhaustive()
    }
}

/// MX runs when requested, and for disposable/free domains only when forced.
fn should_check_mx(options: &Options, known_resolved: bool) -> bool {
    options.enable_mx_check && (!known_resolved || options.force_mx_check)
}

#[cfg(test)]
mod tests;
