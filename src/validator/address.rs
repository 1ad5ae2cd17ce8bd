use super::types::EmailError;

/// RFC 5321 path limit minus the angle brackets (erratum 1690).
pub const MAX_ADDRESS_LEN: usize = 254;
pub const MAX_LOCAL_LEN: usize = 64;

/// An address split at its single `@`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailParts {
    /// Kept verbatim.
    pub local: String,
    /// Lowercased.
    pub domain: String,
    /// Last label of `domain`.
    pub tld: String,
}

/// Length limits, counted in octets. The local part is whatever precedes the
/// first `@`; without any `@` only the total length is checked here.
pub(crate) fn check_lengths(address: &str) -> Result<(), EmailError> {
    if address.len() > MAX_ADDRESS_LEN {
        return Err(EmailError::AddressTooLong { len: address.len() });
    }
    if let Some((local, _)) = address.split_once('@') {
        if local.len() > MAX_LOCAL_LEN {
            return Err(EmailError::LocalPartTooLong { len: local.len() });
        }
    }
    Ok(())
}

/// Splits `address` into local part, domain and TLD.
pub fn decompose(address: &str) -> Result<EmailParts, EmailError> {
    let parts: Vec<&str> = address.split('@').collect();
    if parts.len() != 2 {
        return Err(EmailError::malformed(format!(
            "expected exactly one '@', found {}",
            parts.len() - 1
        )));
    }
    let (local, domain) = (parts[0], parts[1]);

    let domain = domain.to_lowercase();
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return Err(EmailError::malformed("domain must contain at least one dot"));
    }
    let tld = labels[labels.len() - 1].to_string();

    Ok(EmailParts {
        local: local.to_string(),
        domain,
        tld,
    })
}
