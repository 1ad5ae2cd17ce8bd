//! Username (local part) rules.
//!
//! Each provider can register its own rule keyed by the exact domain; every
//! other domain goes through [`default_rule`].

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use super::types::EmailError;

/// A rule receives the local part and accepts it or names the violation.
pub type UsernameRule = Arc<dyn Fn(&str) -> Result<(), EmailError> + Send + Sync>;

/// Minimum length of a Gmail username, dots excluded.
pub const GMAIL_MIN_LEN: usize = 6;

#[derive(Clone)]
pub struct UsernameRules {
    by_domain: HashMap<String, UsernameRule>,
}

impl UsernameRules {
    /// No provider rules: every domain uses the default rule.
    pub fn empty() -> Self {
        Self {
            by_domain: HashMap::new(),
        }
    }

    /// Built-in provider rules (`gmail.com`).
    pub fn builtin() -> Self {
        let mut rules = Self::empty();
        rules.register("gmail.com", gmail_rule);
        rules
    }

    /// Registers (or replaces) the rule for `domain`. The key is lowercased.
    pub fn register<F>(&mut self, domain: impl Into<String>, rule: F) -> &mut Self
    where
        F: Fn(&str) -> Result<(), EmailError> + Send + Sync + 'static,
    {
        let domain = domain.into().to_ascii_lowercase();
        self.by_domain.insert(domain, Arc::new(rule));
        self
    }

    pub fn has_rule(&self, domain: &str) -> bool {
        self.by_domain.contains_key(domain)
    }

    /// Applies the rule registered for exactly `domain`, else [`default_rule`].
    pub fn check(&self, local: &str, domain: &str) -> Result<(), EmailError> {
        match self.by_domain.get(domain) {
            Some(rule) => rule(local),
            None => default_rule(local),
        }
    }
}

impl Default for UsernameRules {
    fn default() -> Self {
        Self::builtin()
    }
}

impl fmt::Debug for UsernameRules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut domains: Vec<&str> = self.by_domain.keys().map(String::as_str).collect();
        domains.sort_unstable();
        f.debug_struct("UsernameRules")
            .field("domains", &domains)
            .finish()
    }
}

/// Whitespace anywhere, or a dot in first or last position, is rejected.
pub fn default_rule(local: &str) -> Result<(), EmailError> {
    for (index, character) in local.char_indices() {
        match character {
            ' ' | '\t' | '\n' => return Err(EmailError::invalid_char(character, index)),
            '.' if is_edge(local, index, character) => {
                return Err(EmailError::invalid_char(character, index));
            }
            _ => {}
        }
    }
    Ok(())
}

/// Gmail: `username[+tag]`. The username must not contain separators nor
/// start or end with a dot, and needs [`GMAIL_MIN_LEN`] characters once dots
/// are ignored. The tag only forbids the separators.
pub fn gmail_rule(local: &str) -> Result<(), EmailError> {
    let (username, tag) = match local.split_once('+') {
        Some((username, tag)) => (username, Some(tag)),
        None => (local, None),
    };

    let mut effective = 0;
    for (index, character) in username.char_indices() {
        if is_gmail_forbidden(character) {
            return Err(EmailError::invalid_char(character, index));
        }
        if character == '.' {
            if is_edge(username, index, character) {
                return Err(EmailError::invalid_char(character, index));
            }
            continue;
        }
        effective += 1;
    }

    if effective < GMAIL_MIN_LEN {
        return Err(EmailError::UsernameTooShort {
            effective,
            minimum: GMAIL_MIN_LEN,
        });
    }

    if let Some(tag) = tag {
        // l'index reste relatif à la partie locale complète
        let offset = username.len() + 1;
        if let Some((index, character)) = tag.char_indices().find(|(_, c)| is_gmail_forbidden(*c)) {
            return Err(EmailError::invalid_char(character, offset + index));
        }
    }

    Ok(())
}

fn is_gmail_forbidden(c: char) -> bool {
    matches!(c, ' ' | '\n' | '\t' | '&' | '-' | '_' | '<' | '>' | ',')
}

fn is_edge(s: &str, index: usize, c: char) -> bool {
    index == 0 || index + c.len_utf8() == s.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::ErrorKind;

    fn kind(res: Result<(), EmailError>) -> Option<ErrorKind> {
        res.err().map(|e| e.kind())
    }

    #[test]
    fn default_rule_dots() {
        assert!(default_rule("a.b.c").is_ok());
        assert_eq!(kind(default_rule(".fail")), Some(ErrorKind::InvalidCharacter));
        assert_eq!(kind(default_rule("fail.")), Some(ErrorKind::InvalidCharacter));
        assert!(default_rule("a..b").is_ok());
    }

    #[test]
    fn default_rule_whitespace() {
        for local in ["fa il", "fa\til", "fa\nil"] {
            assert_eq!(kind(default_rule(local)), Some(ErrorKind::InvalidCharacter), "{local:?}");
        }
        assert!(default_rule("under_score-dash+tag").is_ok());
    }

    #[test]
    fn gmail_accepts_dotted_and_tagged() {
        assert!(gmail_rule("test.with.dot").is_ok());
        assert!(gmail_rule("test.with.dot+extra").is_ok());
        assert!(gmail_rule("faillong+.tag.").is_ok());
    }

    #[test]
    fn gmail_dot_position() {
        assert_eq!(kind(gmail_rule(".failure")), Some(ErrorKind::InvalidCharacter));
        assert_eq!(kind(gmail_rule("failure.")), Some(ErrorKind::InvalidCharacter));
        assert_eq!(kind(gmail_rule("failure.+extra")), Some(ErrorKind::InvalidCharacter));
    }

    #[test]
    fn gmail_minimum_length_ignores_dots() {
        assert_eq!(
            gmail_rule("fail").unwrap_err(),
            EmailError::UsernameTooShort { effective: 4, minimum: 6 }
        );
        assert_eq!(kind(gmail_rule("f.a.i.l.s")), Some(ErrorKind::UsernameTooShort));
        assert_eq!(kind(gmail_rule("fail+extralong")), Some(ErrorKind::UsernameTooShort));
        assert!(gmail_rule("sixsix").is_ok());
    }

    #[test]
    fn gmail_forbidden_characters() {
        for local in ["fa illong", "fail<user>", "fail_long", "fail-long", "fail&long", "fail,long"] {
            assert_eq!(kind(gmail_rule(local)), Some(ErrorKind::InvalidCharacter), "{local}");
        }
        for local in ["faillong+ex tra", "faillong+ex,tra", "faillong+ex-tra"] {
            assert_eq!(kind(gmail_rule(local)), Some(ErrorKind::InvalidCharacter), "{local}");
        }
    }

    #[test]
    fn gmail_tag_error_index_is_absolute() {
        let err = gmail_rule("faillong+ab,c").unwrap_err();
        assert_eq!(err, EmailError::InvalidCharacter { character: ',', index: 11 });
    }

    #[test]
    fn dispatch_is_exact_domain_match() {
        let rules = UsernameRules::builtin();
        assert!(rules.has_rule("gmail.com"));
        assert_eq!(kind(rules.check("fail", "gmail.com")), Some(ErrorKind::UsernameTooShort));
        // lookalike subdomain falls back to the default rule
        assert!(rules.check("fail", "mail.gmail.com").is_ok());
        assert!(rules.check("fail_x", "example.com").is_ok());
    }

    #[test]
    fn custom_rule_registration() {
        let mut rules = UsernameRules::empty();
        rules.register("Corp.Example", |local: &str| {
            if local.chars().all(|c| c.is_ascii_lowercase()) {
                Ok(())
            } else {
                Err(EmailError::InvalidCharacter { character: '?', index: 0 })
            }
        });
        assert!(rules.check("alice", "corp.example").is_ok());
        assert!(rules.check("Alice", "corp.example").is_err());
        assert!(rules.check("fail", "gmail.com").is_ok());
        assert!(format!("{rules:?}").contains("corp.example"));
    }
}
