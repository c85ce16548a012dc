//! Symbolic-name / type-identifier naming convention.
//!
//! Symbolic names are lower snake-case segments joined by `/`
//! (`notifiers/email_mailer`); fully-qualified type identifiers are
//! UpperCamelCase segments joined by `::` (`Notifiers::EmailMailer`).
//! The two transforms are exact inverses for well-formed symbolic names,
//! which is what makes a symbolic name a stable injection-point key.

use heck::{ToSnakeCase, ToUpperCamelCase};

/// Segment separator in symbolic names.
pub const SYMBOLIC_SEP: &str = "/";

/// Segment separator in fully-qualified type identifiers.
pub const IDENT_SEP: &str = "::";

/// Converts a symbolic name to its fully-qualified type identifier.
///
/// ```
/// assert_eq!(injectra::naming::classify("notifiers/email_mailer"), "Notifiers::EmailMailer");
/// ```
pub fn classify(symbolic: &str) -> String {
    symbolic
        .split(SYMBOLIC_SEP)
        .map(|segment| segment.to_upper_camel_case())
        .collect::<Vec<_>>()
        .join(IDENT_SEP)
}

/// Converts a fully-qualified type identifier back to its symbolic name.
/// Exact inverse of [`classify`].
pub fn symbolize(ident: &str) -> String {
    ident
        .split(IDENT_SEP)
        .map(|segment| segment.to_snake_case())
        .collect::<Vec<_>>()
        .join(SYMBOLIC_SEP)
}

/// The namespace of a symbolic name: everything up to the last segment.
/// `None` for single-segment names.
pub fn namespace_of(symbolic: &str) -> Option<&str> {
    symbolic.rsplit_once(SYMBOLIC_SEP).map(|(ns, _)| ns)
}

/// Namespace-qualifies a symbolic name.
pub fn join(namespace: &str, symbolic: &str) -> String {
    format!("{namespace}{SYMBOLIC_SEP}{symbolic}")
}

/// Appends a suffix to the final segment of a symbolic name
/// (`current_user` + `resolver` -> `current_user_resolver`).
pub fn with_suffix(symbolic: &str, suffix: &str) -> String {
    format!("{symbolic}_{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_flat_names() {
        assert_eq!(classify("mailer"), "Mailer");
        assert_eq!(classify("smtp_mailer"), "SmtpMailer");
    }

    #[test]
    fn classifies_namespaced_names() {
        assert_eq!(classify("notifiers/email_mailer"), "Notifiers::EmailMailer");
        assert_eq!(classify("a/b/c"), "A::B::C");
    }

    #[test]
    fn symbolize_is_the_inverse_of_classify() {
        for name in ["mailer", "smtp_mailer", "notifiers/email_mailer", "a/b/c"] {
            assert_eq!(symbolize(&classify(name)), name);
        }
    }

    #[test]
    fn namespace_of_splits_off_the_last_segment() {
        assert_eq!(namespace_of("notifiers/email"), Some("notifiers"));
        assert_eq!(namespace_of("a/b/c"), Some("a/b"));
        assert_eq!(namespace_of("mailer"), None);
    }

    #[test]
    fn join_and_suffix() {
        assert_eq!(join("accounts", "current_user"), "accounts/current_user");
        assert_eq!(
            with_suffix("current_user", "resolver"),
            "current_user_resolver"
        );
        assert_eq!(
            classify(&with_suffix("accounts/current_user", "resolver")),
            "Accounts::CurrentUserResolver"
        );
    }
}
