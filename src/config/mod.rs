//! Declarative registry configuration.
//!
//! Resolver, implementation, and decorator declarations can be loaded from
//! data (JSON, TOML, anything serde-deserializable) and turned into an
//! [`Injectables`] registry. Value entries are runtime objects and are
//! added programmatically.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::registry::Injectables;

/// Deserializable set of registry declarations.
///
/// # Example
/// ```
/// let config: injectra::config::RegistryConfig = serde_json::from_str(
///     r#"{
///         "implementations": { "mailer": "smtp_mailer" },
///         "resolvers": { "current_user": "session" },
///         "decorators": { "mailer": ["logging_mailer"] }
///     }"#,
/// )
/// .unwrap();
/// let registry = config.into_injectables();
/// assert_eq!(registry.decorators("mailer"), vec!["logging_mailer"]);
/// ```
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegistryConfig {
    #[serde(default)]
    pub resolvers: BTreeMap<String, String>,

    #[serde(default)]
    pub implementations: BTreeMap<String, String>,

    #[serde(default)]
    pub decorators: BTreeMap<String, Vec<String>>,
}

impl RegistryConfig {
    /// Builds a registry from the declarations.
    pub fn into_injectables(self) -> Injectables {
        let mut registry = Injectables::new();
        for (name, resolver) in self.resolvers {
            registry.add_resolver(name, resolver);
        }
        for (name, implementation) in self.implementations {
            registry.add_implementation(name, implementation);
        }
        for (base, decorators) in self.decorators {
            registry.add_decorators(base, decorators);
        }
        registry
    }
}
