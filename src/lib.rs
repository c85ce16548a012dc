//! # Injectra
//!
//! A convention-driven dependency injection resolution engine for Rust.
//!
//! Injectra resolves the named inputs of a constructor or method against a
//! layered configuration registry, falls back to a naming convention when
//! the registry has no opinion, recursively constructs whatever the
//! resolution requires, and threads freshly constructed instances through
//! registered decorator chains.
//!
//! ## Features
//!
//! - **Name-keyed resolution**: parameters are matched by symbolic name
//!   (`mailer`, `current_user`), not by Rust type.
//! - **Convention fallback**: an unregistered name resolves to a loaded
//!   type by casing convention, namespace-first (`Notifiers::Mailer`
//!   before `Mailer`), plain before `_resolver`-suffixed.
//! - **Resolvers**: a `<name>_resolver` type produces the real value via
//!   its `call` method, itself fully injected.
//! - **Decorators**: ordered wrapper chains applied to every construction,
//!   each wrapper receiving the previous result by name.
//! - **Scoped registries**: per-request overrides chain to an
//!   application-wide registry without shared mutation.
//!
//! ## Quick Start
//!
//! ```rust
//! use injectra::{Injectables, Injector};
//! use injectra::typespace::{Object, Param, TypeDef, TypeSpace};
//! use std::sync::Arc;
//!
//! struct SmtpMailer;
//! struct Notifier {
//!     mailer: Object,
//! }
//!
//! // 1. Register constructible types with their signatures.
//! let space = TypeSpace::new();
//! space.register(
//!     TypeDef::new("SmtpMailer")
//!         .constructor(vec![], |_| Ok(Arc::new(SmtpMailer)))
//!         .build(),
//! );
//! space.register(
//!     TypeDef::new("Notifier")
//!         .constructor(vec![Param::required("mailer")], |mut args| {
//!             Ok(Arc::new(Notifier { mailer: args.remove(0) }))
//!         })
//!         .build(),
//! );
//!
//! // 2. Declare how names resolve.
//! let mut registry = Injectables::new();
//! registry.add_implementation("mailer", "smtp_mailer");
//!
//! // 3. Resolve.
//! let injector = Injector::new(Arc::new(space), Arc::new(registry));
//! let notifier = injector.construct("Notifier").unwrap();
//! assert_eq!(notifier.ident(), Some("Notifier"));
//!
//! let notifier = notifier.downcast::<Notifier>().unwrap();
//! assert_eq!(notifier.mailer.ident(), Some("SmtpMailer"));
//! ```

pub mod config;
pub mod convention;
pub mod error;
pub mod injector;
pub mod instantiator;
pub mod naming;
pub mod registry;
pub mod typespace;

// Re-export core types
pub use config::RegistryConfig;
pub use error::{InjectraError, Result};
pub use injector::{Injector, PRODUCTION_METHOD, Selector, Target};
pub use instantiator::{Category, Instantiator};
pub use registry::{Entry, Injectables, IntoDecorators};
pub use typespace::{Object, Param, TypeDef, TypeSpace};

/// Prelude module for convenient imports
///
/// ```
/// use injectra::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::RegistryConfig;
    pub use crate::error::{InjectraError, Result};
    pub use crate::injector::{Injector, Selector, Target};
    pub use crate::instantiator::{Category, Instantiator};
    pub use crate::registry::{Entry, Injectables};
    pub use crate::typespace::{Object, Param, TypeDef, TypeSpace};
    pub use std::sync::Arc;
}
