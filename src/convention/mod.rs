//! Naming-convention fallback for `Unknown` registry entries.
//!
//! Explicit registry entries never come through here; this search runs only
//! when the registry has no opinion on a parameter name.

use crate::error::{InjectraError, Result};
use crate::naming;
use crate::registry::Entry;
use crate::typespace::TypeSpace;

/// Suffix a resolver type carries on its final segment.
pub const RESOLVER_SUFFIX: &str = "resolver";

/// Classifies an `Unknown` symbolic name as `Implementation` or `Resolver`
/// by probing the type space, namespace-first.
///
/// For each namespace candidate in `[namespace, global]`, the plain
/// identifier is probed before the `_resolver`-suffixed one. The returned
/// entry carries the namespace-qualified base name without the suffix; the
/// engine's resolver branch appends the suffix uniformly.
///
/// No hit at all is an [`InjectraError::UnresolvableDependency`] carrying
/// every identifier probed, in order.
pub fn classify_unknown(space: &TypeSpace, name: &str, namespace: Option<&str>) -> Result<Entry> {
    let mut searched = Vec::new();
    let mut namespaces: Vec<Option<&str>> = Vec::with_capacity(2);
    if let Some(ns) = namespace {
        namespaces.push(Some(ns));
    }
    namespaces.push(None);

    for ns in namespaces {
        let qualified = match ns {
            Some(ns) => naming::join(ns, name),
            None => name.to_string(),
        };
        for suffix in [None, Some(RESOLVER_SUFFIX)] {
            let candidate = match suffix {
                Some(suffix) => naming::with_suffix(&qualified, suffix),
                None => qualified.clone(),
            };
            let ident = naming::classify(&candidate);
            tracing::trace!(name, candidate = %ident, "Probing convention candidate");
            if space.contains(&ident) {
                return Ok(match suffix {
                    None => Entry::Implementation(qualified),
                    Some(_) => Entry::Resolver(qualified),
                });
            }
            searched.push(ident);
        }
    }

    Err(InjectraError::UnresolvableDependency {
        name: name.to_string(),
        searched,
    })
}
