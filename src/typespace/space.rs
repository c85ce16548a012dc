use dashmap::DashMap;
use std::sync::Arc;

use crate::typespace::TypeDef;

/// Thread-safe registry of constructible types, keyed by fully-qualified
/// identifier. Populated at startup, read-only thereafter; shared freely
/// across injectors.
#[derive(Default)]
pub struct TypeSpace {
    types: DashMap<String, Arc<TypeDef>>,
}

impl Clone for TypeSpace {
    fn clone(&self) -> Self {
        Self {
            types: self.types.clone(),
        }
    }
}

impl TypeSpace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a type definition under its identifier. Last registration
    /// for an identifier wins.
    pub fn register(&self, def: TypeDef) -> &Self {
        tracing::debug!(ident = def.ident(), "Registered type");
        self.types.insert(def.ident().to_string(), Arc::new(def));
        self
    }

    pub fn lookup(&self, ident: &str) -> Option<Arc<TypeDef>> {
        self.types.get(ident).map(|entry| entry.clone())
    }

    pub fn contains(&self, ident: &str) -> bool {
        self.types.contains_key(ident)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
