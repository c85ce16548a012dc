//! Category front-end: maps a `(name, category)` pair to a type identifier
//! and delegates to the engine's construction call.

use strum_macros::{Display, EnumString};

use crate::error::Result;
use crate::injector::Injector;
use crate::naming;
use crate::typespace::Object;

/// Instantiation category. Services live in a namespace named after the
/// thing being served (`pictures/create` -> `Pictures::Create::Service`);
/// policies are flat (`signed_in` -> `SignedInPolicy`). The asymmetry is
/// deliberate and load-bearing for the naming convention.
#[derive(Clone, Copy, Debug, Display, EnumString, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
pub enum Category {
    Service,
    Policy,
}

/// Convenience front-end over the [`Injector`]. No caching: each call
/// re-resolves and re-constructs.
#[derive(Clone)]
pub struct Instantiator {
    injector: Injector,
}

impl Instantiator {
    pub fn new(injector: Injector) -> Self {
        Self { injector }
    }

    pub fn call(&self, name: &str, category: Category) -> Result<Object> {
        let symbolic = match category {
            Category::Service => naming::join(name, &category.to_string()),
            Category::Policy => naming::with_suffix(name, &category.to_string()),
        };
        let ident = naming::classify(&symbolic);
        tracing::debug!(name, %category, %ident, "Instantiating");
        self.injector.construct(ident)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Injectables;
    use crate::typespace::{TypeDef, TypeSpace};
    use std::sync::Arc;

    struct Unit;

    fn instantiator(idents: &[&str]) -> Instantiator {
        let space = TypeSpace::new();
        for ident in idents {
            space.register(
                TypeDef::new(*ident)
                    .constructor(vec![], |_| Ok(Arc::new(Unit)))
                    .build(),
            );
        }
        Instantiator::new(Injector::new(
            Arc::new(space),
            Arc::new(Injectables::new()),
        ))
    }

    #[test]
    fn services_are_located_inside_their_namespace() {
        let instantiator = instantiator(&["My::Service"]);
        let result = instantiator.call("my", Category::Service).unwrap();
        assert_eq!(result.ident(), Some("My::Service"));
    }

    #[test]
    fn nested_service_names_namespace_each_segment() {
        let instantiator = instantiator(&["Pictures::Create::Service"]);
        let result = instantiator
            .call("pictures/create", Category::Service)
            .unwrap();
        assert_eq!(result.ident(), Some("Pictures::Create::Service"));
    }

    #[test]
    fn policies_are_flat() {
        let instantiator = instantiator(&["MyPolicy"]);
        let result = instantiator.call("my", Category::Policy).unwrap();
        assert_eq!(result.ident(), Some("MyPolicy"));
    }

    #[test]
    fn category_names_serialize_snake_case() {
        assert_eq!(Category::Service.to_string(), "service");
        assert_eq!(Category::Policy.to_string(), "policy");
        assert_eq!("policy".parse::<Category>().unwrap(), Category::Policy);
    }

    #[test]
    fn each_call_constructs_a_fresh_instance() {
        let instantiator = instantiator(&["MyPolicy"]);
        let first = instantiator.call("my", Category::Policy).unwrap();
        let second = instantiator.call("my", Category::Policy).unwrap();
        assert!(!first.same_instance(&second));
    }
}
