//! The injectable registry: symbolic name -> resolution entry, plus
//! decorator lists and request-scoped context chaining.

use std::collections::HashMap;
use std::sync::Arc;

use crate::typespace::Object;

/// How a named injection point is satisfied.
///
/// `Unknown` is what [`Injectables::get`] synthesizes for unregistered
/// names; the engine hands it to the naming-convention search before use.
#[derive(Clone, Debug, PartialEq)]
pub enum Entry {
    /// An already-constructed instance or literal, injected verbatim.
    Value(Object),
    /// A symbolic name whose `_resolver`-suffixed type is constructed and
    /// asked to produce the real value.
    Resolver(String),
    /// A symbolic name whose type is constructed and used directly.
    Implementation(String),
    /// No explicit entry; classified by convention at resolution time.
    Unknown(String),
}

/// Conversion accepting a single decorator name or a sequence of them,
/// normalizing to a list and dropping empties.
pub trait IntoDecorators {
    fn into_decorators(self) -> Vec<String>;
}

impl IntoDecorators for &str {
    fn into_decorators(self) -> Vec<String> {
        if self.is_empty() {
            Vec::new()
        } else {
            vec![self.to_string()]
        }
    }
}

impl IntoDecorators for String {
    fn into_decorators(self) -> Vec<String> {
        if self.is_empty() { Vec::new() } else { vec![self] }
    }
}

impl<T: Into<String>> IntoDecorators for Vec<T> {
    fn into_decorators(self) -> Vec<String> {
        self.into_iter()
            .map(Into::into)
            .filter(|name| !name.is_empty())
            .collect()
    }
}

impl<T: Into<String> + Clone> IntoDecorators for &[T] {
    fn into_decorators(self) -> Vec<String> {
        self.to_vec().into_decorators()
    }
}

/// Layered configuration registry for one scope.
///
/// Created once per configuration scope (application-wide, then narrowed
/// per unit of work) and consulted read-only by the engine. A registry may
/// chain to a parent via its context pointer: `get` falls back to the
/// context before synthesizing `Unknown`. The context is read-only from
/// this side; a collaborator sets and clears it around a unit of work, or
/// uses [`Injectables::scoped`] to get a pre-linked child instead of
/// mutating anything shared.
#[derive(Clone, Debug, Default)]
pub struct Injectables {
    entries: HashMap<String, Entry>,
    decorators: HashMap<String, Vec<String>>,
    context: Option<Arc<Injectables>>,
}

impl Injectables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an already-constructed value. Last write for a name wins.
    pub fn add_value(&mut self, name: impl Into<String>, value: Object) -> &mut Self {
        self.entries.insert(name.into(), Entry::Value(value));
        self
    }

    /// Registers a resolver reference. The reference is not validated here;
    /// a dangling one surfaces at resolution time.
    pub fn add_resolver(
        &mut self,
        name: impl Into<String>,
        resolver: impl Into<String>,
    ) -> &mut Self {
        self.entries
            .insert(name.into(), Entry::Resolver(resolver.into()));
        self
    }

    /// Registers an implementation reference. Not validated here either.
    pub fn add_implementation(
        &mut self,
        name: impl Into<String>,
        implementation: impl Into<String>,
    ) -> &mut Self {
        self.entries
            .insert(name.into(), Entry::Implementation(implementation.into()));
        self
    }

    /// Appends one or more decorator names for a base name. Registration
    /// order is preserved and is the order the chain is applied in.
    pub fn add_decorators(
        &mut self,
        base: impl Into<String>,
        decorators: impl IntoDecorators,
    ) -> &mut Self {
        let names = decorators.into_decorators();
        if !names.is_empty() {
            self.decorators.entry(base.into()).or_default().extend(names);
        }
        self
    }

    /// Looks a name up: local entries, then the context chain, then a
    /// synthesized `Unknown`. Never fails.
    pub fn get(&self, name: &str) -> Entry {
        if let Some(entry) = self.entries.get(name) {
            return entry.clone();
        }
        if let Some(context) = &self.context {
            let entry = context.get(name);
            if !matches!(entry, Entry::Unknown(_)) {
                return entry;
            }
        }
        Entry::Unknown(name.to_string())
    }

    /// The decorator list registered for a base name, or empty.
    pub fn decorators(&self, base: &str) -> Vec<String> {
        self.decorators.get(base).cloned().unwrap_or_default()
    }

    /// Right-biased shallow overlay of the entry maps only; decorators and
    /// context are not merged.
    pub fn merge(&self, other: &Injectables) -> Injectables {
        let mut entries = self.entries.clone();
        entries.extend(other.entries.clone());
        Injectables {
            entries,
            decorators: HashMap::new(),
            context: None,
        }
    }

    /// Points this registry at a fallback context, or clears it.
    pub fn set_context(&mut self, context: Option<Arc<Injectables>>) {
        self.context = context;
    }

    /// Drops the fallback context. Collaborators call this when the unit
    /// of work the context belonged to ends.
    pub fn clear_context(&mut self) {
        self.set_context(None);
    }

    /// Builds a child registry for one unit of work: `overrides` with its
    /// context pre-linked to `self`. Nothing shared is mutated.
    pub fn scoped(self: &Arc<Self>, mut overrides: Injectables) -> Injectables {
        overrides.context = Some(Arc::clone(self));
        overrides
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_new_resolvers() {
        let mut injectables = Injectables::new();
        injectables.add_resolver("a", "b");
        assert_eq!(injectables.get("a"), Entry::Resolver("b".into()));
    }

    #[test]
    fn accepts_new_implementations() {
        let mut injectables = Injectables::new();
        injectables.add_implementation("a", "b");
        assert_eq!(injectables.get("a"), Entry::Implementation("b".into()));
    }

    #[test]
    fn accepts_new_values() {
        let mut injectables = Injectables::new();
        let value = Object::of("b");
        injectables.add_value("a", value.clone());
        assert_eq!(injectables.get("a"), Entry::Value(value));
    }

    #[test]
    fn last_write_wins() {
        let mut injectables = Injectables::new();
        injectables.add_implementation("a", "b");
        injectables.add_implementation("a", "c");
        assert_eq!(injectables.get("a"), Entry::Implementation("c".into()));
    }

    #[test]
    fn returns_unknown_for_unregistered_names() {
        let injectables = Injectables::new();
        assert_eq!(injectables.get("c"), Entry::Unknown("c".into()));
    }

    #[test]
    fn merge_is_right_biased() {
        let mut left = Injectables::new();
        left.add_implementation("a", "b");
        left.add_value("only_left", Object::of(1u8));
        let mut right = Injectables::new();
        right.add_implementation("a", "c");

        let merged = left.merge(&right);
        assert_eq!(merged.get("a"), Entry::Implementation("c".into()));
        assert!(matches!(merged.get("only_left"), Entry::Value(_)));
    }

    #[test]
    fn merge_does_not_carry_decorators_or_context() {
        let mut left = Injectables::new();
        left.add_decorators("base", "wrapper");
        let mut context = Injectables::new();
        context.add_value("ctx", Object::of(0u8));
        left.set_context(Some(Arc::new(context)));

        let merged = left.merge(&Injectables::new());
        assert!(merged.decorators("base").is_empty());
        assert_eq!(merged.get("ctx"), Entry::Unknown("ctx".into()));
    }

    #[test]
    fn falls_back_to_the_context() {
        let mut context = Injectables::new();
        let controller = Object::of("something");
        context.add_value("controller", controller.clone());

        let mut injectables = Injectables::new();
        injectables.set_context(Some(Arc::new(context)));
        assert_eq!(injectables.get("controller"), Entry::Value(controller));
    }

    #[test]
    fn clear_context_drops_the_fallback() {
        let mut context = Injectables::new();
        context.add_value("controller", Object::of("something"));
        let mut injectables = Injectables::new();
        injectables.set_context(Some(Arc::new(context)));
        assert!(matches!(injectables.get("controller"), Entry::Value(_)));

        injectables.clear_context();
        assert_eq!(
            injectables.get("controller"),
            Entry::Unknown("controller".into())
        );
    }

    #[test]
    fn local_entries_shadow_the_context() {
        let mut context = Injectables::new();
        context.add_implementation("dep", "from_context");
        let mut injectables = Injectables::new();
        injectables.add_implementation("dep", "local");
        injectables.set_context(Some(Arc::new(context)));
        assert_eq!(injectables.get("dep"), Entry::Implementation("local".into()));
    }

    #[test]
    fn accepts_decorators_singly_or_as_lists() {
        let mut injectables = Injectables::new();
        injectables.add_decorators("base", "decorator1");
        assert_eq!(injectables.decorators("base"), vec!["decorator1"]);

        injectables.add_decorators("base", vec!["decorator2", "decorator3"]);
        assert_eq!(
            injectables.decorators("base"),
            vec!["decorator1", "decorator2", "decorator3"]
        );
        assert!(injectables.decorators("nonexistent").is_empty());
    }

    #[test]
    fn drops_empty_decorator_names() {
        let mut injectables = Injectables::new();
        injectables.add_decorators("base", vec!["", "real"]);
        injectables.add_decorators("other", "");
        assert_eq!(injectables.decorators("base"), vec!["real"]);
        assert!(injectables.decorators("other").is_empty());
    }

    #[test]
    fn scoped_builds_a_pre_linked_child() {
        let mut parent = Injectables::new();
        parent.add_implementation("mailer", "smtp_mailer");
        let parent = Arc::new(parent);

        let mut overrides = Injectables::new();
        overrides.add_implementation("mailer", "test_mailer");
        let child = parent.scoped(overrides);

        assert_eq!(child.get("mailer"), Entry::Implementation("test_mailer".into()));
        assert_eq!(
            parent.scoped(Injectables::new()).get("mailer"),
            Entry::Implementation("smtp_mailer".into())
        );
    }
}
