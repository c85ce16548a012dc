//! The resolution engine.
//!
//! `Injector::call` reflects over the target's signature in the
//! [`TypeSpace`](crate::typespace::TypeSpace), resolves each required
//! parameter through the decoration context and the registry, recursively
//! constructs resolver/implementation dependencies, invokes the callable,
//! and (for constructions) threads the result through the registered
//! decorator chain.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::convention::{self, RESOLVER_SUFFIX};
use crate::error::{InjectraError, Result};
use crate::naming;
use crate::registry::{Entry, Injectables};
use crate::typespace::{Object, Param, TypeSpace};

/// Conventional name of a resolver's production method.
pub const PRODUCTION_METHOD: &str = "call";

/// What an injection call is aimed at: a constructible type, or an
/// already-existing instance for an ordinary method call.
#[derive(Clone, Debug)]
pub enum Target {
    Type(String),
    Instance(Object),
}

impl Target {
    fn describe(&self) -> &str {
        match self {
            Target::Type(ident) => ident,
            Target::Instance(obj) => obj.ident().unwrap_or("<value>"),
        }
    }
}

/// Which callable to invoke on the target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selector {
    Construct,
    Method(String),
}

impl Selector {
    pub fn method(name: impl Into<String>) -> Self {
        Selector::Method(name.into())
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Construct => f.write_str("construct"),
            Selector::Method(name) => f.write_str(name),
        }
    }
}

/// Transient map from symbolic name to a just-resolved instance, scoped to
/// exactly one top-level construction-and-decoration unit. Threaded by
/// `&mut` through the recursion; nested constructions share it, and it is
/// dropped when the top-level call returns, so nothing leaks between
/// independent calls.
#[derive(Debug, Default)]
struct DecorationContext {
    entries: HashMap<String, Object>,
}

impl DecorationContext {
    fn record(&mut self, name: &str, object: Object) {
        self.entries.insert(name.to_string(), object);
    }

    fn get(&self, name: &str) -> Option<Object> {
        self.entries.get(name).cloned()
    }
}

/// The resolution engine: one `TypeSpace` + one `Injectables` registry,
/// serving one logical unit of work at a time. Cheap to clone; concurrent
/// units each get their own injector/registry pair.
#[derive(Clone)]
pub struct Injector {
    space: Arc<TypeSpace>,
    registry: Arc<Injectables>,
}

impl Injector {
    pub fn new(space: Arc<TypeSpace>, registry: Arc<Injectables>) -> Self {
        Self { space, registry }
    }

    pub fn space(&self) -> &Arc<TypeSpace> {
        &self.space
    }

    pub fn registry(&self) -> &Arc<Injectables> {
        &self.registry
    }

    /// Resolves and invokes the selected callable on `target`, returning
    /// its result (the decorated result, for constructions).
    pub fn call(&self, target: Target, selector: Selector) -> Result<Object> {
        let mut context = DecorationContext::default();
        self.call_with(&mut context, target, &selector)
    }

    /// Shorthand for the construction call.
    pub fn construct(&self, ident: impl Into<String>) -> Result<Object> {
        self.call(Target::Type(ident.into()), Selector::Construct)
    }

    fn call_with(
        &self,
        context: &mut DecorationContext,
        target: Target,
        selector: &Selector,
    ) -> Result<Object> {
        let span = tracing::trace_span!("inject", target = target.describe(), %selector);
        let _guard = span.enter();

        match selector {
            Selector::Construct => self.construct_with(context, target),
            Selector::Method(name) => self.invoke_with(context, target, name),
        }
    }

    fn construct_with(&self, context: &mut DecorationContext, target: Target) -> Result<Object> {
        let Target::Type(ident) = target else {
            return Err(InjectraError::Internal(
                "construct selector requires a type target".to_string(),
            ));
        };
        let def = self
            .space
            .lookup(&ident)
            .ok_or_else(|| InjectraError::TypeNotFound {
                ident: ident.clone(),
            })?;

        let base = naming::symbolize(&ident);
        let namespace = naming::namespace_of(&base).map(str::to_string);
        let args =
            self.resolve_arguments(context, def.constructor_params(), namespace.as_deref())?;
        let result = def.construct(args)?;

        // Decoration pass: record the undecorated instance, then wrap it
        // through the chain in registration order, re-recording after each
        // step so the next decorator wraps the previous result.
        context.record(&base, result.clone());
        let mut current = result;
        for decorator in self.registry.decorators(&base) {
            let decorator_ident = naming::classify(&decorator);
            if !self.space.contains(&decorator_ident) {
                return Err(InjectraError::MissingDecoratorTarget { decorator, base });
            }
            tracing::debug!(base = %base, decorator = %decorator_ident, "Applying decorator");
            current = self.call_with(context, Target::Type(decorator_ident), &Selector::Construct)?;
            context.record(&base, current.clone());
        }
        Ok(current)
    }

    fn invoke_with(
        &self,
        context: &mut DecorationContext,
        target: Target,
        method: &str,
    ) -> Result<Object> {
        let Target::Instance(receiver) = target else {
            return Err(InjectraError::Internal(format!(
                "method '{method}' requires an instance target"
            )));
        };
        let ident = receiver.ident().ok_or_else(|| InjectraError::UntypedReceiver {
            method: method.to_string(),
        })?;
        let def = self
            .space
            .lookup(ident)
            .ok_or_else(|| InjectraError::TypeNotFound {
                ident: ident.to_string(),
            })?;
        let method_def = def.method(method).ok_or_else(|| InjectraError::MethodNotFound {
            ident: ident.to_string(),
            method: method.to_string(),
        })?;

        let base = naming::symbolize(ident);
        let namespace = naming::namespace_of(&base).map(str::to_string);
        let args = self.resolve_arguments(context, method_def.params(), namespace.as_deref())?;
        method_def.invoke(&receiver, args)
    }

    /// Resolves every required parameter to an argument value, in
    /// declaration order. Per parameter, first hit wins: decoration context
    /// under `namespace/name`, decoration context under the bare name, then
    /// the registry (which always yields at least `Unknown`).
    fn resolve_arguments(
        &self,
        context: &mut DecorationContext,
        params: &[Param],
        namespace: Option<&str>,
    ) -> Result<Vec<Object>> {
        let mut args = Vec::new();
        for param in params.iter().filter(|p| p.is_required()) {
            let entry = self.lookup_entry(context, param.name(), namespace);
            let entry = match entry {
                Entry::Unknown(name) => {
                    tracing::trace!(name, "Classifying unknown injectable by convention");
                    convention::classify_unknown(&self.space, &name, namespace)?
                }
                other => other,
            };
            args.push(self.entry_to_argument(context, entry)?);
        }
        Ok(args)
    }

    fn lookup_entry(
        &self,
        context: &DecorationContext,
        name: &str,
        namespace: Option<&str>,
    ) -> Entry {
        if let Some(ns) = namespace {
            if let Some(object) = context.get(&naming::join(ns, name)) {
                return Entry::Value(object);
            }
        }
        if let Some(object) = context.get(name) {
            return Entry::Value(object);
        }
        self.registry.get(name)
    }

    fn entry_to_argument(&self, context: &mut DecorationContext, entry: Entry) -> Result<Object> {
        match entry {
            Entry::Value(object) => Ok(object),
            Entry::Resolver(name) => {
                let resolver_ident =
                    naming::classify(&naming::with_suffix(&name, RESOLVER_SUFFIX));
                let instance =
                    self.call_with(context, Target::Type(resolver_ident), &Selector::Construct)?;
                match self.call_with(
                    context,
                    Target::Instance(instance),
                    &Selector::method(PRODUCTION_METHOD),
                ) {
                    Err(InjectraError::MethodNotFound { ident, .. }) => {
                        Err(InjectraError::MissingProductionMethod { ident })
                    }
                    other => other,
                }
            }
            Entry::Implementation(name) => {
                let ident = naming::classify(&name);
                self.call_with(context, Target::Type(ident), &Selector::Construct)
            }
            Entry::Unknown(name) => Err(InjectraError::Internal(format!(
                "unknown injectable '{name}' reached argument resolution"
            ))),
        }
    }
}
