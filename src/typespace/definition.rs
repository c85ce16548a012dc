use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::error::Result;
use crate::typespace::Object;

/// Factory closures are shared between threads, so `Arc` rather than `Box`.
type FactoryFn = Arc<dyn Fn(Vec<Object>) -> Result<Arc<dyn Any + Send + Sync>> + Send + Sync>;

type MethodFn = Arc<dyn Fn(&Object, Vec<Object>) -> Result<Object> + Send + Sync>;

/// One named parameter of a constructor or method signature.
///
/// Only required parameters participate in injection; optional ones are
/// left to the closure's own defaults.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Param {
    name: String,
    required: bool,
}

impl Param {
    pub fn required(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required: true,
        }
    }

    pub fn optional(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_required(&self) -> bool {
        self.required
    }
}

/// A named method on a registered type: its own parameter list plus an
/// invoke closure taking the receiver and the resolved arguments.
#[derive(Clone)]
pub struct MethodDef {
    params: Vec<Param>,
    invoke: MethodFn,
}

impl MethodDef {
    pub fn params(&self) -> &[Param] {
        &self.params
    }

    pub fn invoke(&self, receiver: &Object, args: Vec<Object>) -> Result<Object> {
        (self.invoke)(receiver, args)
    }
}

/// A constructible type registered in the [`TypeSpace`](super::TypeSpace):
/// its identifier, ordered constructor signature, factory closure, and any
/// named methods.
///
/// # Example
/// ```
/// use injectra::typespace::{Object, Param, TypeDef};
/// use std::sync::Arc;
///
/// struct Greeter;
///
/// let def = TypeDef::new("Greeter")
///     .constructor(vec![], |_args| Ok(Arc::new(Greeter)))
///     .method("call", vec![], |_recv, _args| Ok(Object::of("hello")))
///     .build();
/// assert_eq!(def.ident(), "Greeter");
/// ```
#[derive(Clone)]
pub struct TypeDef {
    ident: String,
    ctor_params: Vec<Param>,
    ctor: Option<FactoryFn>,
    methods: HashMap<String, MethodDef>,
}

impl TypeDef {
    /// Starts a builder for the given fully-qualified identifier.
    pub fn new(ident: impl Into<String>) -> TypeDefBuilder {
        TypeDefBuilder {
            def: TypeDef {
                ident: ident.into(),
                ctor_params: Vec::new(),
                ctor: None,
                methods: HashMap::new(),
            },
        }
    }

    pub fn ident(&self) -> &str {
        &self.ident
    }

    pub fn constructor_params(&self) -> &[Param] {
        &self.ctor_params
    }

    pub fn method(&self, name: &str) -> Option<&MethodDef> {
        self.methods.get(name)
    }

    pub(crate) fn construct(&self, args: Vec<Object>) -> Result<Object> {
        let ctor = self.ctor.as_ref().ok_or_else(|| {
            crate::error::InjectraError::Internal(format!(
                "type '{}' has no constructor registered",
                self.ident
            ))
        })?;
        let payload = ctor(args)?;
        Ok(Object::typed(self.ident.clone(), payload))
    }
}

impl fmt::Debug for TypeDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDef")
            .field("ident", &self.ident)
            .field("ctor_params", &self.ctor_params)
            .field("methods", &self.methods.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Builder for [`TypeDef`], in the usual register-then-build style.
pub struct TypeDefBuilder {
    def: TypeDef,
}

impl TypeDefBuilder {
    /// Registers the constructor: its ordered parameter list and a factory
    /// closure receiving the resolved required arguments in that order.
    pub fn constructor<F>(mut self, params: Vec<Param>, factory: F) -> Self
    where
        F: Fn(Vec<Object>) -> Result<Arc<dyn Any + Send + Sync>> + Send + Sync + 'static,
    {
        self.def.ctor_params = params;
        self.def.ctor = Some(Arc::new(factory));
        self
    }

    /// Registers a named method with its own parameter list.
    pub fn method<F>(mut self, name: impl Into<String>, params: Vec<Param>, invoke: F) -> Self
    where
        F: Fn(&Object, Vec<Object>) -> Result<Object> + Send + Sync + 'static,
    {
        self.def.methods.insert(
            name.into(),
            MethodDef {
                params,
                invoke: Arc::new(invoke),
            },
        );
        self
    }

    pub fn build(self) -> TypeDef {
        self.def
    }
}
