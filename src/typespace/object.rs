use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// The engine's dynamic value currency.
///
/// An `Object` is an `Arc<dyn Any + Send + Sync>` payload plus the
/// fully-qualified identifier of the type it was constructed as. Plain
/// values injected via `add_value` carry no identifier; instances built
/// through the [`TypeSpace`](crate::typespace::TypeSpace) are tagged with
/// theirs, which is what namespace determination and production-method
/// dispatch key on.
#[derive(Clone)]
pub struct Object {
    ident: Option<String>,
    payload: Arc<dyn Any + Send + Sync>,
}

impl Object {
    /// Wraps a plain value with no type identifier.
    pub fn of<T: Send + Sync + 'static>(value: T) -> Self {
        Self {
            ident: None,
            payload: Arc::new(value),
        }
    }

    /// Wraps an already-boxed payload under a type identifier. Used by the
    /// [`TypeSpace`](crate::typespace::TypeSpace) when tagging factory
    /// results.
    pub fn typed(ident: impl Into<String>, payload: Arc<dyn Any + Send + Sync>) -> Self {
        Self {
            ident: Some(ident.into()),
            payload,
        }
    }

    /// The fully-qualified identifier this object was constructed as, if any.
    pub fn ident(&self) -> Option<&str> {
        self.ident.as_deref()
    }

    /// Typed access to the payload.
    pub fn downcast<T: Send + Sync + 'static>(&self) -> Option<Arc<T>> {
        self.payload.clone().downcast::<T>().ok()
    }

    /// Whether two objects share the same underlying payload.
    pub fn same_instance(&self, other: &Object) -> bool {
        Arc::ptr_eq(&self.payload, &other.payload)
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.ident {
            Some(ident) => write!(f, "Object<{ident}>"),
            None => write!(f, "Object<value>"),
        }
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        self.ident == other.ident && self.same_instance(other)
    }
}
