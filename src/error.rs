use thiserror::Error;

pub type Result<T> = std::result::Result<T, InjectraError>;

#[derive(Debug, Error)]
pub enum InjectraError {
    /// Convention search found no matching type for a symbolic name in any
    /// namespace/suffix combination. `searched` lists every identifier
    /// probed, in search order.
    #[error("Can't figure out how to inject '{name}' (searched: {searched:?})")]
    UnresolvableDependency { name: String, searched: Vec<String> },

    #[error("No type registered for identifier '{ident}'")]
    TypeNotFound { ident: String },

    #[error("Type '{ident}' has no method '{method}'")]
    MethodNotFound { ident: String, method: String },

    /// Method calls dispatch through the receiver's type identifier; a
    /// plain value carries none, so there is no signature to reflect on.
    #[error("Method '{method}' called on a value with no type identifier")]
    UntypedReceiver { method: String },

    #[error("Resolver type '{ident}' has no production method")]
    MissingProductionMethod { ident: String },

    #[error("Decorator '{decorator}' registered for '{base}' is not a known type")]
    MissingDecoratorTarget { decorator: String, base: String },

    #[error("Construction of '{ident}' failed: {message}")]
    ConstructionFailed { ident: String, message: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl InjectraError {
    /// Shorthand for factory and method closures reporting a bad argument
    /// or a failed build step.
    pub fn construction(ident: impl Into<String>, message: impl Into<String>) -> Self {
        InjectraError::ConstructionFailed {
            ident: ident.into(),
            message: message.into(),
        }
    }
}
