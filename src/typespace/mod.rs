//! The startup-time type registry the resolution engine reflects over.
//!
//! Rust has no runtime `constantize`; constructible types are registered
//! here under their fully-qualified identifier, each carrying its ordered
//! constructor parameter list and any named methods. The engine consumes
//! this as its "reflection facility": signature listing and string-to-type
//! lookup.

mod definition;
mod object;
mod space;

pub use definition::{MethodDef, Param, TypeDef, TypeDefBuilder};
pub use object::Object;
pub use space::TypeSpace;
