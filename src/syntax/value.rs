use super::types::{Type, Typed};

/// An individual value within a PRQL expression, together with its declared
/// [`Type`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Value<T> {
    typ: Type,
    value: T,
}

impl<T> Value<T> {
    /// Wraps a value with no type declaration.
    pub fn new(value: T) -> Self {
        Self {
            typ: Type::Unknown,
            value,
        }
    }

    /// Wraps a value with an explicit type declaration.
    pub fn with_type(typ: Type, value: T) -> Self {
        Self { typ, value }
    }

    pub fn typ(&self) -> Type {
        self.typ
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T: Typed> Value<T> {
    /// Wraps a value, deriving the type declaration from the native type.
    pub fn infer(value: T) -> Self {
        Self {
            typ: value.prql_type(),
            value,
        }
    }
}
