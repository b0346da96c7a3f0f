//! Type descriptors for the Tarn language.
//!
//! A [`TypeDesc`] describes the static type of a compiled value. Equality is
//! structural: two descriptors are equal iff they have identical shape, with
//! pointer-to-pointer comparison recursing into the pointee.

use std::fmt;

/// Type descriptor for a compiled value.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum TypeDesc {
    /// The void type (no value).
    Void,
    /// Boolean type, produced by comparisons and consumed by conditions.
    Bool,
    /// A named primitive type such as `int`, `float`, or `char`.
    Primitive(String),
    /// Pointer to another type.
    Pointer(Box<TypeDesc>),
    /// A named struct with ordered fields.
    Struct {
        /// The struct's registered name.
        name: String,
        /// Ordered field names and types.
        fields: Vec<(String, TypeDesc)>,
    },
    /// A function signature.
    Function {
        /// Parameter types, in order.
        params: Vec<TypeDesc>,
        /// Return type.
        ret: Box<TypeDesc>,
    },
}

impl TypeDesc {
    /// Creates the `int` primitive type.
    #[must_use]
    pub fn int() -> Self {
        Self::Primitive("int".to_string())
    }

    /// Creates the `char` primitive type.
    #[must_use]
    pub fn char() -> Self {
        Self::Primitive("char".to_string())
    }

    /// Creates a pointer type with the given pointee.
    #[must_use]
    pub fn pointer(pointee: TypeDesc) -> Self {
        Self::Pointer(Box::new(pointee))
    }

    /// Creates a function type.
    #[must_use]
    pub fn function(params: Vec<TypeDesc>, ret: TypeDesc) -> Self {
        Self::Function {
            params,
            ret: Box::new(ret),
        }
    }

    /// Returns true if this is the void type.
    #[must_use]
    pub const fn is_void(&self) -> bool {
        matches!(self, Self::Void)
    }

    /// Returns true if this is the boolean type.
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Self::Bool)
    }

    /// Returns true if this is a pointer type.
    #[must_use]
    pub const fn is_pointer(&self) -> bool {
        matches!(self, Self::Pointer(_))
    }

    /// Returns true if this is a primitive type.
    #[must_use]
    pub const fn is_primitive(&self) -> bool {
        matches!(self, Self::Primitive(_))
    }

    /// Returns the pointee type, or None if this is not a pointer.
    #[must_use]
    pub fn pointee(&self) -> Option<&TypeDesc> {
        match self {
            Self::Pointer(inner) => Some(inner),
            _ => None,
        }
    }
}

impl fmt::Debug for TypeDesc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Void => write!(f, "void"),
            Self::Bool => write!(f, "bool"),
            Self::Primitive(name) => write!(f, "{name}"),
            Self::Pointer(inner) => write!(f, "(ptr {inner:?})"),
            Self::Struct { name, .. } => write!(f, "{name}"),
            Self::Function { params, ret } => {
                write!(f, "(fn (")?;
                for (i, p) in params.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{p:?}")?;
                }
                write!(f, ") {ret:?})")
            }
        }
    }
}

impl fmt::Display for TypeDesc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
