use std::fmt;

/// A GraphQL
/// [type reference](https://spec.graphql.org/October2021/#sec-Type-References).
///
/// The parser never produces `NonNull(NonNull(_))`: `Type!!` is rejected.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[derive(serde::Deserialize, serde::Serialize)]
pub enum TypeReference {
    Named(String),
    List(Box<TypeReference>),
    NonNull(Box<TypeReference>),
}

impl TypeReference {
    pub fn is_non_null(&self) -> bool {
        matches!(self, Self::NonNull(_))
    }

    pub fn is_list(&self) -> bool {
        match self {
            Self::List(_) => true,
            Self::NonNull(inner) => inner.is_list(),
            Self::Named(_) => false,
        }
    }

    /// The named type at the core of all list and non-null wrappers.
    pub fn innermost_name(&self) -> &str {
        match self {
            Self::Named(name) => name,
            Self::List(inner) | Self::NonNull(inner) => inner.innermost_name(),
        }
    }

    /// How many list and non-null wrappers surround the named type.
    pub fn depth(&self) -> usize {
        match self {
            Self::Named(_) => 0,
            Self::List(inner) | Self::NonNull(inner) => 1 + inner.depth(),
        }
    }
}

/// Renders GraphQL syntax, e.g. `[Int!]!`.
impl fmt::Display for TypeReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.write_str(name),
            Self::List(inner) => write!(f, "[{inner}]"),
            Self::NonNull(inner) => write!(f, "{inner}!"),
        }
    }
}
