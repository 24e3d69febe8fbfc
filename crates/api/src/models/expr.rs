use super::class::ClassId;
use super::name::Name;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Source expression a receiver value was taken from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Expression {
    /// `this`, optionally labeled (`this@Outer`).
    This { label: Option<Name> },
    /// A plain name reference, e.g. a local variable.
    Name(Name),
    /// Synthesized reference to an object or enum entry by its identity.
    Qualifier(ClassId),
}

impl Expression {
    pub fn this() -> Self {
        Expression::This { label: None }
    }

    pub fn labeled_this(label: impl Into<Name>) -> Self {
        Expression::This {
            label: Some(label.into()),
        }
    }

    pub fn name(name: impl Into<Name>) -> Self {
        Expression::Name(name.into())
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::This { label: None } => write!(f, "this"),
            Expression::This { label: Some(l) } => write!(f, "this@{}", l),
            Expression::Name(n) => write!(f, "{}", n),
            Expression::Qualifier(id) => write!(f, "{}", id),
        }
    }
}
