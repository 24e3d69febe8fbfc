//! Static types attached to receivers and declarations.
//!
//! Only the shape needed for receiver pairing lives here: class identity for
//! member-scope lookup and a nullability mark that can be forced off.

use super::class::ClassId;
use super::name::Name;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeRef {
    /// A class type, possibly parameterized.
    Class {
        id: ClassId,
        args: Vec<TypeRef>,
        nullable: bool,
    },
    /// A function type, with an optional receiver parameter.
    Function {
        receiver: Option<Box<TypeRef>>,
        params: Vec<TypeRef>,
        returns: Box<TypeRef>,
        nullable: bool,
    },
    /// A type parameter reference, e.g. `T`.
    Parameter { name: Name, nullable: bool },
    Unknown,
}

impl TypeRef {
    pub fn class(id: impl Into<ClassId>) -> Self {
        TypeRef::Class {
            id: id.into(),
            args: Vec::new(),
            nullable: false,
        }
    }

    pub fn generic(id: impl Into<ClassId>, args: Vec<TypeRef>) -> Self {
        TypeRef::Class {
            id: id.into(),
            args,
            nullable: false,
        }
    }

    pub fn unit() -> Self {
        TypeRef::class(ClassId::UNIT)
    }

    pub fn function(receiver: Option<TypeRef>, params: Vec<TypeRef>, returns: TypeRef) -> Self {
        TypeRef::Function {
            receiver: receiver.map(Box::new),
            params,
            returns: Box::new(returns),
            nullable: false,
        }
    }

    pub fn is_marked_nullable(&self) -> bool {
        match self {
            TypeRef::Class { nullable, .. }
            | TypeRef::Function { nullable, .. }
            | TypeRef::Parameter { nullable, .. } => *nullable,
            TypeRef::Unknown => false,
        }
    }

    /// Returns the same type with the given nullability mark.
    pub fn with_nullability(&self, marked_nullable: bool) -> TypeRef {
        let mut ty = self.clone();
        match &mut ty {
            TypeRef::Class { nullable, .. }
            | TypeRef::Function { nullable, .. }
            | TypeRef::Parameter { nullable, .. } => *nullable = marked_nullable,
            TypeRef::Unknown => {}
        }
        ty
    }

    pub fn make_nullable(&self) -> TypeRef {
        self.with_nullability(true)
    }

    pub fn make_not_nullable(&self) -> TypeRef {
        self.with_nullability(false)
    }

    /// Class identity used to find the member scope of this type.
    pub fn class_id(&self) -> Option<&ClassId> {
        match self {
            TypeRef::Class { id, .. } => Some(id),
            _ => None,
        }
    }

    pub fn is_unit(&self) -> bool {
        self.class_id() == Some(&ClassId::UNIT)
    }

    /// True for function types declared with a receiver parameter.
    pub fn is_extension_function(&self) -> bool {
        matches!(self, TypeRef::Function { receiver: Some(_), .. })
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Class { id, args, .. } => {
                write!(f, "{}", id)?;
                if !args.is_empty() {
                    write!(f, "<")?;
                    for (i, arg) in args.iter().enumerate() {
                        if i > 0 {
                            write!(f, ", ")?;
                        }
                        write!(f, "{}", arg)?;
                    }
                    write!(f, ">")?;
                }
            }
            TypeRef::Function {
                receiver,
                params,
                returns,
                ..
            } => {
                if let Some(receiver) = receiver {
                    write!(f, "{}.", receiver)?;
                }
                write!(f, "(")?;
                for (i, param) in params.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", param)?;
                }
                write!(f, ") -> {}", returns)?;
            }
            TypeRef::Parameter { name, .. } => write!(f, "{}", name)?,
            TypeRef::Unknown => return write!(f, "?unknown"),
        }
        if self.is_marked_nullable() {
            write!(f, "?")?;
        }
        Ok(())
    }
}
