//! Declarations as seen by name lookup.
//!
//! Symbols are produced by the front end's scopes; tower levels only read
//! their identity and flags.

use super::class::{ClassId, ClassKind, ClassRef};
use super::name::Name;
use super::types::TypeRef;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::sync::Arc;

/// Flags every declaration kind exposes to receiver pairing.
pub trait Declaration: Debug + Send + Sync {
    fn name(&self) -> &Name;

    /// Class that declares this member; `None` for top-level declarations.
    fn owner(&self) -> Option<&ClassRef> {
        None
    }

    /// True when declared with its own extension-receiver parameter.
    fn has_extension_receiver(&self) -> bool {
        false
    }

    fn is_static(&self) -> bool {
        false
    }

    fn is_constructor(&self) -> bool {
        false
    }

    /// True for constructors that need an enclosing-instance receiver.
    fn is_inner_constructor(&self) -> bool {
        false
    }

    fn is_backing_field(&self) -> bool {
        false
    }
}

impl<T: Declaration + ?Sized> Declaration for Arc<T> {
    fn name(&self) -> &Name {
        (**self).name()
    }
    fn owner(&self) -> Option<&ClassRef> {
        (**self).owner()
    }
    fn has_extension_receiver(&self) -> bool {
        (**self).has_extension_receiver()
    }
    fn is_static(&self) -> bool {
        (**self).is_static()
    }
    fn is_constructor(&self) -> bool {
        (**self).is_constructor()
    }
    fn is_inner_constructor(&self) -> bool {
        (**self).is_inner_constructor()
    }
    fn is_backing_field(&self) -> bool {
        (**self).is_backing_field()
    }
}

/// How a property came to exist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyOrigin {
    Declared,
    /// The `field` of a property accessor, visible inside its body.
    BackingField,
    /// Synthesized from a getter (and optional setter) method pair.
    Synthetic { getter: Name, setter: Option<Name> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertySymbol {
    pub name: Name,
    pub owner: Option<ClassRef>,
    pub extension_receiver: Option<TypeRef>,
    pub is_static: bool,
    pub return_type: TypeRef,
    pub origin: PropertyOrigin,
}

impl PropertySymbol {
    pub fn new(name: impl Into<Name>, return_type: TypeRef) -> Self {
        Self {
            name: name.into(),
            owner: None,
            extension_receiver: None,
            is_static: false,
            return_type,
            origin: PropertyOrigin::Declared,
        }
    }

    /// The backing field of a property, named `field` in accessor bodies.
    pub fn backing_field(return_type: TypeRef) -> Self {
        Self {
            origin: PropertyOrigin::BackingField,
            ..Self::new("field", return_type)
        }
    }

    pub fn with_owner(mut self, owner: ClassRef) -> Self {
        self.owner = Some(owner);
        self
    }

    pub fn with_extension_receiver(mut self, receiver: TypeRef) -> Self {
        self.extension_receiver = Some(receiver);
        self
    }

    pub fn with_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn with_origin(mut self, origin: PropertyOrigin) -> Self {
        self.origin = origin;
        self
    }
}

impl Declaration for PropertySymbol {
    fn name(&self) -> &Name {
        &self.name
    }
    fn owner(&self) -> Option<&ClassRef> {
        self.owner.as_ref()
    }
    fn has_extension_receiver(&self) -> bool {
        self.extension_receiver.is_some()
    }
    fn is_static(&self) -> bool {
        self.is_static
    }
    fn is_backing_field(&self) -> bool {
        self.origin == PropertyOrigin::BackingField
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionSymbol {
    pub name: Name,
    pub owner: Option<ClassRef>,
    pub extension_receiver: Option<TypeRef>,
    pub is_static: bool,
    pub is_operator: bool,
    pub value_parameters: Vec<TypeRef>,
    pub return_type: TypeRef,
}

impl FunctionSymbol {
    pub fn new(name: impl Into<Name>, return_type: TypeRef) -> Self {
        Self {
            name: name.into(),
            owner: None,
            extension_receiver: None,
            is_static: false,
            is_operator: false,
            value_parameters: Vec::new(),
            return_type,
        }
    }

    pub fn with_owner(mut self, owner: ClassRef) -> Self {
        self.owner = Some(owner);
        self
    }

    pub fn with_extension_receiver(mut self, receiver: TypeRef) -> Self {
        self.extension_receiver = Some(receiver);
        self
    }

    pub fn with_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn with_operator(mut self) -> Self {
        self.is_operator = true;
        self
    }

    pub fn with_parameters(mut self, params: Vec<TypeRef>) -> Self {
        self.value_parameters = params;
        self
    }
}

impl Declaration for FunctionSymbol {
    fn name(&self) -> &Name {
        &self.name
    }
    fn owner(&self) -> Option<&ClassRef> {
        self.owner.as_ref()
    }
    fn has_extension_receiver(&self) -> bool {
        self.extension_receiver.is_some()
    }
    fn is_static(&self) -> bool {
        self.is_static
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstructorSymbol {
    /// Constructors are looked up by the simple name of their class.
    pub name: Name,
    pub owner: ClassRef,
    pub is_inner: bool,
    pub is_primary: bool,
    pub value_parameters: Vec<TypeRef>,
}

impl ConstructorSymbol {
    pub fn new(owner: ClassRef) -> Self {
        Self {
            name: Name::new(owner.id.short_name()),
            owner,
            is_inner: false,
            is_primary: false,
            value_parameters: Vec::new(),
        }
    }

    pub fn primary(owner: ClassRef) -> Self {
        Self {
            is_primary: true,
            ..Self::new(owner)
        }
    }

    pub fn with_inner(mut self) -> Self {
        self.is_inner = true;
        self
    }

    pub fn with_parameters(mut self, params: Vec<TypeRef>) -> Self {
        self.value_parameters = params;
        self
    }
}

impl Declaration for ConstructorSymbol {
    fn name(&self) -> &Name {
        &self.name
    }
    fn owner(&self) -> Option<&ClassRef> {
        Some(&self.owner)
    }
    fn is_constructor(&self) -> bool {
        true
    }
    fn is_inner_constructor(&self) -> bool {
        self.is_inner
    }
}

/// A class, object or enum entry referenced by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifierSymbol {
    pub name: Name,
    pub id: ClassId,
    pub kind: ClassKind,
}

impl ClassifierSymbol {
    pub fn new(id: impl Into<ClassId>, kind: ClassKind) -> Self {
        let id = id.into();
        Self {
            name: Name::new(id.short_name()),
            id,
            kind,
        }
    }
}

impl Declaration for ClassifierSymbol {
    fn name(&self) -> &Name {
        &self.name
    }
}

/// Result of a function-call lookup: a named function or a constructor
/// reached through its class name.
#[derive(Debug, Clone, PartialEq)]
pub enum FunctionLike {
    Function(Arc<FunctionSymbol>),
    Constructor(Arc<ConstructorSymbol>),
}

impl FunctionLike {
    pub fn as_function(&self) -> Option<&Arc<FunctionSymbol>> {
        match self {
            FunctionLike::Function(f) => Some(f),
            FunctionLike::Constructor(_) => None,
        }
    }

    pub fn as_constructor(&self) -> Option<&Arc<ConstructorSymbol>> {
        match self {
            FunctionLike::Constructor(c) => Some(c),
            FunctionLike::Function(_) => None,
        }
    }

    fn declaration(&self) -> &dyn Declaration {
        match self {
            FunctionLike::Function(f) => f.as_ref(),
            FunctionLike::Constructor(c) => c.as_ref(),
        }
    }
}

impl Declaration for FunctionLike {
    fn name(&self) -> &Name {
        self.declaration().name()
    }
    fn owner(&self) -> Option<&ClassRef> {
        self.declaration().owner()
    }
    fn has_extension_receiver(&self) -> bool {
        self.declaration().has_extension_receiver()
    }
    fn is_static(&self) -> bool {
        self.declaration().is_static()
    }
    fn is_constructor(&self) -> bool {
        self.declaration().is_constructor()
    }
    fn is_inner_constructor(&self) -> bool {
        self.declaration().is_inner_constructor()
    }
    fn is_backing_field(&self) -> bool {
        false
    }
}
