//! Scope collaborators consumed by tower levels.
//!
//! # Key Traits
//!
//! - [`ScopeProvider`] - Builds the member scope of a receiver type
//! - [`QualifierFactory`] - Turns an object or enum entry into a receiver
//!
//! Default implementations live alongside: [`MemoryScope`] and
//! [`MemoryScopeProvider`] for in-memory declaration sets,
//! [`SyntheticPropertiesScope`] for accessor-derived properties and
//! [`CachingScopeProvider`] for memoized scope construction.

pub mod cache;
pub mod memory;
pub mod qualifier;
pub mod synthetic;

pub use cache::CachingScopeProvider;
pub use memory::{MemoryScope, MemoryScopeProvider};
pub use qualifier::StandardQualifierFactory;
pub use synthetic::SyntheticPropertiesScope;

use std::sync::Arc;
use towerscope_api::{ClassRef, DeclarationScope, ReceiverValue, TypeRef};

/// Builds scopes from receiver types.
pub trait ScopeProvider: Send + Sync {
    /// Member scope of `ty`. `None` when the type has no accessible members.
    fn member_scope(&self, ty: &TypeRef) -> Option<Arc<dyn DeclarationScope>>;

    /// View of `base` exposing getter/setter pairs as properties.
    fn synthetic_properties(&self, base: Arc<dyn DeclarationScope>) -> Arc<dyn DeclarationScope> {
        Arc::new(SyntheticPropertiesScope::new(base))
    }
}

/// Synthesizes qualifier receivers for objects and enum entries.
pub trait QualifierFactory: Send + Sync {
    /// Receiver referencing the singleton `class`, or `None` if it has none.
    fn qualifier_receiver(&self, class: &ClassRef) -> Option<ReceiverValue>;
}
