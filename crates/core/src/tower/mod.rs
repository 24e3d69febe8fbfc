//! Tower levels: per-layer name lookup with receiver pairing.
//!
//! # Architecture
//!
//! ```text
//! outer resolver           →  walks levels innermost first, ranks candidates
//!       │
//!       ▼
//! TowerLevel (trait)       →  process_elements_by_name(name, query)
//!       │                       ├─ MemberScopeLevel      (instance receiver)
//!       │                       ├─ ScopeLevel            (lexical scope)
//!       │                       └─ ConstructorScopeLevel (non-inner constructors)
//!       ▼
//! DeclarationScope (trait) →  raw declarations by category and name
//! ```
//!
//! A level decides reachability and which receivers attach to each
//! declaration. It never ranks candidates or checks applicability.

pub mod constructor;
pub mod context;
pub mod member;
pub mod scope;

pub use constructor::ConstructorScopeLevel;
pub use context::TowerContext;
pub use member::{MemberLevelConfig, MemberScopeLevel};
pub use scope::{ScopeLevel, ScopeLevelConfig};

use towerscope_api::{
    Candidate, CandidateConsumer, Constructors, Functions, Name, Objects, ProcessorAction,
    Properties, Query, Token, TowerResult,
};

/// One layer of the lookup tower.
pub trait TowerLevel: Send + Sync {
    /// Emits every reachable declaration named `name` in the query's category
    /// to the query's consumer.
    ///
    /// Returns `NonEmpty` when anything was found under `name`, even if all of
    /// it was filtered out.
    fn process_elements_by_name(&self, name: &Name, query: Query<'_>) -> TowerResult<ProcessorAction>;

    /// Short name for logging.
    fn name(&self) -> &'static str;
}

/// Typed convenience over [`TowerLevel::process_elements_by_name`].
pub trait TowerLevelExt: TowerLevel {
    fn process<T: Token>(
        &self,
        _token: T,
        name: &Name,
        mut consumer: impl FnMut(Candidate<'_, T::Symbol>),
    ) -> TowerResult<ProcessorAction> {
        self.process_elements_by_name(name, T::query(&mut consumer))
    }
}

impl<L: TowerLevel + ?Sized> TowerLevelExt for L {}

/// Per-token processing shared by the level implementations.
pub(crate) trait TokenProcessor {
    fn process_token<T: Token>(
        &self,
        name: &Name,
        consumer: &mut dyn CandidateConsumer<T::Symbol>,
    ) -> TowerResult<ProcessorAction>;
}

pub(crate) fn dispatch_query<P: TokenProcessor>(
    level: &P,
    name: &Name,
    query: Query<'_>,
) -> TowerResult<ProcessorAction> {
    match query {
        Query::Properties(consumer) => level.process_token::<Properties>(name, consumer),
        Query::Functions(consumer) => level.process_token::<Functions>(name, consumer),
        Query::Constructors(consumer) => level.process_token::<Constructors>(name, consumer),
        Query::Objects(consumer) => level.process_token::<Objects>(name, consumer),
    }
}
