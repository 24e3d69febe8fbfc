pub mod config;
pub mod logging;
pub mod scope;
pub mod tower;

pub use config::{BackingFieldPolicy, TowerConfig};
pub use scope::{
    CachingScopeProvider, MemoryScope, MemoryScopeProvider, QualifierFactory, ScopeProvider,
    StandardQualifierFactory, SyntheticPropertiesScope,
};
pub use tower::{
    ConstructorScopeLevel, MemberLevelConfig, MemberScopeLevel, ScopeLevel, ScopeLevelConfig,
    TowerContext, TowerLevel, TowerLevelExt,
};
