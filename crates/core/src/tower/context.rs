//! Collaborators shared by the tower levels of one resolution session.

use crate::config::TowerConfig;
use crate::scope::{CachingScopeProvider, QualifierFactory, ScopeProvider, StandardQualifierFactory};
use std::sync::Arc;
use towerscope_api::ImplicitReceiverStack;

/// Context for tower levels
///
/// Immutable once built; levels hold it behind an `Arc` and may be queried
/// from several threads.
#[derive(Clone)]
pub struct TowerContext {
    /// Member-scope construction
    pub scopes: Arc<dyn ScopeProvider>,
    /// Receivers in scope without syntactic mention, innermost first
    pub implicit_receivers: ImplicitReceiverStack,
    /// Qualifier synthesis for objects and enum entries
    pub qualifiers: Arc<dyn QualifierFactory>,
    pub config: TowerConfig,
}

impl TowerContext {
    /// Create a context with default configuration and qualifiers
    pub fn new(scopes: Arc<dyn ScopeProvider>, implicit_receivers: ImplicitReceiverStack) -> Self {
        Self {
            scopes,
            implicit_receivers,
            qualifiers: Arc::new(StandardQualifierFactory),
            config: TowerConfig::default(),
        }
    }

    /// Create a context honoring `config`, wrapping `scopes` in a cache when
    /// `cache_member_scopes` is set.
    pub fn from_config(
        scopes: Arc<dyn ScopeProvider>,
        implicit_receivers: ImplicitReceiverStack,
        config: TowerConfig,
    ) -> Self {
        let scopes: Arc<dyn ScopeProvider> = if config.cache_member_scopes {
            Arc::new(CachingScopeProvider::new(scopes))
        } else {
            scopes
        };
        Self {
            config,
            ..Self::new(scopes, implicit_receivers)
        }
    }

    /// Set the qualifier factory
    pub fn with_qualifiers(mut self, qualifiers: Arc<dyn QualifierFactory>) -> Self {
        self.qualifiers = qualifiers;
        self
    }

    pub fn into_shared(self) -> Arc<TowerContext> {
        Arc::new(self)
    }
}
