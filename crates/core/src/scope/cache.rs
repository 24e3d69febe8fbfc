use super::ScopeProvider;
use dashmap::DashMap;
use std::sync::Arc;
use towerscope_api::{DeclarationScope, TypeRef};

/// Memoizes member-scope construction per receiver type.
///
/// Absence is cached as well. Keys ignore nullability, since member lookup
/// always happens on the non-null type.
pub struct CachingScopeProvider {
    inner: Arc<dyn ScopeProvider>,
    scopes: DashMap<TypeRef, Option<Arc<dyn DeclarationScope>>>,
}

impl CachingScopeProvider {
    pub fn new(inner: Arc<dyn ScopeProvider>) -> Self {
        Self {
            inner,
            scopes: DashMap::new(),
        }
    }

    /// Number of cached types, including cached misses.
    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }

    pub fn clear(&self) {
        self.scopes.clear();
    }
}

impl ScopeProvider for CachingScopeProvider {
    fn member_scope(&self, ty: &TypeRef) -> Option<Arc<dyn DeclarationScope>> {
        let key = ty.make_not_nullable();
        if let Some(cached) = self.scopes.get(&key) {
            return cached.value().clone();
        }

        tracing::trace!(ty = %key, "member scope cache miss");
        // Built outside the shard lock: providers may consult this cache again.
        let built = self.inner.member_scope(ty);
        self.scopes.entry(key).or_insert(built).value().clone()
    }

    fn synthetic_properties(&self, base: Arc<dyn DeclarationScope>) -> Arc<dyn DeclarationScope> {
        self.inner.synthetic_properties(base)
    }
}
