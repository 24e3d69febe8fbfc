//! In-memory declaration scopes.

use super::ScopeProvider;
use std::collections::HashMap;
use std::sync::Arc;
use towerscope_api::{
    ClassId, ClassifierSymbol, ConstructorSymbol, DeclarationScope, FunctionSymbol, Name,
    PropertySymbol, ScopeKind, TypeRef,
};

/// A declaration set keyed by name.
///
/// Built with a fluent API; lookups return matches in insertion order.
#[derive(Debug)]
pub struct MemoryScope {
    kind: ScopeKind,
    properties: HashMap<Name, Vec<Arc<PropertySymbol>>>,
    functions: HashMap<Name, Vec<Arc<FunctionSymbol>>>,
    constructors: HashMap<Name, Vec<Arc<ConstructorSymbol>>>,
    classifiers: HashMap<Name, Vec<Arc<ClassifierSymbol>>>,
}

impl MemoryScope {
    pub fn new(kind: ScopeKind) -> Self {
        Self {
            kind,
            properties: HashMap::new(),
            functions: HashMap::new(),
            constructors: HashMap::new(),
            classifiers: HashMap::new(),
        }
    }

    pub fn with_property(mut self, property: PropertySymbol) -> Self {
        self.properties
            .entry(property.name.clone())
            .or_default()
            .push(Arc::new(property));
        self
    }

    pub fn with_function(mut self, function: FunctionSymbol) -> Self {
        self.functions
            .entry(function.name.clone())
            .or_default()
            .push(Arc::new(function));
        self
    }

    pub fn with_constructor(mut self, constructor: ConstructorSymbol) -> Self {
        self.constructors
            .entry(constructor.name.clone())
            .or_default()
            .push(Arc::new(constructor));
        self
    }

    pub fn with_classifier(mut self, classifier: ClassifierSymbol) -> Self {
        self.classifiers
            .entry(classifier.name.clone())
            .or_default()
            .push(Arc::new(classifier));
        self
    }

    pub fn into_shared(self) -> Arc<dyn DeclarationScope> {
        Arc::new(self)
    }
}

fn lookup<T>(map: &HashMap<Name, Vec<Arc<T>>>, name: &Name) -> Vec<Arc<T>> {
    map.get(name).cloned().unwrap_or_default()
}

impl DeclarationScope for MemoryScope {
    fn kind(&self) -> ScopeKind {
        self.kind
    }

    fn properties(&self, name: &Name) -> Vec<Arc<PropertySymbol>> {
        lookup(&self.properties, name)
    }

    fn functions(&self, name: &Name) -> Vec<Arc<FunctionSymbol>> {
        lookup(&self.functions, name)
    }

    fn constructors(&self, name: &Name) -> Vec<Arc<ConstructorSymbol>> {
        lookup(&self.constructors, name)
    }

    fn classifiers(&self, name: &Name) -> Vec<Arc<ClassifierSymbol>> {
        lookup(&self.classifiers, name)
    }
}

/// Member scopes registered per class identity.
///
/// Type arguments and nullability do not affect which scope is returned.
#[derive(Debug, Default)]
pub struct MemoryScopeProvider {
    scopes: HashMap<ClassId, Arc<dyn DeclarationScope>>,
}

impl MemoryScopeProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_member_scope(
        mut self,
        class: impl Into<ClassId>,
        scope: impl Into<Arc<dyn DeclarationScope>>,
    ) -> Self {
        self.scopes.insert(class.into(), scope.into());
        self
    }
}

impl ScopeProvider for MemoryScopeProvider {
    fn member_scope(&self, ty: &TypeRef) -> Option<Arc<dyn DeclarationScope>> {
        ty.class_id().and_then(|id| self.scopes.get(id).cloned())
    }
}
