//! Properties synthesized from accessor method pairs.
//!
//! `getFoo()` / `setFoo(v)` on the base scope surface as a property `foo`;
//! `isFoo()` surfaces as `isFoo` with `setFoo(v)` as its setter.

use std::sync::Arc;
use towerscope_api::{
    ClassifierSymbol, ConstructorSymbol, Declaration, DeclarationScope, FunctionSymbol, Name,
    PropertyOrigin, PropertySymbol, ScopeKind, capitalize,
};

#[derive(Debug)]
pub struct SyntheticPropertiesScope {
    base: Arc<dyn DeclarationScope>,
}

impl SyntheticPropertiesScope {
    pub fn new(base: Arc<dyn DeclarationScope>) -> Self {
        Self { base }
    }

    fn find_getter(&self, property: &str) -> Option<Arc<FunctionSymbol>> {
        getter_names(property)
            .into_iter()
            .flat_map(|getter| self.base.functions(&getter))
            .find(|f| is_accessor_shaped(f) && f.value_parameters.is_empty() && !f.return_type.is_unit())
    }

    fn find_setter(&self, property: &str) -> Option<Arc<FunctionSymbol>> {
        self.base
            .functions(&setter_name(property))
            .into_iter()
            .find(|f| is_accessor_shaped(f) && f.value_parameters.len() == 1)
    }
}

fn is_accessor_shaped(f: &FunctionSymbol) -> bool {
    !f.has_extension_receiver() && !f.is_static()
}

/// `isFoo` followed by an upper-case letter.
fn is_prefixed(property: &str) -> bool {
    property
        .strip_prefix("is")
        .and_then(|rest| rest.chars().next())
        .is_some_and(char::is_uppercase)
}

fn getter_names(property: &str) -> Vec<Name> {
    let mut names = Vec::with_capacity(2);
    if is_prefixed(property) {
        names.push(Name::new(property));
    }
    // `getSize` is the property `size`, never `Size`.
    if !property.starts_with(char::is_uppercase) {
        names.push(Name::new(format!("get{}", capitalize(property))));
    }
    names
}

fn setter_name(property: &str) -> Name {
    match property.strip_prefix("is") {
        Some(rest) if is_prefixed(property) => Name::new(format!("set{}", rest)),
        _ => Name::new(format!("set{}", capitalize(property))),
    }
}

impl DeclarationScope for SyntheticPropertiesScope {
    fn kind(&self) -> ScopeKind {
        ScopeKind::SyntheticProperties
    }

    fn properties(&self, name: &Name) -> Vec<Arc<PropertySymbol>> {
        if name.is_empty() {
            return Vec::new();
        }
        let Some(getter) = self.find_getter(name) else {
            return Vec::new();
        };
        let setter = self.find_setter(name).map(|s| s.name.clone());

        let mut property = PropertySymbol::new(name.clone(), getter.return_type.clone())
            .with_origin(PropertyOrigin::Synthetic {
                getter: getter.name.clone(),
                setter,
            });
        property.owner = getter.owner.clone();
        vec![Arc::new(property)]
    }

    fn functions(&self, _name: &Name) -> Vec<Arc<FunctionSymbol>> {
        Vec::new()
    }

    fn constructors(&self, _name: &Name) -> Vec<Arc<ConstructorSymbol>> {
        Vec::new()
    }

    fn classifiers(&self, _name: &Name) -> Vec<Arc<ClassifierSymbol>> {
        Vec::new()
    }
}
