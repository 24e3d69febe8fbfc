mod common;

use common::*;
use std::sync::Arc;
use towerscope_api::{
    ClassKind, ClassRef, ClassifierSymbol, ConstructorSymbol, Constructors, Declaration,
    DeclarationScope, Expression, FunctionSymbol, Functions, ImplicitReceiverStack, Objects,
    ProcessorAction, Properties, PropertySymbol, ReceiverOrigin, ReceiverValue, ScopeKind,
    TowerError, TypeRef,
};
use towerscope_core::{MemoryScope, ScopeLevel, TowerConfig, TowerContext};

fn bar_scope() -> Arc<dyn DeclarationScope> {
    MemoryScope::new(ScopeKind::Package)
        .with_function(FunctionSymbol::new("bar", TypeRef::unit()))
        .with_function(FunctionSymbol::new("bar", TypeRef::unit()).with_extension_receiver(string()))
        .into_shared()
}

#[test]
fn test_extensions_only_keeps_extension_declarations() {
    let level = ScopeLevel::new(context(), bar_scope()).with_extensions_only();

    let (action, candidates) = collect(&level, Functions, "bar").unwrap();

    assert_eq!(action, ProcessorAction::NonEmpty);
    assert_eq!(candidates.len(), 1);
    assert!(candidates[0].symbol.has_extension_receiver());
    assert!(candidates[0].dispatch_receiver.is_none());
    assert!(candidates[0].extension_receiver.is_none());
}

#[test]
fn test_extensions_only_with_implicit_extension_receiver() {
    let extension = implicit_this("String", string());
    let level = ScopeLevel::new(context(), bar_scope())
        .with_extensions_only()
        .with_extension_receiver(extension.clone());

    let (action, candidates) = collect(&level, Functions, "bar").unwrap();

    assert_eq!(action, ProcessorAction::NonEmpty);
    assert_eq!(candidates.len(), 1);
    assert!(candidates[0].symbol.has_extension_receiver());
    assert_eq!(candidates[0].extension_receiver.as_ref(), Some(&extension));
}

#[test]
fn test_extension_consistency_without_extensions_only() {
    let plain = ScopeLevel::new(context(), bar_scope());
    let (_, candidates) = collect(&plain, Functions, "bar").unwrap();
    assert_eq!(candidates.len(), 1);
    assert!(!candidates[0].symbol.has_extension_receiver());

    let extension = implicit_this("String", string());
    let with = ScopeLevel::new(context(), bar_scope()).with_extension_receiver(extension.clone());
    let (_, candidates) = collect(&with, Functions, "bar").unwrap();
    assert_eq!(candidates.len(), 1);
    assert!(candidates[0].symbol.has_extension_receiver());
    assert_eq!(candidates[0].extension_receiver.as_ref(), Some(&extension));
}

#[test]
fn test_constructors_query_is_rejected() {
    let scope = MemoryScope::new(ScopeKind::Lexical)
        .with_constructor(ConstructorSymbol::primary(ClassRef::class("app.Widget")))
        .into_shared();
    let level = ScopeLevel::new(context(), scope);

    let err = collect(&level, Constructors, "Widget").unwrap_err();
    assert!(matches!(err, TowerError::ConstructorsOnScopeLevel));
    assert!(err.is_contract_violation());
}

#[test]
fn test_objects_emitted_without_receivers() {
    let scope = MemoryScope::new(ScopeKind::StarImport)
        .with_classifier(ClassifierSymbol::new("app.Registry", ClassKind::Object))
        .into_shared();
    let level = ScopeLevel::new(context(), scope).with_extension_receiver(implicit_this("x", string()));

    let (action, candidates) = collect(&level, Objects, "Registry").unwrap();
    assert_eq!(action, ProcessorAction::NonEmpty);
    assert_eq!(candidates.len(), 1);
    assert!(candidates[0].dispatch_receiver.is_none());
    assert!(candidates[0].extension_receiver.is_none());

    let (action, candidates) = collect(&level, Objects, "Missing").unwrap();
    assert_eq!(action, ProcessorAction::Empty);
    assert!(candidates.is_empty());
}

#[test]
fn test_explicit_import_of_object_member_gets_qualifier() {
    let member = FunctionSymbol::new("register", TypeRef::unit())
        .with_owner(ClassRef::object("app.Registry"));
    let imported = MemoryScope::new(ScopeKind::ExplicitImport)
        .with_function(member.clone())
        .into_shared();

    let (_, candidates) = collect(&ScopeLevel::new(context(), imported), Functions, "register").unwrap();
    assert_eq!(candidates.len(), 1);
    let dispatch = candidates[0].dispatch_receiver.as_ref().unwrap();
    assert_eq!(dispatch.ty(), &TypeRef::class("app.Registry"));
    assert_eq!(dispatch.origin(), ReceiverOrigin::Explicit);
    assert_eq!(
        dispatch.expression().as_ref(),
        &Expression::Qualifier("app.Registry".into())
    );

    let package = MemoryScope::new(ScopeKind::Package).with_function(member).into_shared();
    let (_, candidates) = collect(&ScopeLevel::new(context(), package), Functions, "register").unwrap();
    assert_eq!(candidates.len(), 1);
    assert!(candidates[0].dispatch_receiver.is_none());
}

#[test]
fn test_explicit_import_of_enum_entry_member() {
    let imported = MemoryScope::new(ScopeKind::ExplicitImport)
        .with_property(
            PropertySymbol::new("label", string())
                .with_owner(ClassRef::new("app.Color.RED", ClassKind::EnumEntry)),
        )
        .into_shared();

    let (_, candidates) = collect(&ScopeLevel::new(context(), imported), Properties, "label").unwrap();
    let dispatch = candidates[0].dispatch_receiver.as_ref().unwrap();
    assert_eq!(dispatch.ty(), &TypeRef::class("app.Color"));
}

fn field_scope(owner: Option<&str>) -> Arc<dyn DeclarationScope> {
    let mut field = PropertySymbol::backing_field(int());
    if let Some(owner) = owner {
        field = field.with_owner(ClassRef::class(owner));
    }
    MemoryScope::new(ScopeKind::Lexical).with_property(field).into_shared()
}

fn accessor_stack() -> (ImplicitReceiverStack, Vec<ReceiverValue>) {
    let lambda = implicit_this("apply", TypeRef::class("app.Builder"));
    let counter = implicit_this("Counter", TypeRef::class("app.Counter"));
    let stack = ImplicitReceiverStack::from_innermost(vec![lambda.clone(), counter.clone()]);
    (stack, vec![lambda, counter])
}

#[test]
fn test_backing_field_dispatches_on_owner_receiver() {
    let (stack, receivers) = accessor_stack();
    let ctx = context_with(stack);

    let level = ScopeLevel::new(ctx.clone(), field_scope(Some("app.Counter")));
    let (_, candidates) = collect(&level, Properties, "field").unwrap();
    let dispatch = candidates[0].dispatch_receiver.as_ref().unwrap();
    assert!(Arc::ptr_eq(dispatch.expression(), receivers[1].expression()));

    let level = ScopeLevel::new(ctx, field_scope(None));
    let (_, candidates) = collect(&level, Properties, "field").unwrap();
    let dispatch = candidates[0].dispatch_receiver.as_ref().unwrap();
    assert!(Arc::ptr_eq(dispatch.expression(), receivers[0].expression()));
}

#[test]
fn test_backing_field_without_receiver_follows_policy() {
    let (stack, _) = accessor_stack();

    let forward = ScopeLevel::new(context_with(stack.clone()), field_scope(Some("app.Gauge")));
    let (action, candidates) = collect(&forward, Properties, "field").unwrap();
    assert_eq!(action, ProcessorAction::NonEmpty);
    assert_eq!(candidates.len(), 1);
    assert!(candidates[0].dispatch_receiver.is_none());

    let config =
        TowerConfig::from_json_str(r#"{ "backing_field_policy": "require_receiver" }"#).unwrap();
    let ctx = TowerContext::from_config(Arc::new(provider()), stack, config).into_shared();
    let strict = ScopeLevel::new(ctx, field_scope(Some("app.Gauge")));
    let (action, candidates) = collect(&strict, Properties, "field").unwrap();
    assert_eq!(action, ProcessorAction::NonEmpty);
    assert!(candidates.is_empty());
}

#[test]
fn test_empty_scope_is_empty_for_every_answerable_token() {
    let level = ScopeLevel::new(context(), empty_scope(ScopeKind::Lexical));

    assert_eq!(collect(&level, Properties, "x").unwrap().0, ProcessorAction::Empty);
    assert_eq!(collect(&level, Functions, "x").unwrap().0, ProcessorAction::Empty);
    assert_eq!(collect(&level, Objects, "x").unwrap().0, ProcessorAction::Empty);
}
