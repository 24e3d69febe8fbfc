#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use towerscope_api::{
    ClassRef, DeclarationScope, Expression, FunctionSymbol, ImplicitReceiverStack, Name,
    OwnedCandidate, ProcessorAction, PropertySymbol, ConstructorSymbol, ReceiverValue, ScopeKind,
    Token, TowerResult, TypeRef,
};
use towerscope_core::{
    MemoryScope, MemoryScopeProvider, ScopeProvider, TowerContext, TowerLevel, TowerLevelExt,
};

pub const TEXT: &str = "app.Text";
pub const HANDLER: &str = "app.Handler";
pub const OUTER: &str = "app.Outer";
pub const DSL: &str = "app.Dsl";

pub fn int() -> TypeRef {
    TypeRef::class("std.Int")
}

pub fn string() -> TypeRef {
    TypeRef::class("std.String")
}

/// Members of `app.Text`: a plain property, an accessor pair, a static factory.
pub fn text_members() -> MemoryScope {
    let owner = ClassRef::class(TEXT);
    MemoryScope::new(ScopeKind::Member)
        .with_property(PropertySymbol::new("length", int()).with_owner(owner.clone()))
        .with_function(FunctionSymbol::new("getSize", int()).with_owner(owner.clone()))
        .with_function(
            FunctionSymbol::new("setSize", TypeRef::unit())
                .with_owner(owner.clone())
                .with_parameters(vec![int()]),
        )
        .with_function(
            FunctionSymbol::new("of", TypeRef::class(TEXT))
                .with_owner(owner)
                .with_static(),
        )
}

/// Members of `app.Handler`: an operator `invoke`.
pub fn handler_members() -> MemoryScope {
    MemoryScope::new(ScopeKind::Member).with_function(
        FunctionSymbol::new("invoke", TypeRef::unit())
            .with_owner(ClassRef::class(HANDLER))
            .with_operator(),
    )
}

/// Members of `app.Outer`: an inner class, a nested class and a factory
/// function sharing the inner class's name.
pub fn outer_members() -> MemoryScope {
    let owner = ClassRef::class(OUTER);
    MemoryScope::new(ScopeKind::Member)
        .with_constructor(ConstructorSymbol::primary(ClassRef::class("app.Outer.Inner")).with_inner())
        .with_constructor(ConstructorSymbol::primary(ClassRef::class("app.Outer.Nested")))
        .with_function(FunctionSymbol::new("Inner", TypeRef::class("app.Outer.Inner")).with_owner(owner))
}

/// Members of `app.Dsl`: one member extension on `String`, one plain member.
pub fn dsl_members() -> MemoryScope {
    let owner = ClassRef::class(DSL);
    MemoryScope::new(ScopeKind::Member)
        .with_function(
            FunctionSymbol::new("render", TypeRef::unit())
                .with_owner(owner.clone())
                .with_extension_receiver(string()),
        )
        .with_function(FunctionSymbol::new("reset", TypeRef::unit()).with_owner(owner))
}

pub fn provider() -> MemoryScopeProvider {
    MemoryScopeProvider::new()
        .with_member_scope(TEXT, text_members().into_shared())
        .with_member_scope(HANDLER, handler_members().into_shared())
        .with_member_scope(OUTER, outer_members().into_shared())
        .with_member_scope(DSL, dsl_members().into_shared())
}

pub fn context() -> Arc<TowerContext> {
    context_with(ImplicitReceiverStack::new())
}

pub fn context_with(stack: ImplicitReceiverStack) -> Arc<TowerContext> {
    TowerContext::new(Arc::new(provider()), stack).into_shared()
}

pub fn explicit(name: &str, ty: TypeRef) -> ReceiverValue {
    ReceiverValue::explicit(Expression::name(name), ty)
}

pub fn implicit_this(label: &str, ty: TypeRef) -> ReceiverValue {
    ReceiverValue::implicit(Expression::labeled_this(label), ty)
}

pub fn empty_scope(kind: ScopeKind) -> Arc<dyn DeclarationScope> {
    MemoryScope::new(kind).into_shared()
}

/// Runs one query and detaches every emitted candidate from the level.
pub fn collect<L, T>(
    level: &L,
    token: T,
    name: &str,
) -> TowerResult<(ProcessorAction, Vec<OwnedCandidate<T::Symbol>>)>
where
    L: TowerLevel + ?Sized,
    T: Token,
{
    let mut out = Vec::new();
    let action = level.process(token, &Name::new(name), |c| out.push(c.into_owned()))?;
    Ok((action, out))
}

/// Counts `member_scope` calls reaching the wrapped provider.
pub struct CountingProvider {
    pub inner: MemoryScopeProvider,
    pub calls: AtomicUsize,
}

impl CountingProvider {
    pub fn new(inner: MemoryScopeProvider) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ScopeProvider for CountingProvider {
    fn member_scope(&self, ty: &TypeRef) -> Option<Arc<dyn DeclarationScope>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.member_scope(ty)
    }
}
