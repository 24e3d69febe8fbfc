//! Lookup in the member scope of a dispatch receiver.

use super::{TokenProcessor, TowerContext, TowerLevel, dispatch_query};
use crate::config::TowerConfig;
use std::sync::Arc;
use towerscope_api::{
    Candidate, CandidateConsumer, Declaration, INVOKE, Name, ProcessorAction, Query, ReceiverRef,
    ReceiverValue, Token, TokenKind, TowerResult,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemberLevelConfig {
    /// Only answer `invoke` calls, pairing the extension receiver both as
    /// extension receiver and as the built-in extension-function receiver.
    pub implicit_extension_invoke: bool,
    /// Only emit constructors (`this(...)` / `super(...)` in inner classes).
    pub constructor_delegation: bool,
    pub synthetic_properties: bool,
}

impl Default for MemberLevelConfig {
    fn default() -> Self {
        Self {
            implicit_extension_invoke: false,
            constructor_delegation: false,
            synthetic_properties: true,
        }
    }
}

impl From<&TowerConfig> for MemberLevelConfig {
    fn from(value: &TowerConfig) -> Self {
        Self {
            synthetic_properties: value.synthetic_properties,
            ..Self::default()
        }
    }
}

/// Members reachable through an instance receiver.
#[derive(Clone)]
pub struct MemberScopeLevel {
    context: Arc<TowerContext>,
    dispatch_receiver: ReceiverValue,
    extension_receiver: Option<ReceiverValue>,
    config: MemberLevelConfig,
}

impl MemberScopeLevel {
    pub fn new(context: Arc<TowerContext>, dispatch_receiver: ReceiverValue) -> Self {
        let config = MemberLevelConfig::from(&context.config);
        Self {
            context,
            dispatch_receiver,
            extension_receiver: None,
            config,
        }
    }

    pub fn with_extension_receiver(mut self, receiver: ReceiverValue) -> Self {
        self.extension_receiver = Some(receiver);
        self
    }

    pub fn with_implicit_extension_invoke(mut self) -> Self {
        self.config.implicit_extension_invoke = true;
        self
    }

    pub fn for_constructor_delegation(mut self) -> Self {
        self.config.constructor_delegation = true;
        self
    }

    pub fn with_config(mut self, config: MemberLevelConfig) -> Self {
        self.config = config;
        self
    }

    pub fn dispatch_receiver(&self) -> &ReceiverValue {
        &self.dispatch_receiver
    }

    pub fn extension_receiver(&self) -> Option<&ReceiverValue> {
        self.extension_receiver.as_ref()
    }

    pub fn config(&self) -> MemberLevelConfig {
        self.config
    }

    /// Same level, new dispatch receiver. Used to re-probe after the
    /// receiver's type was narrowed.
    pub fn replace_receiver_value(&self, receiver: ReceiverValue) -> Self {
        Self {
            dispatch_receiver: receiver,
            ..self.clone()
        }
    }

    /// Explicit extension receivers are paired by the scope-level pass.
    fn implicit_extension_receiver(&self) -> Option<&ReceiverValue> {
        self.extension_receiver.as_ref().filter(|r| r.is_implicit())
    }

    fn is_reachable<S: Declaration>(&self, symbol: &S) -> bool {
        if symbol.is_static() {
            return false;
        }
        if symbol.is_constructor() && !symbol.is_inner_constructor() {
            return false;
        }
        self.config.implicit_extension_invoke
            || self.extension_receiver.is_some() == symbol.has_extension_receiver()
    }
}

impl TokenProcessor for MemberScopeLevel {
    fn process_token<T: Token>(
        &self,
        name: &Name,
        consumer: &mut dyn CandidateConsumer<T::Symbol>,
    ) -> TowerResult<ProcessorAction> {
        if self.config.implicit_extension_invoke
            && !(T::KIND == TokenKind::Functions && name == INVOKE)
        {
            return Ok(ProcessorAction::NonEmpty);
        }

        let Some(scope) = self.context.scopes.member_scope(self.dispatch_receiver.ty()) else {
            tracing::debug!(ty = %self.dispatch_receiver.ty(), "no member scope for receiver type");
            return Ok(ProcessorAction::Empty);
        };

        let dispatch = self.dispatch_receiver.not_null();
        let extension = self.implicit_extension_receiver();
        let mut observed = false;

        for symbol in T::lookup(scope.as_ref(), name) {
            observed = true;
            if self.config.constructor_delegation && !symbol.is_constructor() {
                continue;
            }
            if !self.is_reachable(&symbol) {
                tracing::trace!(%name, token = %T::KIND, ?symbol, "member not reachable");
                continue;
            }

            if self.config.implicit_extension_invoke {
                consumer.consume(Candidate {
                    symbol: symbol.clone(),
                    dispatch_receiver: Some(ReceiverRef::NotNull(dispatch)),
                    extension_receiver: extension,
                    builtin_extension_receiver: None,
                });
                consumer.consume(Candidate {
                    symbol,
                    dispatch_receiver: Some(ReceiverRef::NotNull(dispatch)),
                    extension_receiver: None,
                    builtin_extension_receiver: self.extension_receiver.as_ref(),
                });
            } else {
                consumer.consume(Candidate {
                    symbol,
                    dispatch_receiver: Some(ReceiverRef::NotNull(dispatch)),
                    extension_receiver: extension,
                    builtin_extension_receiver: None,
                });
            }
        }

        if !self.config.constructor_delegation && self.config.synthetic_properties {
            let synthetic = self.context.scopes.synthetic_properties(scope);
            for symbol in T::lookup(synthetic.as_ref(), name) {
                observed = true;
                consumer.consume(Candidate {
                    symbol,
                    dispatch_receiver: Some(ReceiverRef::NotNull(dispatch)),
                    extension_receiver: extension,
                    builtin_extension_receiver: None,
                });
            }
        }

        Ok(ProcessorAction::from_observed(observed))
    }
}

impl TowerLevel for MemberScopeLevel {
    fn process_elements_by_name(&self, name: &Name, query: Query<'_>) -> TowerResult<ProcessorAction> {
        dispatch_query(self, name, query)
    }

    fn name(&self) -> &'static str {
        "Member"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scope::{MemoryScope, MemoryScopeProvider};
    use crate::tower::TowerLevelExt;
    use towerscope_api::{
        ClassRef, Expression, FunctionSymbol, Functions, ImplicitReceiverStack, PropertySymbol,
        Properties, ScopeKind, TypeRef,
    };

    fn string_context() -> Arc<TowerContext> {
        let owner = ClassRef::class("std.String");
        let members = MemoryScope::new(ScopeKind::Member)
            .with_property(PropertySymbol::new("length", TypeRef::class("std.Int")).with_owner(owner.clone()))
            .with_function(
                FunctionSymbol::new("valueOf", TypeRef::class("std.String"))
                    .with_owner(owner)
                    .with_static(),
            )
            .into_shared();
        let provider = MemoryScopeProvider::new().with_member_scope("std.String", members);
        TowerContext::new(Arc::new(provider), ImplicitReceiverStack::new()).into_shared()
    }

    #[test]
    fn test_member_level_nullable_receiver_is_forced_non_null() {
        let receiver = ReceiverValue::explicit(
            Expression::name("s"),
            TypeRef::class("std.String").make_nullable(),
        );
        let level = MemberScopeLevel::new(string_context(), receiver.clone());

        let mut types = Vec::new();
        let action = level
            .process(Properties, &Name::new("length"), |c| {
                let dispatch = c.dispatch_receiver.as_ref().unwrap();
                assert!(Arc::ptr_eq(dispatch.expression(), receiver.expression()));
                types.push(dispatch.ty().into_owned());
            })
            .unwrap();

        assert_eq!(action, ProcessorAction::NonEmpty);
        assert_eq!(types, vec![TypeRef::class("std.String")]);
    }

    #[test]
    fn test_member_level_static_member_is_found_but_not_emitted() {
        let receiver = ReceiverValue::explicit(Expression::name("s"), TypeRef::class("std.String"));
        let level = MemberScopeLevel::new(string_context(), receiver);

        let mut count = 0;
        let action = level
            .process(Functions, &Name::new("valueOf"), |_| count += 1)
            .unwrap();

        assert_eq!(action, ProcessorAction::NonEmpty);
        assert_eq!(count, 0);
    }

    #[test]
    fn test_member_level_unknown_type_is_empty() {
        let receiver = ReceiverValue::explicit(Expression::name("n"), TypeRef::class("std.Int"));
        let level = MemberScopeLevel::new(string_context(), receiver);

        let action = level
            .process(Properties, &Name::new("length"), |_| panic!("unexpected candidate"))
            .unwrap();
        assert!(action.is_empty());
    }

    #[test]
    fn test_config_follows_tower_config() {
        let mut ctx = TowerContext::new(
            Arc::new(MemoryScopeProvider::new()),
            ImplicitReceiverStack::new(),
        );
        ctx.config.synthetic_properties = false;
        let receiver = ReceiverValue::explicit(Expression::name("s"), TypeRef::class("std.String"));
        let level = MemberScopeLevel::new(ctx.into_shared(), receiver).for_constructor_delegation();

        let config = level.config();
        assert!(!config.synthetic_properties);
        assert!(config.constructor_delegation);
        assert!(!config.implicit_extension_invoke);
        assert_eq!(level.name(), "Member");
    }
}
