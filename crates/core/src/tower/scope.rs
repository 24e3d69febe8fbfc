//! Lookup in a lexical or imported scope with no owning instance.

use super::{TokenProcessor, TowerContext, TowerLevel, dispatch_query};
use crate::config::{BackingFieldPolicy, TowerConfig};
use std::sync::Arc;
use towerscope_api::{
    Candidate, CandidateConsumer, Declaration, DeclarationScope, Name, ProcessorAction, Query,
    ReceiverRef, ReceiverValue, ScopeKind, Token, TokenKind, TowerError, TowerResult,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScopeLevelConfig {
    /// Reject every declaration without its own extension-receiver parameter.
    pub extensions_only: bool,
    /// Let function lookups see constructors of inner classes.
    pub include_inner_constructors: bool,
    pub backing_field_policy: BackingFieldPolicy,
}

impl From<&TowerConfig> for ScopeLevelConfig {
    fn from(value: &TowerConfig) -> Self {
        Self {
            backing_field_policy: value.backing_field_policy,
            ..Self::default()
        }
    }
}

/// Dispatch receiver derived for one accepted declaration.
enum Dispatch<'a> {
    Receiver(ReceiverRef<'a>),
    Absent,
    /// Backing field with no receiver in scope under `RequireReceiver`.
    Rejected,
}

/// Declarations of a bound scope, paired with at most an extension receiver.
#[derive(Clone)]
pub struct ScopeLevel {
    context: Arc<TowerContext>,
    scope: Arc<dyn DeclarationScope>,
    extension_receiver: Option<ReceiverValue>,
    config: ScopeLevelConfig,
}

impl ScopeLevel {
    pub fn new(context: Arc<TowerContext>, scope: Arc<dyn DeclarationScope>) -> Self {
        let config = ScopeLevelConfig::from(&context.config);
        Self {
            context,
            scope,
            extension_receiver: None,
            config,
        }
    }

    pub fn with_extension_receiver(mut self, receiver: ReceiverValue) -> Self {
        self.extension_receiver = Some(receiver);
        self
    }

    pub fn with_extensions_only(mut self) -> Self {
        self.config.extensions_only = true;
        self
    }

    pub fn with_inner_constructors(mut self) -> Self {
        self.config.include_inner_constructors = true;
        self
    }

    pub fn with_config(mut self, config: ScopeLevelConfig) -> Self {
        self.config = config;
        self
    }

    pub fn scope(&self) -> &Arc<dyn DeclarationScope> {
        &self.scope
    }

    pub fn config(&self) -> ScopeLevelConfig {
        self.config
    }

    fn is_eligible<S: Declaration>(&self, symbol: &S) -> bool {
        if self.config.extensions_only {
            return symbol.has_extension_receiver();
        }
        self.extension_receiver.is_some() == symbol.has_extension_receiver()
    }

    fn dispatch_receiver_for<S: Declaration>(&self, symbol: &S) -> Dispatch<'_> {
        // `import Obj.member` makes `member()` mean `Obj.member()`.
        if self.scope.kind() == ScopeKind::ExplicitImport {
            if let Some(owner) = symbol.owner().filter(|o| o.kind.is_singleton()) {
                if let Some(qualifier) = self.context.qualifiers.qualifier_receiver(owner) {
                    return Dispatch::Receiver(ReceiverRef::Synthesized(qualifier));
                }
            }
        }

        if symbol.is_backing_field() {
            let stack = &self.context.implicit_receivers;
            let found = match symbol.owner() {
                Some(owner) => stack.find_by_class(&owner.id),
                None => stack.innermost(),
            };
            return match (found, self.config.backing_field_policy) {
                (Some(receiver), _) => Dispatch::Receiver(ReceiverRef::Borrowed(receiver)),
                (None, BackingFieldPolicy::Forward) => Dispatch::Absent,
                (None, BackingFieldPolicy::RequireReceiver) => Dispatch::Rejected,
            };
        }

        Dispatch::Absent
    }
}

impl TokenProcessor for ScopeLevel {
    fn process_token<T: Token>(
        &self,
        name: &Name,
        consumer: &mut dyn CandidateConsumer<T::Symbol>,
    ) -> TowerResult<ProcessorAction> {
        if T::KIND == TokenKind::Constructors {
            tracing::warn!(%name, "constructor query routed to a scope level");
            return Err(TowerError::ConstructorsOnScopeLevel);
        }

        let symbols = T::lookup(self.scope.as_ref(), name);

        match T::KIND {
            TokenKind::Objects => {
                let observed = !symbols.is_empty();
                for symbol in symbols {
                    consumer.consume(Candidate::bare(symbol));
                }
                Ok(ProcessorAction::from_observed(observed))
            }
            _ => {
                let extension = self.extension_receiver.as_ref().filter(|r| r.is_implicit());
                let mut observed = false;

                for symbol in symbols {
                    if symbol.is_inner_constructor() && !self.config.include_inner_constructors {
                        continue;
                    }
                    observed = true;
                    if !self.is_eligible(&symbol) {
                        tracing::trace!(%name, token = %T::KIND, ?symbol, "receiver shape mismatch");
                        continue;
                    }

                    let dispatch_receiver = match self.dispatch_receiver_for(&symbol) {
                        Dispatch::Receiver(receiver) => Some(receiver),
                        Dispatch::Absent => None,
                        Dispatch::Rejected => {
                            tracing::trace!(%name, "backing field without enclosing receiver");
                            continue;
                        }
                    };

                    consumer.consume(Candidate {
                        symbol,
                        dispatch_receiver,
                        extension_receiver: extension,
                        builtin_extension_receiver: None,
                    });
                }

                Ok(ProcessorAction::from_observed(observed))
            }
        }
    }
}

impl TowerLevel for ScopeLevel {
    fn process_elements_by_name(&self, name: &Name, query: Query<'_>) -> TowerResult<ProcessorAction> {
        dispatch_query(self, name, query)
    }

    fn name(&self) -> &'static str {
        "Scope"
    }
}
