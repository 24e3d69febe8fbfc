//! Constructors of a class reached through its name in a lexical scope.

use super::{TokenProcessor, TowerLevel, dispatch_query};
use std::sync::Arc;
use towerscope_api::{
    Candidate, CandidateConsumer, Declaration, DeclarationScope, Name, ProcessorAction, Query,
    Token, TokenKind, TowerError, TowerResult,
};

/// Answers constructor queries only. Inner constructors need an enclosing
/// instance and are left to [`super::MemberScopeLevel`].
#[derive(Debug, Clone)]
pub struct ConstructorScopeLevel {
    scope: Arc<dyn DeclarationScope>,
}

impl ConstructorScopeLevel {
    pub fn new(scope: Arc<dyn DeclarationScope>) -> Self {
        Self { scope }
    }

    pub fn scope(&self) -> &Arc<dyn DeclarationScope> {
        &self.scope
    }
}

impl TokenProcessor for ConstructorScopeLevel {
    fn process_token<T: Token>(
        &self,
        name: &Name,
        consumer: &mut dyn CandidateConsumer<T::Symbol>,
    ) -> TowerResult<ProcessorAction> {
        if T::KIND != TokenKind::Constructors {
            tracing::warn!(%name, token = %T::KIND, "non-constructor query on a constructor level");
            return Err(TowerError::NonConstructorOnConstructorLevel { token: T::KIND });
        }

        let mut observed = false;
        for symbol in T::lookup(self.scope.as_ref(), name) {
            if symbol.is_inner_constructor() {
                continue;
            }
            observed = true;
            consumer.consume(Candidate::bare(symbol));
        }
        Ok(ProcessorAction::from_observed(observed))
    }
}

impl TowerLevel for ConstructorScopeLevel {
    fn process_elements_by_name(&self, name: &Name, query: Query<'_>) -> TowerResult<ProcessorAction> {
        dispatch_query(self, name, query)
    }

    fn name(&self) -> &'static str {
        "Constructor"
    }
}
