use crate::token::TokenKind;

/// Errors raised by tower levels.
///
/// The two level variants are caller contract violations: the outer resolver
/// routed a query to a level that cannot answer it. They abort the current
/// resolution attempt and must never be treated as an empty result.
#[derive(Debug, thiserror::Error)]
pub enum TowerError {
    #[error("constructor query issued on a scope level; use a constructor level instead")]
    ConstructorsOnScopeLevel,
    #[error("constructor level only answers constructor queries, got {token}")]
    NonConstructorOnConstructorLevel { token: TokenKind },
    #[error("Invalid tower configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl TowerError {
    /// True for the two level-selection bugs, false for configuration errors.
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            TowerError::ConstructorsOnScopeLevel
                | TowerError::NonConstructorOnConstructorLevel { .. }
        )
    }
}

pub type TowerResult<T> = std::result::Result<T, TowerError>;
