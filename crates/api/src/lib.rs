pub mod candidate;
pub mod error;
pub mod models;
pub mod scope;
pub mod token;

// Re-export commonly used types
pub use candidate::{Candidate, CandidateConsumer, OwnedCandidate, ProcessorAction};
pub use error::{TowerError, TowerResult};
pub use models::*;
pub use scope::{DeclarationScope, ScopeKind};
pub use token::{Constructors, Functions, Objects, Properties, Query, Token, TokenKind};
