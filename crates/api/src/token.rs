//! Declaration-category tokens.
//!
//! A token fixes, at compile time, which symbol type a query hands to its
//! consumer. Queries travel as [`Query`], a closed union with one variant per
//! token, so a properties query can only ever deliver properties.

use crate::candidate::CandidateConsumer;
use crate::models::{
    ClassifierSymbol, ConstructorSymbol, Declaration, FunctionLike, Name, PropertySymbol,
};
use crate::scope::DeclarationScope;
use std::fmt;
use std::sync::Arc;

/// Runtime tag of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Properties,
    Functions,
    Constructors,
    Objects,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TokenKind::Properties => "properties",
            TokenKind::Functions => "functions",
            TokenKind::Constructors => "constructors",
            TokenKind::Objects => "objects",
        };
        write!(f, "{}", s)
    }
}

mod sealed {
    pub trait Sealed {}
}

/// A declaration category with its associated symbol type.
pub trait Token: sealed::Sealed + Copy + Send + Sync + 'static {
    type Symbol: Declaration + Clone;

    const KIND: TokenKind;

    /// Declarations of this category named `name` in `scope`.
    fn lookup(scope: &dyn DeclarationScope, name: &Name) -> Vec<Self::Symbol>;

    /// Wraps a typed consumer into the matching query variant.
    fn query<'c>(consumer: &'c mut dyn CandidateConsumer<Self::Symbol>) -> Query<'c>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Properties;

#[derive(Debug, Clone, Copy, Default)]
pub struct Functions;

#[derive(Debug, Clone, Copy, Default)]
pub struct Constructors;

#[derive(Debug, Clone, Copy, Default)]
pub struct Objects;

impl sealed::Sealed for Properties {}
impl sealed::Sealed for Functions {}
impl sealed::Sealed for Constructors {}
impl sealed::Sealed for Objects {}

impl Token for Properties {
    type Symbol = Arc<PropertySymbol>;
    const KIND: TokenKind = TokenKind::Properties;

    fn lookup(scope: &dyn DeclarationScope, name: &Name) -> Vec<Self::Symbol> {
        scope.properties(name)
    }

    fn query<'c>(consumer: &'c mut dyn CandidateConsumer<Self::Symbol>) -> Query<'c> {
        Query::Properties(consumer)
    }
}

impl Token for Functions {
    type Symbol = FunctionLike;
    const KIND: TokenKind = TokenKind::Functions;

    /// Named functions first, then constructors of a classifier with that name.
    fn lookup(scope: &dyn DeclarationScope, name: &Name) -> Vec<Self::Symbol> {
        scope
            .functions(name)
            .into_iter()
            .map(FunctionLike::Function)
            .chain(
                scope
                    .constructors(name)
                    .into_iter()
                    .map(FunctionLike::Constructor),
            )
            .collect()
    }

    fn query<'c>(consumer: &'c mut dyn CandidateConsumer<Self::Symbol>) -> Query<'c> {
        Query::Functions(consumer)
    }
}

impl Token for Constructors {
    type Symbol = Arc<ConstructorSymbol>;
    const KIND: TokenKind = TokenKind::Constructors;

    fn lookup(scope: &dyn DeclarationScope, name: &Name) -> Vec<Self::Symbol> {
        scope.constructors(name)
    }

    fn query<'c>(consumer: &'c mut dyn CandidateConsumer<Self::Symbol>) -> Query<'c> {
        Query::Constructors(consumer)
    }
}

impl Token for Objects {
    type Symbol = Arc<ClassifierSymbol>;
    const KIND: TokenKind = TokenKind::Objects;

    fn lookup(scope: &dyn DeclarationScope, name: &Name) -> Vec<Self::Symbol> {
        scope.classifiers(name)
    }

    fn query<'c>(consumer: &'c mut dyn CandidateConsumer<Self::Symbol>) -> Query<'c> {
        Query::Objects(consumer)
    }
}

/// A category-tagged consumer handed to a tower level.
pub enum Query<'c> {
    Properties(&'c mut dyn CandidateConsumer<Arc<PropertySymbol>>),
    Functions(&'c mut dyn CandidateConsumer<FunctionLike>),
    Constructors(&'c mut dyn CandidateConsumer<Arc<ConstructorSymbol>>),
    Objects(&'c mut dyn CandidateConsumer<Arc<ClassifierSymbol>>),
}

impl Query<'_> {
    pub fn kind(&self) -> TokenKind {
        match self {
            Query::Properties(_) => TokenKind::Properties,
            Query::Functions(_) => TokenKind::Functions,
            Query::Constructors(_) => TokenKind::Constructors,
            Query::Objects(_) => TokenKind::Objects,
        }
    }
}

impl fmt::Debug for Query<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Query").field(&self.kind()).finish()
    }
}
