use crate::models::{ClassifierSymbol, ConstructorSymbol, FunctionSymbol, PropertySymbol};
use smol_str::SmolStr;
use std::fmt::Debug;
use std::sync::Arc;

/// Kind of scope a declaration set was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScopeKind {
    /// Members of a type, reached through a receiver.
    Member,
    /// Local or class-body declarations.
    Lexical,
    /// `import a.b.Name`: a single explicitly imported name.
    ExplicitImport,
    /// `import a.b.*`
    StarImport,
    /// Implicitly imported packages.
    DefaultImport,
    /// Declarations of the current package.
    Package,
    /// Properties synthesized from accessor pairs of another scope.
    SyntheticProperties,
}

/// Enumerates the declarations visible in one scope.
///
/// Every declaration matching a name is reported exactly once; no order is
/// guaranteed beyond that.
pub trait DeclarationScope: Debug + Send + Sync {
    fn kind(&self) -> ScopeKind;

    fn properties(&self, name: &SmolStr) -> Vec<Arc<PropertySymbol>>;

    fn functions(&self, name: &SmolStr) -> Vec<Arc<FunctionSymbol>>;

    /// Constructors of the classifier called `name` visible in this scope.
    fn constructors(&self, name: &SmolStr) -> Vec<Arc<ConstructorSymbol>>;

    fn classifiers(&self, name: &SmolStr) -> Vec<Arc<ClassifierSymbol>>;
}
