use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Dot-separated class identity, e.g. `app.Outer.Inner`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassId(Cow<'static, str>);

impl ClassId {
    pub const UNIT: ClassId = ClassId(Cow::Borrowed("builtins.Unit"));

    pub fn new(fqn: impl Into<Cow<'static, str>>) -> Self {
        Self(fqn.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Last segment of the identity.
    pub fn short_name(&self) -> &str {
        self.0.rsplit('.').next().unwrap_or(&self.0)
    }

    /// Identity of the enclosing declaration, if any.
    pub fn outer(&self) -> Option<ClassId> {
        self.0
            .rsplit_once('.')
            .map(|(outer, _)| ClassId::new(outer.to_string()))
    }
}

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ClassId {
    fn from(s: &str) -> Self {
        Self::new(s.to_string())
    }
}

impl From<String> for ClassId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// Kind of classifier declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassKind {
    Class,
    Interface,
    Object,
    EnumClass,
    EnumEntry,
    Annotation,
}

impl ClassKind {
    /// Objects and enum entries have exactly one instance, reachable by name.
    pub fn is_singleton(self) -> bool {
        matches!(self, ClassKind::Object | ClassKind::EnumEntry)
    }
}

/// Reference to the class that declares a member.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassRef {
    pub id: ClassId,
    pub kind: ClassKind,
}

impl ClassRef {
    pub fn new(id: impl Into<ClassId>, kind: ClassKind) -> Self {
        Self {
            id: id.into(),
            kind,
        }
    }

    pub fn class(id: impl Into<ClassId>) -> Self {
        Self::new(id, ClassKind::Class)
    }

    pub fn object(id: impl Into<ClassId>) -> Self {
        Self::new(id, ClassKind::Object)
    }
}
