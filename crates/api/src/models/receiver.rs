//! Receiver values a call may dispatch on.

use super::class::ClassId;
use super::expr::Expression;
use super::types::TypeRef;
use std::borrow::Cow;
use std::sync::Arc;

/// Where a receiver value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReceiverOrigin {
    /// Written (or synthesized) as a qualifier at the call site.
    Explicit,
    /// Captured from the enclosing-scope receiver stack.
    Implicit,
}

/// An immutable receiver: static type plus the expression it evaluates.
///
/// The expression is shared, so every view derived from a receiver points at
/// the same allocation.
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiverValue {
    ty: TypeRef,
    expression: Arc<Expression>,
    origin: ReceiverOrigin,
}

impl ReceiverValue {
    pub fn new(expression: impl Into<Arc<Expression>>, ty: TypeRef, origin: ReceiverOrigin) -> Self {
        Self {
            ty,
            expression: expression.into(),
            origin,
        }
    }

    pub fn explicit(expression: impl Into<Arc<Expression>>, ty: TypeRef) -> Self {
        Self::new(expression, ty, ReceiverOrigin::Explicit)
    }

    pub fn implicit(expression: impl Into<Arc<Expression>>, ty: TypeRef) -> Self {
        Self::new(expression, ty, ReceiverOrigin::Implicit)
    }

    pub fn ty(&self) -> &TypeRef {
        &self.ty
    }

    pub fn expression(&self) -> &Arc<Expression> {
        &self.expression
    }

    pub fn origin(&self) -> ReceiverOrigin {
        self.origin
    }

    pub fn is_implicit(&self) -> bool {
        self.origin == ReceiverOrigin::Implicit
    }

    /// Borrowing view of this receiver with nullability forced off.
    pub fn not_null(&self) -> NotNullReceiver<'_> {
        NotNullReceiver { inner: self }
    }
}

/// Read-only projection of a receiver whose type is forced to non-null.
///
/// Borrows the wrapped receiver and stores nothing of its own.
#[derive(Debug, Clone, Copy)]
pub struct NotNullReceiver<'a> {
    inner: &'a ReceiverValue,
}

impl<'a> NotNullReceiver<'a> {
    pub fn ty(&self) -> TypeRef {
        self.inner.ty.make_not_nullable()
    }

    pub fn expression(&self) -> &'a Arc<Expression> {
        &self.inner.expression
    }

    pub fn origin(&self) -> ReceiverOrigin {
        self.inner.origin
    }

    pub fn inner(&self) -> &'a ReceiverValue {
        self.inner
    }

    /// Materializes the view as a standalone receiver sharing the expression.
    pub fn to_value(&self) -> ReceiverValue {
        ReceiverValue {
            ty: self.ty(),
            expression: Arc::clone(&self.inner.expression),
            origin: self.inner.origin,
        }
    }
}

/// Dispatch receiver attached to an emitted candidate.
#[derive(Debug, Clone)]
pub enum ReceiverRef<'a> {
    /// A receiver owned by the level or the implicit-receiver stack.
    Borrowed(&'a ReceiverValue),
    /// A non-null view of the level's configured receiver.
    NotNull(NotNullReceiver<'a>),
    /// A receiver built for this candidate only, e.g. an object qualifier.
    Synthesized(ReceiverValue),
}

impl ReceiverRef<'_> {
    pub fn ty(&self) -> Cow<'_, TypeRef> {
        match self {
            ReceiverRef::Borrowed(r) => Cow::Borrowed(r.ty()),
            ReceiverRef::NotNull(view) => Cow::Owned(view.ty()),
            ReceiverRef::Synthesized(r) => Cow::Borrowed(r.ty()),
        }
    }

    pub fn expression(&self) -> &Arc<Expression> {
        match self {
            ReceiverRef::Borrowed(r) => r.expression(),
            ReceiverRef::NotNull(view) => view.expression(),
            ReceiverRef::Synthesized(r) => r.expression(),
        }
    }

    pub fn origin(&self) -> ReceiverOrigin {
        match self {
            ReceiverRef::Borrowed(r) => r.origin(),
            ReceiverRef::NotNull(view) => view.origin(),
            ReceiverRef::Synthesized(r) => r.origin(),
        }
    }

    pub fn to_value(&self) -> ReceiverValue {
        match self {
            ReceiverRef::Borrowed(r) => (*r).clone(),
            ReceiverRef::NotNull(view) => view.to_value(),
            ReceiverRef::Synthesized(r) => r.clone(),
        }
    }
}

/// Receivers available without syntactic mention, innermost first.
///
/// Populated by the front end; levels only read it.
#[derive(Debug, Clone, Default)]
pub struct ImplicitReceiverStack {
    receivers: Vec<ReceiverValue>,
}

impl ImplicitReceiverStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a stack from receivers ordered innermost first.
    pub fn from_innermost(receivers: Vec<ReceiverValue>) -> Self {
        Self { receivers }
    }

    /// Returns a stack with `receiver` added as the outermost entry.
    pub fn with_outer(mut self, receiver: ReceiverValue) -> Self {
        self.receivers.push(receiver);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.receivers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.receivers.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ReceiverValue> {
        self.receivers.iter()
    }

    pub fn innermost(&self) -> Option<&ReceiverValue> {
        self.receivers.first()
    }

    /// First receiver, innermost outward, accepted by `filter`.
    pub fn find(&self, filter: impl Fn(&ReceiverValue) -> bool) -> Option<&ReceiverValue> {
        self.receivers.iter().find(|r| filter(r))
    }

    /// Innermost receiver whose static type is the given class.
    pub fn find_by_class(&self, class: &ClassId) -> Option<&ReceiverValue> {
        self.find(|r| r.ty().class_id() == Some(class))
    }
}
