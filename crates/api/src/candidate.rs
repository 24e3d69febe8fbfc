use crate::models::{ReceiverRef, ReceiverValue};

/// One reachable declaration with the receivers a call on it would use.
///
/// Receivers borrow from the level that emitted the candidate; use
/// [`Candidate::into_owned`] to keep one past the consumer call.
#[derive(Debug, Clone)]
pub struct Candidate<'a, S> {
    pub symbol: S,
    pub dispatch_receiver: Option<ReceiverRef<'a>>,
    pub extension_receiver: Option<&'a ReceiverValue>,
    /// Receiver passed as the first argument when a property holding an
    /// extension-function value is invoked directly.
    pub builtin_extension_receiver: Option<&'a ReceiverValue>,
}

impl<'a, S> Candidate<'a, S> {
    /// A candidate with no receivers at all.
    pub fn bare(symbol: S) -> Self {
        Self {
            symbol,
            dispatch_receiver: None,
            extension_receiver: None,
            builtin_extension_receiver: None,
        }
    }

    pub fn into_owned(self) -> OwnedCandidate<S> {
        OwnedCandidate {
            dispatch_receiver: self.dispatch_receiver.as_ref().map(ReceiverRef::to_value),
            extension_receiver: self.extension_receiver.cloned(),
            builtin_extension_receiver: self.builtin_extension_receiver.cloned(),
            symbol: self.symbol,
        }
    }
}

/// A [`Candidate`] detached from the level that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct OwnedCandidate<S> {
    pub symbol: S,
    pub dispatch_receiver: Option<ReceiverValue>,
    pub extension_receiver: Option<ReceiverValue>,
    pub builtin_extension_receiver: Option<ReceiverValue>,
}

/// Receives the candidates of one query.
pub trait CandidateConsumer<S> {
    fn consume(&mut self, candidate: Candidate<'_, S>);
}

impl<S, F> CandidateConsumer<S> for F
where
    F: FnMut(Candidate<'_, S>),
{
    fn consume(&mut self, candidate: Candidate<'_, S>) {
        self(candidate)
    }
}

/// Outcome of one name lookup on a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProcessorAction {
    /// The scope held nothing under that name.
    #[default]
    Empty,
    /// At least one declaration was seen, whether or not it was emitted.
    /// The outer resolver treats this as a shadowing boundary.
    NonEmpty,
}

impl ProcessorAction {
    pub fn from_observed(observed: bool) -> Self {
        if observed {
            ProcessorAction::NonEmpty
        } else {
            ProcessorAction::Empty
        }
    }

    pub fn is_empty(self) -> bool {
        self == ProcessorAction::Empty
    }

    pub fn is_non_empty(self) -> bool {
        self == ProcessorAction::NonEmpty
    }

    /// Non-empty if either side is.
    pub fn merge(self, other: ProcessorAction) -> ProcessorAction {
        ProcessorAction::from_observed(self.is_non_empty() || other.is_non_empty())
    }
}
