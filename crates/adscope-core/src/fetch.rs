//! Lifecycle state for a single remote resource.
//!
//! Every fetch increments a generation counter and hands the caller a
//! [`FetchToken`]; the completion is only applied if its token still
//! matches. That discards slow responses from superseded requests, so a
//! re-fetch (new campaign selected, manual refresh) can never be
//! overwritten by a stale body arriving late.

/// Where a resource is in its fetch lifecycle.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    /// Nothing requested yet.
    Idle,
    /// A request is in flight.
    Loading,
    /// The resource arrived.
    Loaded(T),
    /// The service answered, but the resource does not exist.
    NotFound,
    /// The request failed; the payload is the user-facing message.
    Failed(String),
}

impl<T> FetchState<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    /// The loaded value, if any.
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Loaded(data) => Some(data),
            _ => None,
        }
    }

    /// The failure message, if any.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

// `derive(Default)` would require `T: Default` for no reason.
impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::Idle
    }
}

/// Proof of which fetch generation a completion belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchToken(u64);

/// What a finished fetch produced.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome<T> {
    Data(T),
    /// The service responded with an empty envelope.
    Missing,
    Error(String),
}

/// A [`FetchState`] plus the generation counter guarding it.
#[derive(Debug, Clone)]
pub struct FetchSlot<T> {
    state: FetchState<T>,
    generation: u64,
}

impl<T> FetchSlot<T> {
    pub fn new() -> Self {
        Self {
            state: FetchState::Idle,
            generation: 0,
        }
    }

    pub fn state(&self) -> &FetchState<T> {
        &self.state
    }

    /// Start a new fetch: bumps the generation, moves to `Loading`, and
    /// returns the token the completion must present.
    pub fn begin(&mut self) -> FetchToken {
        self.generation += 1;
        self.state = FetchState::Loading;
        FetchToken(self.generation)
    }

    /// Apply a fetch result. Returns `false` (and leaves the slot
    /// untouched) when the token is stale, i.e. another `begin` or
    /// `reset` happened after this fetch started.
    pub fn complete(&mut self, token: FetchToken, outcome: FetchOutcome<T>) -> bool {
        if token.0 != self.generation {
            return false;
        }
        self.state = match outcome {
            FetchOutcome::Data(data) => FetchState::Loaded(data),
            FetchOutcome::Missing => FetchState::NotFound,
            FetchOutcome::Error(message) => FetchState::Failed(message),
        };
        true
    }

    /// Drop back to `Idle` and invalidate any fetch still in flight.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.state = FetchState::Idle;
    }
}

impl<T> Default for FetchSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn slot_walks_the_lifecycle() {
        let mut slot = FetchSlot::new();
        assert!(slot.state().is_idle());

        let token = slot.begin();
        assert!(slot.state().is_loading());

        assert!(slot.complete(token, FetchOutcome::Data(42)));
        assert_eq!(slot.state().data(), Some(&42));
    }

    #[test]
    fn missing_and_error_are_distinct_terminal_states() {
        let mut slot: FetchSlot<u32> = FetchSlot::new();

        let token = slot.begin();
        slot.complete(token, FetchOutcome::Missing);
        assert!(slot.state().is_not_found());
        assert_eq!(slot.state().error(), None);

        let token = slot.begin();
        slot.complete(token, FetchOutcome::Error("Failed to fetch campaigns".into()));
        assert!(!slot.state().is_not_found());
        assert_eq!(slot.state().error(), Some("Failed to fetch campaigns"));
    }

    #[test]
    fn stale_completion_is_discarded() {
        let mut slot = FetchSlot::new();

        let first = slot.begin();
        let second = slot.begin();

        // The superseded fetch finishes late and must not land.
        assert!(!slot.complete(first, FetchOutcome::Data(1)));
        assert!(slot.state().is_loading());

        assert!(slot.complete(second, FetchOutcome::Data(2)));
        assert_eq!(slot.state().data(), Some(&2));
    }

    #[test]
    fn refetch_of_same_resource_converges() {
        let mut slot = FetchSlot::new();

        let token = slot.begin();
        slot.complete(token, FetchOutcome::Data(7));
        let after_first = slot.state().clone();

        let token = slot.begin();
        slot.complete(token, FetchOutcome::Data(7));

        assert_eq!(slot.state(), &after_first);
    }

    #[test]
    fn reset_invalidates_in_flight_fetch() {
        let mut slot = FetchSlot::new();

        let token = slot.begin();
        slot.reset();
        assert!(slot.state().is_idle());

        assert!(!slot.complete(token, FetchOutcome::Data(9)));
        assert!(slot.state().is_idle());
    }
}
