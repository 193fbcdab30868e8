//! Address suggestions of a single input field.
//!
//! The field is a small state machine:
//!
//! ```text
//! Idle ──input──▶ Pending ──suggestions──▶ Displaying
//!   ▲               │                          │
//!   └──short input, dismiss, select────────────┘
//! ```
//!
//! Every input change issues a new lookup sequence number.
//! Only the lookup with the most recent number may update the
//! suggestion list, any older response is discarded. Timers and
//! network calls are driven from the outside.

use crate::{
    entities::address::{AddressSuggestion, ResolvedAddress},
    usecases::is_suggestible,
};

/// Monotonically increasing number of a lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LookupSeq(u64);

/// A lookup that should be performed after the quiet period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lookup {
    pub seq: LookupSeq,
    pub query: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldState {
    #[default]
    Idle,
    Pending(LookupSeq),
    Displaying,
}

#[derive(Debug, Default)]
pub struct SuggestionField {
    value: String,
    last_seq: u64,
    state: FieldState,
    suggestions: Vec<AddressSuggestion>,
    resolved: Option<ResolvedAddress>,
}

impl SuggestionField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub const fn state(&self) -> FieldState {
        self.state
    }

    pub fn suggestions(&self) -> &[AddressSuggestion] {
        &self.suggestions
    }

    pub fn resolved(&self) -> Option<&ResolvedAddress> {
        self.resolved.as_ref()
    }

    fn next_seq(&mut self) -> LookupSeq {
        self.last_seq += 1;
        LookupSeq(self.last_seq)
    }

    /// Handles a changed input value.
    ///
    /// Returns the lookup to schedule, superseding any lookup
    /// returned before. Too short queries clear the suggestions.
    pub fn input(&mut self, value: &str) -> Option<Lookup> {
        value.clone_into(&mut self.value);
        let seq = self.next_seq();
        let query = value.trim();
        if !is_suggestible(query) {
            self.clear();
            return None;
        }
        self.state = FieldState::Pending(seq);
        Some(Lookup {
            seq,
            query: query.to_owned(),
        })
    }

    /// Whether the lookup has not been superseded in the meantime.
    pub fn is_current(&self, seq: LookupSeq) -> bool {
        self.state == FieldState::Pending(seq)
    }

    /// Applies the result of a lookup.
    ///
    /// Returns `false` if the lookup has been superseded.
    pub fn show_suggestions(&mut self, seq: LookupSeq, suggestions: Vec<AddressSuggestion>) -> bool {
        if !self.is_current(seq) {
            log::debug!("Discarding suggestions of superseded lookup {seq:?}");
            return false;
        }
        self.suggestions = suggestions;
        self.state = FieldState::Displaying;
        true
    }

    /// Selects one of the currently displayed suggestions.
    ///
    /// Selecting a suggestion that is no longer displayed, e.g. because
    /// the list has been cleared by a subsequent keystroke, does nothing.
    pub fn select(&mut self, suggestion: &AddressSuggestion) -> Option<&ResolvedAddress> {
        if !self.suggestions.contains(suggestion) {
            log::debug!("Ignoring selection of '{}'", suggestion.display_name);
            return None;
        }
        // The selection also cancels a lookup that might still be pending.
        self.next_seq();
        suggestion.display_name.clone_into(&mut self.value);
        self.resolved = Some(suggestion.clone().into());
        self.clear();
        self.resolved.as_ref()
    }

    /// Hides the suggestions without touching the resolved value.
    pub fn dismiss(&mut self) {
        self.next_seq();
        self.clear();
    }

    fn clear(&mut self) {
        self.suggestions.clear();
        self.state = FieldState::Idle;
    }
}
