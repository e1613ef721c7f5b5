//! Pagination state definitions for "load more" driven listings
//!
//! A listing page starts out expecting more content and ends up `Done` once
//! the control disappears or the click cap is spent.

use std::fmt;

/// Current state of a paginated listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaginationState {
    /// The listing may have more items behind a "load more" control
    ExpectMore {
        /// Clicks performed so far
        clicks: u32,
    },

    /// No further clicks will be made
    Done {
        /// Clicks performed in total
        clicks: u32,
        /// Why pagination stopped
        reason: StopReason,
    },
}

/// Why a listing stopped paginating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StopReason {
    /// The "load more" control was not on the page
    ControlAbsent,

    /// The configured click cap was reached
    CapReached,
}

impl PaginationState {
    /// Initial state for a freshly loaded listing
    pub fn start() -> Self {
        Self::ExpectMore { clicks: 0 }
    }

    /// Returns true if no further clicks will be made
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done { .. })
    }

    /// Number of clicks performed so far
    pub fn clicks(&self) -> u32 {
        match self {
            Self::ExpectMore { clicks } | Self::Done { clicks, .. } => *clicks,
        }
    }

    /// Transition after probing for the control
    ///
    /// Probing only ever ends pagination; a present control keeps the state
    /// unchanged so the caller can go on to click it. A state that has already
    /// spent `cap` clicks finishes with [`StopReason::CapReached`] without
    /// looking at the probe result.
    pub fn after_probe(self, control_present: bool, cap: u32) -> Self {
        match self {
            Self::ExpectMore { clicks } if clicks >= cap => Self::Done {
                clicks,
                reason: StopReason::CapReached,
            },
            Self::ExpectMore { clicks } if !control_present => Self::Done {
                clicks,
                reason: StopReason::ControlAbsent,
            },
            other => other,
        }
    }

    /// Transition after a successful click
    pub fn after_click(self) -> Self {
        match self {
            Self::ExpectMore { clicks } => Self::ExpectMore { clicks: clicks + 1 },
            done => done,
        }
    }
}

impl fmt::Display for PaginationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExpectMore { clicks } => write!(f, "expecting more ({} clicks)", clicks),
            Self::Done { clicks, reason } => write!(f, "done after {} clicks: {}", clicks, reason),
        }
    }
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ControlAbsent => write!(f, "no load-more control"),
            Self::CapReached => write!(f, "click cap reached"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_is_not_terminal() {
        let state = PaginationState::start();
        assert!(!state.is_terminal());
        assert_eq!(state.clicks(), 0);
    }

    #[test]
    fn test_absent_control_finishes() {
        let state = PaginationState::start().after_probe(false, 5);
        assert_eq!(
            state,
            PaginationState::Done {
                clicks: 0,
                reason: StopReason::ControlAbsent
            }
        );
    }

    #[test]
    fn test_present_control_keeps_expecting() {
        let state = PaginationState::start().after_probe(true, 5);
        assert_eq!(state, PaginationState::ExpectMore { clicks: 0 });

        let state = state.after_click();
        assert_eq!(state, PaginationState::ExpectMore { clicks: 1 });
    }

    #[test]
    fn test_cap_reached_wins_over_present_control() {
        let mut state = PaginationState::start();
        for _ in 0..4 {
            state = state.after_probe(true, 4).after_click();
        }

        let state = state.after_probe(true, 4);
        assert_eq!(
            state,
            PaginationState::Done {
                clicks: 4,
                reason: StopReason::CapReached
            }
        );
    }

    #[test]
    fn test_done_is_sticky() {
        let done = PaginationState::start().after_probe(false, 5);
        assert_eq!(done.after_click(), done);
        assert_eq!(done.after_probe(true, 5), done);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            PaginationState::start().to_string(),
            "expecting more (0 clicks)"
        );
        let done = PaginationState::Done {
            clicks: 5,
            reason: StopReason::CapReached,
        };
        assert_eq!(done.to_string(), "done after 5 clicks: click cap reached");
    }
}
