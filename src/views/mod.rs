//! View state machines and the render trees they produce.
//!
//! Views never touch the terminal. Each one owns its UI state, drives a
//! fetcher, and describes what should be on screen as plain data
//! ([`ListRender`], [`Block`]); [`text`] turns that into printable lines.
//!
//! Every request a view issues carries a [`Ticket`]. Only the response to the
//! most recent ticket is applied, so a slow, superseded response can never
//! overwrite newer state.

pub mod detail;
pub mod list;
pub mod text;

pub use detail::{Block, DetailState, DetailView, SkeletonPart};
pub use list::{Card, ListRender, ListState, ListView, Region, Slot, MAX_PER_BUCKET};

/// Identifies one request issued by a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

/// Per-view monotonic request counter.
#[derive(Debug, Default)]
pub(crate) struct RequestSeq {
    latest: u64,
}

impl RequestSeq {
    /// Issue a ticket that supersedes every earlier one.
    pub(crate) fn next(&mut self) -> Ticket {
        self.latest += 1;
        Ticket(self.latest)
    }

    pub(crate) fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_latest_ticket_is_current() {
        let mut seq = RequestSeq::default();
        let first = seq.next();
        assert!(seq.is_current(first));
        let second = seq.next();
        assert!(second > first);
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }
}
