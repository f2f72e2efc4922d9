//! Session state
//!
//! Owns everything one planning session holds: the current itinerary, the
//! flight list, and the chat thread. Results are written exactly once, on
//! submission completion, and each submission replaces state wholesale.
//! Nothing persists beyond the process.

use thiserror::Error;
use tracing::debug;

use crate::domain::{ChatThread, FlightOption, Itinerary};

/// Session state errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// Submissions are rejected while one is in flight
    #[error("A submission is already pending")]
    SubmissionPending,
}

/// State owner for one planning session
#[derive(Debug, Default)]
pub struct Session {
    itinerary: Option<Itinerary>,
    flights: Vec<FlightOption>,
    chat: Option<ChatThread>,
    pending: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a submission as in flight
    ///
    /// A second submission while one is pending is rejected rather than
    /// queued; the caller re-enables submission via complete or fail.
    pub fn begin_submission(&mut self) -> Result<(), SessionError> {
        if self.pending {
            return Err(SessionError::SubmissionPending);
        }
        self.pending = true;
        Ok(())
    }

    /// Accept a finished submission, replacing all session state wholesale
    ///
    /// The chat thread is re-seeded with the greeting for the new
    /// destination.
    pub fn complete_submission(
        &mut self,
        destination: &str,
        itinerary: Itinerary,
        flights: Vec<FlightOption>,
    ) {
        debug!(%destination, flight_count = flights.len(), "complete_submission: replacing session state");
        self.itinerary = Some(itinerary);
        self.flights = flights;
        self.chat = Some(ChatThread::for_destination(destination));
        self.pending = false;
    }

    /// Abandon a failed submission, leaving prior state intact
    pub fn fail_submission(&mut self) {
        self.pending = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn itinerary(&self) -> Option<&Itinerary> {
        self.itinerary.as_ref()
    }

    pub fn flights(&self) -> &[FlightOption] {
        &self.flights
    }

    pub fn chat(&self) -> Option<&ChatThread> {
        self.chat.as_ref()
    }

    pub fn chat_mut(&mut self) -> Option<&mut ChatThread> {
        self.chat.as_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Speaker;

    #[test]
    fn test_double_submission_is_rejected() {
        let mut session = Session::new();
        session.begin_submission().unwrap();

        assert_eq!(
            session.begin_submission().unwrap_err(),
            SessionError::SubmissionPending
        );
    }

    #[test]
    fn test_complete_replaces_state_and_seeds_chat() {
        let mut session = Session::new();
        session.begin_submission().unwrap();
        session.complete_submission("Tokyo", Itinerary::new("# Plan A"), vec![]);

        assert!(!session.is_pending());
        assert_eq!(session.itinerary().unwrap().as_markdown(), "# Plan A");
        let chat = session.chat().unwrap();
        assert_eq!(chat.turns()[0].speaker, Speaker::Assistant);
        assert!(chat.turns()[0].text.contains("Tokyo"));

        // a later submission replaces everything, including the thread
        session.begin_submission().unwrap();
        session.complete_submission("Lisbon", Itinerary::new("# Plan B"), vec![]);
        assert_eq!(session.itinerary().unwrap().as_markdown(), "# Plan B");
        assert!(session.chat().unwrap().turns()[0].text.contains("Lisbon"));
        assert_eq!(session.chat().unwrap().len(), 1);
    }

    #[test]
    fn test_failure_keeps_previous_state_usable() {
        let mut session = Session::new();
        session.begin_submission().unwrap();
        session.complete_submission("Tokyo", Itinerary::new("# Plan"), vec![]);

        session.begin_submission().unwrap();
        session.fail_submission();

        assert!(!session.is_pending());
        assert_eq!(session.itinerary().unwrap().as_markdown(), "# Plan");
        // and the session accepts a new submission after the failure
        assert!(session.begin_submission().is_ok());
    }
}
