//! Request sequence numbers for discarding stale responses.
//!
//! DESIGN
//! ======
//! Each kind of request owns a [`RequestSlot`]. Issuing a request takes the
//! next sequence number; a completion is applied only if no later request of
//! the same kind has already completed. Without this, a slow older response
//! could overwrite the result of a newer one.

#[cfg(test)]
#[path = "request_seq_test.rs"]
mod request_seq_test;

/// Kinds of backend request, one sequence slot each.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RequestKind {
    Health,
    Documents,
    Upload,
    Clear,
    Ask,
}

/// Issue/completion counters for one request kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RequestSlot {
    issued: u64,
    completed: u64,
}

impl RequestSlot {
    /// Take the next sequence number for a new request.
    pub fn begin(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// Record completion of `seq`. Returns `false` when the result is stale
    /// and must be discarded.
    pub fn complete(&mut self, seq: u64) -> bool {
        if seq <= self.completed || seq > self.issued {
            return false;
        }
        self.completed = seq;
        true
    }

    /// Treat every in-flight request as stale.
    pub fn invalidate(&mut self) {
        self.completed = self.issued;
    }

    /// Whether a request has been issued that has not completed yet.
    pub fn is_pending(&self) -> bool {
        self.completed < self.issued
    }
}

/// Sequence slots for the requests the session shell issues.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RequestSlots {
    pub health: RequestSlot,
    pub upload: RequestSlot,
    pub clear: RequestSlot,
    pub ask: RequestSlot,
}
