use anchor_lang::prelude::*;

// ──────────────────────────────────────────────────────
// Job Status — tracks lifecycle state
// ──────────────────────────────────────────────────────

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum JobStatus {
    Open,       // Created and funded, waiting for a freelancer to accept
    InProgress, // Freelancer accepted, work in progress
    Submitted,  // Deliverable submitted, awaiting client approval
    Completed,  // Approved (or resolved for freelancer), funds released
    Disputed,   // One party challenged the outcome, vote underway
    Cancelled,  // Cancelled by client before acceptance, refunded
    Refunded,   // Dispute resolved for client, amount returned in full
}

impl Default for JobStatus {
    fn default() -> Self {
        JobStatus::Open
    }
}

impl JobStatus {
    /// Terminal statuses admit no further transition.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            JobStatus::Completed | JobStatus::Cancelled | JobStatus::Refunded
        )
    }
}

// ──────────────────────────────────────────────────────
// Dispute Status
// ──────────────────────────────────────────────────────

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum DisputeStatus {
    None,     // No dispute
    Voting,   // Open for votes
    Resolved, // Settled by the owner, tallies frozen
}

impl Default for DisputeStatus {
    fn default() -> Self {
        DisputeStatus::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_statuses() {
        assert!(JobStatus::Completed.is_terminal());
        assert!(JobStatus::Cancelled.is_terminal());
        assert!(JobStatus::Refunded.is_terminal());

        assert!(!JobStatus::Open.is_terminal());
        assert!(!JobStatus::InProgress.is_terminal());
        assert!(!JobStatus::Submitted.is_terminal());
        assert!(!JobStatus::Disputed.is_terminal());
    }
}
