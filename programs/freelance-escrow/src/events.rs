use anchor_lang::prelude::*;

// ──────────────────────────────────────────────────────
// Events — the only signal the off-chain indexer receives
// about ledger state changes
// ──────────────────────────────────────────────────────

#[event]
pub struct JobCreated {
    pub job_id: u64,
    pub client: Pubkey,
    pub amount: u64,
    pub deadline: i64,
}

#[event]
pub struct JobAccepted {
    pub job_id: u64,
    pub freelancer: Pubkey,
    pub accepted_at: i64,
}

#[event]
pub struct WorkSubmitted {
    pub job_id: u64,
    pub deliverable_hash: String,
    pub submitted_at: i64,
}

#[event]
pub struct JobCompleted {
    pub job_id: u64,
    pub freelancer_payout: u64,
    pub platform_fee: u64,
    pub completed_at: i64,
}

#[event]
pub struct JobCancelled {
    pub job_id: u64,
    pub client: Pubkey,
    pub refund: u64,
    pub cancelled_at: i64,
}

#[event]
pub struct DisputeRaised {
    pub dispute_id: u64,
    pub job_id: u64,
    pub initiator: Pubkey,
    pub raised_at: i64,
}

#[event]
pub struct VoteCast {
    pub dispute_id: u64,
    pub voter: Pubkey,
    pub favors_client: bool,
    pub client_votes: u32,
    pub freelancer_votes: u32,
}

#[event]
pub struct DisputeResolved {
    pub dispute_id: u64,
    pub job_id: u64,
    pub client_votes: u32,
    pub freelancer_votes: u32,
    pub refunded_client: bool,
    pub resolved_at: i64,
}

#[event]
pub struct PlatformFeeUpdated {
    pub previous: u8,
    pub current: u8,
}

#[event]
pub struct PauseToggled {
    pub paused: bool,
}

#[event]
pub struct OwnershipTransferred {
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
}
