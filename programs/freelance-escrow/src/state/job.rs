use anchor_lang::prelude::*;

use crate::state::enums::JobStatus;

/// Maximum job title length in bytes.
pub const MAX_TITLE_LEN: usize = 100;

/// Maximum length of a content-addressed pointer (IPFS CID).
pub const MAX_HASH_LEN: usize = 64;

// ──────────────────────────────────────────────────────
// Job Account — one per posted engagement
//
// The account itself is the escrow vault: `amount` lamports sit on
// top of the rent-exempt minimum for the lifetime of the job, and
// leave in full exactly once, at the transition into a terminal
// fund-releasing state. Records are never closed — terminal jobs
// stay readable for auditability.
// ──────────────────────────────────────────────────────

#[account]
pub struct Job {
    /// Sequential id, 1-based; 0 is never a valid id
    pub id: u64,

    // ── Participants ──
    pub client: Pubkey,     // Created and funded the job; immutable
    pub freelancer: Pubkey, // Pubkey::default() until accepted

    // ── Metadata (immutable after creation) ──
    pub title: String,            // Short human-readable title
    pub description_hash: String, // Opaque pointer to the off-chain description

    // ── Funds ──
    pub amount: u64,          // Lamports escrowed at creation; never changes
    pub funds_released: bool, // True exactly once funds leave escrow

    // ── Timing ──
    pub created_at: i64,
    pub deadline: i64, // Informational; no automatic expiry

    // ── State ──
    pub status: JobStatus,
    pub deliverable_hash: String, // Empty until submission

    // ── PDA ──
    pub bump: u8,
}

impl Job {
    pub const LEN: usize = 8    // discriminator
        + 8                     // id
        + 32 * 2                // client, freelancer
        + 4 + MAX_TITLE_LEN     // title
        + 4 + MAX_HASH_LEN      // description_hash
        + 8                     // amount
        + 1                     // funds_released
        + 8 * 2                 // created_at, deadline
        + 1                     // status
        + 4 + MAX_HASH_LEN      // deliverable_hash
        + 1                     // bump
        + 64;                   // padding for future fields

    /// PDA seed prefix; full seeds are ["job", id.to_le_bytes()]
    pub const SEED: &'static [u8] = b"job";

    pub fn is_unassigned(&self) -> bool {
        self.freelancer == Pubkey::default()
    }

    /// Only an accepted, unresolved job can be disputed. Excludes
    /// Disputed itself, so at most one dispute is open at a time.
    pub fn can_dispute(&self) -> bool {
        matches!(self.status, JobStatus::InProgress | JobStatus::Submitted)
    }

    pub fn is_participant(&self, key: &Pubkey) -> bool {
        *key == self.client || *key == self.freelancer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(status: JobStatus) -> Job {
        Job {
            id: 1,
            client: Pubkey::new_unique(),
            freelancer: Pubkey::default(),
            title: "Test Job".to_string(),
            description_hash: "QmTestIPFSHash".to_string(),
            amount: 1_000_000_000,
            funds_released: false,
            created_at: 0,
            deadline: 86_400,
            status,
            deliverable_hash: String::new(),
            bump: 255,
        }
    }

    #[test]
    fn dispute_window_covers_accepted_states_only() {
        assert!(job(JobStatus::InProgress).can_dispute());
        assert!(job(JobStatus::Submitted).can_dispute());

        assert!(!job(JobStatus::Open).can_dispute());
        assert!(!job(JobStatus::Disputed).can_dispute());
        assert!(!job(JobStatus::Completed).can_dispute());
        assert!(!job(JobStatus::Cancelled).can_dispute());
        assert!(!job(JobStatus::Refunded).can_dispute());
    }

    #[test]
    fn unassigned_until_accepted() {
        let mut j = job(JobStatus::Open);
        assert!(j.is_unassigned());
        j.freelancer = Pubkey::new_unique();
        assert!(!j.is_unassigned());
    }

    #[test]
    fn participant_check() {
        let mut j = job(JobStatus::InProgress);
        j.freelancer = Pubkey::new_unique();
        let client = j.client;
        let freelancer = j.freelancer;
        assert!(j.is_participant(&client));
        assert!(j.is_participant(&freelancer));
        assert!(!j.is_participant(&Pubkey::new_unique()));
    }

    #[test]
    fn account_size_fits_metadata_caps() {
        let mut j = job(JobStatus::Open);
        j.title = "t".repeat(MAX_TITLE_LEN);
        j.description_hash = "h".repeat(MAX_HASH_LEN);
        j.deliverable_hash = "d".repeat(MAX_HASH_LEN);
        let mut buf: Vec<u8> = Vec::new();
        j.try_serialize(&mut buf).unwrap();
        assert!(buf.len() <= Job::LEN);
    }
}
