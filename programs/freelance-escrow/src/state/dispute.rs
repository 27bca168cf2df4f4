use anchor_lang::prelude::*;

use crate::state::enums::DisputeStatus;

/// Maximum dispute reason length in bytes.
pub const MAX_REASON_LEN: usize = 500;

// ──────────────────────────────────────────────────────
// Dispute Account — at most one open per job at a time
//
// Openness is enforced through the job's status machine: raising a
// dispute moves the job to Disputed, and Disputed jobs reject a
// second raise. Historical disputes stay on the ledger.
// ──────────────────────────────────────────────────────

#[account]
pub struct Dispute {
    /// Sequential id, 1-based
    pub id: u64,

    /// The disputed job (non-owning back-references)
    pub job_id: u64,
    pub job: Pubkey,

    /// The client or freelancer that raised it
    pub initiator: Pubkey,

    /// Free-text / off-chain-pointer description; stored verbatim
    pub reason: String,

    pub status: DisputeStatus,

    // ── Tallies ──
    pub client_votes: u32,
    pub freelancer_votes: u32,

    pub created_at: i64,
    pub resolved_at: i64, // 0 until resolved

    pub bump: u8,
}

impl Dispute {
    pub const LEN: usize = 8    // discriminator
        + 8                     // id
        + 8 + 32                // job_id, job
        + 32                    // initiator
        + 4 + MAX_REASON_LEN    // reason
        + 1                     // status
        + 4 * 2                 // tallies
        + 8 * 2                 // created_at, resolved_at
        + 1                     // bump
        + 64;                   // padding for future fields

    /// PDA seed prefix; full seeds are ["dispute", id.to_le_bytes()]
    pub const SEED: &'static [u8] = b"dispute";

    /// Strict majority for the client refunds the client; a majority
    /// for the freelancer — or a tie — pays the freelancer. The
    /// tie-break is a deliberate policy, not an accident.
    pub fn favors_client(&self) -> bool {
        self.client_votes > self.freelancer_votes
    }
}

// ──────────────────────────────────────────────────────
// Vote Record — one per (dispute, voter)
//
// The PDA `init` is the double-vote guard: a second vote from the
// same address finds the record already allocated and the whole
// transaction fails, tallies untouched.
// ──────────────────────────────────────────────────────

#[account]
pub struct VoteRecord {
    pub dispute: Pubkey,
    pub voter: Pubkey,
    pub favors_client: bool,
    pub cast_at: i64,
    pub bump: u8,
}

impl VoteRecord {
    pub const LEN: usize = 8 + 32 + 32 + 1 + 8 + 1 + 16;

    /// PDA seed prefix; full seeds are ["vote", dispute, voter]
    pub const SEED: &'static [u8] = b"vote";
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dispute(client_votes: u32, freelancer_votes: u32) -> Dispute {
        Dispute {
            id: 1,
            job_id: 1,
            job: Pubkey::new_unique(),
            initiator: Pubkey::new_unique(),
            reason: "Poor quality work".to_string(),
            status: DisputeStatus::Voting,
            client_votes,
            freelancer_votes,
            created_at: 0,
            resolved_at: 0,
            bump: 255,
        }
    }

    #[test]
    fn strict_majority_refunds_client() {
        assert!(dispute(2, 1).favors_client());
        assert!(dispute(1, 0).favors_client());
        assert!(dispute(3, 0).favors_client());
    }

    #[test]
    fn freelancer_majority_pays_freelancer() {
        assert!(!dispute(1, 2).favors_client());
        assert!(!dispute(0, 3).favors_client());
    }

    #[test]
    fn tie_pays_freelancer() {
        // Including the zero-vote case: resolving with no votes cast
        // falls to the freelancer side.
        assert!(!dispute(0, 0).favors_client());
        assert!(!dispute(1, 1).favors_client());
        assert!(!dispute(5, 5).favors_client());
    }

    #[test]
    fn account_size_fits_reason_cap() {
        let mut d = dispute(0, 0);
        d.reason = "r".repeat(MAX_REASON_LEN);
        let mut buf: Vec<u8> = Vec::new();
        d.try_serialize(&mut buf).unwrap();
        assert!(buf.len() <= Dispute::LEN);
    }
}
