//! FreelanceEscrow — a job escrow ledger for a freelance marketplace.
//!
//! The program is the sole custodian of escrowed funds: a client posts
//! and funds a job, a freelancer accepts and delivers, and the escrow
//! leaves in full exactly once — split with the platform fee on
//! approval, refunded on cancellation, or settled by a majority vote
//! when the parties disagree. Job metadata and deliverables live
//! off-chain behind content-addressed pointers; the ledger stores them
//! verbatim and never interprets them.

use anchor_lang::prelude::*;

pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;

use instructions::*;

declare_id!("82gQJ5eRj3jMqFGny9q6rdN67ZurndG6hK6nGZej2EC1");

#[program]
pub mod freelance_escrow {
    use super::*;

    // ──────────────────────────────────────────────────────
    // MARKETPLACE ADMIN
    // ──────────────────────────────────────────────────────

    /// Initialize the marketplace config. Called once by the deployer,
    /// who becomes the owner. Sets the platform wallet and fee rate.
    pub fn initialize_marketplace(
        ctx: Context<InitializeMarketplace>,
        platform_wallet: Pubkey,
        platform_fee_percentage: u8,
    ) -> Result<()> {
        instructions::initialize::handler(ctx, platform_wallet, platform_fee_percentage)
    }

    /// Update the platform fee percentage. Owner only, capped at 10%.
    /// Applies to jobs approved or resolved after the update.
    pub fn update_platform_fee(ctx: Context<AdminAction>, new_percentage: u8) -> Result<()> {
        instructions::admin::update_platform_fee_handler(ctx, new_percentage)
    }

    /// Pause the marketplace. Owner only. While paused every
    /// state-mutating instruction fails; account reads still work.
    pub fn pause(ctx: Context<AdminAction>) -> Result<()> {
        instructions::admin::pause_handler(ctx)
    }

    /// Unpause the marketplace. Owner only.
    pub fn unpause(ctx: Context<AdminAction>) -> Result<()> {
        instructions::admin::unpause_handler(ctx)
    }

    /// Transfer marketplace ownership. Owner only.
    pub fn transfer_ownership(ctx: Context<AdminAction>, new_owner: Pubkey) -> Result<()> {
        instructions::admin::transfer_ownership_handler(ctx, new_owner)
    }

    // ──────────────────────────────────────────────────────
    // JOB LIFECYCLE
    // ──────────────────────────────────────────────────────

    /// Create a job and escrow the payment in the job account.
    /// Requires a positive amount and a future deadline.
    pub fn create_job(
        ctx: Context<CreateJob>,
        title: String,
        description_hash: String,
        deadline: i64,
        amount: u64,
    ) -> Result<()> {
        instructions::create_job::handler(ctx, title, description_hash, deadline, amount)
    }

    /// Accept an open job. Any signer except the job's own client;
    /// first acceptance wins.
    pub fn accept_job(ctx: Context<AcceptJob>) -> Result<()> {
        instructions::accept_job::handler(ctx)
    }

    /// Submit the deliverable hash. Assigned freelancer only.
    pub fn submit_work(ctx: Context<SubmitWork>, deliverable_hash: String) -> Result<()> {
        instructions::submit_work::handler(ctx, deliverable_hash)
    }

    /// Approve submitted work and release the escrow: amount minus
    /// the platform fee to the freelancer, the fee to the platform.
    pub fn approve_work(ctx: Context<ApproveWork>) -> Result<()> {
        instructions::approve_work::handler(ctx)
    }

    /// Cancel an open (unaccepted) job. Client only. Full refund,
    /// no fee.
    pub fn cancel_job(ctx: Context<CancelJob>) -> Result<()> {
        instructions::cancel_job::handler(ctx)
    }

    // ──────────────────────────────────────────────────────
    // DISPUTE HANDLING
    // ──────────────────────────────────────────────────────

    /// Raise a dispute on an accepted job. Client or assigned
    /// freelancer; freezes the job until the owner resolves it.
    pub fn raise_dispute(ctx: Context<RaiseDispute>, reason: String) -> Result<()> {
        instructions::raise_dispute::handler(ctx, reason)
    }

    /// Cast a vote on an open dispute. Open to any signer, once per
    /// dispute per address.
    pub fn vote_on_dispute(ctx: Context<VoteOnDispute>, favors_client: bool) -> Result<()> {
        instructions::vote_on_dispute::handler(ctx, favors_client)
    }

    /// Settle a dispute by tally. Owner only. Client majority refunds
    /// the client in full; freelancer majority or a tie pays the
    /// freelancer minus the platform fee.
    pub fn resolve_dispute(ctx: Context<ResolveDispute>) -> Result<()> {
        instructions::resolve_dispute::handler(ctx)
    }
}

#[cfg(test)]
mod tests {
    use crate::state::{Dispute, Job, MarketplaceConfig, VoteRecord};

    #[test]
    fn account_sizes_are_reasonable() {
        assert!(MarketplaceConfig::LEN < 200);
        assert!(Job::LEN < 500);
        assert!(Dispute::LEN < 800);
        assert!(VoteRecord::LEN < 120);
    }
}
