use anchor_lang::prelude::*;

use crate::errors::EscrowError;
use crate::events::WorkSubmitted;
use crate::state::config::MarketplaceConfig;
use crate::state::enums::JobStatus;
use crate::state::job::{Job, MAX_HASH_LEN};

// ──────────────────────────────────────────────────────
// Submit Work — the assigned freelancer delivers
//
// The deliverable hash is an opaque content-addressed pointer;
// the ledger stores and returns it verbatim, never interprets it.
// ──────────────────────────────────────────────────────

#[derive(Accounts)]
pub struct SubmitWork<'info> {
    /// The assigned freelancer
    pub freelancer: Signer<'info>,

    /// Marketplace config — paused check
    #[account(
        seeds = [MarketplaceConfig::SEED],
        bump = config.bump,
        constraint = !config.paused @ EscrowError::MarketplacePaused,
    )]
    pub config: Account<'info, MarketplaceConfig>,

    /// The job being delivered
    #[account(
        mut,
        constraint = job.freelancer == freelancer.key() @ EscrowError::UnauthorizedFreelancer,
        constraint = job.status == JobStatus::InProgress @ EscrowError::JobNotInProgress,
    )]
    pub job: Account<'info, Job>,
}

pub fn handler(ctx: Context<SubmitWork>, deliverable_hash: String) -> Result<()> {
    require!(
        deliverable_hash.len() <= MAX_HASH_LEN,
        EscrowError::HashTooLong
    );

    let clock = Clock::get()?;
    let job = &mut ctx.accounts.job;

    job.deliverable_hash = deliverable_hash.clone();
    job.status = JobStatus::Submitted;

    emit!(WorkSubmitted {
        job_id: job.id,
        deliverable_hash,
        submitted_at: clock.unix_timestamp,
    });

    Ok(())
}
