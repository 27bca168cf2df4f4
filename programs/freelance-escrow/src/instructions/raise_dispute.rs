use anchor_lang::prelude::*;

use crate::errors::EscrowError;
use crate::events::DisputeRaised;
use crate::state::config::MarketplaceConfig;
use crate::state::dispute::{Dispute, MAX_REASON_LEN};
use crate::state::enums::{DisputeStatus, JobStatus};
use crate::state::job::Job;

// ──────────────────────────────────────────────────────
// Raise Dispute — either participant freezes the job
//
// Only InProgress or Submitted jobs qualify, which also enforces
// "at most one open dispute per job": a Disputed job fails the
// guard until the current dispute is resolved.
// ──────────────────────────────────────────────────────

#[derive(Accounts)]
pub struct RaiseDispute<'info> {
    /// The client or assigned freelancer raising the dispute
    #[account(mut)]
    pub initiator: Signer<'info>,

    /// Marketplace config — paused check + dispute id counter
    #[account(
        mut,
        seeds = [MarketplaceConfig::SEED],
        bump = config.bump,
        constraint = !config.paused @ EscrowError::MarketplacePaused,
    )]
    pub config: Account<'info, MarketplaceConfig>,

    /// The disputed job
    #[account(
        mut,
        constraint = job.is_participant(&initiator.key()) @ EscrowError::NotParticipant,
        constraint = job.can_dispute() @ EscrowError::CannotDispute,
    )]
    pub job: Account<'info, Job>,

    /// The dispute PDA — derived from the next sequential id
    #[account(
        init,
        payer = initiator,
        space = Dispute::LEN,
        seeds = [Dispute::SEED, &(config.disputes_count + 1).to_le_bytes()],
        bump,
    )]
    pub dispute: Account<'info, Dispute>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<RaiseDispute>, reason: String) -> Result<()> {
    require!(reason.len() <= MAX_REASON_LEN, EscrowError::ReasonTooLong);

    let clock = Clock::get()?;

    let config = &mut ctx.accounts.config;
    let dispute_id = config
        .disputes_count
        .checked_add(1)
        .ok_or(EscrowError::Overflow)?;
    config.disputes_count = dispute_id;

    let job = &mut ctx.accounts.job;
    job.status = JobStatus::Disputed;

    let dispute = &mut ctx.accounts.dispute;
    dispute.id = dispute_id;
    dispute.job_id = job.id;
    dispute.job = job.key();
    dispute.initiator = ctx.accounts.initiator.key();
    dispute.reason = reason;
    dispute.status = DisputeStatus::Voting;
    dispute.client_votes = 0;
    dispute.freelancer_votes = 0;
    dispute.created_at = clock.unix_timestamp;
    dispute.resolved_at = 0;
    dispute.bump = ctx.bumps.dispute;

    emit!(DisputeRaised {
        dispute_id,
        job_id: dispute.job_id,
        initiator: dispute.initiator,
        raised_at: clock.unix_timestamp,
    });

    Ok(())
}
