use anchor_lang::prelude::*;

use crate::errors::EscrowError;
use crate::events::DisputeResolved;
use crate::instructions::pay_from_escrow;
use crate::state::config::MarketplaceConfig;
use crate::state::dispute::Dispute;
use crate::state::enums::{DisputeStatus, JobStatus};
use crate::state::job::Job;

// ──────────────────────────────────────────────────────
// Resolve Dispute — owner-gated majority settlement
//
// Strict majority for the client refunds the full amount (no fee —
// the work was deemed unsatisfactory) and the job ends Refunded.
// A freelancer majority, or a tie, pays the freelancer minus the
// platform fee and the job ends Completed. Status and the
// funds_released flag flip before any lamports move.
// ──────────────────────────────────────────────────────

#[derive(Accounts)]
pub struct ResolveDispute<'info> {
    /// The marketplace owner triggering the settlement
    pub owner: Signer<'info>,

    /// Marketplace config — paused check + owner gate + fee rate
    #[account(
        seeds = [MarketplaceConfig::SEED],
        bump = config.bump,
        constraint = !config.paused @ EscrowError::MarketplacePaused,
        constraint = config.owner == owner.key() @ EscrowError::UnauthorizedOwner,
    )]
    pub config: Account<'info, MarketplaceConfig>,

    /// The dispute being settled
    #[account(
        mut,
        constraint = dispute.status == DisputeStatus::Voting @ EscrowError::DisputeNotVoting,
    )]
    pub dispute: Account<'info, Dispute>,

    /// The disputed job holding the escrow
    #[account(
        mut,
        constraint = job.key() == dispute.job @ EscrowError::JobNotDisputed,
        constraint = job.status == JobStatus::Disputed @ EscrowError::JobNotDisputed,
        constraint = !job.funds_released @ EscrowError::FundsAlreadyReleased,
    )]
    pub job: Account<'info, Job>,

    /// CHECK: Refund target; must match the ledger's client record
    #[account(
        mut,
        constraint = client.key() == job.client @ EscrowError::InvalidRecipient,
    )]
    pub client: UncheckedAccount<'info>,

    /// CHECK: Payout target; must match the ledger's freelancer record
    #[account(
        mut,
        constraint = freelancer.key() == job.freelancer @ EscrowError::InvalidRecipient,
    )]
    pub freelancer: UncheckedAccount<'info>,

    /// CHECK: Fee target; must match the config's platform wallet
    #[account(
        mut,
        constraint = platform_wallet.key() == config.platform_wallet @ EscrowError::InvalidPlatformWallet,
    )]
    pub platform_wallet: UncheckedAccount<'info>,
}

pub fn handler(ctx: Context<ResolveDispute>) -> Result<()> {
    let clock = Clock::get()?;

    let refunded_client = ctx.accounts.dispute.favors_client();
    let amount = ctx.accounts.job.amount;

    // Effects before transfers
    let dispute = &mut ctx.accounts.dispute;
    dispute.status = DisputeStatus::Resolved;
    dispute.resolved_at = clock.unix_timestamp;
    let dispute_id = dispute.id;
    let client_votes = dispute.client_votes;
    let freelancer_votes = dispute.freelancer_votes;

    let job = &mut ctx.accounts.job;
    let job_id = job.id;
    job.funds_released = true;
    job.status = if refunded_client {
        JobStatus::Refunded
    } else {
        JobStatus::Completed
    };

    let job_info = ctx.accounts.job.to_account_info();
    if refunded_client {
        // Full refund, no fee
        pay_from_escrow(&job_info, &ctx.accounts.client.to_account_info(), amount)?;
    } else {
        let (payout, fee) = ctx.accounts.config.split_payout(amount)?;
        pay_from_escrow(&job_info, &ctx.accounts.freelancer.to_account_info(), payout)?;
        if fee > 0 {
            pay_from_escrow(
                &job_info,
                &ctx.accounts.platform_wallet.to_account_info(),
                fee,
            )?;
        }
    }

    emit!(DisputeResolved {
        dispute_id,
        job_id,
        client_votes,
        freelancer_votes,
        refunded_client,
        resolved_at: clock.unix_timestamp,
    });

    Ok(())
}
