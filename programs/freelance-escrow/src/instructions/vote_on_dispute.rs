use anchor_lang::prelude::*;

use crate::errors::EscrowError;
use crate::events::VoteCast;
use crate::state::config::MarketplaceConfig;
use crate::state::dispute::{Dispute, VoteRecord};
use crate::state::enums::DisputeStatus;

// ──────────────────────────────────────────────────────
// Vote On Dispute — open vote, one per address per dispute
//
// Voting is deliberately permissionless: any signer may vote once.
// The VoteRecord PDA `init` is the double-vote guard — a repeat
// voter finds the record allocated and the transaction fails with
// tallies untouched.
// ──────────────────────────────────────────────────────

#[derive(Accounts)]
pub struct VoteOnDispute<'info> {
    /// The voter; pays rent for their vote record
    #[account(mut)]
    pub voter: Signer<'info>,

    /// Marketplace config — paused check
    #[account(
        seeds = [MarketplaceConfig::SEED],
        bump = config.bump,
        constraint = !config.paused @ EscrowError::MarketplacePaused,
    )]
    pub config: Account<'info, MarketplaceConfig>,

    /// The dispute being voted on
    #[account(
        mut,
        constraint = dispute.status == DisputeStatus::Voting @ EscrowError::DisputeNotVoting,
    )]
    pub dispute: Account<'info, Dispute>,

    /// One record per (dispute, voter)
    #[account(
        init,
        payer = voter,
        space = VoteRecord::LEN,
        seeds = [VoteRecord::SEED, dispute.key().as_ref(), voter.key().as_ref()],
        bump,
    )]
    pub vote_record: Account<'info, VoteRecord>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<VoteOnDispute>, favors_client: bool) -> Result<()> {
    let clock = Clock::get()?;

    let dispute = &mut ctx.accounts.dispute;
    if favors_client {
        dispute.client_votes = dispute
            .client_votes
            .checked_add(1)
            .ok_or(EscrowError::Overflow)?;
    } else {
        dispute.freelancer_votes = dispute
            .freelancer_votes
            .checked_add(1)
            .ok_or(EscrowError::Overflow)?;
    }

    let record = &mut ctx.accounts.vote_record;
    record.dispute = ctx.accounts.dispute.key();
    record.voter = ctx.accounts.voter.key();
    record.favors_client = favors_client;
    record.cast_at = clock.unix_timestamp;
    record.bump = ctx.bumps.vote_record;

    emit!(VoteCast {
        dispute_id: ctx.accounts.dispute.id,
        voter: record.voter,
        favors_client,
        client_votes: ctx.accounts.dispute.client_votes,
        freelancer_votes: ctx.accounts.dispute.freelancer_votes,
    });

    Ok(())
}
