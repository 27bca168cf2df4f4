use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};

use crate::errors::EscrowError;
use crate::events::JobCreated;
use crate::state::config::MarketplaceConfig;
use crate::state::enums::JobStatus;
use crate::state::job::{Job, MAX_HASH_LEN, MAX_TITLE_LEN};

// ──────────────────────────────────────────────────────
// Create Job — client posts and funds an engagement
//
// The job account doubles as the escrow vault: the client's payment
// is transferred on top of the account's rent-exempt minimum and
// stays there until release or refund. Ids are sequential and
// 1-based; id 0 never derives a live account.
// ──────────────────────────────────────────────────────

#[derive(Accounts)]
pub struct CreateJob<'info> {
    /// The client creating and funding the job
    #[account(mut)]
    pub client: Signer<'info>,

    /// Marketplace config — paused check + id counter
    #[account(
        mut,
        seeds = [MarketplaceConfig::SEED],
        bump = config.bump,
        constraint = !config.paused @ EscrowError::MarketplacePaused,
    )]
    pub config: Account<'info, MarketplaceConfig>,

    /// The job PDA — derived from the next sequential id
    #[account(
        init,
        payer = client,
        space = Job::LEN,
        seeds = [Job::SEED, &(config.jobs_count + 1).to_le_bytes()],
        bump,
    )]
    pub job: Account<'info, Job>,

    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<CreateJob>,
    title: String,
    description_hash: String,
    deadline: i64,
    amount: u64,
) -> Result<()> {
    require!(amount > 0, EscrowError::PaymentRequired);
    require!(title.len() <= MAX_TITLE_LEN, EscrowError::TitleTooLong);
    require!(
        description_hash.len() <= MAX_HASH_LEN,
        EscrowError::HashTooLong
    );

    let clock = Clock::get()?;
    require!(deadline > clock.unix_timestamp, EscrowError::InvalidDeadline);

    let config = &mut ctx.accounts.config;
    let job_id = config
        .jobs_count
        .checked_add(1)
        .ok_or(EscrowError::Overflow)?;
    config.jobs_count = job_id;

    // ── Escrow the payment in the job account ──
    let transfer_ctx = CpiContext::new(
        ctx.accounts.system_program.to_account_info(),
        Transfer {
            from: ctx.accounts.client.to_account_info(),
            to: ctx.accounts.job.to_account_info(),
        },
    );
    system_program::transfer(transfer_ctx, amount)?;

    // ── Initialize the job record ──
    let job = &mut ctx.accounts.job;
    job.id = job_id;
    job.client = ctx.accounts.client.key();
    job.freelancer = Pubkey::default();
    job.title = title;
    job.description_hash = description_hash;
    job.amount = amount;
    job.funds_released = false;
    job.created_at = clock.unix_timestamp;
    job.deadline = deadline;
    job.status = JobStatus::Open;
    job.deliverable_hash = String::new();
    job.bump = ctx.bumps.job;

    emit!(JobCreated {
        job_id,
        client: job.client,
        amount,
        deadline,
    });

    Ok(())
}
