use anchor_lang::prelude::*;

use crate::errors::EscrowError;

pub mod accept_job;
pub mod admin;
pub mod approve_work;
pub mod cancel_job;
pub mod create_job;
pub mod initialize;
pub mod raise_dispute;
pub mod resolve_dispute;
pub mod submit_work;
pub mod vote_on_dispute;

pub use accept_job::*;
pub use admin::*;
pub use approve_work::*;
pub use cancel_job::*;
pub use create_job::*;
pub use initialize::*;
pub use raise_dispute::*;
pub use resolve_dispute::*;
pub use submit_work::*;
pub use vote_on_dispute::*;

/// Moves `amount` lamports out of the program-owned job account.
/// Callers flip `funds_released` and the terminal status before any
/// transfer; the escrow rides on top of the account's rent-exempt
/// floor, so debiting exactly `amount` never breaks rent exemption.
pub(crate) fn pay_from_escrow<'info>(
    from: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    let mut from_lamports = from.try_borrow_mut_lamports()?;
    **from_lamports = (**from_lamports)
        .checked_sub(amount)
        .ok_or(EscrowError::Overflow)?;
    drop(from_lamports);

    let mut to_lamports = to.try_borrow_mut_lamports()?;
    **to_lamports = (**to_lamports)
        .checked_add(amount)
        .ok_or(EscrowError::Overflow)?;

    Ok(())
}
