use anchor_lang::prelude::*;

#[error_code]
pub enum EscrowError {
    // ── Validation errors (caller-fixable) ──
    #[msg("Payment required")]
    PaymentRequired,

    #[msg("Invalid deadline")]
    InvalidDeadline,

    #[msg("Fee too high")]
    FeeTooHigh,

    #[msg("Title exceeds the maximum length")]
    TitleTooLong,

    #[msg("Content hash exceeds the maximum length")]
    HashTooLong,

    #[msg("Dispute reason exceeds the maximum length")]
    ReasonTooLong,

    // ── State-precondition errors ──
    #[msg("Job is not open")]
    JobNotOpen,

    #[msg("Job is not in progress")]
    JobNotInProgress,

    #[msg("No work has been submitted for this job")]
    WorkNotSubmitted,

    #[msg("Job is not in a disputable state")]
    CannotDispute,

    #[msg("Job is not disputed")]
    JobNotDisputed,

    #[msg("Dispute is not open for voting")]
    DisputeNotVoting,

    #[msg("Funds have already been released for this job")]
    FundsAlreadyReleased,

    // ── Authorization errors ──
    #[msg("Client cannot accept own job")]
    SelfAssignment,

    #[msg("Only the client can perform this action")]
    UnauthorizedClient,

    #[msg("Only the assigned freelancer can perform this action")]
    UnauthorizedFreelancer,

    #[msg("Caller is not a participant in this job")]
    NotParticipant,

    #[msg("Only the owner can perform this action")]
    UnauthorizedOwner,

    // ── Paused-system errors ──
    #[msg("Pausable: paused")]
    MarketplacePaused,

    #[msg("Marketplace is not paused")]
    MarketplaceNotPaused,

    // ── Fund-routing errors ──
    #[msg("Recipient account does not match the ledger record")]
    InvalidRecipient,

    #[msg("Platform wallet does not match the config")]
    InvalidPlatformWallet,

    // ── Arithmetic errors ──
    #[msg("Arithmetic overflow")]
    Overflow,
}
