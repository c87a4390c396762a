use anchor_lang::prelude::*;

#[error_code]
pub enum LedgerError {
    // Initialization errors
    #[msg("Ledger has already been initialized")]
    AlreadyInitialized,

    #[msg("Quorum must be between 1 and the number of registered signers")]
    InvalidQuorum,

    #[msg("Signer list contains the default pubkey or a duplicate entry")]
    InvalidParty,

    // Caller errors
    #[msg("Caller is not a registered signer of this ledger")]
    NotAParty,

    #[msg("Proposal does not belong to this ledger")]
    UnknownProposal,

    #[msg("Signer has already confirmed this proposal")]
    AlreadyConfirmed,

    #[msg("Proposal has already been executed")]
    AlreadyExecuted,

    // Execution errors
    #[msg("Vault transfer to the recipient failed")]
    ExecutionFailed,

    // Platform errors
    #[msg("Signer list exceeds the maximum capacity")]
    TooManySigners,

    #[msg("Recipient account does not match the proposal recipient")]
    RecipientMismatch,

    #[msg("Arithmetic overflow")]
    Overflow,
}
