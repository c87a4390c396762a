use anchor_lang::prelude::*;

// Audit events
//
// Emitted on every successful propose/confirm and on each execution attempt
// that reached quorum. Emission is best-effort observability; account state
// remains the source of truth.

#[event]
pub struct ProposalCreated {
    pub ledger: Pubkey,
    pub proposal_id: u64,
    pub proposer: Pubkey,
    pub recipient: Pubkey,
    pub amount: u64,
}

#[event]
pub struct ProposalConfirmed {
    pub ledger: Pubkey,
    pub proposal_id: u64,
    pub signer: Pubkey,
    pub confirmation_count: u8,
}

#[event]
pub struct ProposalExecuted {
    pub ledger: Pubkey,
    pub proposal_id: u64,
    pub recipient: Pubkey,
    pub amount: u64,
}

// Quorum was reached but the vault could not settle the transfer.
// The confirmations stand; execution can be retried later.
#[event]
pub struct ExecutionDeferred {
    pub ledger: Pubkey,
    pub proposal_id: u64,
    pub amount: u64,
    pub vault_balance: u64,
}
