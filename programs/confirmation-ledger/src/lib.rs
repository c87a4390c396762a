use anchor_lang::prelude::*;
pub mod constants;
pub mod errors;
pub mod events;
pub mod helpers;
pub mod instructions;
pub mod state;

pub use errors::*;
pub use instructions::*;
pub use state::*;

declare_id!("EnA8RsFjEQDK3XCYDmVxmintqV3FB7jGXvRDZTJbsf67");

#[program]
pub mod confirmation_ledger {
    use super::*;

    // Initialize a new confirmation ledger
    // Registers the signer set and quorum threshold, creates the vault PDA
    // Both are immutable for the life of the ledger
    pub fn create_ledger(
        ctx: Context<CreateLedger>,
        ledger_id: u64,
        signers: Vec<Pubkey>,
        required: u8,
    ) -> Result<()> {
        ctx.accounts
            .create_ledger(ledger_id, signers, required, &ctx.bumps)
    }

    // Create a transfer proposal
    // The proposer's own confirmation is recorded in the same step, and
    // settlement fires immediately if that already satisfies the quorum
    pub fn propose_transfer(ctx: Context<ProposeTransfer>, amount: u64) -> Result<()> {
        ctx.accounts.propose_transfer(amount, &ctx.bumps)
    }

    // Confirm an existing transfer proposal
    // Each signer can confirm once; settlement fires when quorum is reached
    pub fn confirm_transfer(ctx: Context<ConfirmTransfer>) -> Result<()> {
        ctx.accounts.confirm_transfer()
    }

    // Retry settlement of a proposal at quorum whose auto-fire attempt was
    // deferred by an unready vault or recipient
    pub fn execute_transfer(ctx: Context<ExecuteTransfer>) -> Result<()> {
        ctx.accounts.execute_transfer()
    }
}
