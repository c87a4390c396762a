use anchor_lang::prelude::*;
use crate::{state::*, errors::*, constants::*, helpers::*};

// Execute Transfer Instruction
//
// Explicit retry of settlement for a proposal whose auto-fire attempt was
// deferred by an unready vault or recipient. Permissionless: the recorded
// quorum of confirmations is the authorization, the caller is only a crank.
//
// Below quorum this instruction is a silent no-op; the proposal simply is
// not due for settlement yet.

#[derive(Accounts)]
pub struct ExecuteTransfer<'info> {
    // Any fee payer may crank a settlement retry
    #[account(mut)]
    pub caller: Signer<'info>,

    // Ledger account
    #[account(
        seeds = [
            LEDGER,
            ledger.creator.as_ref(),
            &ledger.ledger_id.to_le_bytes(),
        ],
        bump = ledger.bump,
    )]
    pub ledger: Account<'info, Ledger>,

    // Proposal to settle
    #[account(
        mut,
        seeds = [
            PROPOSAL,
            ledger.key().as_ref(),
            &proposal.proposal_id.to_le_bytes(),
        ],
        bump = proposal.bump,
        constraint = proposal.ledger == ledger.key() @ LedgerError::UnknownProposal,
    )]
    pub proposal: Account<'info, Proposal>,

    // Vault PDA (holds the SOL)
    #[account(
        mut,
        seeds = [
            VAULT,
            ledger.key().as_ref(),
        ],
        bump = ledger.vault_bump,
    )]
    pub vault: SystemAccount<'info>,

    // Recipient recorded in the proposal
    /// CHECK: Must match the proposal's recipient; ownership is validated
    /// in the settlement path
    #[account(
        mut,
        constraint = recipient.key() == proposal.recipient @ LedgerError::RecipientMismatch,
    )]
    pub recipient: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> ExecuteTransfer<'info> {
    pub fn execute_transfer(&mut self) -> Result<()> {
        // 1. Terminal State Check
        require!(!self.proposal.executed, LedgerError::AlreadyExecuted);

        // 2. Quorum Check
        // Below quorum, settlement is not due; nothing to do
        if !self.proposal.quorum_reached(self.ledger.required) {
            return Ok(());
        }

        // 3. Boundary Probe
        // Unlike the auto-fire path, an explicit retry surfaces the failure
        require!(
            transfer_ready(&self.vault, &self.recipient, self.proposal.amount)?,
            LedgerError::ExecutionFailed
        );

        // 4. Settle
        settle_transfer(
            &self.ledger,
            &mut self.proposal,
            &self.vault,
            &self.recipient,
            &self.system_program,
        )
    }
}
