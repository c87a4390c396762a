use anchor_lang::prelude::*;
use crate::{state::*, errors::*, constants::*, events::*, helpers::*};

// Confirm Transfer Instruction
//
// Records one confirmation per registered signer (tracked via bitmap) and
// runs the settlement attempt in the same instruction, so the transfer
// fires the moment the quorum is reached.

#[derive(Accounts)]
pub struct ConfirmTransfer<'info> {
    // Signer confirming the proposal
    #[account(mut)]
    pub signer: Signer<'info>,

    // Ledger account (for signer validation)
    #[account(
        seeds = [
            LEDGER,
            ledger.creator.as_ref(),
            &ledger.ledger_id.to_le_bytes(),
        ],
        bump = ledger.bump,
    )]
    pub ledger: Account<'info, Ledger>,

    // Proposal being confirmed
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

    // Vault PDA - funds the transfer if this confirmation reaches quorum
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

impl<'info> ConfirmTransfer<'info> {
    pub fn confirm_transfer(&mut self) -> Result<()> {
        // 1. Signer Validation
        // Only registered signers can confirm
        require!(
            self.ledger.is_signer(&self.signer.key()),
            LedgerError::NotAParty
        );

        // 2. Get Signer Index for Bitmap
        let signer_index = self
            .ledger
            .signer_index(&self.signer.key())
            .ok_or(LedgerError::NotAParty)?;

        // 3. Terminal State Check
        // Executed is terminal; late confirmations are rejected
        require!(!self.proposal.executed, LedgerError::AlreadyExecuted);

        // 4. Double Confirmation Prevention
        // Each signer confirms at most once
        require!(
            !self.proposal.is_confirmed_by(signer_index),
            LedgerError::AlreadyConfirmed
        );

        // 5. Record Confirmation
        // Updates bitmap and count together
        self.proposal.confirm(signer_index);

        // 6. Confirmation Count Sanity Check
        // The count can never exceed the signer count
        require!(
            self.proposal.confirmation_count <= self.ledger.signer_count,
            LedgerError::Overflow
        );

        emit!(ProposalConfirmed {
            ledger: self.ledger.key(),
            proposal_id: self.proposal.proposal_id,
            signer: self.signer.key(),
            confirmation_count: self.proposal.confirmation_count,
        });

        // 7. Settlement Attempt
        auto_execute(
            &self.ledger,
            &mut self.proposal,
            &self.vault,
            &self.recipient,
            &self.system_program,
        )
    }
}
