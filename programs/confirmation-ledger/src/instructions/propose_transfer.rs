use anchor_lang::prelude::*;
use crate::{state::*, errors::*, constants::*, events::*, helpers::*};

// Propose Transfer Instruction
//
// Creates a transfer proposal numbered by the ledger's running counter.
// Proposing implies the proposer's own confirmation, so the settlement
// attempt runs in the same instruction; with a quorum of one the transfer
// settles immediately.
//
// The recipient travels as an account rather than an argument because
// settlement can fire inside this instruction.

#[derive(Accounts)]
pub struct ProposeTransfer<'info> {
    // Proposer - must be a registered signer
    #[account(mut)]
    pub proposer: Signer<'info>,

    // Ledger account
    #[account(
        mut,
        seeds = [
            LEDGER,
            ledger.creator.as_ref(),
            &ledger.ledger_id.to_le_bytes(),
        ],
        bump = ledger.bump,
    )]
    pub ledger: Account<'info, Ledger>,

    // Proposal PDA - numbered by the ledger's proposal counter
    #[account(
        init,
        payer = proposer,
        space = ANCHOR_DISCRIMINATOR + Proposal::INIT_SPACE,
        seeds = [
            PROPOSAL,
            ledger.key().as_ref(),
            &ledger.proposal_count.to_le_bytes(),
        ],
        bump,
    )]
    pub proposal: Account<'info, Proposal>,

    // Vault PDA - funds the transfer if the proposal settles immediately
    #[account(
        mut,
        seeds = [
            VAULT,
            ledger.key().as_ref(),
        ],
        bump = ledger.vault_bump,
    )]
    pub vault: SystemAccount<'info>,

    // Recipient of the proposed transfer
    /// CHECK: Validated in the settlement path; must be writable and
    /// system-owned before any transfer is made
    #[account(mut)]
    pub recipient: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> ProposeTransfer<'info> {
    pub fn propose_transfer(
        &mut self,
        amount: u64,
        bumps: &ProposeTransferBumps,
    ) -> Result<()> {
        // 1. Signer Validation
        // Only registered signers can propose
        require!(
            self.ledger.is_signer(&self.proposer.key()),
            LedgerError::NotAParty
        );

        // 2. Recipient Validation
        // The null identity is not a valid transfer target
        require!(
            self.recipient.key() != Pubkey::default(),
            LedgerError::InvalidParty
        );

        // Get the proposer's index for the self-confirmation
        let proposer_index = self
            .ledger
            .signer_index(&self.proposer.key())
            .ok_or(LedgerError::NotAParty)?;

        // 3. Increment Proposal Count
        self.ledger.proposal_count = self
            .ledger
            .proposal_count
            .checked_add(1)
            .ok_or(LedgerError::Overflow)?;

        let proposal_id = self.ledger.proposal_count - 1;

        // 4. Initialize Proposal
        // Propose implies the proposer's own confirmation
        let mut confirmation_bitmap: u64 = 0;
        confirmation_bitmap |= 1u64 << proposer_index;

        let clock = Clock::get()?;

        self.proposal.set_inner(Proposal {
            ledger: self.ledger.key(),
            proposal_id,
            proposer: self.proposer.key(),
            recipient: self.recipient.key(),
            amount,
            executed: false,
            confirmation_bitmap,
            confirmation_count: 1,
            created_at: clock.unix_timestamp,
            executed_at: 0,
            bump: bumps.proposal,
        });

        emit!(ProposalCreated {
            ledger: self.ledger.key(),
            proposal_id,
            proposer: self.proposer.key(),
            recipient: self.recipient.key(),
            amount,
        });

        // 5. Settlement Attempt
        auto_execute(
            &self.ledger,
            &mut self.proposal,
            &self.vault,
            &self.recipient,
            &self.system_program,
        )
    }
}
