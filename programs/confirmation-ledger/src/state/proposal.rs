use anchor_lang::prelude::*;
use crate::constants::MAX_SIGNERS;

// Proposal account
// A pending or executed request to transfer lamports from the vault
//
// `executed` is terminal: once true it never transitions back. The
// confirmation set is a bitmap over signer indices plus an explicit count;
// both only ever grow, and a proposal account is never closed, so the chain
// keeps the full audit record.
#[account]
#[derive(InitSpace)]
pub struct Proposal {
    // The ledger this proposal belongs to
    pub ledger: Pubkey,

    // Unique proposal number within this ledger
    // Dense, starting at 0; fixed into the account PDA so ids never repeat
    pub proposal_id: u64,

    // Who created this proposal (must be a registered signer)
    pub proposer: Pubkey,

    // Recipient of the vault transfer
    pub recipient: Pubkey,

    // Lamports to transfer from the vault
    pub amount: u64,

    // Whether the transfer has settled
    pub executed: bool,

    // Bitmap of confirmations by signer index
    pub confirmation_bitmap: u64,

    // Current confirmation count
    pub confirmation_count: u8,

    // Timestamp when the proposal was created
    pub created_at: i64,

    // Timestamp when the proposal was executed (0 if not executed)
    pub executed_at: i64,

    // PDA bump seed
    pub bump: u8,
}

impl Proposal {
    // Check if the signer at the given index has confirmed
    pub fn is_confirmed_by(&self, signer_index: usize) -> bool {
        if signer_index >= MAX_SIGNERS {
            return false;
        }
        (self.confirmation_bitmap & (1u64 << signer_index)) != 0
    }

    // Record a confirmation from the signer at the given index
    // Returns false if the index is out of range or already recorded
    pub fn confirm(&mut self, signer_index: usize) -> bool {
        if signer_index >= MAX_SIGNERS || self.is_confirmed_by(signer_index) {
            return false;
        }

        self.confirmation_bitmap |= 1u64 << signer_index;
        self.confirmation_count += 1;
        true
    }

    // Check if the proposal is eligible for settlement
    pub fn quorum_reached(&self, required: u8) -> bool {
        self.confirmation_count >= required && !self.executed
    }
}
