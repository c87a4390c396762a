use anchor_lang::prelude::*;
use crate::constants::*;

// Ledger account
// Stores the registered signer set and quorum configuration
//
// The signer set and `required` are written once at initialization and
// never mutated afterwards. There is no membership or threshold management.
#[account]
#[derive(InitSpace)]
pub struct Ledger {
    // Unique identifier for this ledger, scoped to its creator
    pub ledger_id: u64,

    // Bootstrap identity that created the ledger and paid rent
    // Not necessarily a registered signer
    pub creator: Pubkey,

    // Number of distinct confirmations required to execute a proposal
    // Must be: 1 <= required <= signer_count
    pub required: u8,

    // Number of registered signers
    pub signer_count: u8,

    // Registered signer set
    // Fixed-size array avoids realloc vulnerabilities
    // Entries beyond signer_count are Pubkey::default() padding
    pub signers: [Pubkey; MAX_SIGNERS],

    // Total proposals ever created (used for proposal numbering)
    pub proposal_count: u64,

    // Vault PDA address, stored for reference and validation
    pub vault: Pubkey,

    // PDA bump seed for the ledger account
    pub bump: u8,

    // PDA bump seed for the vault account
    // Used for vault PDA signing when settling proposals
    pub vault_bump: u8,
}

impl Ledger {
    // Check if a pubkey is a registered signer
    pub fn is_signer(&self, key: &Pubkey) -> bool {
        self.signers
            .iter()
            .take(self.signer_count as usize)
            .any(|signer| signer == key)
    }

    // Get the index of a signer, returns None if not registered
    pub fn signer_index(&self, key: &Pubkey) -> Option<usize> {
        self.signers
            .iter()
            .take(self.signer_count as usize)
            .position(|signer| signer == key)
    }
}
