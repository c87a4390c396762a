use anchor_lang::prelude::*;
use anchor_lang::system_program::{create_account, CreateAccount};
use crate::{state::*, errors::*, constants::*};

// Create Ledger Instruction
//
// One-shot initialization of a confirmation ledger:
// - Registers the full signer set
// - Stores the quorum threshold
// - Creates the vault PDA that holds the ledger's SOL
//
// The signer set and threshold are fixed for the life of the ledger.
// There is no add/remove-signer or change-quorum path.

#[derive(Accounts)]
#[instruction(ledger_id: u64)]
pub struct CreateLedger<'info> {
    // Bootstrap identity; pays for account creation
    // Not required to appear in the signer set
    #[account(mut)]
    pub creator: Signer<'info>,

    // Ledger account PDA
    // Seeds: ["ledger", creator, ledger_id]
    // init means this address can be created exactly once; a repeat call
    // fails at account creation, before any instruction logic runs
    #[account(
        init,
        payer = creator,
        space = ANCHOR_DISCRIMINATOR + Ledger::INIT_SPACE,
        seeds = [
            LEDGER,
            creator.key().as_ref(),
            &ledger_id.to_le_bytes(),
        ],
        bump,
    )]
    pub ledger: Account<'info, Ledger>,

    // Vault PDA - holds SOL for the ledger
    // Seeds: ["vault", ledger]
    // Created as a system-owned account
    #[account(
        mut,
        seeds = [
            VAULT,
            ledger.key().as_ref(),
        ],
        bump,
    )]
    pub vault: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> CreateLedger<'info> {
    pub fn create_ledger(
        &mut self,
        ledger_id: u64,
        signers: Vec<Pubkey>,
        required: u8,
        bumps: &CreateLedgerBumps,
    ) -> Result<()> {
        let ledger_key = self.ledger.key();

        // init hands over a zeroed account; a populated signer table means
        // this PDA was already set up
        require!(
            self.ledger.signer_count == 0,
            LedgerError::AlreadyInitialized
        );

        // 1. Capacity Check
        require!(signers.len() <= MAX_SIGNERS, LedgerError::TooManySigners);

        // 2. Quorum Validation
        // 1 <= required <= |signers| (an empty signer list fails here too)
        require!(
            required >= 1 && (required as usize) <= signers.len(),
            LedgerError::InvalidQuorum
        );

        // 3. Signer Set Validation
        // No null identity, no duplicates
        let mut table = [Pubkey::default(); MAX_SIGNERS];
        for (i, signer) in signers.iter().enumerate() {
            require!(*signer != Pubkey::default(), LedgerError::InvalidParty);
            require!(!signers[..i].contains(signer), LedgerError::InvalidParty);
            table[i] = *signer;
        }

        // 4. Set Ledger State
        self.ledger.set_inner(Ledger {
            ledger_id,
            creator: self.creator.key(),
            required,
            signer_count: signers.len() as u8,
            signers: table,
            proposal_count: 0,
            vault: self.vault.key(),
            bump: bumps.ledger,
            vault_bump: bumps.vault,
        });

        // 5. Initialize Vault Account
        // Transfer minimum rent to create the vault account
        let signer_seeds: &[&[&[u8]]] = &[&[
            VAULT,
            ledger_key.as_ref(),
            &[bumps.vault],
        ]];

        let rent = Rent::get()?;
        let min_rent = rent.minimum_balance(0);
        create_account(
            CpiContext::new(
                self.system_program.to_account_info(),
                CreateAccount {
                    from: self.creator.to_account_info(),
                    to: self.vault.to_account_info(),
                },
            )
            .with_signer(signer_seeds),
            min_rent,
            0,
            &self.system_program.key(),
        )?;

        Ok(())
    }
}
