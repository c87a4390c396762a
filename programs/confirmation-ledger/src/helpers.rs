use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};

use crate::{constants::*, errors::*, events::*, state::*};

// Settlement helpers
//
// The quorum check, boundary probe, and vault transfer live here so that
// propose, confirm, and the explicit retry all run the same settlement path.

// Probe whether the vault transfer can settle right now
// The recipient must be system-owned, and the vault must cover the full
// amount while keeping its rent-exempt minimum
pub fn transfer_ready<'info>(
    vault: &SystemAccount<'info>,
    recipient: &UncheckedAccount<'info>,
    amount: u64,
) -> Result<bool> {
    let rent_floor = Rent::get()?.minimum_balance(0);
    let needed = amount.checked_add(rent_floor).ok_or(LedgerError::Overflow)?;

    let system_owned = recipient.owner == &anchor_lang::system_program::ID;

    Ok(system_owned && vault.lamports() >= needed)
}

// Settle the proposal: mark it executed and transfer from the vault
//
// The executed flag flips strictly before the transfer CPI. A failed CPI
// reverts the flag together with the rest of the transaction, so the
// flag/transfer pair is all-or-nothing and a reentrant callee cannot
// observe an eligible proposal.
pub fn settle_transfer<'info>(
    ledger: &Account<'info, Ledger>,
    proposal: &mut Account<'info, Proposal>,
    vault: &SystemAccount<'info>,
    recipient: &UncheckedAccount<'info>,
    system_program: &Program<'info, System>,
) -> Result<()> {
    let clock = Clock::get()?;
    proposal.executed = true;
    proposal.executed_at = clock.unix_timestamp;

    let ledger_key = ledger.key();
    let vault_seeds = &[VAULT, ledger_key.as_ref(), &[ledger.vault_bump]];
    let signer_seeds = &[&vault_seeds[..]];

    let cpi_context = CpiContext::new_with_signer(
        system_program.to_account_info(),
        Transfer {
            from: vault.to_account_info(),
            to: recipient.to_account_info(),
        },
        signer_seeds,
    );

    transfer(cpi_context, proposal.amount).map_err(|_| error!(LedgerError::ExecutionFailed))?;

    emit!(ProposalExecuted {
        ledger: ledger_key,
        proposal_id: proposal.proposal_id,
        recipient: proposal.recipient,
        amount: proposal.amount,
    });

    Ok(())
}

// Settlement attempt run after every recorded confirmation
//
// Below quorum this is a no-op. At quorum, an unready boundary defers
// settlement instead of failing the confirmation: the recorded
// confirmations stand and a later confirm or explicit retry can settle.
pub fn auto_execute<'info>(
    ledger: &Account<'info, Ledger>,
    proposal: &mut Account<'info, Proposal>,
    vault: &SystemAccount<'info>,
    recipient: &UncheckedAccount<'info>,
    system_program: &Program<'info, System>,
) -> Result<()> {
    if !proposal.quorum_reached(ledger.required) {
        return Ok(());
    }

    if !transfer_ready(vault, recipient, proposal.amount)? {
        emit!(ExecutionDeferred {
            ledger: ledger.key(),
            proposal_id: proposal.proposal_id,
            amount: proposal.amount,
            vault_balance: vault.lamports(),
        });
        return Ok(());
    }

    settle_transfer(ledger, proposal, vault, recipient, system_program)
}
