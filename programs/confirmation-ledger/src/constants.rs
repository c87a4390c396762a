pub const ANCHOR_DISCRIMINATOR: usize = 8;

// Seeds for PDA derivation: ["ledger", creator, ledger_id]
pub const LEDGER: &[u8] = b"ledger";

// Seeds for PDA derivation: ["proposal", ledger, proposal_id]
pub const PROPOSAL: &[u8] = b"proposal";

// Seeds for PDA derivation: ["vault", ledger]
pub const VAULT: &[u8] = b"vault";

// Maximum number of registered signers per ledger
pub const MAX_SIGNERS: usize = 10;
