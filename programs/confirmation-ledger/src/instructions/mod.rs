// Instructions module
// - create_ledger
// - propose_transfer
// - confirm_transfer
// - execute_transfer (retry crank)

pub mod confirm_transfer;
pub mod create_ledger;
pub mod execute_transfer;
pub mod propose_transfer;

pub use confirm_transfer::*;
pub use create_ledger::*;
pub use execute_transfer::*;
pub use propose_transfer::*;
