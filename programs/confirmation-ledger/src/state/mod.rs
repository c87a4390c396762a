pub mod ledger;
pub mod proposal;

pub use ledger::*;
pub use proposal::*;
