pub mod error;
pub mod execute;
pub mod instantiate;
pub mod migration;
pub mod query;
pub mod state;
pub mod utils;
