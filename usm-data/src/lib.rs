pub mod filter;
pub mod rank;
pub mod selection;
pub mod stats;
