//! Token standard interfaces.

pub mod erc721;
