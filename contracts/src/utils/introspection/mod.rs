//! Interface detection per the ERC-165 standard.

pub mod erc165;
