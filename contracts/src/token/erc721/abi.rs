//! Solidity interface of the ERC-721 token.
//!
//! These declarations are the source of truth for the function selectors
//! and, through them, the [`super::INTERFACE_ID`] constant.

pub use interface::*;

mod interface {
    #![allow(missing_docs)]

    use alloy_sol_macro::sol;

    sol! {
        /// ERC-721 standard interface.
        interface Erc721Interface {
            function balanceOf(address owner) external view returns (uint256 balance);
            function ownerOf(uint256 token_id) external view returns (address owner);
            function safeTransferFrom(address from, address to, uint256 token_id, bytes calldata data) external;
            function safeTransferFrom(address from, address to, uint256 token_id) external;
            function transferFrom(address from, address to, uint256 token_id) external;
            function approve(address to, uint256 token_id) external;
            function setApprovalForAll(address operator, bool approved) external;
            function getApproved(uint256 token_id) external view returns (address operator);
            function isApprovedForAll(address owner, address operator) external view returns (bool);
        }
    }
}
