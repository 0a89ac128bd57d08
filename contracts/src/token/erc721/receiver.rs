//! Module with an interface required for smart contracts in order to receive
//! ERC-721 token transfers.

use alloc::vec::Vec;

use alloy_primitives::{aliases::B32, Address, Bytes, U256};
use alloy_sol_types::SolCall;

pub use abi::Erc721ReceiverInterface;

mod abi {
    #![allow(missing_docs)]

    use alloy_sol_macro::sol;

    sol! {
        /// ERC-721 token receiver Solidity interface.
        ///
        /// Check [`super::IErc721Receiver`] trait for more details.
        interface Erc721ReceiverInterface {
            function onERC721Received(
                address operator,
                address from,
                uint256 token_id,
                bytes calldata data
            ) external returns (bytes4);
        }
    }
}

/// The expected value returned from [`IErc721Receiver::on_erc721_received`].
pub const RECEIVER_FN_SELECTOR: B32 = B32::new(
    <Erc721ReceiverInterface::onERC721ReceivedCall as SolCall>::SELECTOR,
);

/// ERC-721 token receiver trait.
///
/// Interface for any contract that wants to support
/// [`super::IErc721::safe_transfer_from`] and
/// [`super::IErc721::safe_transfer_from_with_data`] from ERC-721 asset
/// contracts.
pub trait IErc721Receiver {
    /// Solidity interface id associated with the [`IErc721Receiver`] trait.
    /// Computed as a XOR of selectors for each function in the trait.
    const INTERFACE_ID: u32 = u32::from_be_bytes(
        <Erc721ReceiverInterface::onERC721ReceivedCall as SolCall>::SELECTOR,
    );

    /// This function is called whenever a `token_id` token is transferred to
    /// this contract via [`super::IErc721::safe_transfer_from`] or
    /// [`super::IErc721::safe_transfer_from_with_data`].
    ///
    /// It must return [`RECEIVER_FN_SELECTOR`] to confirm the token
    /// transfer. If any other value is returned, or an error, the transfer
    /// is rejected whole by the calling token contract.
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `operator` - Account of the operator.
    /// * `from` - Account of the sender.
    /// * `token_id` - Token id as a number.
    /// * `data` - Additional data with no specified format.
    ///
    /// # Errors
    ///
    /// * May return a custom error.
    fn on_erc721_received(
        &mut self,
        operator: Address,
        from: Address,
        token_id: U256,
        data: Bytes,
    ) -> Result<B32, Vec<u8>>;
}

#[cfg(test)]
mod tests {
    use alloy_primitives::{aliases::B32, Address, Bytes, U256};
    use hex_literal::hex;

    use super::{IErc721Receiver, RECEIVER_FN_SELECTOR};

    struct Vault;

    impl IErc721Receiver for Vault {
        fn on_erc721_received(
            &mut self,
            _operator: Address,
            _from: Address,
            _token_id: U256,
            _data: Bytes,
        ) -> Result<B32, Vec<u8>> {
            Ok(RECEIVER_FN_SELECTOR)
        }
    }

    #[test]
    fn receiver_fn_selector() {
        assert_eq!(RECEIVER_FN_SELECTOR, B32::new(hex!("150b7a02")));
        assert_eq!(<Vault as IErc721Receiver>::INTERFACE_ID, 0x150b_7a02);
    }

    #[test]
    fn acknowledges_with_the_magic_value() {
        let mut vault = Vault;

        let ack = vault
            .on_erc721_received(
                Address::ZERO,
                Address::ZERO,
                U256::from(1),
                Bytes::new(),
            )
            .expect("receiver should acknowledge the transfer");

        assert_eq!(ack, RECEIVER_FN_SELECTOR);
    }
}
