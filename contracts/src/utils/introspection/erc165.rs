//! Trait and implementation of the ERC-165 standard, as defined in the [ERC].
//!
//! [ERC]: https://eips.ethereum.org/EIPS/eip-165

use alloy_primitives::FixedBytes;
use alloy_sol_types::SolCall;

pub use abi::Erc165Interface;

mod abi {
    #![allow(missing_docs)]

    use alloy_sol_macro::sol;

    sol! {
        /// ERC-165 standard Solidity interface.
        interface Erc165Interface {
            function supportsInterface(bytes4 interface_id) external view returns (bool);
        }
    }
}

/// Interface of the ERC-165 standard, as defined in the [ERC].
///
/// Implementers can declare support of contract interfaces, which others can
/// query.
///
/// For an implementation, see [`Erc165`].
///
/// [ERC]: https://eips.ethereum.org/EIPS/eip-165
pub trait IErc165 {
    /// Solidity interface id associated with the [`IErc165`] trait. Computed
    /// as a XOR of selectors for each function in the trait.
    const INTERFACE_ID: u32 = u32::from_be_bytes(
        <Erc165Interface::supportsInterfaceCall as SolCall>::SELECTOR,
    );

    /// Returns true if this contract implements the interface defined by
    /// `interface_id`. See the corresponding [ERC] to learn more about how
    /// these ids are created.
    ///
    /// # Arguments
    ///
    /// * `interface_id` - The interface identifier, as specified in the [ERC].
    ///
    /// [ERC]: https://eips.ethereum.org/EIPS/eip-165#how-interfaces-are-identified
    fn supports_interface(interface_id: FixedBytes<4>) -> bool;
}

/// Implementation of the [`IErc165`] trait.
///
/// Contracts that want to support ERC-165 should implement the [`IErc165`]
/// trait for the additional interface ids that will be supported and call
/// [`Erc165::supports_interface`] for the fallback case, like:
///
/// ```rust,ignore
/// impl IErc165 for SaleToken {
///     fn supports_interface(interface_id: FixedBytes<4>) -> bool {
///         crate::token::erc721::INTERFACE_ID == u32::from_be_bytes(*interface_id)
///             || Erc165::supports_interface(interface_id)
///     }
/// }
/// ```
pub struct Erc165;

impl IErc165 for Erc165 {
    fn supports_interface(interface_id: FixedBytes<4>) -> bool {
        Self::INTERFACE_ID == u32::from_be_bytes(*interface_id)
    }
}

#[cfg(test)]
mod tests {
    use alloy_primitives::FixedBytes;
    use proptest::prelude::*;

    use super::{Erc165, IErc165};

    const ERC165_ID: u32 = 0x01ff_c9a7;
    const ERC721_ID: u32 = 0x80ac_58cd;

    fn id(value: u32) -> FixedBytes<4> {
        FixedBytes(value.to_be_bytes())
    }

    #[test]
    fn interface_id() {
        let actual = <Erc165 as IErc165>::INTERFACE_ID;
        let expected = ERC165_ID;
        assert_eq!(actual, expected);
    }

    #[test]
    fn supports_own_interface_id() {
        assert!(Erc165::supports_interface(id(ERC165_ID)));
    }

    #[test]
    fn rejects_zero_and_all_ones() {
        assert!(!Erc165::supports_interface(id(0x0000_0000)));
        assert!(!Erc165::supports_interface(id(0xffff_ffff)));
    }

    #[test]
    fn base_does_not_recognize_derived_ids() {
        // Only a concrete token type recognizes the ERC-721 id.
        assert!(!Erc165::supports_interface(id(ERC721_ID)));
    }

    #[test]
    fn repeated_queries_agree() {
        for _ in 0..3 {
            assert!(Erc165::supports_interface(id(ERC165_ID)));
            assert!(!Erc165::supports_interface(id(ERC721_ID)));
        }
    }

    proptest! {
        #[test]
        fn rejects_every_other_id(value in any::<u32>()) {
            prop_assume!(value != ERC165_ID);
            prop_assert!(!Erc165::supports_interface(id(value)));
        }
    }
}
