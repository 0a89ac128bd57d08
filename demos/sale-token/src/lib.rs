//! A token type extending the base ERC-165 conformance check.
//!
//! [`SaleToken`] recognizes the ERC-721 interface id on top of the ERC-165
//! id the base [`Erc165`] implementation reports. It is constructed with no
//! arguments, matching how the contract is instantiated at deployment.

use alloy_primitives::FixedBytes;
use erc721_interfaces::{
    token::erc721,
    utils::introspection::erc165::{Erc165, IErc165},
};

/// An ERC-721 token offered for sale.
///
/// Only the interface-conformance surface is wired up here; the declared
/// [`erc721::IErc721`] obligations require a storage backend and are not
/// implemented by this type.
#[derive(Default)]
pub struct SaleToken;

impl IErc165 for SaleToken {
    fn supports_interface(interface_id: FixedBytes<4>) -> bool {
        erc721::INTERFACE_ID == u32::from_be_bytes(*interface_id)
            || Erc165::supports_interface(interface_id)
    }
}

#[cfg(test)]
mod tests {
    use alloy_primitives::FixedBytes;
    use erc721_interfaces::utils::introspection::erc165::IErc165;

    use super::SaleToken;

    fn id(value: u32) -> FixedBytes<4> {
        FixedBytes(value.to_be_bytes())
    }

    #[test]
    fn constructs_with_no_arguments() {
        let _token = SaleToken::default();
    }

    #[test]
    fn supports_erc721_and_erc165() {
        assert!(SaleToken::supports_interface(id(0x80ac_58cd)));
        assert!(SaleToken::supports_interface(id(0x01ff_c9a7)));
    }

    #[test]
    fn rejects_unknown_ids() {
        assert!(!SaleToken::supports_interface(id(0x0000_0000)));
        assert!(!SaleToken::supports_interface(id(0xffff_ffff)));
        // The receiver id belongs to recipients, not to the token itself.
        assert!(!SaleToken::supports_interface(id(0x150b_7a02)));
    }
}
