/*!
# ERC-721 interface definitions

Standard Ethereum token-interface definitions written in Rust: the ERC-165
introspection standard, the ERC-721 non-fungible token standard, and the
ERC-721 token receiver callback.

This crate defines the interfaces, their canonical 4-byte identifiers, and
the event and error shapes the standards mandate. The only executable
behavior is ERC-165 interface conformance: concrete token types implement
the declared traits and extend [`utils::introspection::erc165::Erc165`] to
report the interfaces they support.

```ignore
use erc721_interfaces::{
    token::erc721,
    utils::introspection::erc165::{Erc165, IErc165},
};

impl IErc165 for MyToken {
    fn supports_interface(interface_id: FixedBytes<4>) -> bool {
        erc721::INTERFACE_ID == u32::from_be_bytes(*interface_id)
            || Erc165::supports_interface(interface_id)
    }
}
```
*/

#![cfg_attr(not(test), no_std)]
#![deny(rustdoc::broken_intra_doc_links)]
extern crate alloc;

pub mod token;
pub mod utils;
