//! Interface of the ERC-721 token standard, as defined in the [ERC].
//!
//! Only the interface surface is defined here: method signatures, the
//! canonical interface id, and the event and error shapes the standard
//! mandates. Transfer, approval, and ownership bookkeeping are obligations
//! on implementers of [`IErc721`], documented per method.
//!
//! [ERC]: https://eips.ethereum.org/EIPS/eip-721

use alloc::vec::Vec;

use alloy_primitives::{Address, Bytes, U256};
use alloy_sol_types::{SolCall, SolError};
use derive_more::From;

pub mod abi;
pub mod receiver;

pub use receiver::{IErc721Receiver, RECEIVER_FN_SELECTOR};

use abi::Erc721Interface;

/// Solidity interface id of the ERC-721 standard. Computed as a XOR of
/// selectors for each function in the [`abi::Erc721Interface`] declaration.
pub const INTERFACE_ID: u32 = u32::from_be_bytes(
    <Erc721Interface::balanceOfCall as SolCall>::SELECTOR,
) ^ u32::from_be_bytes(<Erc721Interface::ownerOfCall as SolCall>::SELECTOR)
    ^ u32::from_be_bytes(
        <Erc721Interface::safeTransferFrom_0Call as SolCall>::SELECTOR,
    )
    ^ u32::from_be_bytes(
        <Erc721Interface::safeTransferFrom_1Call as SolCall>::SELECTOR,
    )
    ^ u32::from_be_bytes(
        <Erc721Interface::transferFromCall as SolCall>::SELECTOR,
    )
    ^ u32::from_be_bytes(<Erc721Interface::approveCall as SolCall>::SELECTOR)
    ^ u32::from_be_bytes(
        <Erc721Interface::setApprovalForAllCall as SolCall>::SELECTOR,
    )
    ^ u32::from_be_bytes(
        <Erc721Interface::getApprovedCall as SolCall>::SELECTOR,
    )
    ^ u32::from_be_bytes(
        <Erc721Interface::isApprovedForAllCall as SolCall>::SELECTOR,
    );

pub use sol::*;
mod sol {
    use alloy_sol_macro::sol;

    sol! {
        /// Emitted when the `token_id` token is transferred from `from` to
        /// `to`.
        ///
        /// * `from` - Address from which the token will be transferred.
        /// * `to` - Address where the token will be transferred to.
        /// * `token_id` - Token id as a number.
        #[allow(missing_docs)]
        event Transfer(
            address indexed from,
            address indexed to,
            uint256 indexed token_id
        );

        /// Emitted when `owner` enables `approved` to manage the `token_id`
        /// token.
        ///
        /// * `owner` - Address of the owner of the token.
        /// * `approved` - Address of the approver.
        /// * `token_id` - Token id as a number.
        #[allow(missing_docs)]
        event Approval(
            address indexed owner,
            address indexed approved,
            uint256 indexed token_id
        );

        /// Emitted when `owner` enables or disables (`approved`) `operator`
        /// to manage all of its assets.
        ///
        /// * `owner` - Address of the owner of the token.
        /// * `operator` - Address of an operator that will manage operations
        ///   on the token.
        /// * `approved` - Whether or not permission has been granted. If
        ///   true, this means `operator` will be allowed to manage `owner`'s
        ///   assets.
        #[allow(missing_docs)]
        event ApprovalForAll(
            address indexed owner,
            address indexed operator,
            bool approved
        );

        /// Indicates that an address can't be an owner.
        /// For example, `Address::ZERO` is a forbidden owner.
        /// Used in balance queries.
        ///
        /// * `owner` - The address deemed to be an invalid owner.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error ERC721InvalidOwner(address owner);

        /// Indicates a `token_id` whose `owner` is the zero address.
        ///
        /// * `token_id` - Token id as a number.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error ERC721NonexistentToken(uint256 token_id);

        /// Indicates an error related to the ownership over a particular
        /// token. Used in transfers.
        ///
        /// * `sender` - Address whose tokens are being transferred.
        /// * `token_id` - Token id as a number.
        /// * `owner` - Address of the owner of the token.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error ERC721IncorrectOwner(address sender, uint256 token_id, address owner);

        /// Indicates a failure with the token `sender`. Used in transfers.
        ///
        /// * `sender` - An address whose token is being transferred.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error ERC721InvalidSender(address sender);

        /// Indicates a failure with the token `receiver`. Used in transfers.
        ///
        /// * `receiver` - Address that receives the token.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error ERC721InvalidReceiver(address receiver);

        /// Indicates a failure with the `operator`'s approval. Used in
        /// transfers.
        ///
        /// * `operator` - Address that may be allowed to operate on tokens
        ///   without being their owner.
        /// * `token_id` - Token id as a number.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error ERC721InsufficientApproval(address operator, uint256 token_id);

        /// Indicates a failure with the `approver` of a token to be
        /// approved. Used in approvals.
        ///
        /// * `approver` - Address initiating an approval operation.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error ERC721InvalidApprover(address approver);

        /// Indicates a failure with the `operator` to be approved.
        /// Used in approvals.
        ///
        /// * `operator` - Address that may be allowed to operate on tokens
        ///   without being their owner.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error ERC721InvalidOperator(address operator);
    }
}

/// An ERC-721 error defined as described in [ERC-6093].
///
/// [ERC-6093]: https://eips.ethereum.org/EIPS/eip-6093
#[derive(Debug, From)]
pub enum Error {
    /// Indicates that an address can't be an owner.
    /// For example, `Address::ZERO` is a forbidden owner.
    /// Used in balance queries.
    InvalidOwner(ERC721InvalidOwner),
    /// Indicates a `token_id` whose `owner` is the zero address.
    NonexistentToken(ERC721NonexistentToken),
    /// Indicates an error related to the ownership over a particular token.
    /// Used in transfers.
    IncorrectOwner(ERC721IncorrectOwner),
    /// Indicates a failure with the token `sender`. Used in transfers.
    InvalidSender(ERC721InvalidSender),
    /// Indicates a failure with the token `receiver`. Used in transfers.
    InvalidReceiver(ERC721InvalidReceiver),
    /// Indicates a failure with the `operator`'s approval. Used in
    /// transfers.
    InsufficientApproval(ERC721InsufficientApproval),
    /// Indicates a failure with the `approver` of a token to be approved.
    /// Used in approvals.
    InvalidApprover(ERC721InvalidApprover),
    /// Indicates a failure with the `operator` to be approved. Used in
    /// approvals.
    InvalidOperator(ERC721InvalidOperator),
}

impl Error {
    /// ABI-encodes the error as Solidity revert data: the 4-byte error
    /// selector followed by the ABI-encoded error arguments.
    #[must_use]
    pub fn abi_encode(&self) -> Vec<u8> {
        match self {
            Error::InvalidOwner(e) => e.abi_encode(),
            Error::NonexistentToken(e) => e.abi_encode(),
            Error::IncorrectOwner(e) => e.abi_encode(),
            Error::InvalidSender(e) => e.abi_encode(),
            Error::InvalidReceiver(e) => e.abi_encode(),
            Error::InsufficientApproval(e) => e.abi_encode(),
            Error::InvalidApprover(e) => e.abi_encode(),
            Error::InvalidOperator(e) => e.abi_encode(),
        }
    }
}

/// Required interface of an ERC-721 compliant contract.
pub trait IErc721 {
    /// Solidity interface id associated with the [`IErc721`] trait. Computed
    /// as a XOR of selectors for each function in the trait.
    const INTERFACE_ID: u32 = self::INTERFACE_ID;

    /// Returns the number of tokens in `owner`'s account.
    ///
    /// # Arguments
    ///
    /// * `&self` - Read access to the contract's state.
    /// * `owner` - Account of the token's owner.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidOwner`] - If `owner` is `Address::ZERO`.
    fn balance_of(&self, owner: Address) -> Result<U256, Error>;

    /// Returns the owner of the `token_id` token.
    ///
    /// # Arguments
    ///
    /// * `&self` - Read access to the contract's state.
    /// * `token_id` - Token id as a number.
    ///
    /// # Errors
    ///
    /// * [`Error::NonexistentToken`] - If the token does not exist.
    fn owner_of(&self, token_id: U256) -> Result<Address, Error>;

    /// Safely transfers `token_id` token from `from` to `to`, checking first
    /// that contract recipients are aware of the ERC-721 protocol to prevent
    /// tokens from being forever locked.
    ///
    /// If `to` refers to a smart contract, it must implement
    /// [`IErc721Receiver::on_erc721_received`], which is called upon a safe
    /// transfer. A transfer acknowledged with anything other than
    /// [`RECEIVER_FN_SELECTOR`] must be rejected whole: any state change
    /// already made is undone.
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `from` - Account of the sender.
    /// * `to` - Account of the recipient.
    /// * `token_id` - Token id as a number.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidReceiver`] - If `to` is `Address::ZERO`, or if the
    ///   recipient contract does not acknowledge the transfer.
    /// * [`Error::IncorrectOwner`] - If the previous owner is not `from`.
    /// * [`Error::InsufficientApproval`] - If the caller does not have the
    ///   right to transfer the token.
    /// * [`Error::NonexistentToken`] - If the token does not exist.
    ///
    /// # Events
    ///
    /// * [`Transfer`].
    fn safe_transfer_from(
        &mut self,
        from: Address,
        to: Address,
        token_id: U256,
    ) -> Result<(), Error>;

    /// Same as [`IErc721::safe_transfer_from`], with additional `data` that
    /// is passed, without a specified format, to the recipient's
    /// acknowledgment call.
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `from` - Account of the sender.
    /// * `to` - Account of the recipient.
    /// * `token_id` - Token id as a number.
    /// * `data` - Additional data with no specified format.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidReceiver`] - If `to` is `Address::ZERO`, or if the
    ///   recipient contract does not acknowledge the transfer.
    /// * [`Error::IncorrectOwner`] - If the previous owner is not `from`.
    /// * [`Error::InsufficientApproval`] - If the caller does not have the
    ///   right to transfer the token.
    /// * [`Error::NonexistentToken`] - If the token does not exist.
    ///
    /// # Events
    ///
    /// * [`Transfer`].
    fn safe_transfer_from_with_data(
        &mut self,
        from: Address,
        to: Address,
        token_id: U256,
        data: Bytes,
    ) -> Result<(), Error>;

    /// Transfers `token_id` token from `from` to `to`.
    ///
    /// WARNING: The caller is responsible to confirm that the recipient is
    /// capable of receiving ERC-721 tokens or else they may be permanently
    /// lost. Usage of [`IErc721::safe_transfer_from`] prevents loss.
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `from` - Account of the sender.
    /// * `to` - Account of the recipient.
    /// * `token_id` - Token id as a number.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidReceiver`] - If `to` is `Address::ZERO`.
    /// * [`Error::IncorrectOwner`] - If the previous owner is not `from`.
    /// * [`Error::InsufficientApproval`] - If the caller does not have the
    ///   right to transfer the token.
    /// * [`Error::NonexistentToken`] - If the token does not exist.
    ///
    /// # Events
    ///
    /// * [`Transfer`].
    fn transfer_from(
        &mut self,
        from: Address,
        to: Address,
        token_id: U256,
    ) -> Result<(), Error>;

    /// Gives permission to `to` to transfer `token_id` token to another
    /// account. The approval is cleared when the token is transferred.
    ///
    /// Only a single account can be approved at a time, so approving
    /// `Address::ZERO` clears previous approvals.
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `to` - Account of the recipient.
    /// * `token_id` - Token id as a number.
    ///
    /// # Errors
    ///
    /// * [`Error::NonexistentToken`] - If the token does not exist.
    /// * [`Error::InvalidApprover`] - If the caller does not own the token
    ///   and is not an approved operator.
    ///
    /// # Events
    ///
    /// * [`Approval`].
    fn approve(&mut self, to: Address, token_id: U256) -> Result<(), Error>;

    /// Approve or remove `operator` as an operator for the caller.
    ///
    /// Operators can call [`IErc721::transfer_from`] or
    /// [`IErc721::safe_transfer_from`] for any token owned by the caller.
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `operator` - Account to add to the set of authorized operators.
    /// * `approved` - Whether permission will be granted to `operator`.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidOperator`] - If `operator` is `Address::ZERO`.
    ///
    /// # Events
    ///
    /// * [`ApprovalForAll`].
    fn set_approval_for_all(
        &mut self,
        operator: Address,
        approved: bool,
    ) -> Result<(), Error>;

    /// Returns the account approved for `token_id` token.
    ///
    /// # Arguments
    ///
    /// * `&self` - Read access to the contract's state.
    /// * `token_id` - Token id as a number.
    ///
    /// # Errors
    ///
    /// * [`Error::NonexistentToken`] - If the token does not exist.
    fn get_approved(&self, token_id: U256) -> Result<Address, Error>;

    /// Returns whether the `operator` is allowed to manage all the assets of
    /// `owner`.
    ///
    /// # Arguments
    ///
    /// * `&self` - Read access to the contract's state.
    /// * `owner` - Account of the token's owner.
    /// * `operator` - Account to be checked.
    fn is_approved_for_all(&self, owner: Address, operator: Address) -> bool;
}

#[cfg(test)]
mod tests {
    use alloy_primitives::{B256, U256};
    use alloy_sol_types::{SolCall, SolError, SolEvent};
    use hex_literal::hex;

    use super::{
        abi::Erc721Interface, Approval, ApprovalForAll,
        ERC721NonexistentToken, Error, Transfer, INTERFACE_ID,
    };

    #[test]
    fn interface_id() {
        let actual = INTERFACE_ID;
        let expected = 0x80ac_58cd;
        assert_eq!(actual, expected);
    }

    #[test]
    fn selectors_match_the_standard() {
        assert_eq!(
            Erc721Interface::balanceOfCall::SELECTOR,
            hex!("70a08231")
        );
        assert_eq!(Erc721Interface::ownerOfCall::SELECTOR, hex!("6352211e"));
        assert_eq!(
            Erc721Interface::safeTransferFrom_0Call::SELECTOR,
            hex!("b88d4fde")
        );
        assert_eq!(
            Erc721Interface::safeTransferFrom_1Call::SELECTOR,
            hex!("42842e0e")
        );
        assert_eq!(
            Erc721Interface::transferFromCall::SELECTOR,
            hex!("23b872dd")
        );
        assert_eq!(Erc721Interface::approveCall::SELECTOR, hex!("095ea7b3"));
        assert_eq!(
            Erc721Interface::setApprovalForAllCall::SELECTOR,
            hex!("a22cb465")
        );
        assert_eq!(
            Erc721Interface::getApprovedCall::SELECTOR,
            hex!("081812fc")
        );
        assert_eq!(
            Erc721Interface::isApprovedForAllCall::SELECTOR,
            hex!("e985e9c5")
        );
    }

    #[test]
    fn event_topics_match_the_standard() {
        assert_eq!(
            Transfer::SIGNATURE_HASH,
            B256::new(hex!(
                "ddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef"
            ))
        );
        assert_eq!(
            Approval::SIGNATURE_HASH,
            B256::new(hex!(
                "8c5be1e5ebec7d5bd14f71427d1e84f3dd0314c0f7b2291e5b200ac8c7c3b925"
            ))
        );
        assert_eq!(
            ApprovalForAll::SIGNATURE_HASH,
            B256::new(hex!(
                "17307eab39ab6107e8899845ad3d59bd9653f200f220920489ca2b5937696c31"
            ))
        );
    }

    #[test]
    fn error_encodes_as_revert_data() {
        let token_id = U256::from(1);
        let err = Error::from(ERC721NonexistentToken { token_id });

        let encoded = err.abi_encode();

        assert_eq!(
            &encoded[..4],
            ERC721NonexistentToken::SELECTOR.as_slice()
        );
        assert_eq!(&encoded[4..], token_id.to_be_bytes::<32>().as_slice());
    }

    #[test]
    fn error_wraps_the_declared_shapes() {
        let err = Error::from(ERC721NonexistentToken {
            token_id: U256::from(7),
        });

        assert!(matches!(
            err,
            Error::NonexistentToken(ERC721NonexistentToken {
                token_id: t_id
            }) if t_id == U256::from(7)
        ));
    }
}
