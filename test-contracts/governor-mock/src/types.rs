multiversx_sc::imports!();
multiversx_sc::derive_imports!();

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum ProposalState {
    Pending,
    Active,
    Canceled,
    Defeated,
    Succeeded,
    Queued,
    Expired,
    Executed,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct GovernorProposal<M: ManagedTypeApi> {
    pub id: u64,
    pub proposer: ManagedAddress<M>,
    pub description: ManagedBuffer<M>,
    /// Voting opens after this block nonce.
    pub start_block: u64,
    /// Voting closes after this block nonce.
    pub end_block: u64,
    pub for_votes: BigUint<M>,
    pub against_votes: BigUint<M>,
    pub canceled: bool,
}
