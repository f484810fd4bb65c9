multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Governor proposal state, as reported by the governor's `state` view
// ============================================================

/// Variant order mirrors the governor's encoding; do not reorder.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum GovernorProposalState {
    /// Created, voting delay not yet elapsed.
    Pending,
    /// Voting is open.
    Active,
    Canceled,
    /// Voting ended without majority or quorum.
    Defeated,
    Succeeded,
    Queued,
    Expired,
    Executed,
}
