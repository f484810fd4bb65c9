multiversx_sc::imports!();

/// Governor-side cap on the number of actions a single proposal may carry.
pub const MAX_ACTIONS: usize = 10;

/// Checks the action payload the governor will receive: at least one action,
/// no more than `MAX_ACTIONS`, and every per-action list of the same length.
pub fn actions_are_well_formed<M: ManagedTypeApi>(
    targets: &ManagedVec<M, ManagedAddress<M>>,
    values: &ManagedVec<M, BigUint<M>>,
    signatures: &ManagedVec<M, ManagedBuffer<M>>,
    call_datas: &ManagedVec<M, ManagedBuffer<M>>,
) -> bool {
    let action_count = targets.len();
    action_count > 0
        && action_count <= MAX_ACTIONS
        && values.len() == action_count
        && signatures.len() == action_count
        && call_datas.len() == action_count
}
