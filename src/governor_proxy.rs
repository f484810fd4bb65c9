use multiversx_sc::proxy_imports::*;

use crate::types::GovernorProposalState;

pub struct GovernorProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for GovernorProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = GovernorProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        GovernorProxyMethods { wrapped_tx: tx }
    }
}

pub struct GovernorProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, To, Gas> GovernorProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn propose<
        Arg0: ProxyArg<ManagedVec<Env::Api, ManagedAddress<Env::Api>>>,
        Arg1: ProxyArg<ManagedVec<Env::Api, BigUint<Env::Api>>>,
        Arg2: ProxyArg<ManagedVec<Env::Api, ManagedBuffer<Env::Api>>>,
        Arg3: ProxyArg<ManagedVec<Env::Api, ManagedBuffer<Env::Api>>>,
        Arg4: ProxyArg<ManagedBuffer<Env::Api>>,
    >(
        self,
        targets: Arg0,
        values: Arg1,
        signatures: Arg2,
        call_datas: Arg3,
        description: Arg4,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("propose")
            .argument(&targets)
            .argument(&values)
            .argument(&signatures)
            .argument(&call_datas)
            .argument(&description)
            .original_result()
    }

    pub fn cast_vote<Arg0: ProxyArg<u64>, Arg1: ProxyArg<bool>>(
        self,
        proposal_id: Arg0,
        support: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("castVote")
            .argument(&proposal_id)
            .argument(&support)
            .original_result()
    }

    pub fn state<Arg0: ProxyArg<u64>>(
        self,
        proposal_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, GovernorProposalState> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("state")
            .argument(&proposal_id)
            .original_result()
    }

    pub fn proposal_threshold(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("proposalThreshold")
            .original_result()
    }
}
