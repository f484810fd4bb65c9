use multiversx_sc::proxy_imports::*;

use crate::types::{GovernorProposal, ProposalState};

pub struct GovernorMockProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for GovernorMockProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = GovernorMockProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        GovernorMockProxyMethods { wrapped_tx: tx }
    }
}

pub struct GovernorMockProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, Gas> GovernorMockProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    pub fn init<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<BigUint<Env::Api>>,
        Arg2: ProxyArg<BigUint<Env::Api>>,
        Arg3: ProxyArg<u64>,
        Arg4: ProxyArg<u64>,
    >(
        self,
        token_ledger_address: Arg0,
        proposal_threshold: Arg1,
        quorum_votes: Arg2,
        voting_delay: Arg3,
        voting_period: Arg4,
    ) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .argument(&token_ledger_address)
            .argument(&proposal_threshold)
            .argument(&quorum_votes)
            .argument(&voting_delay)
            .argument(&voting_period)
            .original_result()
    }
}

impl<Env, From, To, Gas> GovernorMockProxyMethods<Env, From, To, Gas>
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

    pub fn cast_vote<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<bool>,
    >(
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

    pub fn cancel<Arg0: ProxyArg<u64>>(
        self,
        proposal_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("cancel")
            .argument(&proposal_id)
            .original_result()
    }

    pub fn state<Arg0: ProxyArg<u64>>(
        self,
        proposal_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ProposalState> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("state")
            .argument(&proposal_id)
            .original_result()
    }

    pub fn proposal<Arg0: ProxyArg<u64>>(
        self,
        proposal_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, GovernorProposal<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getProposal")
            .argument(&proposal_id)
            .original_result()
    }

    pub fn proposal_count(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getProposalCount")
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

    pub fn has_voted<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        proposal_id: Arg0,
        voter: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("hasVoted")
            .argument(&proposal_id)
            .argument(&voter)
            .original_result()
    }
}
