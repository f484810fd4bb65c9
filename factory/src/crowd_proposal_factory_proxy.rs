use multiversx_sc::proxy_imports::*;

pub struct CrowdProposalFactoryProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for CrowdProposalFactoryProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = CrowdProposalFactoryProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        CrowdProposalFactoryProxyMethods { wrapped_tx: tx }
    }
}

pub struct CrowdProposalFactoryProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, Gas> CrowdProposalFactoryProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    pub fn init<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
        Arg2: ProxyArg<ManagedAddress<Env::Api>>,
        Arg3: ProxyArg<ManagedAddress<Env::Api>>,
        Arg4: ProxyArg<BigUint<Env::Api>>,
    >(
        self,
        token_ledger_address: Arg0,
        governor_address: Arg1,
        proposal_template: Arg2,
        timelock: Arg3,
        stake_threshold: Arg4,
    ) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .argument(&token_ledger_address)
            .argument(&governor_address)
            .argument(&proposal_template)
            .argument(&timelock)
            .argument(&stake_threshold)
            .original_result()
    }
}

impl<Env, From, To, Gas> CrowdProposalFactoryProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn create_proposal<
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
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("createProposal")
            .argument(&targets)
            .argument(&values)
            .argument(&signatures)
            .argument(&call_datas)
            .argument(&description)
            .original_result()
    }

    pub fn set_stake_threshold<Arg0: ProxyArg<BigUint<Env::Api>>>(
        self,
        new_threshold: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setStakeThreshold")
            .argument(&new_threshold)
            .original_result()
    }

    pub fn token_ledger(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getTokenLedger")
            .original_result()
    }

    pub fn governor(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getGovernor")
            .original_result()
    }

    pub fn timelock(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getTimelock")
            .original_result()
    }

    pub fn proposal_template(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getProposalTemplate")
            .original_result()
    }

    pub fn stake_threshold(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getStakeThreshold")
            .original_result()
    }

    pub fn crowd_proposal_count(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getCrowdProposalCount")
            .original_result()
    }

    pub fn crowd_proposals<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<u64>,
    >(
        self,
        from: Arg0,
        count: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, ManagedAddress<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getCrowdProposals")
            .argument(&from)
            .argument(&count)
            .original_result()
    }

    pub fn is_crowd_proposal<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        address: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isCrowdProposal")
            .argument(&address)
            .original_result()
    }
}
