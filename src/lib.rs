#![no_std]

multiversx_sc::imports!();

pub mod crowd_proposal_proxy;
pub mod errors;
pub mod governor_proxy;
pub mod token_ledger_proxy;
pub mod types;
pub mod validation;

use errors::*;
use types::GovernorProposalState;

/// Sentinel stored in `govProposalId` until the governor accepts the proposal.
pub const NO_GOV_PROPOSAL: u64 = 0;

// ============================================================
// Contract
// ============================================================

/// A crowd proposal: holds its author's stake, collects delegated votes and
/// forwards one proposal to the governor once it carries enough weight.
#[multiversx_sc::contract]
pub trait CrowdProposal {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(
        &self,
        author: ManagedAddress,
        targets: ManagedVec<ManagedAddress>,
        values: ManagedVec<BigUint>,
        signatures: ManagedVec<ManagedBuffer>,
        call_datas: ManagedVec<ManagedBuffer>,
        description: ManagedBuffer,
        token_ledger_address: ManagedAddress,
        governor_address: ManagedAddress,
    ) {
        require!(
            validation::actions_are_well_formed(&targets, &values, &signatures, &call_datas),
            ERR_INVALID_ACTIONS
        );

        self.author().set(&author);
        self.targets().set(&targets);
        self.values().set(&values);
        self.signatures().set(&signatures);
        self.call_datas().set(&call_datas);
        self.description().set(&description);
        self.token_ledger_address().set(&token_ledger_address);
        self.governor_address().set(&governor_address);
        self.gov_proposal_id().set(NO_GOV_PROPOSAL);
        self.terminated().set(false);
        self.voted().set(false);

        // Whatever stake lands here counts as this instance's own voting weight
        let own_address = self.blockchain().get_sc_address();
        self.tx()
            .to(&token_ledger_address)
            .typed(token_ledger_proxy::TokenLedgerProxy)
            .delegate(own_address)
            .sync_call();
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: propose
    // Anyone can push the proposal to the governor once enough
    // weight is delegated. At most one governor proposal, ever.
    // ========================================================

    #[endpoint(propose)]
    fn propose(&self) -> u64 {
        require!(!self.terminated().get(), ERR_TERMINATED);
        require!(
            self.gov_proposal_id().get() == NO_GOV_PROPOSAL,
            ERR_ALREADY_PROPOSED
        );
        require!(
            self.current_votes() >= self.governor_proposal_threshold(),
            ERR_BELOW_PROPOSAL_THRESHOLD
        );

        let governor = self.governor_address().get();
        let gov_proposal_id: u64 = self
            .tx()
            .to(&governor)
            .typed(governor_proxy::GovernorProxy)
            .propose(
                self.targets().get(),
                self.values().get(),
                self.signatures().get(),
                self.call_datas().get(),
                self.description().get(),
            )
            .returns(ReturnsResult)
            .sync_call();

        self.gov_proposal_id().set(gov_proposal_id);

        let author = self.author().get();
        let own_address = self.blockchain().get_sc_address();
        self.crowd_proposal_proposed_event(&author, &own_address, gov_proposal_id);

        gov_proposal_id
    }

    // ========================================================
    // ENDPOINT: vote
    // Casts the full live weight in favor. Still allowed after
    // terminate; the weight is then whatever delegators left.
    // ========================================================

    #[endpoint(vote)]
    fn vote(&self) {
        let gov_proposal_id = self.gov_proposal_id().get();
        require!(gov_proposal_id != NO_GOV_PROPOSAL, ERR_NO_GOV_PROPOSAL);
        require!(!self.voted().get(), ERR_ALREADY_VOTED);
        require!(
            self.governor_state(gov_proposal_id) == GovernorProposalState::Active,
            ERR_GOV_PROPOSAL_NOT_ACTIVE
        );

        let governor = self.governor_address().get();
        self.tx()
            .to(&governor)
            .typed(governor_proxy::GovernorProxy)
            .cast_vote(gov_proposal_id, true)
            .sync_call();

        self.voted().set(true);

        let own_address = self.blockchain().get_sc_address();
        self.crowd_proposal_voted_event(&own_address, gov_proposal_id);
    }

    // ========================================================
    // ENDPOINT: terminate
    // Author-only. Returns the whole balance held by this
    // instance. Votes already cast on the governor stay there.
    // ========================================================

    #[endpoint(terminate)]
    fn terminate(&self) {
        let caller = self.blockchain().get_caller();
        let author = self.author().get();
        require!(caller == author, ERR_ONLY_AUTHOR);
        require!(!self.terminated().get(), ERR_ALREADY_TERMINATED);

        self.terminated().set(true);

        let stake = self.staked_amount();
        if stake > 0u64 {
            let token_ledger = self.token_ledger_address().get();
            self.tx()
                .to(&token_ledger)
                .typed(token_ledger_proxy::TokenLedgerProxy)
                .transfer(&author, &stake)
                .sync_call();
        }

        let own_address = self.blockchain().get_sc_address();
        self.crowd_proposal_terminated_event(&author, &own_address);
    }

    // ========================================================
    // INTERNAL: live reads from the collaborators. Never cached.
    // ========================================================

    fn staked_amount(&self) -> BigUint {
        let token_ledger = self.token_ledger_address().get();
        let own_address = self.blockchain().get_sc_address();
        self.tx()
            .to(&token_ledger)
            .typed(token_ledger_proxy::TokenLedgerProxy)
            .balance_of(own_address)
            .returns(ReturnsResult)
            .sync_call()
    }

    fn current_votes(&self) -> BigUint {
        let token_ledger = self.token_ledger_address().get();
        let own_address = self.blockchain().get_sc_address();
        self.tx()
            .to(&token_ledger)
            .typed(token_ledger_proxy::TokenLedgerProxy)
            .get_current_votes(own_address)
            .returns(ReturnsResult)
            .sync_call()
    }

    fn governor_proposal_threshold(&self) -> BigUint {
        let governor = self.governor_address().get();
        self.tx()
            .to(&governor)
            .typed(governor_proxy::GovernorProxy)
            .proposal_threshold()
            .returns(ReturnsResult)
            .sync_call()
    }

    fn governor_state(&self, gov_proposal_id: u64) -> GovernorProposalState {
        let governor = self.governor_address().get();
        self.tx()
            .to(&governor)
            .typed(governor_proxy::GovernorProxy)
            .state(gov_proposal_id)
            .returns(ReturnsResult)
            .sync_call()
    }

    // ========================================================
    // VIEWS: read-only queries
    // ========================================================

    #[view(getAuthor)]
    fn get_author(&self) -> ManagedAddress {
        self.author().get()
    }

    #[view(getTokenLedger)]
    fn get_token_ledger(&self) -> ManagedAddress {
        self.token_ledger_address().get()
    }

    #[view(getGovernor)]
    fn get_governor(&self) -> ManagedAddress {
        self.governor_address().get()
    }

    #[view(getTargets)]
    fn get_targets(&self) -> ManagedVec<ManagedAddress> {
        self.targets().get()
    }

    #[view(getValues)]
    fn get_values(&self) -> ManagedVec<BigUint> {
        self.values().get()
    }

    #[view(getSignatures)]
    fn get_signatures(&self) -> ManagedVec<ManagedBuffer> {
        self.signatures().get()
    }

    #[view(getCallDatas)]
    fn get_call_datas(&self) -> ManagedVec<ManagedBuffer> {
        self.call_datas().get()
    }

    #[view(getDescription)]
    fn get_description(&self) -> ManagedBuffer {
        self.description().get()
    }

    /// 0 until `propose` succeeds.
    #[view(getGovProposalId)]
    fn get_gov_proposal_id(&self) -> u64 {
        self.gov_proposal_id().get()
    }

    #[view(isTerminated)]
    fn is_terminated(&self) -> bool {
        self.terminated().get()
    }

    #[view(hasVoted)]
    fn has_voted(&self) -> bool {
        self.voted().get()
    }

    #[view(getStakedAmount)]
    fn get_staked_amount(&self) -> BigUint {
        self.staked_amount()
    }

    #[view(getCurrentVotes)]
    fn get_current_votes(&self) -> BigUint {
        self.current_votes()
    }

    #[view(isReadyToPropose)]
    fn is_ready_to_propose(&self) -> bool {
        if self.gov_proposal_id().get() != NO_GOV_PROPOSAL || self.terminated().get() {
            return false;
        }
        self.current_votes() >= self.governor_proposal_threshold()
    }

    #[view(isReadyToVote)]
    fn is_ready_to_vote(&self) -> bool {
        let gov_proposal_id = self.gov_proposal_id().get();
        if gov_proposal_id == NO_GOV_PROPOSAL || self.voted().get() {
            return false;
        }
        self.governor_state(gov_proposal_id) == GovernorProposalState::Active
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("crowdProposalProposed")]
    fn crowd_proposal_proposed_event(
        &self,
        #[indexed] author: &ManagedAddress,
        #[indexed] proposal: &ManagedAddress,
        #[indexed] gov_proposal_id: u64,
    );

    #[event("crowdProposalVoted")]
    fn crowd_proposal_voted_event(
        &self,
        #[indexed] proposal: &ManagedAddress,
        #[indexed] gov_proposal_id: u64,
    );

    #[event("crowdProposalTerminated")]
    fn crowd_proposal_terminated_event(
        &self,
        #[indexed] author: &ManagedAddress,
        #[indexed] proposal: &ManagedAddress,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Collaborators ──

    #[storage_mapper("tokenLedgerAddress")]
    fn token_ledger_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("governorAddress")]
    fn governor_address(&self) -> SingleValueMapper<ManagedAddress>;

    // ── Immutable payload ──

    #[storage_mapper("author")]
    fn author(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("targets")]
    fn targets(&self) -> SingleValueMapper<ManagedVec<ManagedAddress>>;

    #[storage_mapper("values")]
    fn values(&self) -> SingleValueMapper<ManagedVec<BigUint>>;

    #[storage_mapper("signatures")]
    fn signatures(&self) -> SingleValueMapper<ManagedVec<ManagedBuffer>>;

    #[storage_mapper("callDatas")]
    fn call_datas(&self) -> SingleValueMapper<ManagedVec<ManagedBuffer>>;

    #[storage_mapper("description")]
    fn description(&self) -> SingleValueMapper<ManagedBuffer>;

    // ── Lifecycle ──

    #[storage_mapper("govProposalId")]
    fn gov_proposal_id(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("terminated")]
    fn terminated(&self) -> SingleValueMapper<bool>;

    #[storage_mapper("voted")]
    fn voted(&self) -> SingleValueMapper<bool>;
}
