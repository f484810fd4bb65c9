#![no_std]

multiversx_sc::imports!();

pub mod crowd_proposal_factory_proxy;

use crowd_proposal::errors::*;
use crowd_proposal::{crowd_proposal_proxy, token_ledger_proxy, validation};

// ============================================================
// Contract
// ============================================================

/// Deploys crowd proposals and seeds each one with the author's stake.
#[multiversx_sc::contract]
pub trait CrowdProposalFactory {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    /// `proposal_template` must be a deployed crowd proposal; its code is
    /// cloned for every new instance. `timelock` is the only identity
    /// allowed to change the stake threshold.
    #[init]
    fn init(
        &self,
        token_ledger_address: ManagedAddress,
        governor_address: ManagedAddress,
        proposal_template: ManagedAddress,
        timelock: ManagedAddress,
        stake_threshold: BigUint,
    ) {
        self.token_ledger_address().set(&token_ledger_address);
        self.governor_address().set(&governor_address);
        self.proposal_template().set(&proposal_template);
        self.timelock().set(&timelock);
        self.stake_threshold().set(&stake_threshold);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: createProposal
    // Stake is pulled from the caller into the new instance in
    // the same transaction; any failure reverts the deploy too.
    // ========================================================

    #[endpoint(createProposal)]
    fn create_proposal(
        &self,
        targets: ManagedVec<ManagedAddress>,
        values: ManagedVec<BigUint>,
        signatures: ManagedVec<ManagedBuffer>,
        call_datas: ManagedVec<ManagedBuffer>,
        description: ManagedBuffer,
    ) -> ManagedAddress {
        let author = self.blockchain().get_caller();
        require!(
            validation::actions_are_well_formed(&targets, &values, &signatures, &call_datas),
            ERR_INVALID_ACTIONS
        );

        let stake = self.stake_threshold().get();
        require!(self.can_stake(&author, &stake), ERR_INSUFFICIENT_STAKE);

        let token_ledger = self.token_ledger_address().get();
        let governor = self.governor_address().get();
        let proposal_address = self
            .tx()
            .typed(crowd_proposal_proxy::CrowdProposalProxy)
            .init(
                &author,
                targets,
                values,
                signatures,
                call_datas,
                description,
                &token_ledger,
                &governor,
            )
            .from_source(self.proposal_template().get())
            .code_metadata(CodeMetadata::DEFAULT)
            .returns(ReturnsNewManagedAddress)
            .sync_call();

        self.tx()
            .to(&token_ledger)
            .typed(token_ledger_proxy::TokenLedgerProxy)
            .transfer_from(&author, &proposal_address, &stake)
            .sync_call();

        self.crowd_proposals().insert(proposal_address.clone());
        self.crowd_proposal_created_event(&author, &proposal_address);

        proposal_address
    }

    // ========================================================
    // ENDPOINT: setStakeThreshold
    // Timelock only. Existing proposals keep what they staked.
    // ========================================================

    #[endpoint(setStakeThreshold)]
    fn set_stake_threshold(&self, new_threshold: BigUint) {
        let caller = self.blockchain().get_caller();
        require!(caller == self.timelock().get(), ERR_ONLY_TIMELOCK);

        let old_threshold = self.stake_threshold().get();
        self.stake_threshold().set(&new_threshold);

        self.stake_threshold_changed_event(&old_threshold, &new_threshold);
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    /// Both the author's balance and the allowance granted to this
    /// factory must cover the stake before anything is deployed.
    fn can_stake(&self, author: &ManagedAddress, stake: &BigUint) -> bool {
        let token_ledger = self.token_ledger_address().get();
        let own_address = self.blockchain().get_sc_address();

        let allowance: BigUint = self
            .tx()
            .to(&token_ledger)
            .typed(token_ledger_proxy::TokenLedgerProxy)
            .allowance(author, &own_address)
            .returns(ReturnsResult)
            .sync_call();
        if allowance < *stake {
            return false;
        }

        let balance: BigUint = self
            .tx()
            .to(&token_ledger)
            .typed(token_ledger_proxy::TokenLedgerProxy)
            .balance_of(author)
            .returns(ReturnsResult)
            .sync_call();
        balance >= *stake
    }

    // ========================================================
    // VIEWS: read-only queries
    // ========================================================

    #[view(getTokenLedger)]
    fn get_token_ledger(&self) -> ManagedAddress {
        self.token_ledger_address().get()
    }

    #[view(getGovernor)]
    fn get_governor(&self) -> ManagedAddress {
        self.governor_address().get()
    }

    #[view(getTimelock)]
    fn get_timelock(&self) -> ManagedAddress {
        self.timelock().get()
    }

    #[view(getProposalTemplate)]
    fn get_proposal_template(&self) -> ManagedAddress {
        self.proposal_template().get()
    }

    #[view(getStakeThreshold)]
    fn get_stake_threshold(&self) -> BigUint {
        self.stake_threshold().get()
    }

    #[view(getCrowdProposalCount)]
    fn get_crowd_proposal_count(&self) -> u64 {
        self.crowd_proposals().len() as u64
    }

    /// 1-based paging over proposals in creation order.
    #[view(getCrowdProposals)]
    fn get_crowd_proposals(&self, from: u64, count: u64) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        if count == 0 {
            return result;
        }
        let total = self.crowd_proposals().len() as u64;
        let start = if from == 0 { 1u64 } else { from };
        if start > total {
            return result;
        }
        let end = core::cmp::min(start.saturating_add(count - 1), total);

        for index in start..=end {
            result.push(self.crowd_proposals().get_by_index(index as usize));
        }
        result
    }

    #[view(isCrowdProposal)]
    fn is_crowd_proposal(&self, address: ManagedAddress) -> bool {
        self.crowd_proposals().contains(&address)
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("crowdProposalCreated")]
    fn crowd_proposal_created_event(
        &self,
        #[indexed] author: &ManagedAddress,
        #[indexed] proposal: &ManagedAddress,
    );

    #[event("stakeThresholdChanged")]
    fn stake_threshold_changed_event(
        &self,
        #[indexed] old_threshold: &BigUint,
        #[indexed] new_threshold: &BigUint,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Configuration ──

    #[storage_mapper("tokenLedgerAddress")]
    fn token_ledger_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("governorAddress")]
    fn governor_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("proposalTemplate")]
    fn proposal_template(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("timelock")]
    fn timelock(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("stakeThreshold")]
    fn stake_threshold(&self) -> SingleValueMapper<BigUint>;

    // ── Registry ──

    #[storage_mapper("crowdProposals")]
    fn crowd_proposals(&self) -> UnorderedSetMapper<ManagedAddress>;
}
