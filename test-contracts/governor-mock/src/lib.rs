#![no_std]

multiversx_sc::imports!();

pub mod governor_mock_proxy;
pub mod types;

use token_ledger_mock::token_ledger_mock_proxy;
use types::{GovernorProposal, ProposalState};

const MAX_OPERATIONS: usize = 10;

// ============================================================
// Contract
// ============================================================

/// Test stand-in for the governance engine. Voting weight is read live
/// from the token ledger both at proposal time and at vote time.
#[multiversx_sc::contract]
pub trait GovernorMock {
    #[init]
    fn init(
        &self,
        token_ledger_address: ManagedAddress,
        proposal_threshold: BigUint,
        quorum_votes: BigUint,
        voting_delay: u64,
        voting_period: u64,
    ) {
        self.token_ledger_address().set(&token_ledger_address);
        self.proposal_threshold().set(&proposal_threshold);
        self.quorum_votes().set(&quorum_votes);
        self.voting_delay().set(voting_delay);
        self.voting_period().set(voting_period);
        self.proposal_count().set(0u64);
    }

    // ========================================================
    // ENDPOINTS
    // ========================================================

    #[endpoint(propose)]
    fn propose(
        &self,
        targets: ManagedVec<ManagedAddress>,
        values: ManagedVec<BigUint>,
        signatures: ManagedVec<ManagedBuffer>,
        call_datas: ManagedVec<ManagedBuffer>,
        description: ManagedBuffer,
    ) -> u64 {
        let proposer = self.blockchain().get_caller();
        require!(
            self.votes_of(&proposer) >= self.proposal_threshold().get(),
            "proposer votes below proposal threshold"
        );
        require!(
            targets.len() == values.len()
                && targets.len() == signatures.len()
                && targets.len() == call_datas.len(),
            "proposal function information arity mismatch"
        );
        require!(!targets.is_empty(), "must provide actions");
        require!(targets.len() <= MAX_OPERATIONS, "too many actions");

        let latest_id = self.latest_proposal_id(&proposer).get();
        if latest_id != 0 {
            let latest_state = self.state(latest_id);
            require!(
                latest_state != ProposalState::Active && latest_state != ProposalState::Pending,
                "one live proposal per proposer"
            );
        }

        let proposal_id = self.proposal_count().get() + 1;
        let start_block = self.blockchain().get_block_nonce() + self.voting_delay().get();
        let end_block = start_block + self.voting_period().get();

        let proposal = GovernorProposal {
            id: proposal_id,
            proposer: proposer.clone(),
            description,
            start_block,
            end_block,
            for_votes: BigUint::zero(),
            against_votes: BigUint::zero(),
            canceled: false,
        };
        self.proposals(proposal_id).set(&proposal);
        self.proposal_count().set(proposal_id);
        self.latest_proposal_id(&proposer).set(proposal_id);

        self.proposal_created_event(proposal_id, &proposer, start_block, end_block);

        proposal_id
    }

    #[endpoint(castVote)]
    fn cast_vote(&self, proposal_id: u64, support: bool) {
        let voter = self.blockchain().get_caller();
        require!(
            self.state(proposal_id) == ProposalState::Active,
            "voting is closed"
        );
        require!(
            !self.receipts(proposal_id, &voter).get(),
            "voter already voted"
        );

        let weight = self.votes_of(&voter);
        self.proposals(proposal_id).update(|proposal| {
            if support {
                proposal.for_votes += &weight;
            } else {
                proposal.against_votes += &weight;
            }
        });
        self.receipts(proposal_id, &voter).set(true);

        self.vote_cast_event(&voter, proposal_id, support, &weight);
    }

    #[endpoint(cancel)]
    fn cancel(&self, proposal_id: u64) {
        let caller = self.blockchain().get_caller();
        let state = self.state(proposal_id);
        require!(
            state == ProposalState::Pending || state == ProposalState::Active,
            "cannot cancel a closed proposal"
        );

        let mut proposal = self.proposals(proposal_id).get();
        require!(proposal.proposer == caller, "only proposer can cancel");
        proposal.canceled = true;
        self.proposals(proposal_id).set(&proposal);
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn votes_of(&self, account: &ManagedAddress) -> BigUint {
        let token_ledger = self.token_ledger_address().get();
        self.tx()
            .to(&token_ledger)
            .typed(token_ledger_mock_proxy::TokenLedgerMockProxy)
            .get_current_votes(account)
            .returns(ReturnsResult)
            .sync_call()
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(state)]
    fn state(&self, proposal_id: u64) -> ProposalState {
        require!(
            proposal_id > 0 && proposal_id <= self.proposal_count().get(),
            "invalid proposal id"
        );

        let proposal = self.proposals(proposal_id).get();
        let block = self.blockchain().get_block_nonce();
        if proposal.canceled {
            ProposalState::Canceled
        } else if block <= proposal.start_block {
            ProposalState::Pending
        } else if block <= proposal.end_block {
            ProposalState::Active
        } else if proposal.for_votes <= proposal.against_votes
            || proposal.for_votes < self.quorum_votes().get()
        {
            ProposalState::Defeated
        } else {
            ProposalState::Succeeded
        }
    }

    #[view(getProposal)]
    fn get_proposal(&self, proposal_id: u64) -> GovernorProposal<Self::Api> {
        self.proposals(proposal_id).get()
    }

    #[view(hasVoted)]
    fn has_voted(&self, proposal_id: u64, voter: ManagedAddress) -> bool {
        self.receipts(proposal_id, &voter).get()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("proposalCreated")]
    fn proposal_created_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] proposer: &ManagedAddress,
        #[indexed] start_block: u64,
        end_block: u64,
    );

    #[event("voteCast")]
    fn vote_cast_event(
        &self,
        #[indexed] voter: &ManagedAddress,
        #[indexed] proposal_id: u64,
        #[indexed] support: bool,
        weight: &BigUint,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("tokenLedgerAddress")]
    fn token_ledger_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(proposalThreshold)]
    #[storage_mapper("proposalThreshold")]
    fn proposal_threshold(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("quorumVotes")]
    fn quorum_votes(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("votingDelay")]
    fn voting_delay(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("votingPeriod")]
    fn voting_period(&self) -> SingleValueMapper<u64>;

    #[view(getProposalCount)]
    #[storage_mapper("proposalCount")]
    fn proposal_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("proposals")]
    fn proposals(&self, id: u64) -> SingleValueMapper<GovernorProposal<Self::Api>>;

    #[storage_mapper("latestProposalId")]
    fn latest_proposal_id(&self, proposer: &ManagedAddress) -> SingleValueMapper<u64>;

    #[storage_mapper("receipts")]
    fn receipts(&self, proposal_id: u64, voter: &ManagedAddress) -> SingleValueMapper<bool>;
}
