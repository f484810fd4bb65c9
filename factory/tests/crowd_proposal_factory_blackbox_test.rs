use multiversx_sc_scenario::imports::*;

use crowd_proposal::crowd_proposal_proxy::CrowdProposalProxy;
use crowd_proposal::errors::*;
use crowd_proposal_factory::crowd_proposal_factory_proxy::CrowdProposalFactoryProxy;
use governor_mock::governor_mock_proxy::GovernorMockProxy;
use governor_mock::types::ProposalState;
use multiversx_sc_scenario::scenario_model::Log;
use token_ledger_mock::token_ledger_mock_proxy::TokenLedgerMockProxy;

const FACTORY_CODE_PATH: MxscPath = MxscPath::new("output/crowd-proposal-factory.mxsc.json");
const CROWD_PROPOSAL_CODE_PATH: MxscPath = MxscPath::new("../output/crowd-proposal.mxsc.json");
const TOKEN_LEDGER_CODE_PATH: MxscPath =
    MxscPath::new("../test-contracts/token-ledger-mock/output/token-ledger-mock.mxsc.json");
const GOVERNOR_CODE_PATH: MxscPath =
    MxscPath::new("../test-contracts/governor-mock/output/governor-mock.mxsc.json");

const ROOT: TestAddress = TestAddress::new("root");
const TIMELOCK: TestAddress = TestAddress::new("timelock");
const AUTHOR: TestAddress = TestAddress::new("author");
const SECOND_AUTHOR: TestAddress = TestAddress::new("second-author");

const TOKEN_LEDGER: TestSCAddress = TestSCAddress::new("token-ledger");
const GOVERNOR: TestSCAddress = TestSCAddress::new("governor");
const PROPOSAL_TEMPLATE: TestSCAddress = TestSCAddress::new("proposal-template");
const FACTORY: TestSCAddress = TestSCAddress::new("factory");

const TOTAL_SUPPLY: u64 = 10_000;
const STAKE_THRESHOLD: u64 = 100;
const PROPOSAL_THRESHOLD: u64 = 1_000;
const QUORUM_VOTES: u64 = 1_000;
const VOTING_DELAY: u64 = 1;
const VOTING_PERIOD: u64 = 100;
const START_BLOCK: u64 = 10;
const DESCRIPTION: &str = "do nothing";

fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();

    blockchain.register_contract(FACTORY_CODE_PATH, crowd_proposal_factory::ContractBuilder);
    blockchain.register_contract(CROWD_PROPOSAL_CODE_PATH, crowd_proposal::ContractBuilder);
    blockchain.register_contract(TOKEN_LEDGER_CODE_PATH, token_ledger_mock::ContractBuilder);
    blockchain.register_contract(GOVERNOR_CODE_PATH, governor_mock::ContractBuilder);
    blockchain
}

fn targets() -> ManagedVec<StaticApi, ManagedAddress<StaticApi>> {
    ManagedVec::from_single_item(ManagedAddress::from(ROOT.to_address()))
}

fn values() -> ManagedVec<StaticApi, BigUint<StaticApi>> {
    ManagedVec::from_single_item(BigUint::zero())
}

fn signatures() -> ManagedVec<StaticApi, ManagedBuffer<StaticApi>> {
    ManagedVec::from_single_item(ManagedBuffer::from("getBalanceOf(address)"))
}

fn call_datas() -> ManagedVec<StaticApi, ManagedBuffer<StaticApi>> {
    ManagedVec::from_single_item(ManagedBuffer::from(AUTHOR.to_address().as_bytes()))
}

fn assert_event(logs: &[Log], emitter: &Address, identifier: &str, indexed: &[Vec<u8>]) {
    let log = logs
        .iter()
        .find(|log| {
            &log.address == emitter
                && log.topics.first().map(|topic| topic.as_slice()) == Some(identifier.as_bytes())
        })
        .unwrap_or_else(|| panic!("no {identifier} event from {emitter:?}"));
    assert_eq!(&log.topics[1..], indexed);
}

fn topic<T: TopEncode>(value: &T) -> Vec<u8> {
    top_encode_to_vec_u8_or_panic(value)
}

struct FactoryTestState {
    world: ScenarioWorld,
    block: u64,
}

impl FactoryTestState {
    fn new() -> Self {
        let mut world = world();

        world.account(ROOT).nonce(1);
        world.account(TIMELOCK).nonce(1);
        world.account(AUTHOR).nonce(1);
        world.account(SECOND_AUTHOR).nonce(1);
        world.current_block().block_nonce(START_BLOCK);

        world
            .tx()
            .from(ROOT)
            .typed(TokenLedgerMockProxy)
            .init(ROOT, TOTAL_SUPPLY)
            .code(TOKEN_LEDGER_CODE_PATH)
            .new_address(TOKEN_LEDGER)
            .run();

        world
            .tx()
            .from(ROOT)
            .typed(GovernorMockProxy)
            .init(
                TOKEN_LEDGER,
                PROPOSAL_THRESHOLD,
                QUORUM_VOTES,
                VOTING_DELAY,
                VOTING_PERIOD,
            )
            .code(GOVERNOR_CODE_PATH)
            .new_address(GOVERNOR)
            .run();

        // Only its code matters; it never receives stake
        world
            .tx()
            .from(ROOT)
            .typed(CrowdProposalProxy)
            .init(
                ROOT,
                targets(),
                values(),
                signatures(),
                call_datas(),
                ManagedBuffer::from(DESCRIPTION),
                TOKEN_LEDGER,
                GOVERNOR,
            )
            .code(CROWD_PROPOSAL_CODE_PATH)
            .new_address(PROPOSAL_TEMPLATE)
            .run();

        world
            .tx()
            .from(ROOT)
            .typed(CrowdProposalFactoryProxy)
            .init(
                TOKEN_LEDGER,
                GOVERNOR,
                PROPOSAL_TEMPLATE,
                TIMELOCK,
                STAKE_THRESHOLD,
            )
            .code(FACTORY_CODE_PATH)
            .new_address(FACTORY)
            .run();

        Self {
            world,
            block: START_BLOCK,
        }
    }

    fn advance_blocks(&mut self, blocks: u64) {
        self.block += blocks;
        self.world.current_block().block_nonce(self.block);
    }

    /// Funds `author` from root and approves the factory for `allowance`.
    fn fund_author(&mut self, author: TestAddress, balance: u64, allowance: u64) {
        self.world
            .tx()
            .from(ROOT)
            .to(TOKEN_LEDGER)
            .typed(TokenLedgerMockProxy)
            .transfer(author, balance)
            .run();
        self.world
            .tx()
            .from(author)
            .to(TOKEN_LEDGER)
            .typed(TokenLedgerMockProxy)
            .approve(FACTORY, allowance)
            .run();
    }

    fn create_proposal(&mut self, author: TestAddress) -> ManagedAddress<StaticApi> {
        self.world
            .tx()
            .from(author)
            .to(FACTORY)
            .typed(CrowdProposalFactoryProxy)
            .create_proposal(
                targets(),
                values(),
                signatures(),
                call_datas(),
                ManagedBuffer::from(DESCRIPTION),
            )
            .returns(ReturnsResult)
            .run()
    }

    fn create_proposal_expect_err(&mut self, author: TestAddress, message: &str) {
        self.world
            .tx()
            .from(author)
            .to(FACTORY)
            .typed(CrowdProposalFactoryProxy)
            .create_proposal(
                targets(),
                values(),
                signatures(),
                call_datas(),
                ManagedBuffer::from(DESCRIPTION),
            )
            .returns(ExpectError(4, message))
            .run();
    }

    fn check_stake_threshold(&mut self, expected: u64) {
        self.world
            .query()
            .to(FACTORY)
            .typed(CrowdProposalFactoryProxy)
            .stake_threshold()
            .returns(ExpectValue(expected))
            .run();
    }

    fn check_crowd_proposal_count(&mut self, expected: u64) {
        self.world
            .query()
            .to(FACTORY)
            .typed(CrowdProposalFactoryProxy)
            .crowd_proposal_count()
            .returns(ExpectValue(expected))
            .run();
    }

    fn balance_of(&mut self, account: ManagedAddress<StaticApi>) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(TOKEN_LEDGER)
            .typed(TokenLedgerMockProxy)
            .balance_of(account)
            .returns(ReturnsResult)
            .run()
    }

    fn check_author_balance(&mut self, author: TestAddress, expected: u64) {
        let balance = self.balance_of(ManagedAddress::from(author.to_address()));
        assert_eq!(balance, BigUint::from(expected));
    }

    fn check_proposal_balance(&mut self, proposal: &ManagedAddress<StaticApi>, expected: u64) {
        let balance = self.balance_of(proposal.clone());
        assert_eq!(balance, BigUint::from(expected));
    }

    fn gov_proposal_id(&mut self, proposal: &ManagedAddress<StaticApi>) -> u64 {
        self.world
            .query()
            .to(proposal)
            .typed(CrowdProposalProxy)
            .gov_proposal_id()
            .returns(ReturnsResult)
            .run()
    }
}

// ============================================================
// Metadata
// ============================================================

#[test]
fn init_stores_configuration() {
    let mut state = FactoryTestState::new();

    let token_ledger = state
        .world
        .query()
        .to(FACTORY)
        .typed(CrowdProposalFactoryProxy)
        .token_ledger()
        .returns(ReturnsResult)
        .run();
    assert_eq!(token_ledger, ManagedAddress::from(TOKEN_LEDGER.to_address()));

    let governor = state
        .world
        .query()
        .to(FACTORY)
        .typed(CrowdProposalFactoryProxy)
        .governor()
        .returns(ReturnsResult)
        .run();
    assert_eq!(governor, ManagedAddress::from(GOVERNOR.to_address()));

    let template = state
        .world
        .query()
        .to(FACTORY)
        .typed(CrowdProposalFactoryProxy)
        .proposal_template()
        .returns(ReturnsResult)
        .run();
    assert_eq!(template, ManagedAddress::from(PROPOSAL_TEMPLATE.to_address()));

    let timelock = state
        .world
        .query()
        .to(FACTORY)
        .typed(CrowdProposalFactoryProxy)
        .timelock()
        .returns(ReturnsResult)
        .run();
    assert_eq!(timelock, ManagedAddress::from(TIMELOCK.to_address()));

    state.check_stake_threshold(STAKE_THRESHOLD);
    state.check_crowd_proposal_count(0);
}

// ============================================================
// setStakeThreshold
// ============================================================

#[test]
fn set_stake_threshold_fails_if_not_timelock() {
    let mut state = FactoryTestState::new();

    state
        .world
        .tx()
        .from(ROOT)
        .to(FACTORY)
        .typed(CrowdProposalFactoryProxy)
        .set_stake_threshold(999u64)
        .returns(ExpectError(4, ERR_ONLY_TIMELOCK))
        .run();

    state.check_stake_threshold(STAKE_THRESHOLD);
}

#[test]
fn set_stake_threshold_by_timelock() {
    let mut state = FactoryTestState::new();

    let logs = state
        .world
        .tx()
        .from(TIMELOCK)
        .to(FACTORY)
        .typed(CrowdProposalFactoryProxy)
        .set_stake_threshold(999u64)
        .returns(ReturnsLogs)
        .run();

    state.check_stake_threshold(999);
    // BigUint topics share the minimal big-endian encoding of u64
    assert_event(
        &logs,
        &FACTORY.to_address(),
        "stakeThresholdChanged",
        &[topic(&STAKE_THRESHOLD), topic(&999u64)],
    );
}

#[test]
fn new_threshold_applies_only_to_later_proposals() {
    let mut state = FactoryTestState::new();

    state.fund_author(AUTHOR, STAKE_THRESHOLD, STAKE_THRESHOLD);
    let first = state.create_proposal(AUTHOR);

    let raised = STAKE_THRESHOLD + 50;
    state
        .world
        .tx()
        .from(TIMELOCK)
        .to(FACTORY)
        .typed(CrowdProposalFactoryProxy)
        .set_stake_threshold(raised)
        .run();

    state.check_proposal_balance(&first, STAKE_THRESHOLD);

    // An allowance sized for the old threshold is no longer enough
    state.fund_author(SECOND_AUTHOR, raised, STAKE_THRESHOLD);
    state.create_proposal_expect_err(SECOND_AUTHOR, ERR_INSUFFICIENT_STAKE);

    state
        .world
        .tx()
        .from(SECOND_AUTHOR)
        .to(TOKEN_LEDGER)
        .typed(TokenLedgerMockProxy)
        .approve(FACTORY, raised)
        .run();
    let second = state.create_proposal(SECOND_AUTHOR);

    state.check_proposal_balance(&second, raised);
    state.check_author_balance(SECOND_AUTHOR, 0);
    state.check_proposal_balance(&first, STAKE_THRESHOLD);
}

// ============================================================
// createProposal
// ============================================================

#[test]
fn create_proposal_pulls_stake_into_new_instance() {
    let mut state = FactoryTestState::new();

    state.fund_author(AUTHOR, STAKE_THRESHOLD, STAKE_THRESHOLD);
    state.check_author_balance(AUTHOR, STAKE_THRESHOLD);

    let proposal = state.create_proposal(AUTHOR);

    state.check_proposal_balance(&proposal, STAKE_THRESHOLD);
    state.check_author_balance(AUTHOR, 0);
    state
        .world
        .query()
        .to(TOKEN_LEDGER)
        .typed(TokenLedgerMockProxy)
        .get_current_votes(proposal.clone())
        .returns(ExpectValue(STAKE_THRESHOLD))
        .run();

    let author = state
        .world
        .query()
        .to(&proposal)
        .typed(CrowdProposalProxy)
        .author()
        .returns(ReturnsResult)
        .run();
    assert_eq!(author, ManagedAddress::from(AUTHOR.to_address()));
    assert_eq!(state.gov_proposal_id(&proposal), 0);

    state.check_crowd_proposal_count(1);
    state
        .world
        .query()
        .to(FACTORY)
        .typed(CrowdProposalFactoryProxy)
        .is_crowd_proposal(proposal.clone())
        .returns(ExpectValue(true))
        .run();
    state
        .world
        .query()
        .to(FACTORY)
        .typed(CrowdProposalFactoryProxy)
        .is_crowd_proposal(PROPOSAL_TEMPLATE)
        .returns(ExpectValue(false))
        .run();

    let listed: Vec<ManagedAddress<StaticApi>> = state
        .world
        .query()
        .to(FACTORY)
        .typed(CrowdProposalFactoryProxy)
        .crowd_proposals(1u64, 10u64)
        .returns(ReturnsResult)
        .run()
        .into_iter()
        .collect();
    assert_eq!(listed, vec![proposal]);
}

#[test]
fn create_proposal_emits_created_event() {
    let mut state = FactoryTestState::new();
    state.fund_author(AUTHOR, STAKE_THRESHOLD, STAKE_THRESHOLD);

    let (proposal, logs) = state
        .world
        .tx()
        .from(AUTHOR)
        .to(FACTORY)
        .typed(CrowdProposalFactoryProxy)
        .create_proposal(
            targets(),
            values(),
            signatures(),
            call_datas(),
            ManagedBuffer::from(DESCRIPTION),
        )
        .returns(ReturnsResult)
        .returns(ReturnsLogs)
        .run();

    assert_event(
        &logs,
        &FACTORY.to_address(),
        "crowdProposalCreated",
        &[topic(&AUTHOR.to_address()), topic(&proposal.to_address())],
    );
}

#[test]
fn create_proposal_fails_if_allowance_is_short() {
    let mut state = FactoryTestState::new();

    state.fund_author(AUTHOR, STAKE_THRESHOLD, STAKE_THRESHOLD - 1);
    state.create_proposal_expect_err(AUTHOR, ERR_INSUFFICIENT_STAKE);

    state.check_author_balance(AUTHOR, STAKE_THRESHOLD);
    state.check_crowd_proposal_count(0);
}

#[test]
fn create_proposal_fails_if_balance_is_short() {
    let mut state = FactoryTestState::new();

    state.fund_author(AUTHOR, STAKE_THRESHOLD - 1, STAKE_THRESHOLD);
    state.create_proposal_expect_err(AUTHOR, ERR_INSUFFICIENT_STAKE);

    state.check_author_balance(AUTHOR, STAKE_THRESHOLD - 1);
    state.check_crowd_proposal_count(0);
}

#[test]
fn create_proposal_fails_on_empty_actions() {
    let mut state = FactoryTestState::new();

    state.fund_author(AUTHOR, STAKE_THRESHOLD, STAKE_THRESHOLD);
    state
        .world
        .tx()
        .from(AUTHOR)
        .to(FACTORY)
        .typed(CrowdProposalFactoryProxy)
        .create_proposal(
            ManagedVec::<StaticApi, ManagedAddress<StaticApi>>::new(),
            ManagedVec::<StaticApi, BigUint<StaticApi>>::new(),
            ManagedVec::<StaticApi, ManagedBuffer<StaticApi>>::new(),
            ManagedVec::<StaticApi, ManagedBuffer<StaticApi>>::new(),
            ManagedBuffer::from(DESCRIPTION),
        )
        .returns(ExpectError(4, ERR_INVALID_ACTIONS))
        .run();

    state.check_author_balance(AUTHOR, STAKE_THRESHOLD);
    state.check_crowd_proposal_count(0);
}

// ============================================================
// Independence and end-to-end
// ============================================================

#[test]
fn proposals_from_same_factory_do_not_share_state() {
    let mut state = FactoryTestState::new();

    state.fund_author(AUTHOR, STAKE_THRESHOLD, STAKE_THRESHOLD);
    state.fund_author(SECOND_AUTHOR, STAKE_THRESHOLD, STAKE_THRESHOLD);
    let first = state.create_proposal(AUTHOR);
    let second = state.create_proposal(SECOND_AUTHOR);
    assert_ne!(first, second);
    state.check_crowd_proposal_count(2);

    state
        .world
        .tx()
        .from(ROOT)
        .to(TOKEN_LEDGER)
        .typed(TokenLedgerMockProxy)
        .delegate(first.clone())
        .run();
    state
        .world
        .tx()
        .from(ROOT)
        .to(&first)
        .typed(CrowdProposalProxy)
        .propose()
        .run();
    let first_gov_id = state.gov_proposal_id(&first);
    assert!(first_gov_id > 0);

    state
        .world
        .tx()
        .from(SECOND_AUTHOR)
        .to(&second)
        .typed(CrowdProposalProxy)
        .terminate()
        .run();

    state.check_author_balance(SECOND_AUTHOR, STAKE_THRESHOLD);
    state.check_proposal_balance(&second, 0);
    assert_eq!(state.gov_proposal_id(&second), 0);

    state.check_proposal_balance(&first, STAKE_THRESHOLD);
    assert_eq!(state.gov_proposal_id(&first), first_gov_id);
    state
        .world
        .query()
        .to(&first)
        .typed(CrowdProposalProxy)
        .is_terminated()
        .returns(ExpectValue(false))
        .run();
}

#[test]
fn factory_created_proposal_reaches_active_governor_vote() {
    let mut state = FactoryTestState::new();

    state.fund_author(AUTHOR, STAKE_THRESHOLD, STAKE_THRESHOLD);
    let proposal = state.create_proposal(AUTHOR);

    state
        .world
        .tx()
        .from(ROOT)
        .to(TOKEN_LEDGER)
        .typed(TokenLedgerMockProxy)
        .delegate(proposal.clone())
        .run();
    let gov_proposal_id: u64 = state
        .world
        .tx()
        .from(ROOT)
        .to(&proposal)
        .typed(CrowdProposalProxy)
        .propose()
        .returns(ReturnsResult)
        .run();

    state
        .world
        .query()
        .to(GOVERNOR)
        .typed(GovernorMockProxy)
        .state(gov_proposal_id)
        .returns(ExpectValue(ProposalState::Pending))
        .run();

    state.advance_blocks(2);
    state
        .world
        .query()
        .to(GOVERNOR)
        .typed(GovernorMockProxy)
        .state(gov_proposal_id)
        .returns(ExpectValue(ProposalState::Active))
        .run();

    state
        .world
        .tx()
        .from(ROOT)
        .to(&proposal)
        .typed(CrowdProposalProxy)
        .vote()
        .run();
    state
        .world
        .tx()
        .from(AUTHOR)
        .to(&proposal)
        .typed(CrowdProposalProxy)
        .terminate()
        .run();

    state.check_author_balance(AUTHOR, STAKE_THRESHOLD);
    let gov_proposal = state
        .world
        .query()
        .to(GOVERNOR)
        .typed(GovernorMockProxy)
        .proposal(gov_proposal_id)
        .returns(ReturnsResult)
        .run();
    assert_eq!(gov_proposal.for_votes, BigUint::from(TOTAL_SUPPLY));
}
