#![no_std]

multiversx_sc::imports!();

pub mod token_ledger_mock_proxy;

// ============================================================
// Contract
// ============================================================

/// Test stand-in for the governance token: balances, allowances and
/// vote delegation where a delegatee's votes are the sum of its
/// delegators' balances.
#[multiversx_sc::contract]
pub trait TokenLedgerMock {
    #[init]
    fn init(&self, initial_holder: ManagedAddress, total_supply: BigUint) {
        self.balances(&initial_holder).set(&total_supply);
        self.total_supply().set(&total_supply);
    }

    // ========================================================
    // ENDPOINTS
    // ========================================================

    #[endpoint(transfer)]
    fn transfer(&self, to: ManagedAddress, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        self.transfer_tokens(&caller, &to, &amount);
    }

    #[endpoint(transferFrom)]
    fn transfer_from(&self, from: ManagedAddress, to: ManagedAddress, amount: BigUint) {
        let spender = self.blockchain().get_caller();
        let allowance = self.allowances(&from, &spender).get();
        require!(
            allowance >= amount,
            "transfer amount exceeds spender allowance"
        );
        self.allowances(&from, &spender).set(&(allowance - &amount));

        self.transfer_tokens(&from, &to, &amount);
    }

    #[endpoint(approve)]
    fn approve(&self, spender: ManagedAddress, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        self.allowances(&caller, &spender).set(&amount);
    }

    #[endpoint(delegate)]
    fn delegate(&self, delegatee: ManagedAddress) {
        let delegator = self.blockchain().get_caller();
        let previous = self.delegate_of(&delegator);
        let weight = self.balances(&delegator).get();

        self.delegates(&delegator).set(&delegatee);
        self.move_votes(previous.as_ref(), Some(&delegatee), &weight);
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn transfer_tokens(&self, from: &ManagedAddress, to: &ManagedAddress, amount: &BigUint) {
        let balance = self.balances(from).get();
        require!(balance >= *amount, "transfer amount exceeds balance");

        self.balances(from).set(&(balance - amount));
        self.balances(to).update(|b| *b += amount);

        let from_rep = self.delegate_of(from);
        let to_rep = self.delegate_of(to);
        self.move_votes(from_rep.as_ref(), to_rep.as_ref(), amount);
    }

    fn move_votes(
        &self,
        from_rep: Option<&ManagedAddress>,
        to_rep: Option<&ManagedAddress>,
        amount: &BigUint,
    ) {
        if from_rep == to_rep || *amount == 0u64 {
            return;
        }
        if let Some(rep) = from_rep {
            self.votes(rep).update(|v| *v -= amount);
        }
        if let Some(rep) = to_rep {
            self.votes(rep).update(|v| *v += amount);
        }
    }

    fn delegate_of(&self, account: &ManagedAddress) -> Option<ManagedAddress> {
        let mapper = self.delegates(account);
        if mapper.is_empty() {
            None
        } else {
            Some(mapper.get())
        }
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(balanceOf)]
    fn balance_of(&self, account: ManagedAddress) -> BigUint {
        self.balances(&account).get()
    }

    #[view(allowance)]
    fn allowance(&self, owner: ManagedAddress, spender: ManagedAddress) -> BigUint {
        self.allowances(&owner, &spender).get()
    }

    #[view(getCurrentVotes)]
    fn get_current_votes(&self, account: ManagedAddress) -> BigUint {
        self.votes(&account).get()
    }

    #[view(totalSupply)]
    #[storage_mapper("totalSupply")]
    fn total_supply(&self) -> SingleValueMapper<BigUint>;

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("balances")]
    fn balances(&self, account: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("allowances")]
    fn allowances(
        &self,
        owner: &ManagedAddress,
        spender: &ManagedAddress,
    ) -> SingleValueMapper<BigUint>;

    #[storage_mapper("delegates")]
    fn delegates(&self, account: &ManagedAddress) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("votes")]
    fn votes(&self, account: &ManagedAddress) -> SingleValueMapper<BigUint>;
}
