// ============================================================
// Error messages shared by the proposal and factory contracts
// ============================================================

// ── Authorization ──

pub const ERR_ONLY_AUTHOR: &str = "only author can terminate";
pub const ERR_ONLY_TIMELOCK: &str = "only timelock";

// ── Stake ──

pub const ERR_INSUFFICIENT_STAKE: &str = "insufficient stake";

// ── Lifecycle ──

pub const ERR_TERMINATED: &str = "proposal has been terminated";
pub const ERR_ALREADY_TERMINATED: &str = "proposal has been already terminated";
pub const ERR_ALREADY_PROPOSED: &str = "gov proposal already exists";
pub const ERR_ALREADY_VOTED: &str = "already voted";
pub const ERR_NO_GOV_PROPOSAL: &str = "gov proposal has not been created yet";
pub const ERR_GOV_PROPOSAL_NOT_ACTIVE: &str = "gov proposal is not active";

// ── Governor ──

pub const ERR_BELOW_PROPOSAL_THRESHOLD: &str = "proposer votes below proposal threshold";

// ── Payload ──

pub const ERR_INVALID_ACTIONS: &str = "invalid proposal actions";
