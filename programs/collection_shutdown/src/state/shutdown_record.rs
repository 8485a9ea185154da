use anchor_lang::prelude::*;

use crate::{
    constants::MAX_ASSET_IDS,
    error::ErrorCode,
    helpers::{claim_share, quorum_for_supply},
};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ShutdownStatus {
    Uninitiated,
    Started,
    QuorumReached,
    Executed,
}

/// Per-collection shutdown record. Votes are collection tokens held in the
/// escrow vault; `quorum_votes == 0` means no shutdown is in progress.
#[account]
#[derive(InitSpace)]
pub struct CollectionShutdown {
    pub collection_id: Pubkey,
    pub ctoken_mint: Pubkey,
    pub escrow_vault: Pubkey,
    pub shutdown_votes: u64,
    pub quorum_votes: u64,
    pub can_execute: bool,
    pub shutdown_prevented: bool,
    pub locked: bool,
    pub liquidation_pool: Option<Pubkey>,
    #[max_len(32)]
    pub pending_asset_ids: Vec<u64>,
    pub available_claim: u64,
    pub total_claimed: u64,
    pub bump: u8,
}

impl CollectionShutdown {
    pub fn is_initialized(&self) -> bool {
        self.collection_id != Pubkey::default()
    }

    /// Fills in identity fields on a freshly created record.
    pub fn initialize(&mut self, collection_id: Pubkey, ctoken_mint: Pubkey, escrow_vault: Pubkey, bump: u8) {
        if self.is_initialized() {
            return;
        }
        self.collection_id = collection_id;
        self.ctoken_mint = ctoken_mint;
        self.escrow_vault = escrow_vault;
        self.bump = bump;
    }

    pub fn status(&self) -> ShutdownStatus {
        if self.liquidation_pool.is_some() {
            ShutdownStatus::Executed
        } else if self.can_execute {
            ShutdownStatus::QuorumReached
        } else if self.quorum_votes != 0 {
            ShutdownStatus::Started
        } else {
            ShutdownStatus::Uninitiated
        }
    }

    pub fn lock(&mut self) -> Result<()> {
        require!(!self.locked, ErrorCode::Reentrancy);
        self.locked = true;
        Ok(())
    }

    pub fn unlock(&mut self) {
        self.locked = false;
    }

    pub fn set_prevented(&mut self, prevented: bool) -> Result<()> {
        if prevented {
            require!(
                self.status() == ShutdownStatus::Uninitiated,
                ErrorCode::ShutdownAlreadyStarted
            );
        }
        self.shutdown_prevented = prevented;
        Ok(())
    }

    /// Fixes the quorum for a new shutdown. Returns the quorum.
    pub fn begin(&mut self, supply: u64, threshold: u64) -> Result<u64> {
        require!(!self.shutdown_prevented, ErrorCode::ShutdownPrevented);
        require!(
            self.status() == ShutdownStatus::Uninitiated,
            ErrorCode::ShutdownAlreadyStarted
        );
        require!(supply <= threshold, ErrorCode::SupplyAboveThreshold);

        let quorum = quorum_for_supply(supply)?;
        require!(quorum > 0, ErrorCode::InsufficientSupply);
        self.quorum_votes = quorum;
        self.shutdown_votes = 0;
        self.can_execute = false;
        Ok(quorum)
    }

    /// Adds escrowed votes. Returns true when this vote reached quorum.
    pub fn record_vote(&mut self, votes: u64) -> Result<bool> {
        require!(
            self.liquidation_pool.is_none(),
            ErrorCode::ShutdownAlreadyExecuted
        );
        require!(self.quorum_votes != 0, ErrorCode::ShutdownNotStarted);
        require!(votes > 0, ErrorCode::NoVotes);

        self.shutdown_votes = self
            .shutdown_votes
            .checked_add(votes)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;

        if !self.can_execute && self.shutdown_votes >= self.quorum_votes {
            self.can_execute = true;
            return Ok(true);
        }
        Ok(false)
    }

    /// Backs out of a reached quorum once the collection has grown again.
    /// Escrowed votes stay put until each voter reclaims.
    pub fn cancel(&mut self, supply: u64, threshold: u64) -> Result<()> {
        require!(
            self.liquidation_pool.is_none(),
            ErrorCode::ShutdownAlreadyExecuted
        );
        require!(self.can_execute, ErrorCode::QuorumNotReached);
        require!(supply > threshold, ErrorCode::SupplyNotGrown);
        self.can_execute = false;
        Ok(())
    }

    pub fn reclaim(&mut self, votes: u64) -> Result<()> {
        require!(
            self.liquidation_pool.is_none(),
            ErrorCode::ShutdownAlreadyExecuted
        );
        require!(self.quorum_votes != 0, ErrorCode::ShutdownNotStarted);
        require!(!self.can_execute, ErrorCode::QuorumAlreadyReached);
        require!(votes > 0, ErrorCode::NoVotes);

        self.shutdown_votes = self
            .shutdown_votes
            .checked_sub(votes)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
        if self.shutdown_votes == 0 {
            self.quorum_votes = 0;
        }
        Ok(())
    }

    /// Records the liquidation and recomputes quorum against the supply at
    /// execution.
    pub fn begin_execution(&mut self, supply: u64, asset_ids: Vec<u64>, pool: Pubkey) -> Result<()> {
        require!(
            self.liquidation_pool.is_none(),
            ErrorCode::ShutdownAlreadyExecuted
        );
        require!(self.can_execute, ErrorCode::QuorumNotReached);
        validate_asset_ids(&asset_ids)?;

        let quorum = quorum_for_supply(supply)?;
        require!(quorum > 0, ErrorCode::InsufficientSupply);
        self.quorum_votes = quorum;
        self.pending_asset_ids = asset_ids;
        self.liquidation_pool = Some(pool);
        self.can_execute = false;
        Ok(())
    }

    /// Raises `available_claim` to the pool's running proceeds. Returns the
    /// newly attributed amount.
    pub fn accrue_proceeds(&mut self, pool_total_proceeds: u64) -> Result<u64> {
        require!(
            self.liquidation_pool.is_some(),
            ErrorCode::ShutdownNotExecuted
        );
        let received = pool_total_proceeds.saturating_sub(self.available_claim);
        self.available_claim = self
            .available_claim
            .checked_add(received)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
        Ok(received)
    }

    /// Settles a claim for `votes` burned collection tokens. Returns the
    /// payout in the settlement asset.
    pub fn settle_claim(&mut self, votes: u64, sold_through: bool) -> Result<u64> {
        require!(
            self.liquidation_pool.is_some(),
            ErrorCode::ShutdownNotExecuted
        );
        require!(sold_through, ErrorCode::LiquidationIncomplete);
        require!(votes > 0, ErrorCode::NoVotes);

        if !self.pending_asset_ids.is_empty() {
            self.pending_asset_ids.clear();
        }

        let remaining = self
            .available_claim
            .checked_sub(self.total_claimed)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
        let payout = claim_share(self.available_claim, votes, self.quorum_votes)?.min(remaining);
        self.total_claimed = self
            .total_claimed
            .checked_add(payout)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
        Ok(payout)
    }
}

pub fn validate_asset_ids(asset_ids: &[u64]) -> Result<()> {
    require!(!asset_ids.is_empty(), ErrorCode::EmptyAssetList);
    require!(asset_ids.len() <= MAX_ASSET_IDS, ErrorCode::TooManyAssets);

    let mut sorted = asset_ids.to_vec();
    sorted.sort_unstable();
    require!(
        sorted.windows(2).all(|w| w[0] != w[1]),
        ErrorCode::DuplicateAssetId
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{helpers::shutdown_threshold, state::ShutdownVoter};
    use proptest::prelude::*;
    use std::collections::HashMap;

    const UNIT: u64 = 1_000_000_000;

    fn record() -> CollectionShutdown {
        CollectionShutdown {
            collection_id: Pubkey::new_unique(),
            ctoken_mint: Pubkey::new_unique(),
            escrow_vault: Pubkey::new_unique(),
            shutdown_votes: 0,
            quorum_votes: 0,
            can_execute: false,
            shutdown_prevented: false,
            locked: false,
            liquidation_pool: None,
            pending_asset_ids: Vec::new(),
            available_claim: 0,
            total_claimed: 0,
            bump: 255,
        }
    }

    fn voter() -> ShutdownVoter {
        ShutdownVoter {
            collection_id: Pubkey::new_unique(),
            voter: Pubkey::new_unique(),
            votes: 0,
            bump: 255,
        }
    }

    fn threshold() -> u64 {
        shutdown_threshold(UNIT).unwrap()
    }

    fn err(code: ErrorCode) -> anchor_lang::error::Error {
        anchor_lang::error::Error::from(code)
    }

    #[test]
    fn start_vote_execute_claim_round_trip() {
        let mut s = record();
        let (mut a, mut b) = (voter(), voter());

        // four holders with one token each
        assert_eq!(s.begin(4 * UNIT, threshold()).unwrap(), 2 * UNIT);
        a.add(UNIT).unwrap();
        assert!(!s.record_vote(UNIT).unwrap());
        assert_eq!(s.shutdown_votes, UNIT);
        assert!(!s.can_execute);

        b.add(UNIT).unwrap();
        assert!(s.record_vote(UNIT).unwrap());
        assert_eq!(s.shutdown_votes, 2 * UNIT);
        assert_eq!(s.status(), ShutdownStatus::QuorumReached);

        let pool = Pubkey::new_unique();
        s.begin_execution(4 * UNIT, vec![1, 2, 3], pool).unwrap();
        assert_eq!(s.status(), ShutdownStatus::Executed);
        assert!(!s.can_execute);
        assert_eq!(s.quorum_votes, 2 * UNIT);

        // pool remits 2 settlement tokens as the assets sell
        assert_eq!(s.accrue_proceeds(UNIT).unwrap(), UNIT);
        assert_eq!(s.accrue_proceeds(2 * UNIT).unwrap(), UNIT);
        assert_eq!(s.accrue_proceeds(2 * UNIT).unwrap(), 0);

        let paid_a = s.settle_claim(a.take_all().unwrap(), true).unwrap();
        assert!(s.pending_asset_ids.is_empty());
        let paid_b = s.settle_claim(b.take_all().unwrap(), true).unwrap();
        assert_eq!(paid_a, UNIT / 2);
        assert_eq!(paid_b, UNIT / 2);
        assert_eq!(s.total_claimed, UNIT);

        assert_eq!(a.take_all().unwrap_err(), err(ErrorCode::NoVotes));
    }

    #[test]
    fn reclaim_before_quorum_resets_record() {
        let mut s = record();
        let mut a = voter();

        s.begin(4 * UNIT, threshold()).unwrap();
        a.add(UNIT / 2).unwrap();
        s.record_vote(UNIT / 2).unwrap();
        assert!(!s.can_execute);

        s.reclaim(a.take_all().unwrap()).unwrap();
        assert_eq!(s.shutdown_votes, 0);
        assert_eq!(a.votes, 0);
        assert!(!s.can_execute);
        assert_eq!(s.status(), ShutdownStatus::Uninitiated);

        // a fresh shutdown may start again
        assert!(s.begin(4 * UNIT, threshold()).is_ok());
    }

    #[test]
    fn partial_reclaim_keeps_shutdown_open() {
        let mut s = record();
        s.begin(4 * UNIT, threshold()).unwrap();
        s.record_vote(UNIT / 2).unwrap();
        s.record_vote(UNIT / 4).unwrap();
        s.reclaim(UNIT / 2).unwrap();
        assert_eq!(s.shutdown_votes, UNIT / 4);
        assert_eq!(s.status(), ShutdownStatus::Started);
    }

    #[test]
    fn cancel_after_quorum_requires_supply_growth() {
        let mut s = record();
        s.begin(4 * UNIT, threshold()).unwrap();
        s.record_vote(2 * UNIT).unwrap();
        assert!(s.can_execute);

        assert_eq!(
            s.cancel(4 * UNIT, threshold()).unwrap_err(),
            err(ErrorCode::SupplyNotGrown)
        );
        assert!(s.can_execute);

        s.cancel(5 * UNIT, threshold()).unwrap();
        assert!(!s.can_execute);
        assert_eq!(s.status(), ShutdownStatus::Started);
        // votes are not refunded by cancel
        assert_eq!(s.shutdown_votes, 2 * UNIT);

        assert_eq!(
            s.cancel(5 * UNIT, threshold()).unwrap_err(),
            err(ErrorCode::QuorumNotReached)
        );
    }

    #[test]
    fn reclaim_blocked_once_quorum_reached() {
        let mut s = record();
        s.begin(4 * UNIT, threshold()).unwrap();
        s.record_vote(2 * UNIT).unwrap();
        assert_eq!(
            s.reclaim(2 * UNIT).unwrap_err(),
            err(ErrorCode::QuorumAlreadyReached)
        );
    }

    #[test]
    fn start_guards() {
        let mut s = record();
        assert_eq!(
            s.begin(5 * UNIT, threshold()).unwrap_err(),
            err(ErrorCode::SupplyAboveThreshold)
        );
        assert_eq!(
            s.begin(1, threshold()).unwrap_err(),
            err(ErrorCode::InsufficientSupply)
        );

        s.set_prevented(true).unwrap();
        assert_eq!(
            s.begin(4 * UNIT, threshold()).unwrap_err(),
            err(ErrorCode::ShutdownPrevented)
        );

        s.set_prevented(false).unwrap();
        s.begin(4 * UNIT, threshold()).unwrap();
        assert_eq!(
            s.begin(4 * UNIT, threshold()).unwrap_err(),
            err(ErrorCode::ShutdownAlreadyStarted)
        );
        assert_eq!(
            s.set_prevented(true).unwrap_err(),
            err(ErrorCode::ShutdownAlreadyStarted)
        );
    }

    #[test]
    fn vote_requires_started_shutdown() {
        let mut s = record();
        assert_eq!(
            s.record_vote(UNIT).unwrap_err(),
            err(ErrorCode::ShutdownNotStarted)
        );
        s.begin(4 * UNIT, threshold()).unwrap();
        assert_eq!(s.record_vote(0).unwrap_err(), err(ErrorCode::NoVotes));
    }

    #[test]
    fn execute_guards() {
        let mut s = record();
        s.begin(4 * UNIT, threshold()).unwrap();
        let pool = Pubkey::new_unique();
        assert_eq!(
            s.begin_execution(4 * UNIT, vec![1], pool).unwrap_err(),
            err(ErrorCode::QuorumNotReached)
        );

        s.record_vote(2 * UNIT).unwrap();
        assert_eq!(
            s.begin_execution(4 * UNIT, vec![], pool).unwrap_err(),
            err(ErrorCode::EmptyAssetList)
        );
        assert_eq!(
            s.begin_execution(4 * UNIT, vec![4, 1, 4], pool).unwrap_err(),
            err(ErrorCode::DuplicateAssetId)
        );
        assert_eq!(
            s.begin_execution(4 * UNIT, (0..33).collect(), pool).unwrap_err(),
            err(ErrorCode::TooManyAssets)
        );

        s.begin_execution(4 * UNIT, vec![1], pool).unwrap();
        assert_eq!(
            s.begin_execution(4 * UNIT, vec![1], pool).unwrap_err(),
            err(ErrorCode::ShutdownAlreadyExecuted)
        );
        assert_eq!(
            s.record_vote(UNIT).unwrap_err(),
            err(ErrorCode::ShutdownAlreadyExecuted)
        );
        assert_eq!(
            s.reclaim(UNIT).unwrap_err(),
            err(ErrorCode::ShutdownAlreadyExecuted)
        );
    }

    #[test]
    fn execution_recomputes_quorum_from_late_supply() {
        let mut s = record();
        s.begin(2 * UNIT, threshold()).unwrap();
        s.record_vote(UNIT).unwrap();
        s.begin_execution(6 * UNIT, vec![9], Pubkey::new_unique())
            .unwrap();
        assert_eq!(s.quorum_votes, 3 * UNIT);
    }

    #[test]
    fn claim_waits_for_sell_through() {
        let mut s = record();
        assert_eq!(
            s.settle_claim(UNIT, true).unwrap_err(),
            err(ErrorCode::ShutdownNotExecuted)
        );

        s.begin(4 * UNIT, threshold()).unwrap();
        s.record_vote(2 * UNIT).unwrap();
        s.begin_execution(4 * UNIT, vec![1, 2], Pubkey::new_unique())
            .unwrap();
        assert_eq!(
            s.settle_claim(UNIT, false).unwrap_err(),
            err(ErrorCode::LiquidationIncomplete)
        );
        assert_eq!(s.pending_asset_ids, vec![1, 2]);
    }

    #[test]
    fn nested_lock_is_rejected() {
        let mut s = record();
        s.lock().unwrap();
        assert_eq!(s.lock().unwrap_err(), err(ErrorCode::Reentrancy));
        s.unlock();
        assert!(s.lock().is_ok());
    }

    #[test]
    fn persisted_lock_blocks_nested_entry() {
        let mut s = record();
        s.lock().unwrap();
        let mut data = Vec::new();
        s.try_serialize(&mut data).unwrap();

        // what a nested call would load from the account
        let mut nested = CollectionShutdown::try_deserialize(&mut data.as_slice()).unwrap();
        assert!(nested.locked);
        assert_eq!(nested.lock().unwrap_err(), err(ErrorCode::Reentrancy));
    }

    #[test]
    fn direct_claim_leaves_tally_untouched() {
        let mut s = record();
        let mut escrowed = voter();

        s.begin(4 * UNIT, threshold()).unwrap();
        escrowed.add(2 * UNIT).unwrap();
        s.record_vote(2 * UNIT).unwrap();
        s.begin_execution(4 * UNIT, vec![7], Pubkey::new_unique()).unwrap();
        s.accrue_proceeds(4 * UNIT).unwrap();
        let (votes, quorum) = (s.shutdown_votes, s.quorum_votes);

        // a holder who never escrowed burns one token directly
        let direct = s.settle_claim(UNIT, true).unwrap();
        assert_eq!(s.shutdown_votes, votes);
        assert_eq!(s.quorum_votes, quorum);

        let escrow_claim = s.settle_claim(escrowed.take_all().unwrap(), true).unwrap();
        assert_eq!(direct, UNIT);
        assert_eq!(escrow_claim, 2 * UNIT);
        assert_eq!(s.shutdown_votes, votes);
        assert_eq!(s.quorum_votes, quorum);
        assert_eq!(s.total_claimed, 3 * UNIT);
    }

    #[derive(Clone, Debug)]
    enum Op {
        Vote(usize, u64),
        Reclaim(usize),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0usize..4, 1u64..=UNIT).prop_map(|(v, amount)| Op::Vote(v, amount)),
            (0usize..4).prop_map(Op::Reclaim),
        ]
    }

    proptest! {
        #[test]
        fn escrow_matches_votes_and_quorum_is_monotonic(ops in prop::collection::vec(op(), 1..40)) {
            let mut s = record();
            s.begin(4 * UNIT, threshold()).unwrap();
            let mut escrow: HashMap<usize, u64> = HashMap::new();
            let mut was_reached = false;
            let mut reached_events = 0;

            for op in ops {
                match op {
                    Op::Vote(v, amount) => {
                        let before = s.shutdown_votes;
                        match s.record_vote(amount) {
                            Ok(reached) => {
                                *escrow.entry(v).or_default() += amount;
                                prop_assert!(s.shutdown_votes >= before);
                                if reached {
                                    reached_events += 1;
                                    prop_assert!(!was_reached);
                                    prop_assert!(s.shutdown_votes >= s.quorum_votes);
                                }
                            }
                            Err(_) => prop_assert_eq!(s.status(), ShutdownStatus::Uninitiated),
                        }
                    }
                    Op::Reclaim(v) => {
                        let held = escrow.get(&v).copied().unwrap_or(0);
                        if held > 0 && s.reclaim(held).is_ok() {
                            escrow.insert(v, 0);
                        }
                    }
                }
                was_reached = s.can_execute;

                let escrowed: u64 = escrow.values().sum();
                prop_assert_eq!(escrowed, s.shutdown_votes);
                prop_assert_eq!(s.can_execute, s.quorum_votes != 0 && s.shutdown_votes >= s.quorum_votes);
            }
            prop_assert!(reached_events <= 1);
        }

        #[test]
        fn claims_conserve_available_proceeds(
            votes in prop::collection::vec(1u64..=UNIT, 1..8),
            available in 0u64..=1_000_000 * UNIT,
        ) {
            let supply: u64 = votes.iter().sum();
            prop_assume!(supply >= 2);

            let mut s = record();
            s.begin(supply, supply).unwrap();
            s.record_vote(supply).unwrap();
            s.begin_execution(supply, vec![1], Pubkey::new_unique()).unwrap();
            s.accrue_proceeds(available).unwrap();

            let paid: u64 = votes
                .iter()
                .map(|v| s.settle_claim(*v, true).unwrap())
                .sum();
            prop_assert!(paid <= available);
            // at most one truncated unit per claimant
            prop_assert!(available - paid <= votes.len() as u64);
        }
    }
}
