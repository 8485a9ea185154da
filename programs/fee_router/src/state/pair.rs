use anchor_lang::prelude::*;

use crate::{error::ErrorCode, helpers::InternalFill};

/// Undistributed fees for a pair, indexed by canonical currency order.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Default, InitSpace, PartialEq, Eq, Debug)]
pub struct ClaimableFees {
    pub amount0: u64,
    pub amount1: u64,
}

#[account]
#[derive(InitSpace)]
pub struct Pair {
    pub collection_id: Pubkey,
    pub ctoken_mint: Pubkey,
    pub settlement_mint: Pubkey,
    pub currency0: Pubkey,
    pub currency1: Pubkey,
    pub ctoken_is_currency0: bool,
    pub market_pool: Pubkey,
    pub fee: Option<u32>,
    pub claimable: ClaimableFees,
    pub ctoken_fee_vault: Pubkey,
    pub locked: bool,
    pub fees_taken: u64,
    pub fees_burned: u64,
    pub bump: u8,
}

/// Orders two mints the way the market keys its pools.
pub fn canonical_order(a: Pubkey, b: Pubkey) -> (Pubkey, Pubkey) {
    if a.to_bytes() <= b.to_bytes() {
        (a, b)
    } else {
        (b, a)
    }
}

impl Pair {
    pub fn lock(&mut self) -> Result<()> {
        require!(!self.locked, ErrorCode::Reentrancy);
        self.locked = true;
        Ok(())
    }

    pub fn unlock(&mut self) {
        self.locked = false;
    }

    pub fn ctoken_inventory(&self) -> u64 {
        if self.ctoken_is_currency0 {
            self.claimable.amount0
        } else {
            self.claimable.amount1
        }
    }

    pub fn settlement_claimable(&self) -> u64 {
        if self.ctoken_is_currency0 {
            self.claimable.amount1
        } else {
            self.claimable.amount0
        }
    }

    /// Market direction when the trader pays settlement for collection token.
    pub fn buy_is_a_to_b(&self) -> bool {
        !self.ctoken_is_currency0
    }

    pub fn deposit(&mut self, ctoken: u64, settlement: u64) -> Result<()> {
        let (ctoken_side, settlement_side) = self.sides_mut();
        *ctoken_side = ctoken_side
            .checked_add(ctoken)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
        *settlement_side = settlement_side
            .checked_add(settlement)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
        Ok(())
    }

    /// Debits the sold inventory and credits the settlement it was sold for.
    pub fn apply_internal_fill(&mut self, fill: &InternalFill) -> Result<()> {
        let (ctoken_side, settlement_side) = self.sides_mut();
        *ctoken_side = ctoken_side
            .checked_sub(fill.ctoken)
            .ok_or_else(|| error!(ErrorCode::InsufficientInventory))?;
        *settlement_side = settlement_side
            .checked_add(fill.settlement)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
        Ok(())
    }

    pub fn drain_settlement(&mut self) -> Result<u64> {
        let (_, settlement_side) = self.sides_mut();
        let amount = *settlement_side;
        require!(amount > 0, ErrorCode::NothingToDistribute);
        *settlement_side = 0;
        Ok(amount)
    }

    fn sides_mut(&mut self) -> (&mut u64, &mut u64) {
        if self.ctoken_is_currency0 {
            (&mut self.claimable.amount0, &mut self.claimable.amount1)
        } else {
            (&mut self.claimable.amount1, &mut self.claimable.amount0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(ctoken_is_currency0: bool) -> Pair {
        Pair {
            collection_id: Pubkey::new_unique(),
            ctoken_mint: Pubkey::new_unique(),
            settlement_mint: Pubkey::new_unique(),
            currency0: Pubkey::new_unique(),
            currency1: Pubkey::new_unique(),
            ctoken_is_currency0,
            market_pool: Pubkey::new_unique(),
            fee: None,
            claimable: ClaimableFees::default(),
            ctoken_fee_vault: Pubkey::new_unique(),
            locked: false,
            fees_taken: 0,
            fees_burned: 0,
            bump: 255,
        }
    }

    #[test]
    fn canonical_order_is_symmetric() {
        let a = Pubkey::new_unique();
        let b = Pubkey::new_unique();
        assert_eq!(canonical_order(a, b), canonical_order(b, a));
        let (lo, hi) = canonical_order(a, b);
        assert!(lo.to_bytes() <= hi.to_bytes());
    }

    #[test]
    fn ledger_sides_follow_orientation() {
        for ctoken_is_currency0 in [true, false] {
            let mut p = pair(ctoken_is_currency0);
            p.deposit(100, 7).unwrap();
            assert_eq!(p.ctoken_inventory(), 100);
            assert_eq!(p.settlement_claimable(), 7);
            if ctoken_is_currency0 {
                assert_eq!(p.claimable, ClaimableFees { amount0: 100, amount1: 7 });
            } else {
                assert_eq!(p.claimable, ClaimableFees { amount0: 7, amount1: 100 });
            }
        }
    }

    #[test]
    fn internal_fill_moves_value_between_sides() {
        let mut p = pair(false);
        p.deposit(100, 0).unwrap();
        p.apply_internal_fill(&InternalFill { ctoken: 60, settlement: 30 })
            .unwrap();
        assert_eq!(p.ctoken_inventory(), 40);
        assert_eq!(p.settlement_claimable(), 30);

        assert_eq!(
            p.apply_internal_fill(&InternalFill { ctoken: 41, settlement: 1 })
                .unwrap_err(),
            anchor_lang::error::Error::from(ErrorCode::InsufficientInventory)
        );
    }

    #[test]
    fn drain_empties_settlement_side_only() {
        let mut p = pair(true);
        p.deposit(5, 9).unwrap();
        assert_eq!(p.drain_settlement().unwrap(), 9);
        assert_eq!(p.ctoken_inventory(), 5);
        assert_eq!(
            p.drain_settlement().unwrap_err(),
            anchor_lang::error::Error::from(ErrorCode::NothingToDistribute)
        );
    }

    #[test]
    fn nested_lock_is_rejected() {
        let mut p = pair(true);
        p.lock().unwrap();
        assert_eq!(
            p.lock().unwrap_err(),
            anchor_lang::error::Error::from(ErrorCode::Reentrancy)
        );
        p.unlock();
        assert!(p.lock().is_ok());
    }
}
