use anchor_lang::prelude::*;

use crate::error::ErrorCode;

#[account]
#[derive(InitSpace)]
pub struct BeneficiaryFees {
    pub beneficiary: Pubkey,
    pub amount: u64,
    pub total_claimed: u64,
    pub bump: u8,
}

impl BeneficiaryFees {
    pub fn credit(&mut self, amount: u64) -> Result<()> {
        self.amount = self
            .amount
            .checked_add(amount)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
        Ok(())
    }

    /// Zeroes the balance and returns what was owed.
    pub fn take_all(&mut self) -> Result<u64> {
        let amount = self.amount;
        require!(amount > 0, ErrorCode::NothingToClaim);
        self.amount = 0;
        self.total_claimed = self
            .total_claimed
            .checked_add(amount)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
        Ok(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn claim_drains_balance() {
        let mut fees = BeneficiaryFees {
            beneficiary: Pubkey::new_unique(),
            amount: 0,
            total_claimed: 0,
            bump: 255,
        };
        assert_eq!(
            fees.take_all().unwrap_err(),
            anchor_lang::error::Error::from(ErrorCode::NothingToClaim)
        );

        fees.credit(40).unwrap();
        fees.credit(2).unwrap();
        assert_eq!(fees.take_all().unwrap(), 42);
        assert_eq!(fees.amount, 0);
        assert_eq!(fees.total_claimed, 42);
    }
}
