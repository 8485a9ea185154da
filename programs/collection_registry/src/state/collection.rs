use anchor_lang::prelude::*;

use crate::{error::ErrorCode, helpers::token_unit};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, InitSpace, PartialEq, Eq, Debug)]
pub enum CollectionStatus {
    Active,
    Retired,
}

#[account]
#[derive(InitSpace)]
pub struct Collection {
    pub collection_id: Pubkey,
    pub ctoken_mint: Pubkey,
    pub ctoken_vault: Pubkey,
    pub denomination: u8,
    pub status: CollectionStatus,
    pub asset_count: u32,
    pub listing_count: u32,
    pub protected_listing_count: u32,
    pub bump: u8,
}

impl Collection {
    pub fn is_active(&self) -> bool {
        self.status == CollectionStatus::Active
    }

    pub fn token_unit(&self) -> Result<u64> {
        token_unit(self.denomination)
    }

    pub fn has_open_listings(&self) -> bool {
        self.listing_count != 0 || self.protected_listing_count != 0
    }

    /// Moves one asset between the plain and protected listing counters.
    pub fn apply_listing_change(
        &mut self,
        was_listed: bool,
        was_protected: bool,
        listed: bool,
        protected: bool,
    ) -> Result<()> {
        if was_listed {
            let counter = self.counter_mut(was_protected);
            *counter = counter
                .checked_sub(1)
                .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
        }
        if listed {
            let counter = self.counter_mut(protected);
            *counter = counter
                .checked_add(1)
                .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
        }
        Ok(())
    }

    fn counter_mut(&mut self, protected: bool) -> &mut u32 {
        if protected {
            &mut self.protected_listing_count
        } else {
            &mut self.listing_count
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collection() -> Collection {
        Collection {
            collection_id: Pubkey::new_unique(),
            ctoken_mint: Pubkey::new_unique(),
            ctoken_vault: Pubkey::new_unique(),
            denomination: 0,
            status: CollectionStatus::Active,
            asset_count: 0,
            listing_count: 0,
            protected_listing_count: 0,
            bump: 255,
        }
    }

    #[test]
    fn listing_counters_track_both_kinds() {
        let mut c = collection();
        c.apply_listing_change(false, false, true, false).unwrap();
        c.apply_listing_change(false, false, true, true).unwrap();
        assert_eq!(c.listing_count, 1);
        assert_eq!(c.protected_listing_count, 1);
        assert!(c.has_open_listings());

        // plain listing converted into a protected one
        c.apply_listing_change(true, false, true, true).unwrap();
        assert_eq!(c.listing_count, 0);
        assert_eq!(c.protected_listing_count, 2);

        c.apply_listing_change(true, true, false, false).unwrap();
        c.apply_listing_change(true, true, false, false).unwrap();
        assert!(!c.has_open_listings());
    }

    #[test]
    fn closing_unknown_listing_underflows() {
        let mut c = collection();
        assert!(c.apply_listing_change(true, false, false, false).is_err());
    }
}
