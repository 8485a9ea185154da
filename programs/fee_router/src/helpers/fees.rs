use anchor_lang::prelude::*;

use crate::{
    constants::{FEE_DENOMINATOR, MAX_FEE},
    error::ErrorCode,
    helpers::InternalFill,
    state::{FeeExemption, SwapKind},
};

pub fn validate_fee(fee: u32) -> Result<()> {
    require!(fee <= MAX_FEE, ErrorCode::FeeExceedsCeiling);
    Ok(())
}

/// Exemption for the counterparty, then the pair fee, then the default.
pub fn resolve_fee(
    exemption: Option<&FeeExemption>,
    pair_fee: Option<u32>,
    default_fee: u32,
) -> u32 {
    exemption
        .and_then(FeeExemption::effective_fee)
        .or(pair_fee)
        .unwrap_or(default_fee)
}

/// Reads the exemption record at the trader's exemption address. An
/// address that was never initialized carries no override.
pub fn load_fee_exemption(info: &AccountInfo, trader: &Pubkey) -> Result<Option<FeeExemption>> {
    if info.owner != &crate::ID || info.data_is_empty() {
        return Ok(None);
    }
    let data = info.try_borrow_data()?;
    let mut slice: &[u8] = &data;
    let exemption = FeeExemption::try_deserialize(&mut slice)?;
    require_keys_eq!(exemption.counterparty, *trader, ErrorCode::Unauthorized);
    Ok(Some(exemption))
}

pub fn mul_fee(notional: u64, fee: u32) -> Result<u64> {
    ((notional as u128)
        .checked_mul(fee as u128)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?)
    .checked_div(FEE_DENOMINATOR as u128)
    .ok_or_else(|| error!(ErrorCode::MathOverflow))
    .map(|v| v as u64)
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FeeAsset {
    /// Burned from the pair fee vault.
    CollectionToken,
    /// Credited to the AMM beneficiary.
    Settlement,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct AmmFee {
    pub amount: u64,
    pub asset: FeeAsset,
}

/// Fee on the unspecified side of the internal leg. `None` when it rounds
/// to zero.
pub fn amm_fee_for_fill(kind: SwapKind, fill: &InternalFill, fee_rate: u32) -> Result<Option<AmmFee>> {
    let (notional, asset) = match kind {
        SwapKind::ExactInput => (fill.ctoken, FeeAsset::CollectionToken),
        SwapKind::ExactOutput => (fill.settlement, FeeAsset::Settlement),
    };
    let amount = mul_fee(notional, fee_rate)?;
    Ok((amount > 0).then_some(AmmFee { amount, asset }))
}

/// What the trader pays and receives on the internal leg, after fees.
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct InternalSettlement {
    pub trader_pays: u64,
    pub trader_receives: u64,
    pub burned: u64,
    pub credited: u64,
}

pub fn settle_fill(fill: &InternalFill, fee: Option<AmmFee>) -> Result<InternalSettlement> {
    let mut settlement = InternalSettlement {
        trader_pays: fill.settlement,
        trader_receives: fill.ctoken,
        burned: 0,
        credited: 0,
    };
    match fee {
        None => {}
        Some(AmmFee {
            amount,
            asset: FeeAsset::CollectionToken,
        }) => {
            settlement.trader_receives = settlement
                .trader_receives
                .checked_sub(amount)
                .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
            settlement.burned = amount;
        }
        Some(AmmFee {
            amount,
            asset: FeeAsset::Settlement,
        }) => {
            settlement.trader_pays = settlement
                .trader_pays
                .checked_add(amount)
                .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
            settlement.credited = amount;
        }
    }
    Ok(settlement)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_FEE;

    fn load(data: &mut [u8], owner: &Pubkey, trader: &Pubkey) -> Result<Option<FeeExemption>> {
        let key = Pubkey::new_unique();
        let mut lamports = 1_000_000u64;
        let info = AccountInfo::new(&key, false, false, &mut lamports, data, owner, false, 0);
        load_fee_exemption(&info, trader)
    }

    fn exemption_bytes(counterparty: Pubkey, fee: u32, enabled: bool) -> Vec<u8> {
        let record = FeeExemption {
            counterparty,
            fee,
            enabled,
            bump: 255,
        };
        let mut data = Vec::new();
        record.try_serialize(&mut data).unwrap();
        data
    }

    #[test]
    fn stored_exemption_outranks_lower_fees() {
        let trader = Pubkey::new_unique();
        let mut data = exemption_bytes(trader, 50_000, true);
        let loaded = load(&mut data, &crate::ID, &trader).unwrap();
        assert_eq!(resolve_fee(loaded.as_ref(), Some(500), DEFAULT_FEE), 50_000);
        assert_eq!(resolve_fee(loaded.as_ref(), None, DEFAULT_FEE), 50_000);
    }

    #[test]
    fn uninitialized_exemption_address_falls_back() {
        let trader = Pubkey::new_unique();
        let mut empty: Vec<u8> = Vec::new();
        let system = anchor_lang::solana_program::system_program::ID;
        let loaded = load(&mut empty, &system, &trader).unwrap();
        assert!(loaded.is_none());
        assert_eq!(resolve_fee(loaded.as_ref(), Some(500), DEFAULT_FEE), 500);
    }

    #[test]
    fn exemption_for_another_counterparty_is_rejected() {
        let mut data = exemption_bytes(Pubkey::new_unique(), 0, true);
        assert_eq!(
            load(&mut data, &crate::ID, &Pubkey::new_unique()).unwrap_err(),
            anchor_lang::error::Error::from(ErrorCode::Unauthorized)
        );
    }

    fn exemption(fee: u32, enabled: bool) -> FeeExemption {
        FeeExemption {
            counterparty: Pubkey::new_unique(),
            fee,
            enabled,
            bump: 255,
        }
    }

    #[test]
    fn fee_ceiling_is_inclusive() {
        assert!(validate_fee(0).is_ok());
        assert!(validate_fee(MAX_FEE).is_ok());
        assert_eq!(
            validate_fee(MAX_FEE + 1).unwrap_err(),
            anchor_lang::error::Error::from(ErrorCode::FeeExceedsCeiling)
        );
    }

    #[test]
    fn enabled_exemption_wins_even_at_zero() {
        let zero = exemption(0, true);
        assert_eq!(resolve_fee(Some(&zero), Some(5_000), DEFAULT_FEE), 0);

        let higher = exemption(50_000, true);
        assert_eq!(resolve_fee(Some(&higher), Some(5_000), DEFAULT_FEE), 50_000);
    }

    #[test]
    fn disabled_exemption_falls_back() {
        let disabled = exemption(0, false);
        assert_eq!(resolve_fee(Some(&disabled), Some(5_000), DEFAULT_FEE), 5_000);
        assert_eq!(resolve_fee(Some(&disabled), None, DEFAULT_FEE), DEFAULT_FEE);
        assert_eq!(resolve_fee(None, None, DEFAULT_FEE), DEFAULT_FEE);
    }

    #[test]
    fn fee_truncates_toward_zero() {
        assert_eq!(mul_fee(1_000_000, DEFAULT_FEE).unwrap(), 10_000);
        assert_eq!(mul_fee(99, DEFAULT_FEE).unwrap(), 0);
        assert_eq!(mul_fee(u64::MAX, MAX_FEE).unwrap(), u64::MAX);
    }

    #[test]
    fn exact_input_fee_is_burned_from_output() {
        let fill = InternalFill {
            ctoken: 1_000_000,
            settlement: 400,
        };
        let fee = amm_fee_for_fill(SwapKind::ExactInput, &fill, DEFAULT_FEE).unwrap();
        assert_eq!(
            fee,
            Some(AmmFee {
                amount: 10_000,
                asset: FeeAsset::CollectionToken
            })
        );
        let settled = settle_fill(&fill, fee).unwrap();
        assert_eq!(settled.trader_receives, 990_000);
        assert_eq!(settled.trader_pays, 400);
        assert_eq!(settled.burned, 10_000);
        assert_eq!(settled.credited, 0);
    }

    #[test]
    fn exact_output_fee_is_credited_from_input() {
        let fill = InternalFill {
            ctoken: 5,
            settlement: 200_000,
        };
        let fee = amm_fee_for_fill(SwapKind::ExactOutput, &fill, DEFAULT_FEE).unwrap();
        let settled = settle_fill(&fill, fee).unwrap();
        assert_eq!(settled.trader_pays, 202_000);
        assert_eq!(settled.trader_receives, 5);
        assert_eq!(settled.credited, 2_000);
    }

    #[test]
    fn zero_fee_routes_nothing() {
        let fill = InternalFill {
            ctoken: 10,
            settlement: 10,
        };
        assert_eq!(amm_fee_for_fill(SwapKind::ExactInput, &fill, 0).unwrap(), None);
        assert_eq!(
            settle_fill(&fill, None).unwrap(),
            InternalSettlement {
                trader_pays: 10,
                trader_receives: 10,
                burned: 0,
                credited: 0
            }
        );
    }
}
