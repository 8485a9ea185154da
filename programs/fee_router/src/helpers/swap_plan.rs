use anchor_lang::prelude::*;

use crate::{
    error::ErrorCode,
    helpers::math::{currency0_to_currency1, currency1_to_currency0, price_x64_from_sqrt},
    state::SwapKind,
};

/// Market price oriented around the collection token of a pair.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PairPrice {
    pub price_x64: u128,
    pub ctoken_is_currency0: bool,
}

impl PairPrice {
    pub fn from_sqrt_price(sqrt_price_x64: u128, ctoken_is_currency0: bool) -> Result<Self> {
        Ok(Self {
            price_x64: price_x64_from_sqrt(sqrt_price_x64)?,
            ctoken_is_currency0,
        })
    }

    pub fn settlement_for_ctoken(&self, ctoken: u64, round_up: bool) -> Result<u64> {
        if self.ctoken_is_currency0 {
            currency0_to_currency1(ctoken, self.price_x64, round_up)
        } else {
            currency1_to_currency0(ctoken, self.price_x64, round_up)
        }
    }

    pub fn ctoken_for_settlement(&self, settlement: u64, round_up: bool) -> Result<u64> {
        if self.ctoken_is_currency0 {
            currency1_to_currency0(settlement, self.price_x64, round_up)
        } else {
            currency0_to_currency1(settlement, self.price_x64, round_up)
        }
    }
}

/// Collection token sold out of fee inventory and the settlement paid for it.
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct InternalFill {
    pub ctoken: u64,
    pub settlement: u64,
}

impl InternalFill {
    pub fn is_empty(&self) -> bool {
        self.ctoken == 0
    }
}

/// Split of a buy order between fee inventory and the external market.
/// `forwarded` is denominated like the order: settlement for exact input,
/// collection token for exact output.
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct SwapPlan {
    pub internal: InternalFill,
    pub forwarded: u64,
}

impl SwapPlan {
    pub fn passthrough(amount: u64) -> Self {
        Self {
            internal: InternalFill::default(),
            forwarded: amount,
        }
    }
}

/// Plans a buy of collection token against `inventory` at `price`.
pub fn plan_buy(kind: SwapKind, amount: u64, inventory: u64, price: &PairPrice) -> Result<SwapPlan> {
    if inventory == 0 || amount == 0 {
        return Ok(SwapPlan::passthrough(amount));
    }

    match kind {
        SwapKind::ExactInput => {
            let inventory_cost = price.settlement_for_ctoken(inventory, true)?;
            if inventory_cost <= amount {
                return Ok(SwapPlan {
                    internal: InternalFill {
                        ctoken: inventory,
                        settlement: inventory_cost,
                    },
                    forwarded: amount - inventory_cost,
                });
            }

            let ctoken = price.ctoken_for_settlement(amount, false)?.min(inventory);
            if ctoken == 0 {
                return Ok(SwapPlan::passthrough(amount));
            }
            Ok(SwapPlan {
                internal: InternalFill {
                    ctoken,
                    settlement: amount,
                },
                forwarded: 0,
            })
        }
        SwapKind::ExactOutput => {
            let ctoken = amount.min(inventory);
            let settlement = price.settlement_for_ctoken(ctoken, true)?;
            let forwarded = amount
                .checked_sub(ctoken)
                .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
            Ok(SwapPlan {
                internal: InternalFill { ctoken, settlement },
                forwarded,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const ONE_X64: u128 = 1 << 64;

    fn price(sqrt_price_x64: u128, ctoken_is_currency0: bool) -> PairPrice {
        PairPrice::from_sqrt_price(sqrt_price_x64, ctoken_is_currency0).unwrap()
    }

    #[test]
    fn empty_inventory_passes_through() {
        let p = price(ONE_X64, true);
        for kind in [SwapKind::ExactInput, SwapKind::ExactOutput] {
            assert_eq!(plan_buy(kind, 500, 0, &p).unwrap(), SwapPlan::passthrough(500));
        }
    }

    #[test]
    fn exact_input_larger_than_inventory_forwards_remainder() {
        // 4 settlement per collection token
        let p = price(2 * ONE_X64, true);
        let plan = plan_buy(SwapKind::ExactInput, 1_000, 100, &p).unwrap();
        assert_eq!(plan.internal, InternalFill { ctoken: 100, settlement: 400 });
        assert_eq!(plan.forwarded, 600);
    }

    #[test]
    fn exact_input_within_inventory_settles_internally() {
        let p = price(2 * ONE_X64, true);
        let plan = plan_buy(SwapKind::ExactInput, 10, 100, &p).unwrap();
        assert_eq!(plan.internal, InternalFill { ctoken: 2, settlement: 10 });
        assert_eq!(plan.forwarded, 0);
    }

    #[test]
    fn exact_input_dust_passes_through() {
        let p = price(2 * ONE_X64, true);
        assert_eq!(
            plan_buy(SwapKind::ExactInput, 3, 100, &p).unwrap(),
            SwapPlan::passthrough(3)
        );
    }

    #[test]
    fn orientation_inverts_conversion() {
        // collection token is currency1 and currency0 trades at 4 currency1,
        // so one settlement unit buys four collection tokens.
        let p = price(2 * ONE_X64, false);
        let plan = plan_buy(SwapKind::ExactInput, 10, 1_000, &p).unwrap();
        assert_eq!(plan.internal, InternalFill { ctoken: 40, settlement: 10 });
    }

    #[test]
    fn exact_output_residual_is_forwarded_whole() {
        let p = price(2 * ONE_X64, true);
        let plan = plan_buy(SwapKind::ExactOutput, 150, 100, &p).unwrap();
        assert_eq!(plan.internal, InternalFill { ctoken: 100, settlement: 400 });
        assert_eq!(plan.forwarded, 50);
    }

    #[test]
    fn exact_output_fractional_cost_rounds_up() {
        // collection token worth a quarter settlement unit
        let p = price(2 * ONE_X64, false);
        let plan = plan_buy(SwapKind::ExactOutput, 5, 100, &p).unwrap();
        assert_eq!(plan.internal, InternalFill { ctoken: 5, settlement: 2 });
        assert_eq!(plan.forwarded, 0);
    }

    #[test]
    fn overflowing_conversion_aborts() {
        let p = PairPrice {
            price_x64: u128::MAX,
            ctoken_is_currency0: true,
        };
        assert_eq!(
            plan_buy(SwapKind::ExactOutput, u64::MAX, u64::MAX, &p).unwrap_err(),
            anchor_lang::error::Error::from(ErrorCode::MathOverflow)
        );
    }

    proptest! {
        #[test]
        fn internal_fill_never_exceeds_inventory(
            amount in 1u64..=1_000_000_000_000,
            inventory in 0u64..=1_000_000_000_000,
            sqrt_price in (1u128 << 60)..(1u128 << 68),
            ctoken_is_currency0 in any::<bool>(),
            exact_input in any::<bool>(),
        ) {
            let p = price(sqrt_price, ctoken_is_currency0);
            let kind = if exact_input { SwapKind::ExactInput } else { SwapKind::ExactOutput };
            let plan = plan_buy(kind, amount, inventory, &p).unwrap();

            prop_assert!(plan.internal.ctoken <= inventory);
            match kind {
                SwapKind::ExactInput => {
                    prop_assert_eq!(plan.internal.settlement + plan.forwarded, amount);
                }
                SwapKind::ExactOutput => {
                    prop_assert_eq!(plan.internal.ctoken + plan.forwarded, amount);
                    if !plan.internal.is_empty() {
                        prop_assert!(plan.internal.settlement > 0);
                    }
                }
            }
        }
    }
}
