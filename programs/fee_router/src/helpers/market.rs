use anchor_lang::prelude::*;
use anchor_lang::solana_program::{
    instruction::{AccountMeta, Instruction},
    program::invoke,
};

use crate::{error::ErrorCode, state::SwapKind};

const POOL_ACCOUNT_DISCRIMINATOR: [u8; 8] = [63, 149, 209, 12, 225, 128, 99, 9];
const SWAP_INSTRUCTION_DISCRIMINATOR: [u8; 8] = [248, 198, 158, 145, 225, 117, 135, 200];

pub const MIN_SQRT_PRICE_X64: u128 = 4_295_048_016;
pub const MAX_SQRT_PRICE_X64: u128 = 79_226_673_515_401_279_992_447_579_055;

/// Prefix of the concentrated-liquidity pool account up to the second mint.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
struct MarketPoolWire {
    config: Pubkey,
    bump: [u8; 1],
    tick_spacing: u16,
    tick_spacing_seed: [u8; 2],
    fee_rate: u16,
    protocol_fee_rate: u16,
    liquidity: u128,
    sqrt_price: u128,
    tick_current_index: i32,
    protocol_fee_owed_a: u64,
    protocol_fee_owed_b: u64,
    token_mint_a: Pubkey,
    token_vault_a: Pubkey,
    fee_growth_global_a: u128,
    token_mint_b: Pubkey,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug)]
struct MarketSwapArgsWire {
    amount: u64,
    other_amount_threshold: u64,
    sqrt_price_limit: u128,
    amount_specified_is_input: bool,
    a_to_b: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct MarketPoolState {
    pub sqrt_price_x64: u128,
    pub mint_a: Pubkey,
    pub mint_b: Pubkey,
}

pub fn read_market_pool(pool: &AccountInfo, market_program: &Pubkey) -> Result<MarketPoolState> {
    require_keys_eq!(*pool.owner, *market_program, ErrorCode::InvalidMarketAccount);

    let data = pool
        .try_borrow_data()
        .map_err(|_| error!(ErrorCode::InvalidMarketAccount))?;
    require!(
        data.len() >= POOL_ACCOUNT_DISCRIMINATOR.len(),
        ErrorCode::InvalidMarketAccount
    );
    require!(
        data[..8] == POOL_ACCOUNT_DISCRIMINATOR,
        ErrorCode::InvalidMarketAccount
    );

    let mut payload = &data[8..];
    let wire = MarketPoolWire::deserialize(&mut payload)
        .map_err(|_| error!(ErrorCode::InvalidMarketAccount))?;
    require!(wire.sqrt_price > 0, ErrorCode::InvalidMarketPrice);

    Ok(MarketPoolState {
        sqrt_price_x64: wire.sqrt_price,
        mint_a: wire.token_mint_a,
        mint_b: wire.token_mint_b,
    })
}

/// Order forwarded to the market for the part of a trade not filled
/// internally.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct MarketOrder {
    pub kind: SwapKind,
    pub amount: u64,
    pub other_amount_threshold: u64,
    pub sqrt_price_limit: u128,
    pub a_to_b: bool,
}

impl MarketOrder {
    /// Zero limit means no price limit in the trade direction.
    pub fn effective_price_limit(&self) -> u128 {
        match (self.sqrt_price_limit, self.a_to_b) {
            (0, true) => MIN_SQRT_PRICE_X64,
            (0, false) => MAX_SQRT_PRICE_X64,
            (limit, _) => limit,
        }
    }

    fn instruction_data(&self) -> Result<Vec<u8>> {
        let args = MarketSwapArgsWire {
            amount: self.amount,
            other_amount_threshold: self.other_amount_threshold,
            sqrt_price_limit: self.effective_price_limit(),
            amount_specified_is_input: self.kind == SwapKind::ExactInput,
            a_to_b: self.a_to_b,
        };
        let mut data = SWAP_INSTRUCTION_DISCRIMINATOR.to_vec();
        args.serialize(&mut data)
            .map_err(|_| error!(ErrorCode::MarketCallFailed))?;
        Ok(data)
    }
}

/// Invokes the market swap with the caller-supplied account list. The
/// trader signs the outer transaction, so its signature carries through.
pub fn forward_to_market<'info>(
    market_program: &AccountInfo<'info>,
    market_pool: &Pubkey,
    accounts: &[AccountInfo<'info>],
    order: &MarketOrder,
) -> Result<()> {
    require!(
        accounts.iter().any(|a| a.key == market_pool),
        ErrorCode::InvalidMarketAccount
    );

    let metas = accounts
        .iter()
        .map(|a| {
            if a.is_writable {
                AccountMeta::new(*a.key, a.is_signer)
            } else {
                AccountMeta::new_readonly(*a.key, a.is_signer)
            }
        })
        .collect();
    let ix = Instruction {
        program_id: *market_program.key,
        accounts: metas,
        data: order.instruction_data()?,
    };

    let mut infos = accounts.to_vec();
    infos.push(market_program.clone());
    invoke(&ix, &infos).map_err(|err| {
        msg!("market swap failed: {:?}", err);
        error!(ErrorCode::MarketCallFailed)
    })
}

/// Checks the market honoured the forwarded order against the trader's
/// observed balance changes.
pub fn reconcile_market_fill(order: &MarketOrder, input_spent: u64, output_received: u64) -> Result<()> {
    match order.kind {
        SwapKind::ExactInput => require!(
            input_spent <= order.amount,
            ErrorCode::MarketSettlementMismatch
        ),
        SwapKind::ExactOutput => require!(
            output_received >= order.amount,
            ErrorCode::MarketSettlementMismatch
        ),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool_bytes(sqrt_price: u128, mint_a: Pubkey, mint_b: Pubkey) -> Vec<u8> {
        let wire = MarketPoolWire {
            config: Pubkey::new_unique(),
            bump: [254],
            tick_spacing: 64,
            tick_spacing_seed: 64u16.to_le_bytes(),
            fee_rate: 3_000,
            protocol_fee_rate: 300,
            liquidity: 1_000_000,
            sqrt_price,
            tick_current_index: 0,
            protocol_fee_owed_a: 0,
            protocol_fee_owed_b: 0,
            token_mint_a: mint_a,
            token_vault_a: Pubkey::new_unique(),
            fee_growth_global_a: 0,
            token_mint_b: mint_b,
        };
        let mut data = POOL_ACCOUNT_DISCRIMINATOR.to_vec();
        wire.serialize(&mut data).unwrap();
        // trailing fields the adapter does not read
        data.extend_from_slice(&[0u8; 64]);
        data
    }

    fn read(data: &mut [u8], owner: &Pubkey, market_program: &Pubkey) -> Result<MarketPoolState> {
        let key = Pubkey::new_unique();
        let mut lamports = 0u64;
        let info = AccountInfo::new(&key, false, false, &mut lamports, data, owner, false, 0);
        read_market_pool(&info, market_program)
    }

    #[test]
    fn reads_price_and_mints() {
        let program = Pubkey::new_unique();
        let (mint_a, mint_b) = (Pubkey::new_unique(), Pubkey::new_unique());
        let mut data = pool_bytes(1 << 64, mint_a, mint_b);
        let state = read(&mut data, &program, &program).unwrap();
        assert_eq!(
            state,
            MarketPoolState {
                sqrt_price_x64: 1 << 64,
                mint_a,
                mint_b
            }
        );
    }

    #[test]
    fn rejects_foreign_owner_and_bad_discriminator() {
        let program = Pubkey::new_unique();
        let mut data = pool_bytes(1 << 64, Pubkey::new_unique(), Pubkey::new_unique());
        assert_eq!(
            read(&mut data, &Pubkey::new_unique(), &program).unwrap_err(),
            anchor_lang::error::Error::from(ErrorCode::InvalidMarketAccount)
        );

        data[0] ^= 0xff;
        assert_eq!(
            read(&mut data, &program, &program).unwrap_err(),
            anchor_lang::error::Error::from(ErrorCode::InvalidMarketAccount)
        );
    }

    #[test]
    fn rejects_zero_price() {
        let program = Pubkey::new_unique();
        let mut data = pool_bytes(0, Pubkey::new_unique(), Pubkey::new_unique());
        assert_eq!(
            read(&mut data, &program, &program).unwrap_err(),
            anchor_lang::error::Error::from(ErrorCode::InvalidMarketPrice)
        );
    }

    #[test]
    fn zero_limit_defaults_by_direction() {
        let mut order = MarketOrder {
            kind: SwapKind::ExactInput,
            amount: 10,
            other_amount_threshold: 0,
            sqrt_price_limit: 0,
            a_to_b: true,
        };
        assert_eq!(order.effective_price_limit(), MIN_SQRT_PRICE_X64);
        order.a_to_b = false;
        assert_eq!(order.effective_price_limit(), MAX_SQRT_PRICE_X64);
        order.sqrt_price_limit = 77;
        assert_eq!(order.effective_price_limit(), 77);
    }

    #[test]
    fn swap_data_layout() {
        let order = MarketOrder {
            kind: SwapKind::ExactOutput,
            amount: 5,
            other_amount_threshold: 9,
            sqrt_price_limit: 0,
            a_to_b: false,
        };
        let data = order.instruction_data().unwrap();
        assert_eq!(data.len(), 8 + 8 + 8 + 16 + 1 + 1);
        assert_eq!(data[..8], SWAP_INSTRUCTION_DISCRIMINATOR);
        assert_eq!(data[8..16], 5u64.to_le_bytes());
        assert_eq!(data[40], 0);
        assert_eq!(data[41], 0);
    }

    #[test]
    fn reconcile_bounds_each_kind() {
        let exact_in = MarketOrder {
            kind: SwapKind::ExactInput,
            amount: 100,
            other_amount_threshold: 0,
            sqrt_price_limit: 0,
            a_to_b: true,
        };
        assert!(reconcile_market_fill(&exact_in, 100, 1).is_ok());
        assert_eq!(
            reconcile_market_fill(&exact_in, 101, 1).unwrap_err(),
            anchor_lang::error::Error::from(ErrorCode::MarketSettlementMismatch)
        );

        let exact_out = MarketOrder {
            kind: SwapKind::ExactOutput,
            ..exact_in
        };
        assert!(reconcile_market_fill(&exact_out, 7, 100).is_ok());
        assert_eq!(
            reconcile_market_fill(&exact_out, 7, 99).unwrap_err(),
            anchor_lang::error::Error::from(ErrorCode::MarketSettlementMismatch)
        );
    }
}
