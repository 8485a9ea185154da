use anchor_lang::prelude::*;

use crate::{error::ErrorCode, events::LiquidationProceedsReceived, state::CollectionShutdown};

/// Attributes any new pool sales to the collection's claimable proceeds.
pub fn accrue_pool_proceeds(
    record: &mut CollectionShutdown,
    pool_key: Pubkey,
    pool: &liquidation_pool::LiquidationPool,
) -> Result<u64> {
    require!(
        record.liquidation_pool.is_some(),
        ErrorCode::ShutdownNotExecuted
    );
    require!(
        record.liquidation_pool == Some(pool_key) && pool.collection_id == record.collection_id,
        ErrorCode::PoolMismatch
    );

    let received = record.accrue_proceeds(pool.total_proceeds)?;
    if received > 0 {
        emit!(LiquidationProceedsReceived {
            collection_id: record.collection_id,
            pool: pool_key,
            amount: received,
        });
    }
    Ok(received)
}
