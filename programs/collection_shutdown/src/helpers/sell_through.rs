use anchor_lang::prelude::*;

use crate::error::ErrorCode;

pub fn load_asset_record(info: &AccountInfo) -> Result<collection_registry::AssetRecord> {
    require_keys_eq!(
        *info.owner,
        collection_registry::ID,
        ErrorCode::MissingAssetRecord
    );
    let data = info
        .try_borrow_data()
        .map_err(|_| error!(ErrorCode::MissingAssetRecord))?;
    let mut slice: &[u8] = &data;
    collection_registry::AssetRecord::try_deserialize(&mut slice)
}

/// Finds the registry record for `token_id` among `accounts`.
pub fn find_asset_record<'a, 'info>(
    accounts: &'a [AccountInfo<'info>],
    collection_id: &Pubkey,
    token_id: u64,
) -> Result<&'a AccountInfo<'info>> {
    accounts
        .iter()
        .find(|info| {
            load_asset_record(info).is_ok_and(|record| {
                record.collection_id == *collection_id && record.token_id == token_id
            })
        })
        .ok_or_else(|| error!(ErrorCode::MissingAssetRecord))
}

/// Liquidation has sold through once the pool holds none of the assets it
/// was given. `holder_of` resolves the current holder of a token id.
pub fn sell_through_complete<F>(pending: &[u64], pool: &Pubkey, mut holder_of: F) -> Result<bool>
where
    F: FnMut(u64) -> Result<Pubkey>,
{
    for token_id in pending {
        if holder_of(*token_id)? == *pool {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Scans the pending assets against records passed as remaining accounts.
pub fn liquidation_sold_through(
    accounts: &[AccountInfo],
    collection_id: &Pubkey,
    pending: &[u64],
    pool: &Pubkey,
) -> Result<bool> {
    let holders: Vec<(u64, Pubkey)> = accounts
        .iter()
        .filter_map(|info| load_asset_record(info).ok())
        .filter(|record| record.collection_id == *collection_id)
        .map(|record| (record.token_id, record.holder))
        .collect();

    sell_through_complete(pending, pool, |token_id| {
        holders
            .iter()
            .find(|(id, _)| *id == token_id)
            .map(|(_, holder)| *holder)
            .ok_or_else(|| error!(ErrorCode::MissingAssetRecord))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn empty_set_is_complete() {
        let pool = Pubkey::new_unique();
        assert!(sell_through_complete(&[], &pool, |_| Ok(pool)).unwrap());
    }

    #[test]
    fn any_asset_left_in_pool_blocks() {
        let pool = Pubkey::new_unique();
        let buyer = Pubkey::new_unique();
        let mut holders = HashMap::from([(1u64, buyer), (2, pool), (3, buyer)]);

        let lookup = |h: &HashMap<u64, Pubkey>| {
            let h = h.clone();
            move |id: u64| h.get(&id).copied().ok_or_else(|| error!(ErrorCode::MissingAssetRecord))
        };
        assert!(!sell_through_complete(&[1, 2, 3], &pool, lookup(&holders)).unwrap());

        holders.insert(2, buyer);
        assert!(sell_through_complete(&[1, 2, 3], &pool, lookup(&holders)).unwrap());
    }

    #[test]
    fn missing_record_is_an_error() {
        let pool = Pubkey::new_unique();
        assert_eq!(
            sell_through_complete(&[7], &pool, |_| Err(error!(ErrorCode::MissingAssetRecord)))
                .unwrap_err(),
            anchor_lang::error::Error::from(ErrorCode::MissingAssetRecord)
        );
    }
}
