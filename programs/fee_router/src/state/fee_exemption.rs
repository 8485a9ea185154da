use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace, Debug)]
pub struct FeeExemption {
    pub counterparty: Pubkey,
    pub fee: u32,
    pub enabled: bool,
    pub bump: u8,
}

impl FeeExemption {
    /// The overriding fee, if the exemption is live. A zero fee is a valid
    /// override and is distinct from no override at all.
    pub fn effective_fee(&self) -> Option<u32> {
        self.enabled.then_some(self.fee)
    }
}
