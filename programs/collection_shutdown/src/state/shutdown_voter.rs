use anchor_lang::prelude::*;

use crate::error::ErrorCode;

/// Tokens a voter has escrowed towards a collection's shutdown.
#[account]
#[derive(InitSpace)]
pub struct ShutdownVoter {
    pub collection_id: Pubkey,
    pub voter: Pubkey,
    pub votes: u64,
    pub bump: u8,
}

impl ShutdownVoter {
    pub fn add(&mut self, votes: u64) -> Result<()> {
        self.votes = self
            .votes
            .checked_add(votes)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
        Ok(())
    }

    pub fn take_all(&mut self) -> Result<u64> {
        let votes = self.votes;
        require!(votes > 0, ErrorCode::NoVotes);
        self.votes = 0;
        Ok(votes)
    }
}
