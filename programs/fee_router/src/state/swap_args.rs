use anchor_lang::prelude::*;

/// Direction from the trader's point of view.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum SwapSide {
    /// Pay settlement, receive collection token.
    Buy,
    /// Pay collection token, receive settlement.
    Sell,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum SwapKind {
    ExactInput,
    ExactOutput,
}
