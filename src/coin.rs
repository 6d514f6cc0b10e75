use cosmwasm_std::{Coin, Uint128};

use crate::data::Fund;
use crate::error::SwapError;

/// Parses a base-unit amount. Only plain ASCII digits are accepted: no sign,
/// whitespace, fraction or exponent.
pub fn parse_base_units(raw: &str) -> Option<Uint128> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse::<u128>().ok().map(Uint128::new)
}

/// Converts quote funds to coins, keeping order and duplicate denoms.
/// Stops at the first entry that is not a valid amount.
pub fn coins_from_funds(funds: &[Fund]) -> Result<Vec<Coin>, SwapError> {
    funds
        .iter()
        .map(|fund| {
            parse_base_units(&fund.amount)
                .map(|amount| Coin { denom: fund.denom.clone(), amount })
                .ok_or_else(|| SwapError::InvalidAmount {
                    denom: fund.denom.clone(),
                    raw: fund.amount.clone(),
                })
        })
        .collect()
}
