//! Value types of the AMM domain.
//!
//! Quantities, identifiers and parameters are all newtypes: an [`Amount`]
//! of an asset cannot be confused with a number of [`Shares`], nor an
//! [`AssetId`] with an [`AccountId`].

mod account_id;
mod amount;
mod asset_id;
mod basis_points;
mod fee_tier;
mod pair_key;
mod shares;
mod timestamp;

pub use account_id::AccountId;
pub use amount::Amount;
pub use asset_id::AssetId;
pub use basis_points::{BasisPoints, BPS_DENOMINATOR};
pub use fee_tier::FeeTier;
pub use pair_key::{PairKey, ResolvedPair, PAIR_KEY_DOMAIN};
pub use shares::Shares;
pub use timestamp::Timestamp;
