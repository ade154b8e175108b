pub mod config;
pub mod consultants;
pub mod events;
pub mod me;
pub mod submissions;
pub mod views;

use skillboard_core::BoardError;
use std::collections::BTreeSet;
use std::str::FromStr;

/// Parse a comma-separated query value (`a,b,c`) into a facet set. Blank
/// items are skipped; any unknown item fails the whole value.
pub(crate) fn parse_csv<T>(value: Option<&str>) -> Result<BTreeSet<T>, BoardError>
where
    T: FromStr<Err = BoardError> + Ord,
{
    value
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(T::from_str)
        .collect()
}
