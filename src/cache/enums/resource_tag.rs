use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Resource kind a cached query result belongs to.
///
/// The tag is the first segment of every cache key, so invalidating a tag
/// removes exactly the results of that resource kind.
#[allow(non_camel_case_types)]
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum)]
pub enum ResourceTag {
    flights,
    bookings,
    passengers,
    security,
    reports,
    audit,
    users,
}
