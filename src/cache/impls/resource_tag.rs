use std::fmt;
use std::str::FromStr;
use crate::cache::enums::resource_tag::ResourceTag;

impl ResourceTag {
    pub const ALL: [ResourceTag; 7] = [
        ResourceTag::flights,
        ResourceTag::bookings,
        ResourceTag::passengers,
        ResourceTag::security,
        ResourceTag::reports,
        ResourceTag::audit,
        ResourceTag::users,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceTag::flights => "flights",
            ResourceTag::bookings => "bookings",
            ResourceTag::passengers => "passengers",
            ResourceTag::security => "security",
            ResourceTag::reports => "reports",
            ResourceTag::audit => "audit",
            ResourceTag::users => "users",
        }
    }
}

impl fmt::Display for ResourceTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceTag {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        ResourceTag::ALL
            .into_iter()
            .find(|tag| tag.as_str() == value)
            .ok_or_else(|| format!("unknown resource tag '{value}'"))
    }
}
