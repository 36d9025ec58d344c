use serde::{Deserialize, Serialize};
use crate::cache::enums::resource_tag::ResourceTag;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct QueryDescriptor {
    pub tag: ResourceTag,
    pub text: String,
}
