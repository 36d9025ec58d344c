use crate::cache::enums::resource_tag::ResourceTag;
use crate::cache::structs::query_descriptor::QueryDescriptor;

impl QueryDescriptor {
    pub fn new(tag: ResourceTag, text: &str) -> QueryDescriptor {
        QueryDescriptor { tag, text: text.to_string() }
    }

    /// Descriptor for tag-level listings cached without statement text, e.g. `("bookings", {})`.
    pub fn for_tag(tag: ResourceTag) -> QueryDescriptor {
        QueryDescriptor { tag, text: tag.as_str().to_string() }
    }
}
