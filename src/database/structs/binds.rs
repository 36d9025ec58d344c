use serde::{Deserialize, Serialize};
use crate::database::enums::bind_value::BindValue;

/// Positional parameters, bound in insertion order.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Binds {
    pub(crate) values: Vec<BindValue>,
}
