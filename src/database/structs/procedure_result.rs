use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use crate::database::structs::row_set::RowSet;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ProcedureResult {
    pub rows: RowSet,
    /// Columns of the first returned row, empty when the call returned none.
    pub out_binds: Map<String, Value>,
    pub rows_affected: u64,
}
