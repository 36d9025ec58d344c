use crate::database::structs::procedure_result::ProcedureResult;
use crate::database::structs::row_set::RowSet;

impl ProcedureResult {
    /// The first returned row doubles as the out values of the call.
    pub fn new(rows: RowSet, rows_affected: u64) -> ProcedureResult {
        let out_binds = rows.first().cloned().unwrap_or_default();
        ProcedureResult { rows, out_binds, rows_affected }
    }
}
