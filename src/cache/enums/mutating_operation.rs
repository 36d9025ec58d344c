use serde::{Deserialize, Serialize};

/// Every mutating call the controllers issue against the primary.
///
/// `MutatingOperation::invalidates()` is an exhaustive match, so adding a
/// variant without deciding which cached results it affects does not compile.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MutatingOperation {
    CreateFlight,
    UpdateFlight,
    DeleteFlight,
    CreateBooking,
    UpdateBooking,
    CancelBooking,
    CreatePassenger,
    UpdatePassenger,
    DeletePassenger,
    CreateIncident,
    UpdateIncident,
    ResolveIncident,
    CreateUser,
    UpdateUser,
    AssignRole,
}
