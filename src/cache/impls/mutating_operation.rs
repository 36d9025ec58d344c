use std::fmt;
use crate::cache::enums::mutating_operation::MutatingOperation;
use crate::cache::enums::resource_tag::ResourceTag;

impl MutatingOperation {
    /// Tags whose cached results may be stale once this operation has committed.
    pub fn invalidates(&self) -> &'static [ResourceTag] {
        match self {
            // Booking listings embed flight details.
            MutatingOperation::CreateFlight
            | MutatingOperation::UpdateFlight
            | MutatingOperation::DeleteFlight => &[ResourceTag::flights, ResourceTag::bookings, ResourceTag::reports],
            // Seat availability is shown on flight listings.
            MutatingOperation::CreateBooking
            | MutatingOperation::UpdateBooking
            | MutatingOperation::CancelBooking => &[ResourceTag::bookings, ResourceTag::flights, ResourceTag::reports],
            MutatingOperation::CreatePassenger
            | MutatingOperation::UpdatePassenger
            | MutatingOperation::DeletePassenger => &[ResourceTag::passengers, ResourceTag::bookings],
            MutatingOperation::CreateIncident
            | MutatingOperation::UpdateIncident
            | MutatingOperation::ResolveIncident => &[ResourceTag::security, ResourceTag::reports],
            MutatingOperation::CreateUser
            | MutatingOperation::UpdateUser
            | MutatingOperation::AssignRole => &[ResourceTag::users],
        }
    }
}

impl fmt::Display for MutatingOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
