//! Validation workflow handlers.

mod list_eligible_actors;
mod update_validation_status;

pub use list_eligible_actors::ListEligibleActorsHandler;
pub use update_validation_status::{UpdateValidationStatusCommand, UpdateValidationStatusHandler};
