//! Automated check port - remote validations for `auto-*` tests.

use async_trait::async_trait;

use super::{ApiError, SessionContext};
use crate::domain::checks::{CheckOutcome, CheckRequest};

/// Port for the backend's automated check endpoints.
///
/// Implementations return `Passed`/`Failed` for a verdict. A transport or
/// backend failure is an `Err`; callers turn it into `CheckOutcome::Errored`.
#[async_trait]
pub trait AutomatedCheckService: Send + Sync {
    async fn run_check(
        &self,
        ctx: &SessionContext,
        request: &CheckRequest,
    ) -> Result<CheckOutcome, ApiError>;
}
