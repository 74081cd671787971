use crate::types::HealthRes;

/// Health check used by the `/health` endpoint and load balancers.
#[derive(Clone, Default)]
pub struct HealthService;

impl HealthService {
    /// Reports the service as healthy.
    ///
    /// Liveness only: NEIS is not contacted, so an upstream outage does not fail the check.
    pub fn check_health() -> HealthRes {
        HealthRes {
            ok: true,
            message: "meal menu service is alive".into(),
        }
    }
}
