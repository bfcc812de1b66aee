//! Health check endpoint for liveness probes.

/// Liveness probe, returns OK whenever the process is running.
pub async fn live() -> &'static str {
    "OK"
}
