use std::time::Duration;

use ureq::Agent;

use crate::error::ReportError;
use crate::models::{Credentials, Utilization};

pub const STATS_ENDPOINT: &str =
    "https://stats.wasabisys.com/v1/standalone/utilizations?latest=true";

/// Builds the agent used for the stats request. Status codes are inspected
/// by the caller, so they are not turned into errors here.
pub fn build_agent(timeout: Option<Duration>) -> Agent {
    let config = Agent::config_builder()
        .timeout_global(timeout)
        .http_status_as_error(false)
        .build();
    Agent::new_with_config(config)
}

/// A successful stats response: the status line and the latest record.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsResponse {
    pub status: u16,
    pub utilization: Utilization,
}

/// Issues one GET against `url` and returns the latest utilization record.
///
/// Anything but a 200 fails before the body is read. The body is read
/// without a size cap.
pub fn fetch_utilization(
    agent: &Agent,
    url: &str,
    credentials: &Credentials,
) -> Result<StatsResponse, ReportError> {
    let mut response = agent
        .get(url)
        .header("Authorization", credentials.authorization())
        .call()
        .map_err(ReportError::Request)?;

    let status = response.status().as_u16();
    if status != 200 {
        return Err(ReportError::UnexpectedStatus(status));
    }

    let body = response
        .body_mut()
        .with_config()
        .limit(u64::MAX)
        .read_to_vec()
        .map_err(ReportError::BodyRead)?;
    Ok(StatsResponse {
        status,
        utilization: Utilization::from_body(&body)?,
    })
}
