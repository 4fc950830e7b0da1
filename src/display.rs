#[cfg(feature = "colors")]
use owo_colors::OwoColorize;

// Provide a no-op color shim when "colors" feature is disabled
#[cfg(not(feature = "colors"))]
pub mod color_shim {
    use std::fmt::{self, Display, Formatter};

    #[derive(Clone)]
    pub struct Plain(pub String);

    impl Display for Plain {
        fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
            f.write_str(&self.0)
        }
    }

    pub trait ColorizeShim {
        fn as_str(&self) -> &str;

        fn bright_black(&self) -> Plain {
            Plain(self.as_str().to_string())
        }
        fn bright_cyan(&self) -> Plain {
            Plain(self.as_str().to_string())
        }
        fn bold(&self) -> Plain {
            Plain(self.as_str().to_string())
        }
        fn dimmed(&self) -> Plain {
            Plain(self.as_str().to_string())
        }
    }

    impl ColorizeShim for &str {
        fn as_str(&self) -> &str {
            self
        }
    }
    impl ColorizeShim for String {
        fn as_str(&self) -> &str {
            self.as_str()
        }
    }
    impl ColorizeShim for Plain {
        fn as_str(&self) -> &str {
            &self.0
        }
    }
}

#[cfg(not(feature = "colors"))]
use color_shim::ColorizeShim as OwoColorize;

use crate::error::ReportError;
use crate::models::{Credentials, UsageSummary};
use crate::stats_api::StatsResponse;
use crate::utils::{format_tib, mask_key};

/// Single-line JSON for the summary, keys in `active`, `deleted`, `objects` order.
pub fn build_json_output(summary: &UsageSummary) -> Result<String, ReportError> {
    serde_json::to_string(summary).map_err(ReportError::OutputSerialization)
}

pub fn print_json_output(summary: &UsageSummary) -> Result<(), ReportError> {
    let json = build_json_output(summary)?;
    println!("{json}");
    Ok(())
}

/// Lines of the debug block. The secret key never appears; the access key
/// is masked.
pub fn build_debug_lines(
    endpoint: &str,
    credentials: &Credentials,
    timeout_secs: Option<u64>,
    response: &StatsResponse,
) -> Vec<String> {
    let utilization = &response.utilization;
    let r = &utilization.record;
    vec![
        "=== Debug Information ===".bright_black().to_string(),
        format!("Endpoint: {}", endpoint.bright_cyan()),
        format!(
            "Access key: {} (timeout: {})",
            mask_key(credentials.access_key()),
            timeout_secs
                .map(|s| format!("{s}s"))
                .unwrap_or_else(|| "none".to_string())
        ),
        format!("Status: {}", response.status),
        format!(
            "Records: {} returned, using the first",
            utilization.record_count
        ),
        format!(
            "Bytes: padded={} metadata={} deleted={}",
            r.padded_storage_bytes, r.metadata_storage_bytes, r.deleted_storage_bytes
        ),
        format!(
            "TiB: active={} ({:.6}) deleted={} ({:.6})",
            format_tib(r.active_tib()).bold(),
            r.active_tib(),
            format_tib(r.deleted_tib()).bold(),
            r.deleted_tib()
        ),
        format!(
            "Objects: {} {}",
            r.billable_objects,
            "(truncated in output)".dimmed()
        ),
        "=========================".bright_black().to_string(),
    ]
}

/// Debug block on stderr; stdout stays reserved for the JSON line.
pub fn print_debug(
    endpoint: &str,
    credentials: &Credentials,
    timeout_secs: Option<u64>,
    response: &StatsResponse,
) {
    for line in build_debug_lines(endpoint, credentials, timeout_secs, response) {
        eprintln!("{line}");
    }
}
