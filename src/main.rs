use anyhow::Result;

use wasabi_usage::cli::Args;
use wasabi_usage::display::{print_debug, print_json_output};
use wasabi_usage::models::UsageSummary;
use wasabi_usage::stats_api::{build_agent, fetch_utilization, STATS_ENDPOINT};

fn main() -> Result<()> {
    let args = Args::parse();
    let credentials = args.credentials()?;

    let agent = build_agent(args.timeout());
    let response = fetch_utilization(&agent, STATS_ENDPOINT, &credentials)?;

    let summary = UsageSummary::from(&response.utilization.record);
    print_json_output(&summary)?;

    if args.debug {
        print_debug(STATS_ENDPOINT, &credentials, args.timeout, &response);
    }
    Ok(())
}
