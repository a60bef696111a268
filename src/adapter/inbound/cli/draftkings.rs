//! Handler for the `draftkings` command.

use tokio::signal;
use tracing::info;

use crate::adapter::inbound::cli::command::DraftkingsArgs;
use crate::adapter::inbound::cli::output;
use crate::adapter::outbound::csv::CsvFileSink;
use crate::adapter::outbound::draftkings::DraftKingsClient;
use crate::application::{CycleOutcome, PollCycle, PollMode, RecordBuilder};
use crate::error::Result;
use crate::infrastructure::config::Config;

/// Execute the draftkings command.
///
/// Cycle failures are reported and never turn into an error return; only
/// startup problems do.
pub async fn execute(args: &DraftkingsArgs, mut config: Config) -> Result<()> {
    if let Some(level) = &args.log_level {
        config.logging.level.clone_from(level);
    }
    if args.json_logs || output::is_json() {
        config.logging.format = "json".into();
    }
    config.init_logging();

    let feed = DraftKingsClient::from_config(&config.feed);
    let sink = CsvFileSink::new(&config.output.path);
    let builder = RecordBuilder::new(&config.output.sportsbook, &config.output.sport);

    let mode = if args.poll {
        PollMode::Every(config.poll.interval())
    } else {
        PollMode::Once
    };
    print_startup(&config, mode);
    info!(url = %feed.url(), poll = args.poll, "oddsline starting");

    let mut cycle = PollCycle::new(feed, sink, builder);
    let mut emitted = false;
    tokio::select! {
        () = cycle.run(mode, |outcome| {
            emitted = outcome.is_emitted();
            report(outcome, args.poll);
        }) => {}
        _ = signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
    }

    if !args.poll && emitted {
        output::success(&format!(
            "Pulled the odds for {}, see {} for the results",
            config.output.sportsbook,
            config.output.path.display()
        ));
    }
    info!("oddsline stopped");
    Ok(())
}

fn print_startup(config: &Config, mode: PollMode) {
    output::header(env!("CARGO_PKG_VERSION"));
    output::field("Feed", &config.feed.url);
    output::field("Output", config.output.path.display());
    match mode {
        PollMode::Once => output::field("Mode", "single pass"),
        PollMode::Every(interval) => {
            output::field("Mode", format!("poll every {}s", interval.as_secs()));
        }
    }
}

fn report(outcome: &CycleOutcome, polling: bool) {
    match outcome {
        CycleOutcome::Emitted {
            records,
            flagged,
            path,
        } => {
            if polling {
                output::success(&format!("Updated {} ({records} rows)", path.display()));
            }
            if *flagged > 0 {
                output::warning(&format!(
                    "{flagged} offer(s) did not have six outcomes; their market labels may be wrong"
                ));
            }
        }
        CycleOutcome::Skipped { phase, error } => {
            output::error(&format!("Cycle skipped while {phase}: {error}"));
        }
    }
}
