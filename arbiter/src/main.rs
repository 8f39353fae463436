use std::io::{self, BufRead, Write};

use clap::Parser;
use inkline::visualize_board;
use tracing::{debug, info};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use arbiter::{Engine, EngineError, Reply, Request};

#[derive(Parser)]
struct Args {
    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    let engine = Engine::new();
    info!("engine ready, reading requests from stdin");

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let reply = match serde_json::from_str::<Request>(&line) {
            Ok(request) => dispatch(&engine, request),
            Err(err) => Reply::Error {
                message: format!("Could not parse the request: {}", err),
            },
        };
        serde_json::to_writer(&mut stdout, &reply)?;
        stdout.write_all(b"\n")?;
        stdout.flush()?;
    }
    Ok(())
}

fn dispatch(engine: &Engine, request: Request) -> Reply {
    let outcome = match request {
        Request::StartMatch { room } => engine.start_match(&room).map(|id| Reply::MatchStarted {
            match_id: id.as_str().to_string(),
        }),
        Request::JoinMatch { room, player } => {
            engine.join_match(&room, &player).map(|report| Reply::Joined {
                color: report.outcome.color,
                started: report.outcome.started,
                snapshot: report.snapshot,
            })
        }
        Request::PlaceStone {
            room,
            player,
            coord,
        } => engine
            .place_stone(&room, &player, &coord)
            .map(|report| {
                debug!("board after {}:\n{}", coord, visualize_board(&report.snapshot));
                Reply::Placed {
                    painted: report.painted,
                    snapshot: report.snapshot,
                    result: report.result,
                }
            }),
        Request::Forfeit { room, player } => engine
            .forfeit(&room, &player)
            .map(|result| Reply::Forfeited { result }),
        Request::ForceStop { room } => Ok(Reply::Stopped {
            removed: engine.force_stop(&room),
        }),
        Request::Snapshot { room } => engine
            .snapshot(&room)
            .map(|snapshot| Reply::Board { snapshot }),
    };
    outcome.unwrap_or_else(|err| Reply::Error {
        message: render_error_chain(&err),
    })
}

/// Renders an error and its sources as one line, outermost first.
fn render_error_chain(err: &EngineError) -> String {
    let mut message = err.to_string();
    let mut err_dyn = err as &dyn std::error::Error;
    while let Some(source) = err_dyn.source() {
        message.push_str(": ");
        message.push_str(&source.to_string());
        err_dyn = source;
    }
    message
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(io::stderr),
        )
        .with(filter)
        .init();
}
