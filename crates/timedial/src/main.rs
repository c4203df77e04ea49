use bento::Month;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use timedial::config::{self, Config};
use timedial::dial::PointerHub;
use timedial::events::{self, DialEvent, DialUpdate};
use timedial::geometry::{Bounds, LABEL_RADIUS, LabelGeometry};
use timedial::sys::runtime;
use timedial::Timeline;

#[derive(Parser, Debug)]
#[command(name = "timedial", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Print the theme and cards generated for a month
    Month {
        /// "mar", "March" or the dial index ("0" is December)
        month: Month,
    },
    /// Grab the hand, drag it to an angle and let go
    Drag {
        /// Clockwise degrees from straight up
        #[arg(long, allow_hyphen_values = true)]
        to: f64,

        /// Dial size in pixels
        #[arg(long, default_value_t = 400.0)]
        size: f64,
    },
    /// Run a JSON-lines event script through the event loop
    Replay { script: PathBuf },
    /// Print where the month labels sit around the dial
    Face {
        #[arg(long, default_value_t = LABEL_RADIUS)]
        radius: f64,
    },
    /// Write the default config file and print its path
    InitConfig,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Month { month } => print_json(&bento::generate(month)),
        Commands::Drag { to, size } => drag(&config::load_or_default(), to, size),
        Commands::Replay { script } => replay(&config::load_or_default(), script),
        Commands::Face { radius } => {
            let month = config::load_or_default().dial.initial_month;
            print_json(&LabelGeometry::face(month, radius))
        }
        Commands::InitConfig => {
            let path = config::write_default_config()?;
            println!("{}", path.display());
            Ok(())
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_update(update: &DialUpdate) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string(update)?);
    Ok(())
}

fn drag(config: &Config, to: f64, size: f64) -> anyhow::Result<()> {
    if !(size.is_finite() && size > 0.0) {
        anyhow::bail!("dial size must be positive, got {}", size);
    }

    let bounds = Bounds::new(0.0, 0.0, size, size);
    let mut timeline = Timeline::new(config, PointerHub::new());
    let events = [
        DialEvent::PointerDown,
        DialEvent::PointerMove {
            position: bounds.point_at(to, size / 3.0),
            bounds: Some(bounds),
        },
        DialEvent::PointerUp,
    ];

    for event in events {
        for update in timeline.handle(event) {
            print_update(&update)?;
        }
    }
    Ok(())
}

fn replay(config: &Config, script: PathBuf) -> anyhow::Result<()> {
    let script = fs_err::read_to_string(&script)?;
    let events = events::parse_script(&script)?;

    let (event_tx, event_rx) = async_channel::bounded(32);
    let (update_tx, update_rx) = async_channel::unbounded();

    let feeder = std::thread::spawn(move || {
        for event in events {
            if event_tx.send_blocking(event).is_err() {
                break;
            }
        }
    });

    let timeline = Timeline::new(config, PointerHub::new());
    let timeline = runtime::run_blocking(timeline, event_rx, update_tx)?;
    feeder
        .join()
        .map_err(|_| anyhow::anyhow!("event feeder thread panicked"))?;

    while let Ok(update) = update_rx.try_recv() {
        print_update(&update)?;
    }
    log::info!(
        "replay finished on {} {} at {:.0}°",
        timeline.dial().month(),
        timeline.years().selected(),
        timeline.dial().angle()
    );
    Ok(())
}
