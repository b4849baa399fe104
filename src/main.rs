use circbuf::config::{DEFAULT_CAPACITY, RingConfig};
use circbuf::logging;
use circbuf::ring::RingError;
use clap::Parser;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};
use tracing::{info, warn};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Feeds bursts of bytes into a ring buffer and drains them in smaller batches.
#[derive(Debug, Parser)]
#[command(name = "circbuf", version)]
struct Args {
    /// Buffer capacity in bytes
    #[arg(long, default_value_t = DEFAULT_CAPACITY)]
    capacity: usize,

    /// Bytes the producer tries to insert per tick
    #[arg(long, default_value_t = 8)]
    burst: usize,

    /// Bytes the consumer removes per tick
    #[arg(long, default_value_t = 5)]
    batch: usize,

    #[arg(long, default_value_t = 10)]
    tick_ms: u64,

    /// Log filter directives, e.g. `info` or `circbuf=trace`
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[derive(Debug, Default, Clone, Copy)]
struct RunStats {
    inserted: u64,
    removed: u64,
    rejected_full: u64,
    mismatches: u64,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), BoxError> {
    let args = Args::parse();
    logging::init(&args.log_level)?;

    let mut ring = RingConfig::new(args.capacity).build()?;

    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();

    ctrlc::set_handler(move || {
        r.store(false, Ordering::SeqCst);
    })
    .map_err(|e| format!("Failed to set Ctrl+C handler: {}", e))?;

    info!(
        capacity = ring.capacity(),
        burst = args.burst,
        batch = args.batch,
        "circbuf v0.1.0 running, press Ctrl+C to stop"
    );

    let mut stats = RunStats::default();
    let mut next_byte = 0u8;
    let mut last_report = Instant::now();

    while running.load(Ordering::SeqCst) {
        for _ in 0..args.burst {
            match ring.insert(next_byte) {
                Ok(()) => {
                    stats.inserted += 1;
                    next_byte = next_byte.wrapping_add(1);
                }
                Err(e) if e.is_recoverable() => {
                    stats.rejected_full += 1;
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }

        for _ in 0..args.batch {
            let expected = match ring.peek(0) {
                Ok(byte) => byte,
                Err(RingError::BufferEmpty) => break,
                Err(e) => return Err(e.into()),
            };
            let byte = ring.remove()?;
            if byte != expected {
                stats.mismatches += 1;
                warn!(expected, got = byte, "peek and remove disagree");
            }
            stats.removed += 1;
        }

        if last_report.elapsed() >= Duration::from_secs(5) {
            let ring_len = ring.len()?;
            let ring_available = ring.available()?;
            info!(
                inserted = stats.inserted,
                removed = stats.removed,
                rejected_full = stats.rejected_full,
                ring_len,
                ring_available,
                "status"
            );
            last_report = Instant::now();
        }

        std::thread::sleep(Duration::from_millis(args.tick_ms));
    }

    info!(
        inserted = stats.inserted,
        removed = stats.removed,
        rejected_full = stats.rejected_full,
        mismatches = stats.mismatches,
        "shutting down"
    );
    ring.destroy()?;

    if stats.mismatches > 0 {
        return Err(format!("{} peek/remove mismatches", stats.mismatches).into());
    }
    Ok(())
}
