use circbuf::config::RingConfig;
use circbuf::logging;
use circbuf::ring::{RingBuffer, RingError};
use clap::Parser;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Fill/drain throughput test with FIFO order checking.
#[derive(Debug, Parser)]
#[command(name = "stress")]
struct Args {
    #[arg(long, default_value_t = 4096)]
    capacity: usize,

    #[arg(long, default_value_t = 5)]
    seconds: u64,

    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[derive(Debug, Default)]
struct Counters {
    written: u64,
    read: u64,
    mismatches: u64,
    next_in: u8,
    next_out: u8,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn fill(ring: &mut RingBuffer, c: &mut Counters) -> Result<(), RingError> {
    loop {
        match ring.insert(c.next_in) {
            Ok(()) => {
                c.next_in = c.next_in.wrapping_add(1);
                c.written += 1;
            }
            Err(RingError::BufferFull { .. }) => return Ok(()),
            Err(e) => return Err(e),
        }
    }
}

fn drain(ring: &mut RingBuffer, c: &mut Counters) -> Result<(), RingError> {
    loop {
        match ring.remove() {
            Ok(byte) => {
                if byte != c.next_out {
                    c.mismatches += 1;
                    warn!(expected = c.next_out, got = byte, "FIFO order violated");
                }
                c.next_out = c.next_out.wrapping_add(1);
                c.read += 1;
            }
            Err(RingError::BufferEmpty) => return Ok(()),
            Err(e) => return Err(e),
        }
    }
}

fn run() -> Result<(), BoxError> {
    let args = Args::parse();
    logging::init(&args.log_level)?;

    println!("circbuf stress test\n");

    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();

    ctrlc::set_handler(move || {
        r.store(false, Ordering::SeqCst);
    })
    .map_err(|e| format!("Failed to set Ctrl+C handler: {}", e))?;

    let mut ring = RingConfig::new(args.capacity)
        .build()
        .map_err(|e| format!("Failed to create ring buffer: {}", e))?;
    let mut c = Counters::default();

    println!("Running for {} seconds...", args.seconds);
    let start = Instant::now();
    let deadline = Duration::from_secs(args.seconds);
    let mut cycles = 0u64;

    while running.load(Ordering::Relaxed) && start.elapsed() < deadline {
        fill(&mut ring, &mut c)?;
        if !ring.is_full()? {
            c.mismatches += 1;
        }
        drain(&mut ring, &mut c)?;
        if !ring.is_empty()? {
            c.mismatches += 1;
        }
        cycles += 1;
    }

    let elapsed = start.elapsed().as_secs_f64();
    debug!(cycles, "stress loop finished");
    ring.destroy()?;

    println!("\nResults:");
    println!("  Inserted: {} bytes", c.written);
    println!("  Removed:  {} bytes", c.read);
    println!("  Fill/drain cycles: {}", cycles);
    println!(
        "  Throughput: {:.2}M ops/sec",
        (c.written + c.read) as f64 / elapsed / 1_000_000.0
    );
    println!("  Mismatches: {}", c.mismatches);

    if c.mismatches > 0 {
        return Err(format!("{} FIFO/state mismatches", c.mismatches).into());
    }
    Ok(())
}
