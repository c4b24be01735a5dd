//! Ground-station style monitor: listens for MAVLink on UDP, prints every
//! decoded message as a JSON line and answers with a heartbeat once a second.
//!
//! Run with:
//!   cargo run --example udp-monitor -- 0.0.0.0:14550
//!
//! Set `MAVLITE_LOG=json` for JSON logs on stderr.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use mavlite::driver::{Channel, Dispatcher, DispatcherConfig, Endpoint};
use mavlite::transport::{Transport, UdpTransport};
use mavlite::{Catalog, EndpointId, Message};

const GCS_SYSTEM_ID: u8 = 255;
const GCS_COMPONENT_ID: u8 = 190;

fn init_logging() {
    let builder = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(tracing::Level::INFO)
        .with_ansi(false)
        .with_target(false);

    if std::env::var("MAVLITE_LOG").is_ok_and(|format| format == "json") {
        let _ = builder.json().try_init();
    } else {
        let _ = builder.try_init();
    }
}

fn gcs_heartbeat() -> Result<Message, mavlite::message::CodecError> {
    Catalog::common()
        .empty(0)?
        .with("type", 6u8)? // MAV_TYPE_GCS
        .with("autopilot", 8u8)? // MAV_AUTOPILOT_INVALID
        .with("system_status", 4u8)?
        .with("mavlink_version", 3u8)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let addr = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "0.0.0.0:14550".to_string());

    let receiver = UdpTransport::bind(addr.as_str())?;
    // Short timeout so the loop notices ctrl-c even when the link is quiet.
    receiver.set_read_timeout(Some(Duration::from_millis(200)))?;
    let sender = receiver.try_clone()?;
    tracing::info!(local = %receiver.local_addr()?, "listening");

    let mut dispatcher = Dispatcher::with_config(
        receiver,
        Catalog::common(),
        DispatcherConfig::with_interval(Duration::ZERO),
    );
    dispatcher.subscribe(Channel::MessageDecoded, |event| {
        if let Some(message) = event.message() {
            match serde_json::to_string(message) {
                Ok(line) => println!("{line}"),
                Err(err) => tracing::warn!(error = %err, "failed to render message"),
            }
        }
    });
    dispatcher.subscribe(Channel::Error, |event| {
        if let Some(error) = event.error() {
            if error.kind != mavlite::driver::ErrorKind::TransportIo {
                tracing::warn!(kind = ?error.kind, detail = %error.detail, "receive error");
            }
        }
    });

    let running = Arc::new(AtomicBool::new(true));
    let flag = Arc::clone(&running);
    ctrlc::set_handler(move || flag.store(false, Ordering::SeqCst))?;

    dispatcher.start()?;

    let endpoint = Endpoint::new(sender, EndpointId::new(GCS_SYSTEM_ID, GCS_COMPONENT_ID));
    let heartbeat = gcs_heartbeat()?;
    let mut last_sent: Option<Instant> = None;

    while running.load(Ordering::SeqCst) {
        if last_sent.is_none_or(|at| at.elapsed() >= Duration::from_secs(1)) {
            // Nothing to answer until a vehicle has spoken.
            if let Err(err) = endpoint.send(&heartbeat) {
                tracing::debug!(error = %err, "heartbeat not sent");
            }
            last_sent = Some(Instant::now());
        }
        thread::sleep(Duration::from_millis(50));
    }

    let stats = dispatcher.halt()?;
    eprintln!("{}", serde_json::to_string(&stats)?);
    Ok(())
}
