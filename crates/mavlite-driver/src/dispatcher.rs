use std::io::Read;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use mavlite_frame::{FrameError, FrameReader};
use mavlite_message::Catalog;
use serde::Serialize;
use tracing::{debug, info};

use crate::channel::{Channel, ErrorEvent, Event};
use crate::config::DispatcherConfig;
use crate::error::{DriverError, Result};
use crate::eventer::{Eventer, SubscriptionId};

/// Counters for one run of the dispatch loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DispatchStats {
    pub frames: u64,
    pub messages: u64,
    pub errors: u64,
}

/// Cloneable handle that asks a running dispatch loop to stop.
#[derive(Debug, Clone)]
pub struct Canceller(Arc<AtomicBool>);

impl Canceller {
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// The worker yields `None` only when its reader never arrived.
type Worker<T> = JoinHandle<Option<(FrameReader<T>, DispatchStats)>>;

/// Drives the receive loop on its own thread and publishes what it reads.
///
/// Each iteration reads one frame, publishes it on
/// [`Channel::FrameReceived`], decodes it and publishes the result on
/// [`Channel::MessageDecoded`] or [`Channel::Error`], then sleeps for the
/// configured interval. Framing and transport errors go to the error channel
/// and the loop carries on. End of stream ends the loop.
///
/// The cancellation flag is checked once per iteration, so a read blocked
/// on the transport delays [`halt`](Self::halt) until it returns. Give the
/// transport a read timeout when the peer may go quiet.
pub struct Dispatcher<T: Read + Send + 'static> {
    reader: Option<FrameReader<T>>,
    eventer: Arc<Eventer>,
    config: DispatcherConfig,
    cancel: Arc<AtomicBool>,
    worker: Option<Worker<T>>,
    last_stats: DispatchStats,
}

impl<T: Read + Send + 'static> Dispatcher<T> {
    /// Dispatch the `common` message set with default settings.
    pub fn new(transport: T) -> Self {
        Self::with_config(transport, Catalog::common(), DispatcherConfig::default())
    }

    pub fn with_config(transport: T, catalog: Catalog, config: DispatcherConfig) -> Self {
        Self::from_reader(FrameReader::with_catalog(transport, catalog), config)
    }

    /// Dispatch from an already configured reader.
    pub fn from_reader(reader: FrameReader<T>, config: DispatcherConfig) -> Self {
        Self {
            reader: Some(reader),
            eventer: Arc::new(Eventer::new()),
            config,
            cancel: Arc::new(AtomicBool::new(false)),
            worker: None,
            last_stats: DispatchStats::default(),
        }
    }

    pub fn subscribe<F>(&self, channel: Channel, callback: F) -> SubscriptionId
    where
        F: Fn(&Event) + Send + Sync + 'static,
    {
        self.eventer.subscribe(channel, callback)
    }

    pub fn subscribe_once<F>(&self, channel: Channel, callback: F) -> SubscriptionId
    where
        F: FnOnce(&Event) + Send + 'static,
    {
        self.eventer.subscribe_once(channel, callback)
    }

    pub fn subscribe_buffered(
        &self,
        channel: Channel,
        capacity: usize,
    ) -> (SubscriptionId, Receiver<Event>) {
        self.eventer.subscribe_buffered(channel, capacity)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.eventer.unsubscribe(id)
    }

    /// Shared registry; subscriptions may be added from any thread.
    pub fn eventer(&self) -> &Arc<Eventer> {
        &self.eventer
    }

    pub fn config(&self) -> &DispatcherConfig {
        &self.config
    }

    pub fn canceller(&self) -> Canceller {
        Canceller(Arc::clone(&self.cancel))
    }

    /// True while the worker thread exists and has not finished.
    pub fn is_running(&self) -> bool {
        self.worker
            .as_ref()
            .is_some_and(|worker| !worker.is_finished())
    }

    /// Stats from the most recently finished run.
    pub fn stats(&self) -> DispatchStats {
        self.last_stats
    }

    /// Spawn the dispatch thread.
    ///
    /// A dispatcher may be started again after [`halt`](Self::halt) or
    /// [`wait`](Self::wait) returned; the reader keeps its buffered bytes.
    pub fn start(&mut self) -> Result<()> {
        let Some(reader) = self.reader.take() else {
            return Err(DriverError::AlreadyStarted);
        };

        self.cancel.store(false, Ordering::SeqCst);
        let eventer = Arc::clone(&self.eventer);
        let cancel = Arc::clone(&self.cancel);
        let interval = self.config.interval;

        // The reader is handed over after the spawn succeeds, so a failed
        // spawn leaves it here.
        let (handoff, inbox) = mpsc::sync_channel::<FrameReader<T>>(1);
        let mut builder = thread::Builder::new().name(self.config.thread_name.clone());
        if let Some(size) = self.config.stack_size {
            builder = builder.stack_size(size);
        }
        let spawned = builder.spawn(move || {
            let reader = inbox.recv().ok()?;
            Some(run(reader, &eventer, &cancel, interval))
        });

        let worker = match spawned {
            Ok(worker) => worker,
            Err(err) => {
                self.reader = Some(reader);
                return Err(DriverError::Spawn(err));
            }
        };
        if let Err(mpsc::SendError(reader)) = handoff.send(reader) {
            self.reader = Some(reader);
            let _ = worker.join();
            return Err(DriverError::WorkerPanicked);
        }

        info!(thread = %self.config.thread_name, ?interval, "dispatcher started");
        self.worker = Some(worker);
        Ok(())
    }

    /// Stop the loop after its current publish cycle and join the thread.
    ///
    /// Calling `halt` on a dispatcher that is not running returns the stats
    /// of the last run.
    pub fn halt(&mut self) -> Result<DispatchStats> {
        self.cancel.store(true, Ordering::SeqCst);
        self.join()
    }

    /// Join the thread after the loop ends on its own (end of stream or a
    /// [`Canceller`]).
    pub fn wait(&mut self) -> Result<DispatchStats> {
        self.join()
    }

    /// Halt if needed and hand back the frame reader.
    pub fn into_reader(mut self) -> Result<FrameReader<T>> {
        self.halt()?;
        self.reader.take().ok_or(DriverError::WorkerPanicked)
    }

    fn join(&mut self) -> Result<DispatchStats> {
        let Some(worker) = self.worker.take() else {
            return Ok(self.last_stats);
        };

        let (reader, stats) = worker
            .join()
            .ok()
            .flatten()
            .ok_or(DriverError::WorkerPanicked)?;
        self.reader = Some(reader);
        self.last_stats = stats;
        info!(
            frames = stats.frames,
            messages = stats.messages,
            errors = stats.errors,
            "dispatcher stopped"
        );
        Ok(stats)
    }
}

impl<T: Read + Send + 'static> Drop for Dispatcher<T> {
    fn drop(&mut self) {
        self.cancel.store(true, Ordering::SeqCst);
    }
}

impl<T: Read + Send + 'static> std::fmt::Debug for Dispatcher<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("config", &self.config)
            .field("running", &self.is_running())
            .field("eventer", &self.eventer)
            .finish()
    }
}

fn run<T: Read>(
    mut reader: FrameReader<T>,
    eventer: &Eventer,
    cancel: &AtomicBool,
    interval: std::time::Duration,
) -> (FrameReader<T>, DispatchStats) {
    let mut stats = DispatchStats::default();

    while !cancel.load(Ordering::SeqCst) {
        match reader.read_frame() {
            Ok(frame) => {
                stats.frames += 1;
                let header = frame.header;
                let decoded = frame.decode(reader.catalog());
                eventer.publish(&Event::FrameReceived(frame));
                match decoded {
                    Ok(message) => {
                        stats.messages += 1;
                        eventer.publish(&Event::MessageDecoded { header, message });
                    }
                    Err(err) => {
                        stats.errors += 1;
                        debug!(message_id = header.message_id, seq = header.seq, error = %err, "decode failed");
                        eventer.publish(&Event::Error(ErrorEvent::from_codec_error(
                            &err,
                            Some(header),
                        )));
                    }
                }
            }
            Err(FrameError::ConnectionClosed) => {
                debug!("transport reached end of stream");
                break;
            }
            Err(err) => {
                stats.errors += 1;
                eventer.publish(&Event::Error(ErrorEvent::from_frame_error(&err)));
            }
        }

        if !interval.is_zero() {
            thread::sleep(interval);
        }
    }

    (reader, stats)
}

#[cfg(test)]
mod tests {
    use std::io::{self, Cursor};
    use std::sync::Mutex;
    use std::time::Duration;

    use mavlite_frame::{EndpointId, Frame};
    use mavlite_message::Value;

    use super::*;

    const HEARTBEAT: [u8; 17] = [
        0xFE, 0x09, 0x00, 0x01, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x02, 0x03, 0x00, 0x04,
        0x03, 0xD0, 0x14,
    ];
    const UNKNOWN_ID: [u8; 11] = [
        0xFE, 0x03, 0x00, 0x01, 0x01, 0xC8, 0x01, 0x02, 0x03, 0xDD, 0x91,
    ];

    fn collect(dispatcher: &Dispatcher<impl Read + Send + 'static>) -> Arc<Mutex<Vec<Event>>> {
        let events = Arc::new(Mutex::new(Vec::new()));
        for channel in Channel::ALL {
            let sink = Arc::clone(&events);
            dispatcher.subscribe(channel, move |event| sink.lock().unwrap().push(event.clone()));
        }
        events
    }

    fn fast() -> DispatcherConfig {
        DispatcherConfig::with_interval(Duration::ZERO)
    }

    #[test]
    fn publishes_frame_then_message() {
        let mut dispatcher =
            Dispatcher::with_config(Cursor::new(HEARTBEAT.to_vec()), Catalog::common(), fast());
        let events = collect(&dispatcher);

        dispatcher.start().unwrap();
        let stats = dispatcher.wait().unwrap();

        assert_eq!(
            stats,
            DispatchStats {
                frames: 1,
                messages: 1,
                errors: 0
            }
        );
        let events = events.lock().unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].channel(), Channel::FrameReceived);
        let message = events[1].message().unwrap();
        assert_eq!(message.name(), "HEARTBEAT");
        assert_eq!(message.get("custom_mode"), Some(&Value::U32(0)));
        assert_eq!(message.get("mavlink_version"), Some(&Value::U8(3)));
    }

    #[test]
    fn unknown_id_publishes_frame_and_error() {
        let mut dispatcher =
            Dispatcher::with_config(Cursor::new(UNKNOWN_ID.to_vec()), Catalog::common(), fast());
        let events = collect(&dispatcher);

        dispatcher.start().unwrap();
        dispatcher.wait().unwrap();

        let events = events.lock().unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].frame().unwrap().header.message_id, 200);
        let error = events[1].error().unwrap();
        assert_eq!(error.kind, crate::channel::ErrorKind::UnknownMessageId);
        assert_eq!(error.header.map(|h| h.message_id), Some(200));
    }

    #[test]
    fn checksum_error_then_recovers() {
        let mut corrupted = HEARTBEAT.to_vec();
        corrupted[16] ^= 0xFF;
        corrupted.extend_from_slice(&HEARTBEAT);

        let mut dispatcher =
            Dispatcher::with_config(Cursor::new(corrupted), Catalog::common(), fast());
        let events = collect(&dispatcher);

        dispatcher.start().unwrap();
        let stats = dispatcher.wait().unwrap();

        assert_eq!(stats.frames, 1);
        assert!(stats.errors >= 1);
        let events = events.lock().unwrap();
        assert_eq!(
            events[0].error().map(|e| e.kind),
            Some(crate::channel::ErrorKind::ChecksumMismatch)
        );
        assert_eq!(events.last().unwrap().channel(), Channel::MessageDecoded);
    }

    #[test]
    fn start_twice_is_rejected() {
        let (local, _peer) = std::os::unix::net::UnixStream::pair().unwrap();
        local
            .set_read_timeout(Some(Duration::from_millis(5)))
            .unwrap();
        let mut dispatcher = Dispatcher::with_config(local, Catalog::common(), fast());

        dispatcher.start().unwrap();
        assert!(matches!(dispatcher.start(), Err(DriverError::AlreadyStarted)));
        dispatcher.halt().unwrap();
    }

    #[test]
    fn halt_is_idempotent_and_restartable() {
        let (local, mut peer) = std::os::unix::net::UnixStream::pair().unwrap();
        local
            .set_read_timeout(Some(Duration::from_millis(5)))
            .unwrap();
        let mut dispatcher = Dispatcher::with_config(local, Catalog::common(), fast());
        let (_, frames) = dispatcher.subscribe_buffered(Channel::FrameReceived, 8);

        dispatcher.start().unwrap();
        assert!(dispatcher.is_running());
        io::Write::write_all(&mut peer, &HEARTBEAT).unwrap();
        frames.recv_timeout(Duration::from_secs(5)).unwrap();

        let first = dispatcher.halt().unwrap();
        assert_eq!(first.frames, 1);
        assert!(!dispatcher.is_running());
        assert_eq!(dispatcher.halt().unwrap(), first);

        dispatcher.start().unwrap();
        io::Write::write_all(&mut peer, &HEARTBEAT).unwrap();
        frames.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(dispatcher.halt().unwrap().frames, 1);
    }

    #[test]
    fn read_timeouts_surface_as_transport_errors() {
        let (local, _peer) = std::os::unix::net::UnixStream::pair().unwrap();
        local
            .set_read_timeout(Some(Duration::from_millis(5)))
            .unwrap();
        let mut dispatcher = Dispatcher::with_config(local, Catalog::common(), fast());
        let (_, errors) = dispatcher.subscribe_buffered(Channel::Error, 4);

        dispatcher.start().unwrap();
        let event = errors.recv_timeout(Duration::from_secs(5)).unwrap();
        dispatcher.halt().unwrap();

        assert_eq!(
            event.error().map(|e| e.kind),
            Some(crate::channel::ErrorKind::TransportIo)
        );
    }

    #[test]
    fn canceller_stops_loop_from_a_subscriber() {
        let mut stream = Vec::new();
        for seq in 0..4u8 {
            let heartbeat = Catalog::common().empty(0).unwrap();
            let frame = Frame::from_message(&heartbeat, seq, EndpointId::default()).unwrap();
            stream.extend_from_slice(&frame.to_bytes());
        }

        let mut dispatcher = Dispatcher::with_config(Cursor::new(stream), Catalog::common(), fast());
        let canceller = dispatcher.canceller();
        dispatcher.subscribe(Channel::MessageDecoded, move |_| canceller.cancel());

        dispatcher.start().unwrap();
        let stats = dispatcher.wait().unwrap();
        assert_eq!(stats.messages, 1);
    }

    #[test]
    #[cfg(all(target_os = "linux", target_pointer_width = "64"))]
    fn failed_spawn_keeps_the_reader() {
        let config = DispatcherConfig {
            stack_size: Some(1 << 60),
            ..fast()
        };
        let mut dispatcher =
            Dispatcher::with_config(Cursor::new(HEARTBEAT.to_vec()), Catalog::common(), config);
        let events = collect(&dispatcher);

        assert!(matches!(dispatcher.start(), Err(DriverError::Spawn(_))));
        assert!(!dispatcher.is_running());

        dispatcher.config.stack_size = None;
        dispatcher.start().unwrap();
        let stats = dispatcher.wait().unwrap();
        assert_eq!(stats.messages, 1);
        assert_eq!(events.lock().unwrap().len(), 2);
    }

    #[test]
    fn panicking_subscriber_reports_worker_panic() {
        let mut dispatcher =
            Dispatcher::with_config(Cursor::new(HEARTBEAT.to_vec()), Catalog::common(), fast());
        dispatcher.subscribe(Channel::FrameReceived, |_| panic!("subscriber bug"));

        dispatcher.start().unwrap();
        assert!(matches!(dispatcher.wait(), Err(DriverError::WorkerPanicked)));
    }
}
