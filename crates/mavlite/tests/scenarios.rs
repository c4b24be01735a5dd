use std::io::Cursor;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use mavlite::driver::{DispatchStats, ErrorKind};
use mavlite::frame::Crc;
use mavlite::message::codec;
use mavlite::{
    Catalog, Channel, Dispatcher, DispatcherConfig, EndpointId, Event, Frame, FrameWriter, Message,
    Value,
};

const S1_WIRE: [u8; 17] = [
    0xFE, 0x09, 0x00, 0x01, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x02, 0x03, 0x00, 0x04, 0x03,
    0xD0, 0x14,
];

fn heartbeat() -> Message {
    Catalog::common()
        .empty(0)
        .unwrap()
        .with("custom_mode", 0u32)
        .unwrap()
        .with("type", 2u8)
        .unwrap()
        .with("autopilot", 3u8)
        .unwrap()
        .with("base_mode", 0u8)
        .unwrap()
        .with("system_status", 4u8)
        .unwrap()
        .with("mavlink_version", 3u8)
        .unwrap()
}

/// Run a dispatcher over `bytes` to end of stream and return every event
/// in publish order.
fn dispatch(bytes: Vec<u8>) -> (Vec<Event>, DispatchStats) {
    let mut dispatcher = Dispatcher::with_config(
        Cursor::new(bytes),
        Catalog::common(),
        DispatcherConfig::with_interval(Duration::ZERO),
    );
    let events = Arc::new(Mutex::new(Vec::new()));
    for channel in Channel::ALL {
        let sink = Arc::clone(&events);
        dispatcher.subscribe(channel, move |event| sink.lock().unwrap().push(event.clone()));
    }

    dispatcher.start().unwrap();
    let stats = dispatcher.wait().unwrap();
    let events = events.lock().unwrap().clone();
    (events, stats)
}

fn on(events: &[Event], channel: Channel) -> Vec<&Event> {
    events.iter().filter(|e| e.channel() == channel).collect()
}

#[test]
fn s1_heartbeat_round_trip() {
    let message = heartbeat();
    let payload = codec::encode(&message).unwrap();
    assert_eq!(payload.as_ref(), [0x00, 0x00, 0x00, 0x00, 0x02, 0x03, 0x00, 0x04, 0x03]);

    let mut writer = FrameWriter::with_endpoint(Vec::new(), EndpointId::new(1, 1));
    let header = writer.send(&message).unwrap();
    assert_eq!(header.seq, 0);
    let wire = writer.into_inner();
    assert_eq!(wire, S1_WIRE);

    let (events, _) = dispatch(wire);
    let decoded = on(&events, Channel::MessageDecoded);
    assert_eq!(decoded.len(), 1);
    assert_eq!(decoded[0].message(), Some(&message));
}

#[test]
fn s2_ping_checksum_matches_recomputation() {
    let ping = Catalog::common()
        .empty(4)
        .unwrap()
        .with("time_usec", 1u64)
        .unwrap()
        .with("seq", 2u32)
        .unwrap();

    let mut writer = FrameWriter::new(Vec::new());
    writer.send(&ping).unwrap();
    let wire = writer.into_inner();
    assert_eq!(wire.len(), 6 + 14 + 2);

    let len = wire.len();
    let received = u16::from_le_bytes([wire[len - 2], wire[len - 1]]);
    let recomputed = Crc::checksum(&wire[1..6], &wire[6..len - 2], 237);
    assert_eq!(received, recomputed);
    assert_eq!(received, 0x879F);

    let (events, _) = dispatch(wire);
    let message = on(&events, Channel::MessageDecoded)[0].message().unwrap();
    assert_eq!(message.get("time_usec"), Some(&Value::U64(1)));
    assert_eq!(message.get("seq"), Some(&Value::U32(2)));
}

#[test]
fn s3_unknown_id_is_framed_but_not_decoded() {
    let wire = vec![0xFE, 0x03, 0x00, 0x01, 0x01, 0xC8, 0x01, 0x02, 0x03, 0xDD, 0x91];
    assert!(!Catalog::common().contains(200));

    let (events, stats) = dispatch(wire);

    assert_eq!(events.len(), 2);
    assert_eq!(events[0].frame().map(|f| f.header.message_id), Some(200));
    assert_eq!(
        events[1].error().map(|e| e.kind),
        Some(ErrorKind::UnknownMessageId)
    );
    assert!(on(&events, Channel::MessageDecoded).is_empty());
    assert_eq!(
        stats,
        DispatchStats {
            frames: 1,
            messages: 0,
            errors: 1
        }
    );
}

#[test]
fn known_id_with_wrong_length_is_framed_but_not_decoded() {
    // HEARTBEAT carries nine payload bytes; this one has eight but a valid
    // checksum.
    let frame = Frame::new(0, EndpointId::new(1, 1), 0, vec![0u8; 8], 50).unwrap();

    let (events, stats) = dispatch(frame.to_bytes().to_vec());

    assert_eq!(events.len(), 2);
    assert_eq!(events[0].frame().map(|f| f.header.len), Some(8));
    let error = events[1].error().unwrap();
    assert_eq!(error.kind, ErrorKind::PayloadLengthMismatch);
    assert_eq!(error.header.map(|h| h.message_id), Some(0));
    assert_eq!(
        stats,
        DispatchStats {
            frames: 1,
            messages: 0,
            errors: 1
        }
    );
}

#[test]
fn s4_resync_after_garbage() {
    let mut wire = vec![0xAA, 0xBB, 0xCC];
    wire.extend_from_slice(&S1_WIRE);

    let (events, _) = dispatch(wire);

    let decoded = on(&events, Channel::MessageDecoded);
    assert_eq!(decoded.len(), 1);
    assert_eq!(decoded[0].message(), Some(&heartbeat()));
    assert!(on(&events, Channel::Error).is_empty());
}

#[test]
fn s5_oversize_length_returns_to_hunting() {
    let mut wire = vec![0xFE, 0xFB];
    wire.extend_from_slice(&S1_WIRE);

    let (events, _) = dispatch(wire);

    let errors = on(&events, Channel::Error);
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].error().map(|e| e.kind),
        Some(ErrorKind::LengthOutOfRange)
    );
    assert_eq!(on(&events, Channel::FrameReceived).len(), 1);
    assert_eq!(
        on(&events, Channel::MessageDecoded)[0].message(),
        Some(&heartbeat())
    );
}

#[test]
fn s6_corrupted_checksum_is_dropped() {
    let mut wire = S1_WIRE.to_vec();
    wire[15] ^= 0xFF;

    let (events, stats) = dispatch(wire);

    assert_eq!(events.len(), 1);
    let error = events[0].error().unwrap();
    assert_eq!(error.kind, ErrorKind::ChecksumMismatch);
    assert_eq!(stats.messages, 0);
    assert_eq!(stats.frames, 0);
}

#[test]
fn frame_received_precedes_message_decoded() {
    let mut wire = Vec::new();
    for _ in 0..3 {
        wire.extend_from_slice(&S1_WIRE);
    }

    let (events, stats) = dispatch(wire);

    assert_eq!(stats.frames, 3);
    let channels: Vec<Channel> = events.iter().map(Event::channel).collect();
    assert_eq!(
        channels,
        [
            Channel::FrameReceived,
            Channel::MessageDecoded,
            Channel::FrameReceived,
            Channel::MessageDecoded,
            Channel::FrameReceived,
            Channel::MessageDecoded,
        ]
    );
}

#[test]
fn message_serializes_for_diagnostics() {
    let statustext = Catalog::common()
        .by_name("STATUSTEXT")
        .unwrap()
        .empty();
    let mut statustext = statustext.with("severity", 6u8).unwrap();
    statustext.set_text("text", "PreArm: ok").unwrap();

    let json = serde_json::to_value(&statustext).unwrap();
    assert_eq!(json["name"], "STATUSTEXT");
    assert_eq!(json["fields"]["text"], "PreArm: ok");
    assert_eq!(json["fields"]["severity"], 6);
}
