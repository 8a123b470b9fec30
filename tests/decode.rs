mod util;

use std::fmt::Display;

use currentcost::{
    avec::{
        self, Battery, MeasurementRecord, Publish, Sink,
        device::{CURRENT_COST, CURRENT_COST_MANCHESTER, Input, Modulation},
    },
    sans::{
        bits::BitRow,
        seek::{Pattern, SYNC},
        session::DecodeError,
    },
};
use util::{Bits, TIME, clock};

const FRAME: [u8; 8] = [0x0D, 0x5A, 0x01, 0x2C, 0x00, 0x64, 0x00, 0xFA];

fn noise(n: usize) -> Bits {
    let mut bits = Bits::new();
    let mut x: u32 = 1;
    for _ in 0..n {
        x = x.wrapping_mul(1103515245).wrapping_add(12345) & 0x7FFF_FFFF;
        bits.push((x >> 16) & 1 == 1);
    }
    bits
}

#[test]
fn decode_after_noise() {
    let mut bits = noise(100);
    bits.push_pattern(&SYNC).push_line(&FRAME);

    let record = avec::decode_row(&bits.row(), &clock).unwrap();
    assert_eq!(record.power, [300, 100, 250]);
    assert_eq!(record.model, "CurrentCost TX");
    assert_eq!(record.time, TIME);
}

#[test]
fn too_few_bits_after_sync() {
    let mut bits = Bits::new();
    bits.push_pattern(&SYNC).push_str("1001011010010");
    assert_eq!(bits.len(), 45 + 13);

    assert_eq!(avec::decode_row(&bits.row(), &clock), None);
    assert_eq!(
        avec::try_decode_row(&bits.row(), &clock),
        Err(DecodeError::LineDecodeTruncated { started: 1 })
    );
}

#[test]
fn no_sync_pattern() {
    let bits = noise(500);
    assert_eq!(
        avec::try_decode_row(&bits.row(), &clock),
        Err(DecodeError::PatternNotFound)
    );
}

#[test]
fn wrong_frame_type() {
    let mut frame = FRAME;
    frame[0] = 0x0C;

    let mut bits = Bits::new();
    bits.push_pattern(&SYNC).push_line(&frame);
    assert_eq!(
        avec::try_decode_row(&bits.row(), &clock),
        Err(DecodeError::FrameTypeMismatch(0x0C))
    );
}

#[test]
fn clock_is_read_only_on_success() {
    let mut bits = Bits::new();
    bits.push_pattern(&SYNC).push_line(&FRAME[..3]);

    let panicking = || -> &'static str { panic!("clock read for a dropped row") };
    assert_eq!(avec::decode_row(&bits.row(), &panicking), None);
}

#[test]
fn decode_with_other_pattern() {
    const PATTERN: Pattern = Pattern::new(&[0xF0, 0x0F], 16);

    let mut bits = Bits::new();
    bits.push_str("1111").push_pattern(&PATTERN).push_line(&FRAME);

    let record = avec::row::decode_with(&bits.row(), &PATTERN, &clock).unwrap();
    assert_eq!(record.power, [300, 100, 250]);
}

#[test]
fn decode_pre_decoded_bytes() {
    let record = avec::decode_bytes(&FRAME, &clock).unwrap();
    assert_eq!(record.power, [300, 100, 250]);

    assert_eq!(avec::decode_bytes(&FRAME[..4], &clock), None);
    assert_eq!(
        avec::try_decode_bytes(&[0x0E; 8], &clock),
        Err(DecodeError::FrameTypeMismatch(0x0E))
    );
}

#[test]
fn devices() {
    assert_eq!(CURRENT_COST.modulation, Modulation::FskPulsePcm);
    assert_eq!(
        (CURRENT_COST.short_limit, CURRENT_COST.long_limit, CURRENT_COST.reset_limit),
        (62, 62, 2000)
    );
    assert_eq!(CURRENT_COST.input, Input::Bits(SYNC));
    assert_eq!(CURRENT_COST_MANCHESTER.input, Input::Bytes);
    assert_eq!(
        CURRENT_COST.fields,
        &["time", "model", "rc", "power0", "power1", "power2", "battery"]
    );

    // A pre-decoded row carries the frame bytes directly.
    let mut bytes = FRAME.to_vec();
    bytes.push(0xA0);
    let row = BitRow::new(&bytes, 67).unwrap();
    let record = CURRENT_COST_MANCHESTER.decode(&row, &clock).unwrap();
    assert_eq!(record.power, [300, 100, 250]);

    // The same bytes hold no sync pattern.
    assert_eq!(
        CURRENT_COST.try_decode(&row, &clock),
        Err(DecodeError::PatternNotFound)
    );
}

#[derive(Debug, Default)]
struct Collector(Vec<(&'static str, String)>);

impl Sink for Collector {
    fn add_u8(&mut self, key: &'static str, value: u8) {
        self.0.push((key, value.to_string()));
    }
    fn add_u16(&mut self, key: &'static str, value: u16) {
        self.0.push((key, value.to_string()));
    }
    fn add_display(&mut self, key: &'static str, value: &dyn Display) {
        self.0.push((key, value.to_string()));
    }
}

#[test]
fn publish_record() {
    let record = avec::decode_bytes(&FRAME, &clock).unwrap();

    let mut sink = Collector::default();
    record.publish(&mut sink);

    assert_eq!(
        sink.0,
        [
            ("time", TIME.to_string()),
            ("model", "CurrentCost TX".to_string()),
            ("power0", "300".to_string()),
            ("power1", "100".to_string()),
            ("power2", "250".to_string()),
        ]
    );
}

#[test]
fn publish_optional_fields() {
    let record = MeasurementRecord {
        time: 0,
        model: avec::MODEL,
        rc: Some(0x5A),
        battery: Some(Battery::Low),
        power: [1, 2, 3],
    };

    let mut sink = Collector::default();
    record.publish(&mut sink);

    let keys: Vec<_> = sink.0.iter().map(|(k, _)| *k).collect();
    assert_eq!(keys, MeasurementRecord::<u8>::FIELDS);
    assert_eq!(sink.0[2], ("rc", "90".to_string()));
    assert_eq!(sink.0[6], ("battery", "LOW".to_string()));
}

#[cfg(feature = "std")]
#[test]
fn system_clock() {
    use avec::{Clock, SystemClock};

    let time = SystemClock.now().to_string();
    assert_eq!(time.len(), "YYYY-MM-DD hh:mm:ss".len());
    assert_eq!(&time[4..5], "-");
    assert_eq!(&time[10..11], " ");
}
