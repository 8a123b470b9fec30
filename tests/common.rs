mod util;

use csv::ReaderBuilder;
use currentcost::{
    avec::{self, MODEL},
    sans::bits::BitRow,
};
use util::{TIME, clock, from_hex};

const PATH: &str = "fixtures/captures.csv";

#[derive(Debug)]
struct Capture {
    name: String,
    bytes: Vec<u8>,
    bits: usize,
    power: Option<[u16; 3]>,
}

fn captures() -> Vec<Capture> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_path(PATH).unwrap();

    reader
        .records()
        .map(|r| {
            let r = r.unwrap();
            let power = if r[3].is_empty() {
                None
            } else {
                Some([r[3].parse().unwrap(), r[4].parse().unwrap(), r[5].parse().unwrap()])
            };

            Capture {
                name: r[0].to_string(),
                bits: r[1].parse().unwrap(),
                bytes: from_hex(&r[2]),
                power,
            }
        })
        .collect()
}

#[test]
fn decode_captures() {
    let captures = captures();
    assert!(!captures.is_empty());

    for capture in captures {
        let row = BitRow::new(&capture.bytes, capture.bits).unwrap();
        let record = avec::decode_row(&row, &clock);

        match capture.power {
            Some(power) => {
                let record = record.unwrap_or_else(|| panic!("{}: no record", capture.name));
                assert_eq!(record.power, power, "{}", capture.name);
                assert_eq!(record.model, MODEL);
                assert_eq!(record.time, TIME);
                assert_eq!(record.rc, None);
                assert_eq!(record.battery, None);
            }
            None => assert!(record.is_none(), "{}: unexpected record", capture.name),
        }
    }
}

#[test]
fn decode_captures_with_device() {
    for capture in captures() {
        let row = BitRow::new(&capture.bytes, capture.bits).unwrap();
        let record = avec::device::CURRENT_COST.decode(&row, &clock);
        assert_eq!(record.map(|r| r.power), capture.power, "{}", capture.name);
    }
}
