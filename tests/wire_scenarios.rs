//! End-to-end scenarios through the public API: what a UI layer sends and
//! what an adapter reports back.

use canable_codec::{decode, encode, CanFrame, CanId, Decoder, FrameCodecError, FrameFields};

#[test]
/// Fields typed by a user become the exact adapter command.
fn user_fields_to_command() {
    let command = encode("00000001", "2", ["de", "ad"]).unwrap();
    assert_eq!(command.as_str(), "T000000012DEAD");
    assert_eq!(command.to_string(), "T000000012DEAD");
}

#[test]
/// Adapter-reported lines come back as normalized text fields.
fn adapter_line_to_fields() {
    let fields = decode("T000000012DEAD").unwrap();
    assert_eq!(fields.identifier(), "00000001");
    assert_eq!(fields.length(), "2");
    assert_eq!(fields.payload().collect::<Vec<_>>(), vec!["DE", "AD"]);

    let empty = decode("T000000010").unwrap();
    assert!(empty.payload().next().is_none());
}

#[test]
/// Every documented rejection yields the same single outcome.
fn rejections_are_undifferentiated() {
    let no_data: [&str; 0] = [];
    let failures = [
        decode("T00000001900"),
        decode("T0000000101DE AD"),
        decode("T200000000"),
        decode("T000000012DE"),
        decode("T000000012DEADBE"),
        decode("T0000000"),
    ];
    for result in failures {
        assert_eq!(result, Err(FrameCodecError::FormatInvalid));
    }
    assert_eq!(
        encode("20000000", "0", no_data),
        Err(FrameCodecError::FormatInvalid)
    );
    assert_eq!(
        FrameCodecError::FormatInvalid.to_string(),
        "Invalid extended frame format"
    );
}

#[test]
/// Every DLC from 0 to 8 survives encode then decode.
fn round_trip_all_lengths() {
    let bytes = ["a0", "b1", "c2", "d3", "e4", "f5", "06", "17"];
    for n in 0..=8 {
        let length = n.to_string();
        let command = encode("1fffffff", &length, &bytes[..n]).unwrap();
        assert_eq!(command.len(), 10 + 2 * n);

        let fields = decode(command.as_str()).unwrap();
        assert_eq!(fields.identifier(), "1FFFFFFF");
        assert_eq!(fields.length(), length);
        let expected: Vec<String> = bytes[..n].iter().map(|b| b.to_uppercase()).collect();
        assert_eq!(fields.payload().collect::<Vec<_>>(), expected);

        let again = encode(fields.identifier(), fields.length(), fields.payload()).unwrap();
        assert_eq!(again, command);
    }
}

#[test]
/// Lowercase commands re-encode to their uppercase form.
fn decode_then_encode_uppercases() {
    let line = "T0abcdef03c0ffee";
    let fields: FrameFields = line.parse().unwrap();
    let command = encode(fields.identifier(), fields.length(), fields.payload()).unwrap();
    assert_eq!(command.as_str(), line.to_uppercase());
}

#[test]
/// The permissive decoder ignores the leader character.
fn permissive_leader() {
    assert!(decode("t000000012DEAD").is_err());
    let fields = Decoder::new()
        .accept_any_leader(true)
        .decode("t000000012DEAD")
        .unwrap();
    assert_eq!(fields, decode("T000000012DEAD").unwrap());
}

#[test]
/// Typed frames and text fields describe the same frame.
fn typed_frame_round_trip() {
    let frame = CanFrame::new(CanId::new(0x0CF0_0400).unwrap(), &[0xF0, 0xFF, 0x7D]).unwrap();
    let command = frame.to_command();
    assert_eq!(command.as_str(), "T0CF004003F0FF7D");
    assert_eq!(CanFrame::from_command(command.as_str()).unwrap(), frame);
}
