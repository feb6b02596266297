//! The codec holds no state: many tasks can encode and decode at once.

use canable_codec::{decode, encode, CanFrame, CanId, WireCommand};

fn assert_send_sync<T: Send + Sync>() {}

#[test]
/// Public values can cross task and thread boundaries.
fn public_types_are_send_sync() {
    assert_send_sync::<WireCommand>();
    assert_send_sync::<CanFrame>();
    assert_send_sync::<canable_codec::FrameFields>();
    assert_send_sync::<canable_codec::Decoder>();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
/// Parallel tasks each get the result for their own frame.
async fn parallel_round_trips() {
    let mut handles = Vec::new();
    for i in 0u32..64 {
        handles.push(tokio::spawn(async move {
            let frame = CanFrame::new(CanId::new(i * 0x0080_0001).unwrap(), &[i as u8; 4]).unwrap();
            let command = frame.to_command();
            let fields = decode(command.as_str()).unwrap();
            let again = encode(fields.identifier(), fields.length(), fields.payload()).unwrap();
            (frame, command, again)
        }));
    }
    for handle in handles {
        let (frame, command, again) = handle.await.unwrap();
        assert_eq!(command, again);
        assert_eq!(CanFrame::from_command(again.as_str()).unwrap(), frame);
    }
}
