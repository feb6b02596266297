//! # Quickstart Example
//!
//! Minimal tour of canable-codec:
//! - Encode text fields into an adapter command
//! - Decode an adapter line back into fields
//! - Work with typed frames
//!
//! ```bash
//! cargo run --example quickstart
//! ```

use canable_codec::{decode, encode, CanFrame, CanId, Decoder};

fn main() {
    println!("=== canable-codec Quickstart ===\n");

    // ======================================================================
    // 1. Encode fields collected from a form
    // ======================================================================
    println!("1. Encoding text fields");
    match encode("00000001", "2", ["de", "ad"]) {
        Ok(command) => println!("   -> {command}"),
        Err(e) => println!("   rejected: {e}"),
    }
    if let Err(e) = encode("20000000", "0", [""; 0]) {
        println!("   20000000 is out of range: {e}");
    }

    // ======================================================================
    // 2. Decode lines reported by the adapter
    // ======================================================================
    println!("\n2. Decoding adapter lines");
    for line in ["T18eaff003010203", "T000000010", "T00000001900"] {
        match decode(line) {
            Ok(fields) => {
                let payload: Vec<&str> = fields.payload().collect();
                println!(
                    "   {line}: id={} dlc={} data={payload:?}",
                    fields.identifier(),
                    fields.length()
                );
            }
            Err(e) => println!("   {line}: {e}"),
        }
    }

    let lenient = Decoder::new().accept_any_leader(true);
    println!("   lenient 'x000000010' ok: {}", lenient.decode("x000000010").is_ok());

    // ======================================================================
    // 3. Typed frames
    // ======================================================================
    println!("\n3. Typed frames");
    let id = match CanId::new(0x0CF0_0400) {
        Ok(id) => id,
        Err(e) => return println!("   {e}"),
    };
    if let Ok(frame) = CanFrame::new(id, &[0xF0, 0xFF, 0x7D]) {
        let command = frame.to_command();
        println!("   {frame:?} -> {command}");
        println!("   back: {:?}", CanFrame::from_command(command.as_str()));
    }

    println!("\n=== Quickstart complete ===");
}
