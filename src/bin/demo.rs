//! Demo walkthrough of the voltage_bytes API
//!
//! Run with logging enabled:
//! `RUST_LOG=trace cargo run --bin demo`

use anyhow::Result;
use voltage_bytes::{concat, ByteBuffer, ByteOrder};

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    println!("voltage_bytes Demo");
    println!("==================");

    // Fixed-width accessors
    let mut buffer = ByteBuffer::zeroed(8);
    buffer.set_u16_be(0, 0x0102)?.set_u16_le(2, 0x0304)?;
    buffer.set_u32(4, 0xDEADBEEF, ByteOrder::BigEndian)?;
    println!("buffer after writes: {buffer}");
    println!("u16 BE @0 = 0x{:04X}", buffer.get_u16_be(0)?);
    println!("u16 LE @2 = 0x{:04X}", buffer.get_u16_le(2)?);
    println!("u32 BE @4 = 0x{:08X}", buffer.get_u32_be(4)?);

    // Out-of-range writes are typed errors, not truncation
    match buffer.set_u16_be(0, 0x10000) {
        Ok(_) => println!("unexpected success"),
        Err(err) => println!("rejected write: {err}"),
    }

    // Padding
    let short = ByteBuffer::new(vec![0x01, 0x02]);
    println!("pad_start(4): {}", hex::encode(short.pad_start(4)));
    println!("pad_end(4):   {}", hex::encode(short.pad_end(4)));

    // Arbitrary-precision conversion round trip
    let amount = ByteBuffer::from_uint_be(0x0102_0304_0506u64);
    println!("minimal BE encoding: {amount}");
    println!("back as integer:     0x{:X}", amount.to_biguint_be());

    // Two's-complement signed encodings
    let negative = ByteBuffer::from_int_be(-0x0103, 2)?;
    println!("-0x0103 as 2-byte BE: {negative}");

    // Concatenation
    let frame = concat(&[
        ByteBuffer::from_u16_be(0x0001)?.as_slice(),
        ByteBuffer::from_uint_be_sized(0xFFu32, 4)?.as_slice(),
    ]);
    println!("assembled frame: {}", hex::encode(&frame));

    Ok(())
}
