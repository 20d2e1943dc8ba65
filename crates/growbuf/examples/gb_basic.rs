// Copyright (c) The Growbuf Project Authors.
// Licensed under the MIT License.

//! Basics of working with `GrowBuf`.
//!
//! 1. We encode a sequence of words into an empty buffer, letting it grow as we go.
//! 2. We read the words back and write a status report to the terminal.

use growbuf::{GrowBuf, ReadAt, WriteAt};

// Each word is a 64-bit integer, so this comes to a little under 1 MB of data.
const MESSAGE_LEN_WORDS: usize = 123_456;

fn main() {
    let message = produce_message();

    println!(
        "Encoded {MESSAGE_LEN_WORDS} words into {} bytes ({} bytes of capacity).",
        message.len(),
        message.capacity()
    );

    consume_message(&message);
}

fn produce_message() -> GrowBuf {
    let mut buf = GrowBuf::new();

    // Each word is just an incrementing binary-serialized number, starting from 0.
    // Every write that lands past the current capacity grows the buffer.
    for word in 0..MESSAGE_LEN_WORDS {
        buf.write_num_le(word * size_of::<u64>(), word as u64);
    }

    buf
}

fn consume_message(message: &GrowBuf) {
    // We read the message and calculate the sum of all the words in it.
    let mut sum: u64 = 0;

    for word in 0..MESSAGE_LEN_WORDS {
        sum = sum.saturating_add(message.read_num_le::<u64>(word * size_of::<u64>()));
    }

    println!("Message received. The sum of all words in the message is {sum}.");
}
