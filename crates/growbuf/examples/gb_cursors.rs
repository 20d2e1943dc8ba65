// Copyright (c) The Growbuf Project Authors.
// Licensed under the MIT License.

//! Encoding and decoding a structured message with scoped cursors.
//!
//! The cursor tracks the position after every operation, so multi-field formats
//! need no manual offset arithmetic on either side.

use growbuf::GrowBuf;

fn main() {
    let message = encode_message("temperature", &[21, 20, 22, 23]);

    println!("{message:?}");

    decode_message(&message);
}

fn encode_message(topic: &str, readings: &[u8]) -> GrowBuf {
    let mut buf = GrowBuf::new();

    buf.write_at(0, |cursor| {
        cursor.write_num_be(u16::try_from(topic.len()).expect("topic length fits the u16 prefix"));
        cursor.write_str(topic);
        cursor.write_num_be(u32::try_from(readings.len()).expect("reading count fits the u32 prefix"));
        cursor.write_slice(readings);
    });

    buf
}

fn decode_message(message: &GrowBuf) {
    message.read_at(0, |cursor| {
        let topic_len = cursor.read_num_be::<u16>() as usize;
        let topic = cursor.read_str(topic_len).unwrap_or_else(|| "<undecodable>".to_string());

        let reading_count = cursor.read_num_be::<u32>() as usize;
        let readings = cursor.read_slice(reading_count);

        println!("Topic {topic:?} carries {reading_count} readings: {readings:?}");
    });
}
