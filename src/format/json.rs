//! JSON codec, tab indented.

use std::io::{Read, Write};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use super::Codec;
use crate::error::Result;
use crate::tree::Node;

pub struct JsonCodec;

impl Codec for JsonCodec {
    fn encode(&self, value: &Node, writer: &mut dyn Write) -> Result<()> {
        let formatter = PrettyFormatter::with_indent(b"\t");
        let mut serializer = serde_json::Serializer::with_formatter(&mut *writer, formatter);
        value.serialize(&mut serializer)?;
        writer.write_all(b"\n")?;
        Ok(())
    }

    fn decode(&self, reader: &mut dyn Read) -> Result<Node> {
        Ok(serde_json::from_reader(reader)?)
    }
}
