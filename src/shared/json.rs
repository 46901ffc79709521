use crate::shared::Result;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Serializer;

const INDENT: &[u8] = b"    ";

/// Renders a value as JSON indented by four spaces per level.
///
/// This is the format of the document on disk and of everything printed to
/// stdout.
pub fn to_indented_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    value.serialize(&mut serializer)?;

    Ok(String::from_utf8(buffer)?)
}
