// crates/fstvarint-cli/src/io/raw.rs

use anyhow::Context;

/// Read a whole file of concatenated varints.
pub fn read_raw(path: &str) -> anyhow::Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("read raw varints: {path}"))
}

pub fn write_raw(path: &str, bytes: &[u8]) -> anyhow::Result<()> {
    std::fs::write(path, bytes).with_context(|| format!("write raw varints: {path}"))?;
    Ok(())
}

/// Parse hex text into bytes. Accepts an optional `0x` prefix and ignores
/// whitespace, so `"ac 02"` and `"0xac02"` are the same window.
pub fn parse_hex(text: &str) -> anyhow::Result<Vec<u8>> {
    let t = text.trim();
    let t = t
        .strip_prefix("0x")
        .or_else(|| t.strip_prefix("0X"))
        .unwrap_or(t);
    let compact: String = t.chars().filter(|c| !c.is_whitespace()).collect();
    hex::decode(&compact).with_context(|| format!("parse hex: {text:?}"))
}
