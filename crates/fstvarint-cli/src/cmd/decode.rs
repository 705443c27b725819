// crates/fstvarint-cli/src/cmd/decode.rs

use anyhow::Context;
use clap::Args;
use fstvarint_core::VarintCursor;

use crate::io::raw;

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Concatenated varints as hex (e.g. "ac02", "0x80 01")
    #[arg(long)]
    pub hex: String,
}

pub fn run(args: DecodeArgs) -> anyhow::Result<()> {
    let bytes = raw::parse_hex(&args.hex)?;
    if bytes.is_empty() {
        anyhow::bail!("empty input: nothing to decode");
    }

    let mut c = VarintCursor::new(&bytes);
    while !c.is_empty() {
        let offset = c.position();
        let value = c
            .read_u64()
            .with_context(|| format!("decode varint at offset {offset}"))?;
        println!(
            "offset={} len={} value={}",
            offset,
            c.position() - offset,
            value
        );
    }
    Ok(())
}
