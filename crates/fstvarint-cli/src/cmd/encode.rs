// crates/fstvarint-cli/src/cmd/encode.rs

use clap::Args;
use fstvarint_core::{encode, encode_into};

use crate::io::raw;

#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Decimal u64 values to encode
    #[arg(required = true)]
    pub values: Vec<u64>,

    /// Also write the concatenated encodings to this file
    #[arg(long)]
    pub raw: Option<String>,
}

pub fn run(args: EncodeArgs) -> anyhow::Result<()> {
    let mut out = Vec::new();
    for &v in &args.values {
        let enc = encode(v);
        println!("value={} len={} hex={}", v, enc.len(), hex::encode(&enc[..]));
        encode_into(v, &mut out);
    }

    if let Some(path) = args.raw.as_deref() {
        raw::write_raw(path, &out)?;
        eprintln!("raw_out         = {} ({} bytes)", path, out.len());
    }

    Ok(())
}
