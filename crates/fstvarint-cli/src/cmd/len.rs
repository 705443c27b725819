// crates/fstvarint-cli/src/cmd/len.rs

use clap::Args;
use fstvarint_core::encoded_len;

#[derive(Args, Debug)]
pub struct LenArgs {
    /// Decimal u64 values
    #[arg(required = true)]
    pub values: Vec<u64>,
}

pub fn run(args: LenArgs) -> anyhow::Result<()> {
    for &v in &args.values {
        println!("value={} len={}", v, encoded_len(v));
    }
    Ok(())
}
