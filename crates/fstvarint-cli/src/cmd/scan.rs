// crates/fstvarint-cli/src/cmd/scan.rs

use anyhow::Context;
use clap::Args;
use fstvarint_core::{DecodeError, VarintCursor, MAX_ENCODED_LEN};

use crate::io::raw;

#[derive(Args, Debug)]
pub struct ScanArgs {
    /// File holding back-to-back varints
    #[arg(long)]
    pub r#in: String,

    /// Report a cut-off final varint instead of failing
    #[arg(long, default_value_t = false)]
    pub allow_truncated_tail: bool,
}

#[derive(Debug, Default)]
struct ScanStats {
    count: u64,
    sum: u128,
    max: u64,
    // index = encoded length
    by_len: [u64; MAX_ENCODED_LEN + 1],
    truncated_tail: usize,
}

pub fn run(args: ScanArgs) -> anyhow::Result<()> {
    let bytes = raw::read_raw(&args.r#in)?;
    let st = scan(&bytes, args.allow_truncated_tail)?;

    eprintln!("--- scan ---");
    eprintln!("file            = {}", args.r#in);
    eprintln!("bytes           = {}", bytes.len());
    eprintln!("varints         = {}", st.count);
    eprintln!("sum             = {}", st.sum);
    eprintln!("max             = {}", st.max);
    if st.truncated_tail > 0 {
        eprintln!("truncated_tail  = {} bytes", st.truncated_tail);
    }

    eprintln!("--- lengths ---");
    for (len, &n) in st.by_len.iter().enumerate().skip(1) {
        if n == 0 {
            continue;
        }
        let pct = (n as f64) * 100.0 / (st.count as f64);
        eprintln!("len={:>2} count={} ({:.3}%)", len, n, pct);
    }

    Ok(())
}

fn scan(bytes: &[u8], allow_truncated_tail: bool) -> anyhow::Result<ScanStats> {
    let mut st = ScanStats::default();
    let mut c = VarintCursor::new(bytes);

    while !c.is_empty() {
        let offset = c.position();
        let value = match c.read_u64() {
            Ok(v) => v,
            Err(DecodeError::Truncated) if allow_truncated_tail => {
                st.truncated_tail = c.remaining().len();
                break;
            }
            Err(e) => return Err(e).with_context(|| format!("scan varint at offset {offset}")),
        };
        st.count += 1;
        st.sum += u128::from(value);
        st.max = st.max.max(value);
        st.by_len[c.position() - offset] += 1;
    }

    Ok(st)
}
