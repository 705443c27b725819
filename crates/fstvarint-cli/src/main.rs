// crates/fstvarint-cli/src/main.rs

use clap::{Parser, Subcommand};

mod cmd;
mod io;

#[derive(Parser)]
#[command(name = "fstvarint-cli")]
#[command(about = "Inspect and produce FST-style unsigned varints", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Encode decimal values as varints (hex per value, optional raw file)
    Encode(cmd::encode::EncodeArgs),

    /// Decode concatenated varints from a hex string
    Decode(cmd::decode::DecodeArgs),

    /// Print the encoded length of each value without encoding it
    Len(cmd::len::LenArgs),

    /// Decode a raw file of concatenated varints and report stats
    Scan(cmd::scan::ScanArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Encode(args) => cmd::encode::run(args),
        Commands::Decode(args) => cmd::decode::run(args),
        Commands::Len(args) => cmd::len::run(args),
        Commands::Scan(args) => cmd::scan::run(args),
    }
}
