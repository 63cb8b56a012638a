//! Doubles each numeric argument and prints it as an English word.

use clap::Parser;
use decorator_cli::{args::DecorateCli, binary_logic};

fn main() -> anyhow::Result<()> {
    // Handle commandline arguments.
    let opt = DecorateCli::parse();
    binary_logic::run(opt)
}
