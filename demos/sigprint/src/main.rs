mod cli;

use clap::Parser;
use log::info;
use sigdesc::prelude::*;
use std::io::{Error, ErrorKind};

use crate::cli::Args;

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    if args.verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    } else {
        env_logger::init();
    }

    let signum = match (args.signum, args.name()) {
        (Some(signum), _) => signum,
        (None, Some(query)) => from_name(query).ok_or_else(|| {
            Error::new(
                ErrorKind::InvalidInput,
                format!("unknown signal name: {query}"),
            )
        })?,
        (None, None) => {
            return Err(Error::new(ErrorKind::InvalidInput, "no signal given"));
        }
    };

    info!("resolved query to signal {signum}");

    // Always print the number next to the description; the text alone can
    // be ambiguous across platforms.
    match name(signum) {
        Some(sig_name) => println!("signal {signum} ({sig_name}): {}", describe(signum)),
        None => println!("signal {signum}: {}", describe(signum)),
    }

    Ok(())
}
