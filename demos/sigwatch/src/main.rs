mod cli;

use clap::Parser;

use crate::cli::Args;

fn init_logging(args: &Args) {
    if args.verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    } else {
        env_logger::init();
    }
}

/// Watch for signals and describe each one as it arrives.
#[cfg(unix)]
fn main() -> std::io::Result<()> {
    use log::info;
    use sigdesc::prelude::*;
    use signal_hook::consts::{SIGHUP, SIGINT, SIGQUIT, SIGTERM, SIGUSR1, SIGUSR2};
    use signal_hook::iterator::Signals;

    let args = Args::parse();
    init_logging(&args);

    let mut signals = Signals::new([SIGHUP, SIGINT, SIGQUIT, SIGTERM, SIGUSR1, SIGUSR2])?;
    println!(
        "watching for signals as pid {}; send one with e.g. `kill -HUP {}`",
        std::process::id(),
        std::process::id()
    );

    let mut seen: u32 = 0;
    for signum in signals.forever() {
        match name(signum) {
            Some(sig_name) => {
                println!("received signal {signum} ({sig_name}): {}", describe(signum));
            }
            None => println!("received signal {signum}: {}", describe(signum)),
        }

        seen += 1;
        if args.exit_after > 0 && seen >= args.exit_after {
            info!("reported {seen} signals, exiting");
            break;
        }
        if signum == SIGINT || signum == SIGTERM {
            info!("termination signal received, exiting");
            break;
        }
    }

    Ok(())
}

/// Signal delivery is a Unix concept; elsewhere this binary only explains
/// itself.
#[cfg(not(unix))]
fn main() -> std::io::Result<()> {
    let args = Args::parse();
    init_logging(&args);

    Err(std::io::Error::new(
        std::io::ErrorKind::Unsupported,
        "sigwatch requires Unix signal delivery",
    ))
}
