#[derive(clap::Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// Number of signals to report before exiting (0 = until SIGINT/SIGTERM).
    #[clap(long, default_value_t = 0)]
    pub exit_after: u32,

    /// Enable verbose informational messages.
    #[clap(long)]
    pub verbose: bool,
}
