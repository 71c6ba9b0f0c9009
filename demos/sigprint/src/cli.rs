#[derive(clap::Parser, Debug)]
#[clap(author, version, about, long_about = None)]
#[clap(arg_required_else_help = true)]
#[clap(group(
  clap::ArgGroup::new("query")
    .required(true)
    .multiple(false)
    .args(["signum", "name"]),
))]
pub struct Args {
    /// Signal number to describe, e.g. 2 or 11.
    #[clap(value_name = "SIGNUM", allow_negative_numbers = true)]
    pub signum: Option<i32>,

    /// Signal name to resolve instead of a number, e.g. INT or SIGTERM.
    #[clap(short, long, value_name = "NAME")]
    pub name: Option<String>,

    /// Enable verbose informational messages.
    #[clap(long)]
    pub verbose: bool,
}

impl Args {
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}
