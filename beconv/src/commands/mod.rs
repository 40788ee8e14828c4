mod convert;

use clap::Parser;
use convert::ConvertCommand;
use eyre::Result;

/// Extension trait for exiting on configuration errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for beconv_config::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "beconv")]
#[command(version)]
#[command(about = "Convert backend TypeScript declarations into frontend types")]
pub(crate) struct Cli {
    #[command(flatten)]
    convert: ConvertCommand,

    /// Print debug logs to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        crate::logging::init(self.verbose);
        self.convert.run()
    }
}
