use clap::Parser;
use feedgate::cli::{run, Cli};

fn main() -> std::process::ExitCode {
    run(Cli::parse())
}
