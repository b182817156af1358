use crate::prelude::*;
use clap::Parser;
use std::process::ExitCode;

mod convert;
mod prelude;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Reads `staticcheck -f json` output from stdin and writes a GitLab Code Quality report to stdout.\n\nExits with 0 when there are no findings and 1 otherwise."
)]
pub struct App {}

fn main() -> Result<ExitCode> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    crate::convert::run(app)
}
