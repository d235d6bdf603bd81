use std::process::ExitCode;

use clap::Parser;
use svg_bundle::{Args, logging};

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.log_level());

    match svg_bundle::run(&args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
