mod call;
mod shift;

use anyhow::Result;
use clap::Command;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const PKG_NAME: &str = "crest";
    pub const BIN_NAME: &str = "crest";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .author("crest-bio")
        .about("Region-of-interest detection for ChIP-seq data: turns aligned sequencing reads into ranked candidate binding-site intervals.")
        .subcommand_required(true)
        .subcommand(call::cli::create_call_cli())
        .subcommand(shift::cli::create_shift_cli())
}

fn main() -> Result<()> {
    env_logger::init();

    let app = build_parser();
    let matches = app.get_matches();

    match matches.subcommand() {
        //
        // PEAK CALLING
        //
        Some((call::cli::CALL_CMD, matches)) => {
            call::handlers::run_call(matches)?;
        }

        //
        // FRAGMENT LENGTH ESTIMATION
        //
        Some((shift::cli::SHIFT_CMD, matches)) => {
            shift::handlers::run_shift(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
