use clap::{Arg, Command};

pub const SHIFT_CMD: &str = "shift";

/// Creates the shift CLI Command object
pub fn create_shift_cli() -> Command {
    Command::new(SHIFT_CMD)
        .about("Estimate the fragment length from the strand shift of read 5' ends")
        .arg(
            Arg::new("reads")
                .long("reads")
                .short('r')
                .help("Path to the BED6 file of aligned reads (plain or gzipped), or '-' for stdin")
                .required(true),
        )
        .arg(
            Arg::new("maxshift")
                .long("maxshift")
                .short('m')
                .value_parser(clap::value_parser!(i32))
                .default_value("500")
                .help("Largest strand shift to examine"),
        )
}
