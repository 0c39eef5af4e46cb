use clap::{Arg, Command};

pub const CALL_CMD: &str = "call";

/// Creates the call CLI Command object
pub fn create_call_cli() -> Command {
    Command::new(CALL_CMD)
        .about("Call coverage islands from a BED-like file of aligned reads and rank them")
        .arg(
            Arg::new("reads")
                .long("reads")
                .short('r')
                .help("Path to the BED6 file of aligned reads (plain or gzipped), or '-' for stdin")
                .required(true),
        )
        .arg(
            Arg::new("threshold")
                .long("threshold")
                .short('t')
                .value_parser(clap::value_parser!(i32))
                .help("Minimum depth a position must strictly exceed to join an island")
                .required(true),
        )
        .arg(
            Arg::new("fraglen")
                .long("fraglen")
                .short('f')
                .default_value("auto")
                .help("Fragment length in bases, or 'auto' to estimate it from the strand shift"),
        )
        .arg(
            Arg::new("maxshift")
                .long("maxshift")
                .short('m')
                .value_parser(clap::value_parser!(i32))
                .default_value("500")
                .help("Largest strand shift examined when estimating the fragment length"),
        )
        .arg(
            Arg::new("chrom")
                .long("chrom")
                .short('c')
                .help("Restrict output to islands on one chromosome"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Path of the output file")
                .required(true),
        )
        .arg(
            Arg::new("outputtype")
                .long("outputtype")
                .short('y')
                .value_parser(["tsv", "json"])
                .default_value("tsv")
                .help("Output as tsv or json"),
        )
}
