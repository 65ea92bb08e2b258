use clap::arg;

pub const CLAP_STYLING: clap::builder::styling::Styles = clap::builder::styling::Styles::styled()
    .header(clap_cargo::style::HEADER)
    .usage(clap_cargo::style::USAGE)
    .literal(clap_cargo::style::LITERAL)
    .placeholder(clap_cargo::style::PLACEHOLDER)
    .error(clap_cargo::style::ERROR)
    .valid(clap_cargo::style::VALID)
    .invalid(clap_cargo::style::INVALID);

pub fn command_argument_builder() -> clap::Command {
    clap::Command::new("graphnorm")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("graphnorm")
        .about(
            "Reads `node <name> <x> <y>` and `edge <origin> <destination>` lines from stdin, \
            rescales node coordinates onto [-1, 1] and prints addNode/addEdge commands to \
            stdout. All options are optional; without them stdin -> stdout is the whole contract.",
        )
        .styles(CLAP_STYLING)
        .arg(
            arg!(-i --"input" <PATH>)
                .required(false)
                .help("Read records from a file instead of standard input"),
        )
        .arg(
            arg!(-o --"output" <PATH>)
                .required(false)
                .help("Write commands to a file instead of standard output"),
        )
        .arg(
            arg!(--"allow-degenerate")
                .required(false)
                .help(
                    "Emit NaN coordinates when all nodes share an x or y value instead of \
                    failing (an input without nodes then yields only edges)",
                )
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            arg!(-v --"verbose")
                .required(false)
                .help("Log more to stderr (-v info, -vv debug)")
                .action(clap::ArgAction::Count)
                .conflicts_with("quiet"),
        )
        .arg(
            arg!(-q --"quiet")
                .required(false)
                .help("Only log errors")
                .action(clap::ArgAction::SetTrue),
        )
}
