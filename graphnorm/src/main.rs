use colored::Colorize;
use graphnorm::commands::command_argument_builder;
use graphnorm::handlers::{ConvertOptions, handle_convert, init_logging};

fn main() {
    let matches = command_argument_builder().get_matches();
    init_logging(matches.get_count("verbose"), matches.get_flag("quiet"));

    let options = ConvertOptions::from_matches(&matches);
    if let Err(e) = handle_convert(&options) {
        eprintln!("{} {:#}", "✗".red().bold(), e);
        std::process::exit(1);
    }
}
