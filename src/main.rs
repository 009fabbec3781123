use std::env::args_os;
use std::process::ExitCode;

use brimage_colour::{match_colours, CLIParser};

fn main() -> ExitCode {
    let mut cli_parser = CLIParser::default();
    let arguments = cli_parser.parse(args_os());
    match match_colours(&arguments) {
        Ok(matches) => {
            for (colour, matched) in arguments.colours().iter().zip(&matches) {
                let out_of_tolerance = arguments
                    .max_difference()
                    .is_some_and(|tolerance| !matched.within(tolerance));
                println!(
                    "{} -> {} (index {}, difference {}){}",
                    colour,
                    matched.colour,
                    matched.index,
                    matched.difference,
                    if out_of_tolerance {
                        " out of tolerance"
                    } else {
                        ""
                    }
                );
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Matching failed because of: {}", e);
            ExitCode::FAILURE
        }
    }
}
