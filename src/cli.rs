use crate::colour::Colour;
use crate::Arguments;
use clap::{
    arg, builder::RangedU64ValueParser, crate_authors, crate_description, crate_name,
    crate_version, value_parser, Arg, ArgAction, ArgMatches, Command,
};
use std::ffi::OsString;
use std::{io, thread};

pub struct CLIParser {
    command: Command,
}

impl CLIParser {
    pub fn new() -> Self {
        let command = Self::create_base_command();
        let command = Self::register_arguments(command);
        CLIParser { command }
    }

    pub fn parse<I, T>(&mut self, itr: I) -> Arguments
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self
            .command
            .try_get_matches_from_mut(itr)
            .unwrap_or_else(|e| e.exit());
        Self::extract_arguments(&matches)
    }

    fn register_arguments(command: Command) -> Command {
        let command = Self::register_colours_argument(command);
        let command = Self::register_palette_argument(command);
        let command = Self::register_threads_argument(command);
        Self::register_max_difference_argument(command)
    }

    fn register_colours_argument(command: Command) -> Command {
        command.arg(Self::create_colours_argument())
    }

    fn register_palette_argument(command: Command) -> Command {
        command.arg(Self::create_palette_argument())
    }

    fn register_threads_argument(command: Command) -> Command {
        command.arg(Self::create_threads_argument())
    }

    fn register_max_difference_argument(command: Command) -> Command {
        command.arg(Self::create_max_difference_argument())
    }

    fn create_base_command() -> Command {
        Command::new(crate_name!())
            .version(crate_version!())
            .author(crate_authors!())
            .about(crate_description!())
    }

    fn create_colours_argument() -> Arg {
        Arg::new("colours")
            .help("Colours to match, as grey:V, rgb:R,G,B, rgba:R,G,B,A or #RRGGBB[AA]")
            .value_parser(value_parser!(Colour))
            .action(ArgAction::Append)
            .num_args(1..)
            .required(true)
    }

    fn create_palette_argument() -> Arg {
        arg!(palette: -p --palette <COLOUR> "Palette colour, repeat for every entry")
            .value_parser(value_parser!(Colour))
            .action(ArgAction::Append)
            .required(true)
    }

    fn create_threads_argument() -> Arg {
        arg!(-t --threads <THREADS> "Number of Threads")
            .default_value(get_number_of_threads().unwrap_or(1).to_string())
            .required(false)
            .value_parser(RangedU64ValueParser::<usize>::new().range(1..))
    }

    fn create_max_difference_argument() -> Arg {
        arg!(max_difference: -m --max_difference <DIFF> "Largest difference accepted as a match")
            .required(false)
            .value_parser(parse_max_difference)
    }

    fn extract_arguments(matches: &ArgMatches) -> Arguments {
        Arguments {
            colours: Self::extract_colours_argument(matches),
            palette: Self::extract_palette_argument(matches),
            number_of_threads: Self::extract_threads_argument(matches),
            max_difference: Self::extract_max_difference_argument(matches),
        }
    }

    fn extract_colours_argument(matches: &ArgMatches) -> Vec<Colour> {
        matches
            .get_many::<Colour>("colours")
            .expect("Required argument colours not provided")
            .copied()
            .collect()
    }

    fn extract_palette_argument(matches: &ArgMatches) -> Vec<Colour> {
        matches
            .get_many::<Colour>("palette")
            .expect("Required argument palette not provided")
            .copied()
            .collect()
    }

    fn extract_threads_argument(matches: &ArgMatches) -> usize {
        matches
            .get_one::<usize>("threads")
            .expect("Required argument threads not provided")
            .to_owned()
    }

    fn extract_max_difference_argument(matches: &ArgMatches) -> Option<f64> {
        matches.get_one::<f64>("max_difference").copied()
    }
}

impl Default for CLIParser {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_max_difference(value: &str) -> Result<f64, String> {
    let max_difference = value
        .parse::<f64>()
        .map_err(|e| format!("'{}' is not a number: {}", value, e))?;
    if !max_difference.is_finite() || max_difference < 0.0 {
        return Err(format!(
            "'{}' must be a finite, non-negative difference",
            value
        ));
    }
    Ok(max_difference)
}

fn get_number_of_threads() -> io::Result<usize> {
    Ok(thread::available_parallelism()?.get())
}
