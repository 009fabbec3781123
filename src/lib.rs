use threadpool::ThreadPool;

pub use cli::CLIParser;
pub use colour::Colour;
pub use error::Error;
pub use palette::{Match, Palette};

mod cli;
pub mod colour;
mod error;
mod logger;
pub mod palette;

pub type Result<T> = std::result::Result<T, error::Error>;

pub struct Arguments {
    colours: Vec<Colour>,
    palette: Vec<Colour>,
    number_of_threads: usize,
    max_difference: Option<f64>,
}

impl Arguments {
    pub fn colours(&self) -> &[Colour] {
        &self.colours
    }

    pub fn max_difference(&self) -> Option<f64> {
        self.max_difference
    }
}

pub fn match_colours(arguments: &Arguments) -> Result<Vec<Match>> {
    let palette = Palette::new(arguments.palette.clone());
    let threadpool = ThreadPool::new(arguments.number_of_threads.max(1));
    let matches = palette.match_all_parallel(&arguments.colours, &threadpool)?;
    log::info!(
        "Matched {} colours against {} palette entries on {} threads",
        matches.len(),
        palette.len(),
        threadpool.max_count()
    );
    if let Some(tolerance) = arguments.max_difference {
        for (colour, matched) in arguments.colours.iter().zip(&matches) {
            if !matched.within(tolerance) {
                log::warn!(
                    "{} is {} away from its nearest palette colour {}, tolerance is {}",
                    colour,
                    matched.difference,
                    matched.colour,
                    tolerance
                );
            }
        }
    }
    Ok(matches)
}
