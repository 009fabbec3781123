use std::sync::mpsc;

use threadpool::ThreadPool;

use crate::colour::Colour;
use crate::error::Error;
use crate::Result;

/// Palette entry chosen for a colour, together with its distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Match {
    pub index: usize,
    pub colour: Colour,
    pub difference: f64,
}

impl Match {
    pub fn within(&self, tolerance: f64) -> bool {
        self.difference <= tolerance
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Palette {
    colours: Vec<Colour>,
}

impl From<Vec<Colour>> for Palette {
    fn from(colours: Vec<Colour>) -> Self {
        Self::new(colours)
    }
}

impl Palette {
    pub fn new(colours: Vec<Colour>) -> Self {
        Self { colours }
    }

    pub fn colours(&self) -> &[Colour] {
        &self.colours
    }

    pub fn len(&self) -> usize {
        self.colours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }

    /// Finds the entry closest to `colour`. Each entry is the left operand of
    /// the difference, so the entry's variant decides the metric. Ties go to
    /// the lowest index.
    pub fn nearest(&self, colour: &Colour) -> Result<Match> {
        let mut best: Option<Match> = None;
        for (index, entry) in self.colours.iter().enumerate() {
            let difference = entry.difference(colour);
            if best.is_none_or(|current| difference < current.difference) {
                best = Some(Match {
                    index,
                    colour: *entry,
                    difference,
                });
            }
        }
        best.ok_or(Error::EmptyPalette)
    }

    pub fn match_all(&self, colours: &[Colour]) -> Result<Vec<Match>> {
        colours.iter().map(|colour| self.nearest(colour)).collect()
    }

    /// Same as [`Palette::match_all`], but the colours are split into one
    /// contiguous chunk per pool thread. Matches come back in input order.
    pub fn match_all_parallel(
        &self,
        colours: &[Colour],
        threadpool: &ThreadPool,
    ) -> Result<Vec<Match>> {
        if self.is_empty() {
            return Err(Error::EmptyPalette);
        }
        if colours.is_empty() {
            return Ok(Vec::new());
        }
        let chunk_size = colours.len().div_ceil(threadpool.max_count().max(1));
        let (sender, receiver) = mpsc::channel();
        let mut number_of_chunks = 0;
        for (chunk_index, chunk) in colours.chunks(chunk_size).enumerate() {
            let palette = self.clone();
            let chunk = chunk.to_vec();
            let sender = sender.clone();
            threadpool.execute(move || {
                log::debug!(
                    "Matching chunk {} with {} colours",
                    chunk_index,
                    chunk.len()
                );
                let matches = palette.match_all(&chunk);
                // Receiver only goes away once every chunk is in or a worker died.
                let _ = sender.send((chunk_index, matches));
            });
            number_of_chunks += 1;
        }
        drop(sender);
        collect_chunks(&receiver, number_of_chunks, colours.len())
    }
}

type ChunkMatches = (usize, Result<Vec<Match>>);

/// Reassembles chunk results in chunk order. A worker that panics drops its
/// sender without sending, which shows up here as a missing chunk.
fn collect_chunks(
    receiver: &mpsc::Receiver<ChunkMatches>,
    number_of_chunks: usize,
    capacity: usize,
) -> Result<Vec<Match>> {
    let mut chunks: Vec<ChunkMatches> = receiver.iter().take(number_of_chunks).collect();
    if chunks.len() != number_of_chunks {
        return Err(Error::WorkerDisconnected);
    }
    chunks.sort_by_key(|(chunk_index, _)| *chunk_index);
    let mut matches = Vec::with_capacity(capacity);
    for (_, chunk_matches) in chunks {
        matches.extend(chunk_matches?);
    }
    Ok(matches)
}
