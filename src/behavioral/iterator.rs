//! Iterator: a `Playlist` hands out a `PlaylistIter` that walks its songs
//! with a configurable step, without exposing how the songs are stored.

use std::io::Write;

use crate::catalog::{Category, Participant, Pattern};
use crate::error::PatternError;
use crate::output;

#[derive(Debug, Clone, PartialEq)]
pub struct Song {
    pub title: String,
    pub artist: String,
}

impl Song {
    pub fn new(title: impl Into<String>, artist: impl Into<String>) -> Self {
        Song {
            title: title.into(),
            artist: artist.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct Playlist {
    songs: Vec<Song>,
}

impl Playlist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, song: Song) {
        self.songs.push(song);
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    pub fn iter(&self) -> PlaylistIter<'_> {
        self.iter_step(1)
    }

    /// A step of 0 is treated as 1.
    pub fn iter_step(&self, step: usize) -> PlaylistIter<'_> {
        PlaylistIter {
            songs: &self.songs,
            position: 0,
            step: step.max(1),
        }
    }
}

impl<'a> IntoIterator for &'a Playlist {
    type Item = &'a Song;
    type IntoIter = PlaylistIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Debug, Clone)]
pub struct PlaylistIter<'a> {
    songs: &'a [Song],
    position: usize,
    step: usize,
}

impl<'a> Iterator for PlaylistIter<'a> {
    type Item = &'a Song;

    fn next(&mut self) -> Option<Self::Item> {
        let song = self.songs.get(self.position)?;
        self.position = self.position.saturating_add(self.step);
        Some(song)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.songs.len().saturating_sub(self.position);
        let count = left.div_ceil(self.step);
        (count, Some(count))
    }
}

impl ExactSizeIterator for PlaylistIter<'_> {}

pub fn sample_playlist() -> Playlist {
    let mut playlist = Playlist::new();
    playlist.add(Song::new("So What", "Miles Davis"));
    playlist.add(Song::new("Take Five", "Dave Brubeck"));
    playlist.add(Song::new("Blue in Green", "Bill Evans"));
    playlist.add(Song::new("Naima", "John Coltrane"));
    playlist
}

pub struct IteratorPattern;

impl Pattern for IteratorPattern {
    fn name(&self) -> &'static str {
        "iterator"
    }

    fn category(&self) -> Category {
        Category::Behavioral
    }

    fn intent(&self) -> &'static str {
        "Access the elements of an aggregate sequentially without exposing its representation."
    }

    fn participants(&self) -> &'static [Participant] {
        const PARTICIPANTS: &[Participant] = &[
            Participant::new("Aggregate", "Playlist"),
            Participant::new("Iterator", "PlaylistIter"),
            Participant::new("Client", "for loops, adapters"),
        ];
        PARTICIPANTS
    }

    fn run(&self, out: &mut dyn Write) -> Result<(), PatternError> {
        output::heading(out, "Iterator")?;
        let playlist = sample_playlist();

        output::section(out, "Step 1")?;
        for song in &playlist {
            writeln!(out, "{} - {}", song.title, song.artist)?;
        }

        output::section(out, "Step 2")?;
        for song in playlist.iter_step(2) {
            writeln!(out, "{} - {}", song.title, song.artist)?;
        }

        output::section(out, "Adapters compose")?;
        let artists: Vec<&str> = playlist
            .iter()
            .filter(|s| s.title.len() > 5)
            .map(|s| s.artist.as_str())
            .collect();
        writeln!(out, "Artists with long titles: {}", artists.join(", "))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walks_all_four() {
        let playlist = sample_playlist();
        let titles: Vec<&str> = playlist.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, ["So What", "Take Five", "Blue in Green", "Naima"]);
    }

    #[test]
    fn test_step_two() {
        let playlist = sample_playlist();
        let titles: Vec<&str> = playlist.iter_step(2).map(|s| s.title.as_str()).collect();
        assert_eq!(titles, ["So What", "Blue in Green"]);
        assert_eq!(playlist.iter_step(3).count(), 2);
    }

    #[test]
    fn test_step_zero_does_not_loop() {
        let playlist = sample_playlist();
        assert_eq!(playlist.iter_step(0).count(), 4);
    }

    #[test]
    fn test_exact_size() {
        let playlist = sample_playlist();
        assert_eq!(playlist.iter().len(), 4);
        assert_eq!(playlist.iter_step(2).len(), 2);
        assert_eq!(playlist.iter_step(3).len(), 2);

        let mut iter = playlist.iter_step(3);
        iter.next();
        assert_eq!(iter.len(), 1);
    }

    #[test]
    fn test_empty_playlist() {
        let playlist = Playlist::new();
        assert!(playlist.is_empty());
        assert_eq!(playlist.iter().next(), None);
    }
}
