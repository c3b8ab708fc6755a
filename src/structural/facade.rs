//! Facade: `HomeTheater` hides four subsystems behind two calls.

use std::io::Write;

use crate::catalog::{Category, Participant, Pattern};
use crate::error::PatternError;
use crate::output;

#[derive(Debug, Default)]
pub struct Amplifier {
    pub on: bool,
    pub volume: u8,
}

impl Amplifier {
    pub fn on(&mut self) -> String {
        self.on = true;
        "Amplifier on".to_string()
    }

    pub fn set_volume(&mut self, volume: u8) -> String {
        self.volume = volume;
        format!("Amplifier volume set to {volume}")
    }

    pub fn off(&mut self) -> String {
        self.on = false;
        "Amplifier off".to_string()
    }
}

#[derive(Debug, Default)]
pub struct Projector {
    pub on: bool,
    pub widescreen: bool,
}

impl Projector {
    pub fn on(&mut self) -> String {
        self.on = true;
        "Projector on".to_string()
    }

    pub fn widescreen_mode(&mut self) -> String {
        self.widescreen = true;
        "Projector in widescreen mode".to_string()
    }

    pub fn off(&mut self) -> String {
        self.on = false;
        "Projector off".to_string()
    }
}

#[derive(Debug)]
pub struct Lights {
    pub level: u8,
}

impl Default for Lights {
    fn default() -> Self {
        Lights { level: 100 }
    }
}

impl Lights {
    pub fn dim(&mut self, level: u8) -> String {
        self.level = level.min(100);
        format!("Lights dimmed to {}%", self.level)
    }
}

#[derive(Debug, Default)]
pub struct Player {
    pub playing: Option<String>,
}

impl Player {
    pub fn play(&mut self, title: &str) -> String {
        self.playing = Some(title.to_string());
        format!("Playing \"{title}\"")
    }

    pub fn stop(&mut self) -> String {
        match self.playing.take() {
            Some(title) => format!("Stopped \"{title}\""),
            None => "Nothing to stop".to_string(),
        }
    }
}

#[derive(Debug, Default)]
pub struct HomeTheater {
    pub amplifier: Amplifier,
    pub projector: Projector,
    pub lights: Lights,
    pub player: Player,
}

impl HomeTheater {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the subsystem calls in the order they happened.
    pub fn watch_movie(&mut self, title: &str) -> Vec<String> {
        vec![
            self.lights.dim(10),
            self.projector.on(),
            self.projector.widescreen_mode(),
            self.amplifier.on(),
            self.amplifier.set_volume(5),
            self.player.play(title),
        ]
    }

    pub fn end_movie(&mut self) -> Vec<String> {
        vec![
            self.player.stop(),
            self.amplifier.off(),
            self.projector.off(),
            self.lights.dim(100),
        ]
    }
}

pub struct FacadePattern;

impl Pattern for FacadePattern {
    fn name(&self) -> &'static str {
        "facade"
    }

    fn category(&self) -> Category {
        Category::Structural
    }

    fn intent(&self) -> &'static str {
        "Provide a unified, simpler interface to a set of interfaces in a subsystem."
    }

    fn participants(&self) -> &'static [Participant] {
        const PARTICIPANTS: &[Participant] = &[
            Participant::new("Facade", "HomeTheater"),
            Participant::new("Subsystem classes", "Amplifier, Projector, Lights, Player"),
        ];
        PARTICIPANTS
    }

    fn run(&self, out: &mut dyn Write) -> Result<(), PatternError> {
        output::heading(out, "Facade")?;

        let mut theater = HomeTheater::new();

        output::section(out, "watch_movie")?;
        for step in theater.watch_movie("Raiders of the Lost Ark") {
            writeln!(out, "{step}")?;
        }

        output::section(out, "end_movie")?;
        for step in theater.end_movie() {
            writeln!(out, "{step}")?;
        }
        Ok(())
    }
}
