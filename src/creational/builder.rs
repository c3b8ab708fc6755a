//! Builder: a consuming `HouseBuilder` assembles a `House` step by step and
//! validates the required parts in `build()`. A `Director` holds the
//! reusable recipes.

use std::fmt;
use std::io::Write;

use crate::catalog::{Category, Participant, Pattern};
use crate::error::PatternError;
use crate::output;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Material {
    Wood,
    Brick,
    Stone,
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Material::Wood => "wood",
            Material::Brick => "brick",
            Material::Stone => "stone",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct House {
    pub walls: Material,
    pub roof: String,
    pub floors: u8,
    pub windows: u32,
    pub garage: bool,
    pub pool: bool,
}

impl House {
    pub fn builder() -> HouseBuilder {
        HouseBuilder::new()
    }
}

impl fmt::Display for House {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} floor(s) of {} walls, {} roof, {} windows",
            self.floors, self.walls, self.roof, self.windows
        )?;
        if self.garage {
            f.write_str(", garage")?;
        }
        if self.pool {
            f.write_str(", pool")?;
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct HouseBuilder {
    walls: Option<Material>,
    roof: Option<String>,
    floors: u8,
    windows: u32,
    garage: bool,
    pool: bool,
}

impl HouseBuilder {
    // Optional parts start at their defaults; walls and roof are required.
    pub fn new() -> Self {
        HouseBuilder {
            floors: 1,
            ..Default::default()
        }
    }

    pub fn walls(mut self, material: Material) -> Self {
        self.walls = Some(material);
        self
    }

    pub fn roof(mut self, roof: impl Into<String>) -> Self {
        self.roof = Some(roof.into());
        self
    }

    pub fn floors(mut self, floors: u8) -> Self {
        self.floors = floors.max(1);
        self
    }

    pub fn windows(mut self, windows: u32) -> Self {
        self.windows = windows;
        self
    }

    pub fn garage(mut self) -> Self {
        self.garage = true;
        self
    }

    pub fn pool(mut self) -> Self {
        self.pool = true;
        self
    }

    pub fn build(self) -> Result<House, PatternError> {
        let walls = self.walls.ok_or(PatternError::MissingPart("walls"))?;
        let roof = self.roof.ok_or(PatternError::MissingPart("a roof"))?;

        Ok(House {
            walls,
            roof,
            floors: self.floors,
            windows: self.windows,
            garage: self.garage,
            pool: self.pool,
        })
    }
}

/// Knows the order of steps for a few standard houses.
pub struct Director;

impl Director {
    pub fn cottage(builder: HouseBuilder) -> Result<House, PatternError> {
        builder
            .walls(Material::Wood)
            .roof("thatched")
            .windows(4)
            .build()
    }

    pub fn villa(builder: HouseBuilder) -> Result<House, PatternError> {
        builder
            .walls(Material::Stone)
            .roof("tiled")
            .floors(2)
            .windows(16)
            .garage()
            .pool()
            .build()
    }
}

pub struct BuilderPattern;

impl Pattern for BuilderPattern {
    fn name(&self) -> &'static str {
        "builder"
    }

    fn category(&self) -> Category {
        Category::Creational
    }

    fn intent(&self) -> &'static str {
        "Separate the construction of a complex object from its representation."
    }

    fn participants(&self) -> &'static [Participant] {
        const PARTICIPANTS: &[Participant] = &[
            Participant::new("Builder", "HouseBuilder"),
            Participant::new("Director", "Director"),
            Participant::new("Product", "House"),
        ];
        PARTICIPANTS
    }

    fn run(&self, out: &mut dyn Write) -> Result<(), PatternError> {
        output::heading(out, "Builder")?;

        output::section(out, "Director recipes")?;
        writeln!(out, "Cottage: {}", Director::cottage(House::builder())?)?;
        writeln!(out, "Villa:   {}", Director::villa(House::builder())?)?;

        output::section(out, "Hand-built")?;
        let custom = House::builder()
            .walls(Material::Brick)
            .roof("flat")
            .floors(3)
            .windows(9)
            .build()?;
        writeln!(out, "Custom:  {custom}")?;

        output::section(out, "Missing part")?;
        match House::builder().walls(Material::Brick).build() {
            Ok(house) => writeln!(out, "Unexpectedly built: {house}")?,
            Err(e) => writeln!(out, "Refused: {e}")?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let house = House::builder()
            .walls(Material::Brick)
            .roof("flat")
            .build()
            .unwrap();
        assert_eq!(house.floors, 1);
        assert_eq!(house.windows, 0);
        assert!(!house.garage);
        assert!(!house.pool);
    }

    #[test]
    fn test_required_parts() {
        let err = House::builder().roof("flat").build().unwrap_err();
        assert!(matches!(err, PatternError::MissingPart("walls")));

        let err = House::builder().walls(Material::Wood).build().unwrap_err();
        assert_eq!(err.to_string(), "cannot build without a roof");
    }

    #[test]
    fn test_zero_floors_clamped() {
        let house = House::builder()
            .walls(Material::Wood)
            .roof("flat")
            .floors(0)
            .build()
            .unwrap();
        assert_eq!(house.floors, 1);
    }

    #[test]
    fn test_director_recipes() {
        let villa = Director::villa(House::builder()).unwrap();
        assert_eq!(villa.walls, Material::Stone);
        assert_eq!(villa.floors, 2);
        assert!(villa.garage && villa.pool);
        assert_eq!(
            villa.to_string(),
            "2 floor(s) of stone walls, tiled roof, 16 windows, garage, pool"
        );

        let cottage = Director::cottage(House::builder()).unwrap();
        assert_eq!(cottage.to_string(), "1 floor(s) of wood walls, thatched roof, 4 windows");
    }

    #[test]
    fn test_transcript_shows_refusal() {
        let mut out = Vec::new();
        BuilderPattern.run(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Refused: cannot build without a roof"));
    }
}
