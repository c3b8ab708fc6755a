//! Prototype: new shapes come from cloning registered prototypes through a
//! `dyn Shape`, never from naming the concrete type.

use std::collections::HashMap;
use std::fmt;
use std::io::Write;

use itertools::Itertools;

use crate::catalog::{Category, Participant, Pattern};
use crate::error::PatternError;
use crate::output;

pub trait Shape: fmt::Debug {
    fn clone_box(&self) -> Box<dyn Shape>;
    fn area(&self) -> f64;
    fn move_to(&mut self, x: i32, y: i32);
    fn position(&self) -> (i32, i32);
    fn describe(&self) -> String;
}

impl Clone for Box<dyn Shape> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub x: i32,
    pub y: i32,
    pub radius: f64,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    pub x: i32,
    pub y: i32,
    pub width: f64,
    pub height: f64,
}

impl Shape for Circle {
    fn clone_box(&self) -> Box<dyn Shape> {
        Box::new(self.clone())
    }

    fn area(&self) -> f64 {
        std::f64::consts::PI * self.radius * self.radius
    }

    fn move_to(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    fn describe(&self) -> String {
        format!("circle r={} at ({}, {})", self.radius, self.x, self.y)
    }
}

impl Shape for Rectangle {
    fn clone_box(&self) -> Box<dyn Shape> {
        Box::new(self.clone())
    }

    fn area(&self) -> f64 {
        self.width * self.height
    }

    fn move_to(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    fn describe(&self) -> String {
        format!(
            "rectangle {}x{} at ({}, {})",
            self.width, self.height, self.x, self.y
        )
    }
}

#[derive(Default)]
pub struct ShapeRegistry {
    prototypes: HashMap<String, Box<dyn Shape>>,
}

impl ShapeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, key: impl Into<String>, prototype: Box<dyn Shape>) {
        self.prototypes.insert(key.into(), prototype);
    }

    pub fn spawn(&self, key: &str) -> Result<Box<dyn Shape>, PatternError> {
        self.prototypes
            .get(key)
            .map(|p| p.clone_box())
            .ok_or_else(|| PatternError::unknown_variant("prototype", key))
    }

    pub fn keys(&self) -> Vec<&str> {
        self.prototypes.keys().map(String::as_str).sorted().collect()
    }
}

pub struct PrototypePattern;

impl Pattern for PrototypePattern {
    fn name(&self) -> &'static str {
        "prototype"
    }

    fn category(&self) -> Category {
        Category::Creational
    }

    fn intent(&self) -> &'static str {
        "Create new objects by copying a prototypical instance."
    }

    fn participants(&self) -> &'static [Participant] {
        const PARTICIPANTS: &[Participant] = &[
            Participant::new("Prototype", "Shape (clone_box)"),
            Participant::new("ConcretePrototype", "Circle, Rectangle"),
            Participant::new("Client", "ShapeRegistry"),
        ];
        PARTICIPANTS
    }

    fn run(&self, out: &mut dyn Write) -> Result<(), PatternError> {
        output::heading(out, "Prototype")?;

        let mut registry = ShapeRegistry::new();
        registry.register(
            "dot",
            Box::new(Circle {
                x: 0,
                y: 0,
                radius: 1.0,
                tags: vec!["small".into()],
            }),
        );
        registry.register(
            "tile",
            Box::new(Rectangle {
                x: 0,
                y: 0,
                width: 2.0,
                height: 2.0,
            }),
        );
        writeln!(out, "Registered prototypes: {}", registry.keys().join(", "))?;

        let mut first = registry.spawn("dot")?;
        let mut second = registry.spawn("dot")?;
        first.move_to(3, 4);
        second.move_to(-1, 7);
        let tile = registry.spawn("tile")?;

        for shape in [&first, &second, &tile] {
            writeln!(out, "{} (area {:.2})", shape.describe(), shape.area())?;
        }

        let original = registry.spawn("dot")?;
        writeln!(
            out,
            "Prototype untouched at {:?} after moving clones",
            original.position()
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> ShapeRegistry {
        let mut registry = ShapeRegistry::new();
        registry.register(
            "dot",
            Box::new(Circle {
                x: 1,
                y: 1,
                radius: 2.0,
                tags: vec!["a".into()],
            }),
        );
        registry
    }

    #[test]
    fn test_spawned_clones_are_independent() {
        let registry = registry();
        let mut a = registry.spawn("dot").unwrap();
        let b = registry.spawn("dot").unwrap();

        a.move_to(10, 10);
        assert_eq!(a.position(), (10, 10));
        assert_eq!(b.position(), (1, 1));
        assert_eq!(registry.spawn("dot").unwrap().position(), (1, 1));
    }

    #[test]
    fn test_boxed_clone_is_deep() {
        let original: Box<dyn Shape> = Box::new(Circle {
            x: 0,
            y: 0,
            radius: 1.0,
            tags: vec!["x".into()],
        });
        let copy = original.clone();
        assert_eq!(format!("{original:?}"), format!("{copy:?}"));
        assert!((copy.area() - std::f64::consts::PI).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_prototype() {
        let err = registry().spawn("hexagon").unwrap_err();
        assert_eq!(err.to_string(), "unknown prototype 'hexagon'");
    }

    #[test]
    fn test_transcript() {
        let mut out = Vec::new();
        PrototypePattern.run(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Registered prototypes: dot, tile"));
        assert!(text.contains("circle r=1 at (3, 4)"));
        assert!(text.contains("Prototype untouched at (0, 0)"));
    }
}
