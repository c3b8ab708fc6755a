//! Flyweight: thousands of trees share a handful of `TreeKind` values.
//! Intrinsic state (name, color, texture) lives in the shared kind; each
//! `Tree` only stores its position.

use std::collections::HashMap;
use std::io::Write;
use std::rc::Rc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::catalog::{Category, Participant, Pattern};
use crate::error::PatternError;
use crate::output;

#[derive(Debug, PartialEq, Eq, Hash)]
pub struct TreeKind {
    pub name: String,
    pub color: String,
    pub texture: String,
}

impl TreeKind {
    pub fn draw(&self, x: u32, y: u32) -> String {
        format!("{} {} tree at ({x}, {y})", self.color, self.name)
    }
}

#[derive(Debug, Default)]
pub struct TreeKindFactory {
    kinds: HashMap<(String, String, String), Rc<TreeKind>>,
}

impl TreeKindFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&mut self, name: &str, color: &str, texture: &str) -> Rc<TreeKind> {
        let key = (name.to_string(), color.to_string(), texture.to_string());
        if let Some(kind) = self.kinds.get(&key) {
            tracing::trace!(name, color, "tree kind reused");
            return Rc::clone(kind);
        }

        tracing::debug!(name, color, texture, "new tree kind");
        let kind = Rc::new(TreeKind {
            name: name.to_string(),
            color: color.to_string(),
            texture: texture.to_string(),
        });
        self.kinds.insert(key, Rc::clone(&kind));
        kind
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

#[derive(Debug)]
pub struct Tree {
    pub x: u32,
    pub y: u32,
    pub kind: Rc<TreeKind>,
}

impl Tree {
    pub fn draw(&self) -> String {
        self.kind.draw(self.x, self.y)
    }
}

#[derive(Debug, Default)]
pub struct Forest {
    factory: TreeKindFactory,
    trees: Vec<Tree>,
}

impl Forest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn plant(&mut self, x: u32, y: u32, name: &str, color: &str, texture: &str) {
        let kind = self.factory.get(name, color, texture);
        self.trees.push(Tree { x, y, kind });
    }

    pub fn trees(&self) -> &[Tree] {
        &self.trees
    }

    pub fn kind_count(&self) -> usize {
        self.factory.len()
    }
}

const SPECIES: [(&str, &str, &str); 3] = [
    ("oak", "green", "rough"),
    ("birch", "white", "smooth"),
    ("maple", "red", "ridged"),
];

/// Plants `count` trees on a 100x100 grid. Same seed, same forest.
pub fn random_forest(count: usize, seed: u64) -> Forest {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut forest = Forest::new();
    for _ in 0..count {
        let (name, color, texture) = SPECIES[rng.gen_range(0..SPECIES.len())];
        forest.plant(rng.gen_range(0..100), rng.gen_range(0..100), name, color, texture);
    }
    forest
}

pub struct FlyweightPattern;

impl Pattern for FlyweightPattern {
    fn name(&self) -> &'static str {
        "flyweight"
    }

    fn category(&self) -> Category {
        Category::Structural
    }

    fn intent(&self) -> &'static str {
        "Use sharing to support large numbers of fine-grained objects efficiently."
    }

    fn participants(&self) -> &'static [Participant] {
        const PARTICIPANTS: &[Participant] = &[
            Participant::new("Flyweight", "TreeKind"),
            Participant::new("FlyweightFactory", "TreeKindFactory"),
            Participant::new("Client (extrinsic state)", "Tree, Forest"),
        ];
        PARTICIPANTS
    }

    fn run(&self, out: &mut dyn Write) -> Result<(), PatternError> {
        output::heading(out, "Flyweight")?;

        let forest = random_forest(10_000, 42);
        writeln!(out, "Planted {} trees", forest.trees().len())?;
        writeln!(out, "Distinct tree kinds in memory: {}", forest.kind_count())?;

        output::section(out, "First three trees")?;
        for tree in forest.trees().iter().take(3) {
            writeln!(out, "{}", tree.draw())?;
        }
        Ok(())
    }
}
