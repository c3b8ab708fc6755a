//! The registry every demo plugs into.
//!
//! A [`Pattern`] knows its name, its GoF category, a one-line intent, the
//! participants it realizes and how to run itself against any writer.
//! [`Catalog::standard`] collects all 23 in book order.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use serde::Serialize;

use crate::behavioral::{
    ChainOfResponsibilityPattern, CommandPattern, InterpreterPattern, IteratorPattern,
    MediatorPattern, MementoPattern, ObserverPattern, StatePattern, StrategyPattern,
    TemplateMethodPattern, VisitorPattern,
};
use crate::creational::{
    AbstractFactoryPattern, BuilderPattern, FactoryMethodPattern, PrototypePattern,
    SingletonPattern,
};
use crate::error::PatternError;
use crate::structural::{
    AdapterPattern, BridgePattern, CompositePattern, DecoratorPattern, FacadePattern,
    FlyweightPattern, ProxyPattern,
};
use crate::suggest;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Creational,
    Structural,
    Behavioral,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::Creational,
        Category::Structural,
        Category::Behavioral,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Creational => "creational",
            Category::Structural => "structural",
            Category::Behavioral => "behavioral",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == lowered)
            .ok_or_else(|| PatternError::unknown_variant("category", s))
    }
}

/// A named role in a pattern and the type that plays it in the demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Participant {
    pub role: &'static str,
    pub realized_by: &'static str,
}

impl Participant {
    pub const fn new(role: &'static str, realized_by: &'static str) -> Self {
        Participant { role, realized_by }
    }
}

pub trait Pattern {
    /// Canonical kebab-case name, e.g. `chain-of-responsibility`.
    fn name(&self) -> &'static str;

    fn category(&self) -> Category;

    fn intent(&self) -> &'static str;

    fn participants(&self) -> &'static [Participant];

    /// Writes the demo transcript to `out`.
    fn run(&self, out: &mut dyn Write) -> Result<(), PatternError>;
}

#[derive(Debug, Clone, Serialize)]
pub struct PatternSummary {
    pub name: &'static str,
    pub category: Category,
    pub intent: &'static str,
    pub participants: &'static [Participant],
}

/// Lowercases and turns spaces and underscores into dashes.
pub fn normalize_name(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| match c {
            ' ' | '_' => '-',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}

pub struct Catalog {
    patterns: Vec<Box<dyn Pattern>>,
}

impl Catalog {
    pub fn new() -> Self {
        Catalog {
            patterns: Vec::new(),
        }
    }

    pub fn standard() -> Self {
        let mut catalog = Catalog::new();

        catalog.register(Box::new(AbstractFactoryPattern));
        catalog.register(Box::new(BuilderPattern));
        catalog.register(Box::new(FactoryMethodPattern));
        catalog.register(Box::new(PrototypePattern));
        catalog.register(Box::new(SingletonPattern));

        catalog.register(Box::new(AdapterPattern));
        catalog.register(Box::new(BridgePattern));
        catalog.register(Box::new(CompositePattern));
        catalog.register(Box::new(DecoratorPattern));
        catalog.register(Box::new(FacadePattern));
        catalog.register(Box::new(FlyweightPattern));
        catalog.register(Box::new(ProxyPattern));

        catalog.register(Box::new(ChainOfResponsibilityPattern));
        catalog.register(Box::new(CommandPattern));
        catalog.register(Box::new(InterpreterPattern));
        catalog.register(Box::new(IteratorPattern));
        catalog.register(Box::new(MediatorPattern));
        catalog.register(Box::new(MementoPattern));
        catalog.register(Box::new(ObserverPattern));
        catalog.register(Box::new(StatePattern));
        catalog.register(Box::new(StrategyPattern));
        catalog.register(Box::new(TemplateMethodPattern));
        catalog.register(Box::new(VisitorPattern));

        catalog
    }

    pub fn register(&mut self, pattern: Box<dyn Pattern>) {
        tracing::trace!(name = pattern.name(), "registering pattern");
        self.patterns.push(pattern);
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Pattern> {
        self.patterns.iter().map(|p| -> &dyn Pattern { p.as_ref() })
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.patterns.iter().map(|p| p.name())
    }

    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &dyn Pattern> {
        self.iter().filter(move |p| p.category() == category)
    }

    pub fn find(&self, name: &str) -> Result<&dyn Pattern, PatternError> {
        let wanted = normalize_name(name);
        self.iter().find(|p| p.name() == wanted).ok_or_else(|| {
            let suggestion = suggest::find_similar(&wanted, self.names());
            PatternError::unknown_pattern(name, suggestion)
        })
    }

    pub fn summaries(&self) -> Vec<PatternSummary> {
        self.iter()
            .map(|p| PatternSummary {
                name: p.name(),
                category: p.category(),
                intent: p.intent(),
                participants: p.participants(),
            })
            .collect()
    }

    /// Runs every pattern accepted by `filter`, blank line between transcripts.
    /// Returns how many ran; stops at the first failure.
    pub fn run_all<F>(&self, out: &mut dyn Write, filter: F) -> Result<usize, PatternError>
    where
        F: Fn(&dyn Pattern) -> bool,
    {
        let mut ran = 0;
        for pattern in self.iter().filter(|p| filter(*p)) {
            if ran > 0 {
                writeln!(out)?;
            }
            tracing::debug!(name = pattern.name(), "running pattern");
            pattern.run(out)?;
            ran += 1;
        }
        Ok(ran)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_standard_catalog_has_all_23() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.len(), 23);
        assert_eq!(catalog.by_category(Category::Creational).count(), 5);
        assert_eq!(catalog.by_category(Category::Structural).count(), 7);
        assert_eq!(catalog.by_category(Category::Behavioral).count(), 11);

        let unique: HashSet<_> = catalog.names().collect();
        assert_eq!(unique.len(), 23);
    }

    #[test]
    fn test_creational_first() {
        let catalog = Catalog::standard();
        let categories: Vec<Category> = catalog.iter().map(|p| p.category()).collect();
        let mut sorted = categories.clone();
        sorted.sort_by_key(|c| Category::ALL.iter().position(|x| x == c));
        assert_eq!(categories, sorted);
    }

    #[test]
    fn test_find_tolerates_spelling_variants() {
        let catalog = Catalog::standard();
        for name in [
            "chain-of-responsibility",
            "Chain Of Responsibility",
            "chain_of_responsibility",
            "  CHAIN-of_responsibility ",
        ] {
            let pattern = catalog.find(name).unwrap();
            assert_eq!(pattern.name(), "chain-of-responsibility");
        }
    }

    #[test]
    fn test_find_unknown_suggests() {
        let catalog = Catalog::standard();
        match catalog.find("obsever") {
            Err(PatternError::UnknownPattern { suggestion, .. }) => {
                assert_eq!(suggestion.as_deref(), Some("observer"));
            }
            other => panic!("expected UnknownPattern, got {:?}", other.map(|p| p.name())),
        }

        match catalog.find("monad") {
            Err(PatternError::UnknownPattern { suggestion, .. }) => assert!(suggestion.is_none()),
            other => panic!("expected UnknownPattern, got {:?}", other.map(|p| p.name())),
        }
    }

    #[test]
    fn test_every_pattern_has_metadata() {
        let catalog = Catalog::standard();
        for pattern in catalog.iter() {
            assert!(!pattern.intent().is_empty(), "{} has no intent", pattern.name());
            assert!(
                pattern.participants().len() >= 2,
                "{} lists too few participants",
                pattern.name()
            );
            assert_eq!(pattern.name(), normalize_name(pattern.name()));
        }
    }

    #[test]
    fn test_category_parse() {
        assert_eq!("Structural".parse::<Category>().unwrap(), Category::Structural);
        assert!("functional".parse::<Category>().is_err());
        assert_eq!(Category::Behavioral.to_string(), "behavioral");
    }

    #[test]
    fn test_run_all_with_filter() {
        let catalog = Catalog::standard();
        let mut out = Vec::new();
        let ran = catalog
            .run_all(&mut out, |p| p.name() == "iterator" || p.name() == "facade")
            .unwrap();
        assert_eq!(ran, 2);

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("=== Facade ==="));
        assert!(text.contains("=== Iterator ==="));
    }

    #[test]
    fn test_summaries_serialize() {
        let catalog = Catalog::standard();
        let json = serde_json::to_value(catalog.summaries()).unwrap();
        assert_eq!(json[0]["name"], "abstract-factory");
        assert_eq!(json[0]["category"], "creational");
        assert!(json[0]["participants"][0]["role"].is_string());
    }
}
