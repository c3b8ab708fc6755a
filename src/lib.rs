//! # Gang-of-Four Design Patterns in Rust
//!
//! Each of the 23 classic patterns is a small module: a few types playing
//! the pattern's participants, plus a `<Name>Pattern` value that runs a short
//! demo and writes its transcript to any `io::Write`.
//!
//! ## Creational
//! Abstract Factory, Builder, Factory Method, Prototype, Singleton
//!
//! ## Structural
//! Adapter, Bridge, Composite, Decorator, Facade, Flyweight, Proxy
//!
//! ## Behavioral
//! Chain of Responsibility, Command, Interpreter, Iterator, Mediator,
//! Memento, Observer, State, Strategy, Template Method, Visitor
//!
//! ```
//! use gof_patterns::Catalog;
//!
//! let catalog = Catalog::standard();
//! let mut transcript = Vec::new();
//! catalog.find("composite").unwrap().run(&mut transcript).unwrap();
//! assert!(String::from_utf8(transcript).unwrap().starts_with("=== Composite ==="));
//! ```

pub mod behavioral;
pub mod catalog;
pub mod config;
pub mod creational;
pub mod error;
pub mod output;
pub mod structural;
pub mod suggest;

pub use catalog::{Catalog, Category, Participant, Pattern, PatternSummary};
pub use config::Config;
pub use error::PatternError;
