//! Patterns about how objects share responsibility and talk to each other.

pub mod chain_of_responsibility;
pub mod command;
pub mod interpreter;
pub mod iterator;
pub mod mediator;
pub mod memento;
pub mod observer;
pub mod state;
pub mod strategy;
pub mod template_method;
pub mod visitor;

pub use chain_of_responsibility::ChainOfResponsibilityPattern;
pub use command::CommandPattern;
pub use interpreter::InterpreterPattern;
pub use iterator::IteratorPattern;
pub use mediator::MediatorPattern;
pub use memento::MementoPattern;
pub use observer::ObserverPattern;
pub use state::StatePattern;
pub use strategy::StrategyPattern;
pub use template_method::TemplateMethodPattern;
pub use visitor::VisitorPattern;
