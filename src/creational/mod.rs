//! Patterns about how objects get made.

pub mod abstract_factory;
pub mod builder;
pub mod factory_method;
pub mod prototype;
pub mod singleton;

pub use abstract_factory::AbstractFactoryPattern;
pub use builder::BuilderPattern;
pub use factory_method::FactoryMethodPattern;
pub use prototype::PrototypePattern;
pub use singleton::SingletonPattern;
