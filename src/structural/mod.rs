//! Patterns about how objects are composed into larger structures.

pub mod adapter;
pub mod bridge;
pub mod composite;
pub mod decorator;
pub mod facade;
pub mod flyweight;
pub mod proxy;

pub use adapter::AdapterPattern;
pub use bridge::BridgePattern;
pub use composite::CompositePattern;
pub use decorator::DecoratorPattern;
pub use facade::FacadePattern;
pub use flyweight::FlyweightPattern;
pub use proxy::ProxyPattern;
