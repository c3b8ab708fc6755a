//! Factory Method: `Logistics::plan_delivery` is written once against the
//! `Transport` product; each logistics kind overrides only the factory
//! method that picks the vehicle.

use std::io::Write;

use crate::catalog::{Category, Participant, Pattern};
use crate::error::PatternError;
use crate::output;

pub trait Transport {
    fn kind(&self) -> &'static str;
    fn deliver(&self, cargo: &str, destination: &str) -> String;
}

pub struct Truck;
pub struct Ship;
pub struct Plane;

impl Transport for Truck {
    fn kind(&self) -> &'static str {
        "truck"
    }

    fn deliver(&self, cargo: &str, destination: &str) -> String {
        format!("Truck drives {cargo} by road to {destination}")
    }
}

impl Transport for Ship {
    fn kind(&self) -> &'static str {
        "ship"
    }

    fn deliver(&self, cargo: &str, destination: &str) -> String {
        format!("Ship carries {cargo} in a container to {destination}")
    }
}

impl Transport for Plane {
    fn kind(&self) -> &'static str {
        "plane"
    }

    fn deliver(&self, cargo: &str, destination: &str) -> String {
        format!("Plane flies {cargo} to {destination}")
    }
}

pub trait Logistics {
    /// The factory method.
    fn create_transport(&self) -> Box<dyn Transport>;

    fn plan_delivery(&self, cargo: &str, destination: &str) -> String {
        let transport = self.create_transport();
        tracing::debug!(transport = transport.kind(), "transport created");
        transport.deliver(cargo, destination)
    }
}

pub struct RoadLogistics;
pub struct SeaLogistics;
pub struct AirLogistics;

impl Logistics for RoadLogistics {
    fn create_transport(&self) -> Box<dyn Transport> {
        Box::new(Truck)
    }
}

impl Logistics for SeaLogistics {
    fn create_transport(&self) -> Box<dyn Transport> {
        Box::new(Ship)
    }
}

impl Logistics for AirLogistics {
    fn create_transport(&self) -> Box<dyn Transport> {
        Box::new(Plane)
    }
}

/// Parameterized variant: the creator is picked from a string at runtime.
pub fn logistics_for(kind: &str) -> Result<Box<dyn Logistics>, PatternError> {
    match kind.trim().to_ascii_lowercase().as_str() {
        "road" => Ok(Box::new(RoadLogistics)),
        "sea" => Ok(Box::new(SeaLogistics)),
        "air" => Ok(Box::new(AirLogistics)),
        _ => Err(PatternError::unknown_variant("logistics", kind)),
    }
}

pub struct FactoryMethodPattern;

impl Pattern for FactoryMethodPattern {
    fn name(&self) -> &'static str {
        "factory-method"
    }

    fn category(&self) -> Category {
        Category::Creational
    }

    fn intent(&self) -> &'static str {
        "Let subclasses decide which class to instantiate behind a common creator."
    }

    fn participants(&self) -> &'static [Participant] {
        const PARTICIPANTS: &[Participant] = &[
            Participant::new("Product", "Transport"),
            Participant::new("ConcreteProduct", "Truck, Ship, Plane"),
            Participant::new("Creator", "Logistics"),
            Participant::new("ConcreteCreator", "RoadLogistics, SeaLogistics, AirLogistics"),
        ];
        PARTICIPANTS
    }

    fn run(&self, out: &mut dyn Write) -> Result<(), PatternError> {
        output::heading(out, "Factory Method")?;

        for kind in ["road", "sea", "air"] {
            let logistics = logistics_for(kind)?;
            writeln!(out, "{}", logistics.plan_delivery("20 crates", "Rotterdam"))?;
        }

        output::section(out, "Unknown creator")?;
        if let Err(e) = logistics_for("teleport") {
            writeln!(out, "Error: {e}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_creator_makes_its_product() {
        assert_eq!(RoadLogistics.create_transport().kind(), "truck");
        assert_eq!(SeaLogistics.create_transport().kind(), "ship");
        assert_eq!(AirLogistics.create_transport().kind(), "plane");
    }

    #[test]
    fn test_plan_delivery_uses_factory_method() {
        assert_eq!(
            SeaLogistics.plan_delivery("tea", "Lisbon"),
            "Ship carries tea in a container to Lisbon"
        );
    }

    #[test]
    fn test_logistics_for() {
        assert_eq!(logistics_for(" Road ").unwrap().create_transport().kind(), "truck");

        let err = logistics_for("rail").err().unwrap();
        assert_eq!(err.to_string(), "unknown logistics 'rail'");
    }
}
