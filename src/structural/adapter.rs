//! Adapter: a legacy sensor that reports tenths of a degree as an integer
//! is wrapped so it satisfies the `Thermometer` interface clients expect.

use std::io::Write;

use crate::catalog::{Category, Participant, Pattern};
use crate::error::PatternError;
use crate::output;

/// Target interface.
pub trait Thermometer {
    fn celsius(&self) -> f64;

    fn fahrenheit(&self) -> f64 {
        self.celsius() * 9.0 / 5.0 + 32.0
    }
}

/// Adaptee. Can't be changed: it reports deci-degrees Celsius.
pub struct LegacySensor {
    pub id: String,
    reading: i32,
}

impl LegacySensor {
    pub fn new(id: impl Into<String>, reading: i32) -> Self {
        LegacySensor {
            id: id.into(),
            reading,
        }
    }

    pub fn read_raw(&self) -> i32 {
        self.reading
    }
}

pub struct SensorAdapter {
    sensor: LegacySensor,
}

impl SensorAdapter {
    pub fn new(sensor: LegacySensor) -> Self {
        SensorAdapter { sensor }
    }
}

impl Thermometer for SensorAdapter {
    fn celsius(&self) -> f64 {
        f64::from(self.sensor.read_raw()) / 10.0
    }
}

/// A modern device that speaks the target interface natively.
pub struct DigitalThermometer(pub f64);

impl Thermometer for DigitalThermometer {
    fn celsius(&self) -> f64 {
        self.0
    }
}

/// Client code, oblivious to which thermometers are adapted.
pub fn report(thermometers: &[&dyn Thermometer]) -> Vec<String> {
    thermometers
        .iter()
        .map(|t| format!("{:.1} C / {:.1} F", t.celsius(), t.fahrenheit()))
        .collect()
}

pub struct AdapterPattern;

impl Pattern for AdapterPattern {
    fn name(&self) -> &'static str {
        "adapter"
    }

    fn category(&self) -> Category {
        Category::Structural
    }

    fn intent(&self) -> &'static str {
        "Convert the interface of a type into another interface clients expect."
    }

    fn participants(&self) -> &'static [Participant] {
        const PARTICIPANTS: &[Participant] = &[
            Participant::new("Target", "Thermometer"),
            Participant::new("Adaptee", "LegacySensor"),
            Participant::new("Adapter", "SensorAdapter"),
            Participant::new("Client", "report"),
        ];
        PARTICIPANTS
    }

    fn run(&self, out: &mut dyn Write) -> Result<(), PatternError> {
        output::heading(out, "Adapter")?;

        let legacy = LegacySensor::new("boiler-room", 215);
        writeln!(out, "Legacy sensor {} raw reading: {}", legacy.id, legacy.read_raw())?;

        let adapted = SensorAdapter::new(legacy);
        let modern = DigitalThermometer(-4.0);
        for line in report(&[&adapted, &modern]) {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adapter_converts_units() {
        let adapter = SensorAdapter::new(LegacySensor::new("s", 1000));
        assert_eq!(adapter.celsius(), 100.0);
        assert_eq!(adapter.fahrenheit(), 212.0);
    }

    #[test]
    fn test_negative_readings() {
        let adapter = SensorAdapter::new(LegacySensor::new("s", -400));
        assert_eq!(adapter.fahrenheit(), -40.0);
    }

    #[test]
    fn test_report_mixes_adapted_and_native() {
        let adapted = SensorAdapter::new(LegacySensor::new("s", 215));
        let native = DigitalThermometer(0.0);
        assert_eq!(
            report(&[&adapted, &native]),
            vec!["21.5 C / 70.7 F".to_string(), "0.0 C / 32.0 F".to_string()]
        );
    }
}
