//! Decorator: condiments wrap a beverage and add to its cost and
//! description, and can be stacked in any order and number.

use std::io::Write;

use crate::catalog::{Category, Participant, Pattern};
use crate::error::PatternError;
use crate::output;

/// Prices are in cents.
pub trait Beverage {
    fn description(&self) -> String;
    fn cost(&self) -> u32;
}

pub struct Espresso;
pub struct HouseBlend;

impl Beverage for Espresso {
    fn description(&self) -> String {
        "Espresso".to_string()
    }

    fn cost(&self) -> u32 {
        199
    }
}

impl Beverage for HouseBlend {
    fn description(&self) -> String {
        "House Blend".to_string()
    }

    fn cost(&self) -> u32 {
        89
    }
}

pub struct Milk {
    inner: Box<dyn Beverage>,
}

pub struct Mocha {
    inner: Box<dyn Beverage>,
}

pub struct Whip {
    inner: Box<dyn Beverage>,
}

impl Milk {
    pub fn wrap(inner: Box<dyn Beverage>) -> Box<dyn Beverage> {
        Box::new(Milk { inner })
    }
}

impl Mocha {
    pub fn wrap(inner: Box<dyn Beverage>) -> Box<dyn Beverage> {
        Box::new(Mocha { inner })
    }
}

impl Whip {
    pub fn wrap(inner: Box<dyn Beverage>) -> Box<dyn Beverage> {
        Box::new(Whip { inner })
    }
}

impl Beverage for Milk {
    fn description(&self) -> String {
        format!("{}, Milk", self.inner.description())
    }

    fn cost(&self) -> u32 {
        self.inner.cost() + 10
    }
}

impl Beverage for Mocha {
    fn description(&self) -> String {
        format!("{}, Mocha", self.inner.description())
    }

    fn cost(&self) -> u32 {
        self.inner.cost() + 20
    }
}

impl Beverage for Whip {
    fn description(&self) -> String {
        format!("{}, Whip", self.inner.description())
    }

    fn cost(&self) -> u32 {
        self.inner.cost() + 15
    }
}

pub fn format_price(cents: u32) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

pub struct DecoratorPattern;

impl Pattern for DecoratorPattern {
    fn name(&self) -> &'static str {
        "decorator"
    }

    fn category(&self) -> Category {
        Category::Structural
    }

    fn intent(&self) -> &'static str {
        "Attach additional responsibilities to an object dynamically."
    }

    fn participants(&self) -> &'static [Participant] {
        const PARTICIPANTS: &[Participant] = &[
            Participant::new("Component", "Beverage"),
            Participant::new("ConcreteComponent", "Espresso, HouseBlend"),
            Participant::new("ConcreteDecorator", "Milk, Mocha, Whip"),
        ];
        PARTICIPANTS
    }

    fn run(&self, out: &mut dyn Write) -> Result<(), PatternError> {
        output::heading(out, "Decorator")?;

        let orders: Vec<Box<dyn Beverage>> = vec![
            Box::new(Espresso),
            Whip::wrap(Mocha::wrap(Mocha::wrap(Box::new(Espresso)))),
            Milk::wrap(Box::new(HouseBlend)),
        ];

        for order in &orders {
            writeln!(out, "{} {}", order.description(), format_price(order.cost()))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_beverage() {
        assert_eq!(Espresso.cost(), 199);
        assert_eq!(Espresso.description(), "Espresso");
    }

    #[test]
    fn test_decorators_stack() {
        let drink = Whip::wrap(Mocha::wrap(Mocha::wrap(Box::new(Espresso))));
        assert_eq!(drink.cost(), 199 + 20 + 20 + 15);
        assert_eq!(drink.description(), "Espresso, Mocha, Mocha, Whip");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(254), "$2.54");
        assert_eq!(format_price(99), "$0.99");
        assert_eq!(format_price(100), "$1.00");
    }

    #[test]
    fn test_transcript() {
        let mut out = Vec::new();
        DecoratorPattern.run(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Espresso, Mocha, Mocha, Whip $2.54"));
        assert!(text.contains("House Blend, Milk $0.99"));
    }
}
