//! Strategy: the checkout total is computed by whichever pricing strategy is
//! plugged in. Plain closures work as strategies too.

use std::io::Write;

use crate::catalog::{Category, Participant, Pattern};
use crate::error::PatternError;
use crate::output;

#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub name: String,
    /// Unit price in cents.
    pub unit_price: u64,
    pub quantity: u32,
}

impl LineItem {
    pub fn new(name: impl Into<String>, unit_price: u64, quantity: u32) -> Self {
        LineItem {
            name: name.into(),
            unit_price,
            quantity,
        }
    }

    pub fn subtotal(&self) -> u64 {
        self.unit_price.saturating_mul(u64::from(self.quantity))
    }
}

pub trait PricingStrategy {
    fn name(&self) -> String;
    fn total(&self, items: &[LineItem]) -> u64;
}

fn sum(items: &[LineItem]) -> u64 {
    items
        .iter()
        .map(LineItem::subtotal)
        .fold(0, u64::saturating_add)
}

pub struct RegularPrice;

impl PricingStrategy for RegularPrice {
    fn name(&self) -> String {
        "regular".to_string()
    }

    fn total(&self, items: &[LineItem]) -> u64 {
        sum(items)
    }
}

/// Percentage off the whole basket, capped at 100.
pub struct PercentOff(pub u8);

impl PricingStrategy for PercentOff {
    fn name(&self) -> String {
        format!("{}% off", self.0.min(100))
    }

    fn total(&self, items: &[LineItem]) -> u64 {
        let keep = 100 - u64::from(self.0.min(100));
        let total = sum(items);
        // Split so the multiplication cannot overflow.
        total / 100 * keep + total % 100 * keep / 100
    }
}

/// Every `every`-th unit of the same item is free.
pub struct BulkDiscount {
    pub every: u32,
}

impl PricingStrategy for BulkDiscount {
    fn name(&self) -> String {
        format!("every {} free", ordinal(self.every))
    }

    fn total(&self, items: &[LineItem]) -> u64 {
        if self.every == 0 {
            return sum(items);
        }
        items
            .iter()
            .map(|item| {
                let free = item.quantity / self.every;
                item.unit_price
                    .saturating_mul(u64::from(item.quantity - free))
            })
            .fold(0, u64::saturating_add)
    }
}

fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

/// Lets any closure act as a strategy.
pub struct FnStrategy<F> {
    name: String,
    f: F,
}

impl<F> FnStrategy<F>
where
    F: Fn(&[LineItem]) -> u64,
{
    pub fn new(name: impl Into<String>, f: F) -> Self {
        FnStrategy {
            name: name.into(),
            f,
        }
    }
}

impl<F> PricingStrategy for FnStrategy<F>
where
    F: Fn(&[LineItem]) -> u64,
{
    fn name(&self) -> String {
        self.name.clone()
    }

    fn total(&self, items: &[LineItem]) -> u64 {
        (self.f)(items)
    }
}

/// The context.
pub struct Checkout {
    items: Vec<LineItem>,
    strategy: Box<dyn PricingStrategy>,
}

impl Checkout {
    pub fn new(items: Vec<LineItem>) -> Self {
        Checkout {
            items,
            strategy: Box::new(RegularPrice),
        }
    }

    pub fn set_strategy(&mut self, strategy: Box<dyn PricingStrategy>) {
        tracing::debug!(strategy = %strategy.name(), "pricing strategy changed");
        self.strategy = strategy;
    }

    pub fn strategy_name(&self) -> String {
        self.strategy.name()
    }

    pub fn total(&self) -> u64 {
        self.strategy.total(&self.items)
    }
}

fn format_cents(cents: u64) -> String {
    format!("{}.{:02}", cents / 100, cents % 100)
}

pub struct StrategyPattern;

impl Pattern for StrategyPattern {
    fn name(&self) -> &'static str {
        "strategy"
    }

    fn category(&self) -> Category {
        Category::Behavioral
    }

    fn intent(&self) -> &'static str {
        "Define a family of interchangeable algorithms and select one at runtime."
    }

    fn participants(&self) -> &'static [Participant] {
        const PARTICIPANTS: &[Participant] = &[
            Participant::new("Strategy", "PricingStrategy"),
            Participant::new(
                "ConcreteStrategy",
                "RegularPrice, PercentOff, BulkDiscount, FnStrategy",
            ),
            Participant::new("Context", "Checkout"),
        ];
        PARTICIPANTS
    }

    fn run(&self, out: &mut dyn Write) -> Result<(), PatternError> {
        output::heading(out, "Strategy")?;

        let mut checkout = Checkout::new(vec![
            LineItem::new("notebook", 450, 3),
            LineItem::new("pen", 120, 5),
        ]);

        let strategies: Vec<Box<dyn PricingStrategy>> = vec![
            Box::new(RegularPrice),
            Box::new(PercentOff(15)),
            Box::new(BulkDiscount { every: 3 }),
            Box::new(FnStrategy::new("flat 5.00 off", |items: &[LineItem]| {
                sum(items).saturating_sub(500)
            })),
        ];

        for strategy in strategies {
            checkout.set_strategy(strategy);
            writeln!(
                out,
                "{:<16} {}",
                checkout.strategy_name(),
                format_cents(checkout.total())
            )?;
        }
        Ok(())
    }
}
