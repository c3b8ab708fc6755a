//! Observer: a stock ticker notifies its investors on every price change.
//!
//! The subject keeps only `Weak` handles, so it never keeps an investor
//! alive. Dead handles are pruned on the next notification.

use std::cell::RefCell;
use std::io::Write;
use std::rc::{Rc, Weak};

use crate::catalog::{Category, Participant, Pattern};
use crate::error::PatternError;
use crate::output;

pub trait Investor {
    fn update(&self, symbol: &str, price: f64);
}

pub type SubscriptionId = u64;

pub struct StockTicker {
    symbol: String,
    price: f64,
    next_id: SubscriptionId,
    observers: Vec<(SubscriptionId, Weak<dyn Investor>)>,
}

impl StockTicker {
    pub fn new(symbol: impl Into<String>, price: f64) -> Self {
        StockTicker {
            symbol: symbol.into(),
            price,
            next_id: 0,
            observers: Vec::new(),
        }
    }

    pub fn attach(&mut self, investor: &Rc<dyn Investor>) -> SubscriptionId {
        self.next_id += 1;
        self.observers.push((self.next_id, Rc::downgrade(investor)));
        self.next_id
    }

    /// Returns false if `id` was not subscribed.
    pub fn detach(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    /// Unchanged prices notify nobody.
    pub fn set_price(&mut self, price: f64) -> usize {
        if price == self.price {
            return 0;
        }
        self.price = price;
        self.notify()
    }

    /// Returns how many live investors were notified.
    pub fn notify(&mut self) -> usize {
        let before = self.observers.len();
        self.observers.retain(|(_, weak)| weak.strong_count() > 0);
        if self.observers.len() < before {
            tracing::debug!(
                pruned = before - self.observers.len(),
                "dropped investors pruned"
            );
        }

        let mut notified = 0;
        for (_, weak) in &self.observers {
            if let Some(investor) = weak.upgrade() {
                investor.update(&self.symbol, self.price);
                notified += 1;
            }
        }
        notified
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}

/// Records every notification it receives.
#[derive(Debug, Default)]
pub struct RecordingInvestor {
    pub name: String,
    seen: RefCell<Vec<String>>,
}

impl RecordingInvestor {
    pub fn new(name: impl Into<String>) -> Self {
        RecordingInvestor {
            name: name.into(),
            seen: RefCell::new(Vec::new()),
        }
    }

    pub fn seen(&self) -> Vec<String> {
        self.seen.borrow().clone()
    }
}

impl Investor for RecordingInvestor {
    fn update(&self, symbol: &str, price: f64) {
        self.seen
            .borrow_mut()
            .push(format!("{} notified: {symbol} is now {price:.2}", self.name));
    }
}

pub struct ObserverPattern;

impl Pattern for ObserverPattern {
    fn name(&self) -> &'static str {
        "observer"
    }

    fn category(&self) -> Category {
        Category::Behavioral
    }

    fn intent(&self) -> &'static str {
        "Notify all dependents automatically when an object changes state."
    }

    fn participants(&self) -> &'static [Participant] {
        const PARTICIPANTS: &[Participant] = &[
            Participant::new("Subject", "StockTicker"),
            Participant::new("Observer", "Investor"),
            Participant::new("ConcreteObserver", "RecordingInvestor"),
        ];
        PARTICIPANTS
    }

    fn run(&self, out: &mut dyn Write) -> Result<(), PatternError> {
        output::heading(out, "Observer")?;

        let mut ticker = StockTicker::new("IBM", 120.00);
        let sorros = Rc::new(RecordingInvestor::new("Sorros"));
        let berkshire = Rc::new(RecordingInvestor::new("Berkshire"));

        let sorros_dyn: Rc<dyn Investor> = sorros.clone();
        let berkshire_dyn: Rc<dyn Investor> = berkshire.clone();
        ticker.attach(&sorros_dyn);
        let berkshire_id = ticker.attach(&berkshire_dyn);

        ticker.set_price(120.10);
        ticker.set_price(121.00);
        ticker.detach(berkshire_id);
        ticker.set_price(120.50);

        for line in sorros.seen().iter().chain(berkshire.seen().iter()) {
            writeln!(out, "{line}")?;
        }

        output::section(out, "Dropped investor")?;
        drop(sorros_dyn);
        drop(sorros);
        let notified = ticker.set_price(119.75);
        writeln!(
            out,
            "Notified {notified}, {} subscription(s) left",
            ticker.observer_count()
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attach(ticker: &mut StockTicker, investor: &Rc<RecordingInvestor>) -> SubscriptionId {
        let as_dyn: Rc<dyn Investor> = investor.clone();
        ticker.attach(&as_dyn)
    }

    #[test]
    fn test_all_observers_notified() {
        let mut ticker = StockTicker::new("ACME", 1.0);
        let a = Rc::new(RecordingInvestor::new("a"));
        let b = Rc::new(RecordingInvestor::new("b"));
        attach(&mut ticker, &a);
        attach(&mut ticker, &b);

        assert_eq!(ticker.set_price(2.0), 2);
        assert_eq!(a.seen(), vec!["a notified: ACME is now 2.00".to_string()]);
        assert_eq!(b.seen().len(), 1);
    }

    #[test]
    fn test_same_price_is_silent() {
        let mut ticker = StockTicker::new("ACME", 1.0);
        let a = Rc::new(RecordingInvestor::new("a"));
        attach(&mut ticker, &a);

        assert_eq!(ticker.set_price(1.0), 0);
        assert!(a.seen().is_empty());
    }

    #[test]
    fn test_detach() {
        let mut ticker = StockTicker::new("ACME", 1.0);
        let a = Rc::new(RecordingInvestor::new("a"));
        let id = attach(&mut ticker, &a);

        assert!(ticker.detach(id));
        assert!(!ticker.detach(id));
        ticker.set_price(3.0);
        assert!(a.seen().is_empty());
    }

    #[test]
    fn test_dropped_investor_pruned() {
        let mut ticker = StockTicker::new("ACME", 1.0);
        let keep = Rc::new(RecordingInvestor::new("keep"));
        attach(&mut ticker, &keep);
        {
            let temp = Rc::new(RecordingInvestor::new("temp"));
            attach(&mut ticker, &temp);
            assert_eq!(ticker.observer_count(), 2);
        }

        assert_eq!(ticker.set_price(5.0), 1);
        assert_eq!(ticker.observer_count(), 1);
    }

    #[test]
    fn test_transcript() {
        let mut out = Vec::new();
        ObserverPattern.run(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(text.matches("Sorros notified").count(), 3);
        assert_eq!(text.matches("Berkshire notified").count(), 2);
        assert!(text.contains("Notified 0, 0 subscription(s) left"));
    }
}
