//! Interpreter: a Roman numeral grammar where each decimal place is its own
//! terminal expression. Every expression consumes what it recognizes from
//! the front of the context and adds its value.

use std::io::Write;

use crate::catalog::{Category, Participant, Pattern};
use crate::error::PatternError;
use crate::output;

#[derive(Debug)]
pub struct Context<'a> {
    remaining: &'a str,
    pub output: u32,
}

impl<'a> Context<'a> {
    pub fn new(input: &'a str) -> Self {
        Context {
            remaining: input,
            output: 0,
        }
    }

    pub fn remaining(&self) -> &'a str {
        self.remaining
    }
}

pub trait Expression {
    fn interpret(&self, context: &mut Context<'_>);
}

/// One decimal place, described by its symbols.
pub struct PlaceExpression {
    one: &'static str,
    four: &'static str,
    five: &'static str,
    nine: &'static str,
    multiplier: u32,
}

impl PlaceExpression {
    pub const fn thousand() -> Self {
        // No four/five/nine above M; empty symbols never match.
        PlaceExpression {
            one: "M",
            four: "",
            five: "",
            nine: "",
            multiplier: 1000,
        }
    }

    pub const fn hundred() -> Self {
        PlaceExpression {
            one: "C",
            four: "CD",
            five: "D",
            nine: "CM",
            multiplier: 100,
        }
    }

    pub const fn ten() -> Self {
        PlaceExpression {
            one: "X",
            four: "XL",
            five: "L",
            nine: "XC",
            multiplier: 10,
        }
    }

    pub const fn one() -> Self {
        PlaceExpression {
            one: "I",
            four: "IV",
            five: "V",
            nine: "IX",
            multiplier: 1,
        }
    }

    fn eat(context: &mut Context<'_>, symbol: &str) -> bool {
        if symbol.is_empty() {
            return false;
        }
        match context.remaining.strip_prefix(symbol) {
            Some(rest) => {
                context.remaining = rest;
                true
            }
            None => false,
        }
    }
}

impl Expression for PlaceExpression {
    fn interpret(&self, context: &mut Context<'_>) {
        let digit = if Self::eat(context, self.nine) {
            9
        } else if Self::eat(context, self.four) {
            4
        } else {
            let mut digit = if Self::eat(context, self.five) { 5 } else { 0 };
            let mut ones = 0;
            while ones < 3 && Self::eat(context, self.one) {
                ones += 1;
            }
            digit += ones;
            digit
        };
        context.output += digit * self.multiplier;
    }
}

/// The syntax tree for a Roman numeral: one expression per place, biggest first.
pub fn grammar() -> [PlaceExpression; 4] {
    [
        PlaceExpression::thousand(),
        PlaceExpression::hundred(),
        PlaceExpression::ten(),
        PlaceExpression::one(),
    ]
}

pub fn parse_roman(input: &str) -> Result<u32, PatternError> {
    let normalized = input.trim().to_ascii_uppercase();
    if normalized.is_empty() {
        return Err(PatternError::parse(input, "empty numeral"));
    }

    let mut context = Context::new(&normalized);
    for expression in grammar() {
        expression.interpret(&mut context);
    }

    if !context.remaining().is_empty() {
        return Err(PatternError::parse(
            input,
            format!("unexpected '{}'", context.remaining()),
        ));
    }
    Ok(context.output)
}

pub struct InterpreterPattern;

impl Pattern for InterpreterPattern {
    fn name(&self) -> &'static str {
        "interpreter"
    }

    fn category(&self) -> Category {
        Category::Behavioral
    }

    fn intent(&self) -> &'static str {
        "Define a representation for a grammar along with an interpreter for its sentences."
    }

    fn participants(&self) -> &'static [Participant] {
        const PARTICIPANTS: &[Participant] = &[
            Participant::new("AbstractExpression", "Expression"),
            Participant::new("TerminalExpression", "PlaceExpression"),
            Participant::new("Context", "Context"),
            Participant::new("Client", "parse_roman"),
        ];
        PARTICIPANTS
    }

    fn run(&self, out: &mut dyn Write) -> Result<(), PatternError> {
        output::heading(out, "Interpreter")?;

        for numeral in ["MCMXXVIII", "XLII", "mmxxvi", "IIII"] {
            match parse_roman(numeral) {
                Ok(value) => writeln!(out, "{numeral} = {value}")?,
                Err(e) => writeln!(out, "{e}")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_numerals() {
        assert_eq!(parse_roman("I").unwrap(), 1);
        assert_eq!(parse_roman("IV").unwrap(), 4);
        assert_eq!(parse_roman("IX").unwrap(), 9);
        assert_eq!(parse_roman("XLII").unwrap(), 42);
        assert_eq!(parse_roman("XCIX").unwrap(), 99);
        assert_eq!(parse_roman("CDXLIV").unwrap(), 444);
        assert_eq!(parse_roman("MCMXXVIII").unwrap(), 1928);
        assert_eq!(parse_roman("MMMCMXCIX").unwrap(), 3999);
        assert_eq!(parse_roman(" mmxxvi ").unwrap(), 2026);
    }

    #[test]
    fn test_invalid_numerals() {
        for bad in ["IIII", "VV", "IC", "ABC", "MMMM"] {
            assert!(
                matches!(parse_roman(bad), Err(PatternError::Parse { .. })),
                "{bad} should not parse"
            );
        }
        assert!(parse_roman("").is_err());
    }

    #[test]
    fn test_long_thousands_run_is_rejected() {
        let numeral = "M".repeat(5_000_000);
        assert!(matches!(parse_roman(&numeral), Err(PatternError::Parse { .. })));
    }

    #[test]
    fn test_context_consumes_prefix() {
        let mut context = Context::new("XIV");
        PlaceExpression::ten().interpret(&mut context);
        assert_eq!(context.output, 10);
        assert_eq!(context.remaining(), "IV");
    }

    #[test]
    fn test_transcript() {
        let mut out = Vec::new();
        InterpreterPattern.run(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("MCMXXVIII = 1928"));
        assert!(text.contains("failed to parse 'IIII': unexpected 'I'"));
    }
}
