//! Command: arithmetic operations on a `Calculator` are reified as command
//! objects so the `User` invoker can undo and redo them.
//!
//! History is a list plus a cursor. Everything before the cursor has been
//! executed; everything from the cursor on is redoable. Computing something
//! new drops the redo tail. Undo or redo past either end stops quietly.

use std::fmt;
use std::io::Write;

use crate::catalog::{Category, Participant, Pattern};
use crate::error::PatternError;
use crate::output;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    pub fn inverse(&self) -> Operator {
        match self {
            Operator::Add => Operator::Subtract,
            Operator::Subtract => Operator::Add,
            Operator::Multiply => Operator::Divide,
            Operator::Divide => Operator::Multiply,
        }
    }

    pub fn apply(&self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operator::Add => lhs + rhs,
            Operator::Subtract => lhs - rhs,
            Operator::Multiply => lhs * rhs,
            Operator::Divide => lhs / rhs,
        }
    }
}

impl TryFrom<char> for Operator {
    type Error = PatternError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '+' => Ok(Operator::Add),
            '-' => Ok(Operator::Subtract),
            '*' => Ok(Operator::Multiply),
            '/' => Ok(Operator::Divide),
            other => Err(PatternError::InvalidOperator(other)),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// The receiver.
#[derive(Debug, Default)]
pub struct Calculator {
    current: f64,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> f64 {
        self.current
    }

    pub fn operation(&mut self, operator: Operator, operand: f64) -> f64 {
        self.current = operator.apply(self.current, operand);
        self.current
    }

    pub fn restore(&mut self, value: f64) -> f64 {
        self.current = value;
        self.current
    }
}

pub trait Command: fmt::Debug {
    fn execute(&mut self, calculator: &mut Calculator) -> f64;
    fn unexecute(&mut self, calculator: &mut Calculator) -> f64;
    fn describe(&self) -> String;
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorCommand {
    operator: Operator,
    operand: f64,
    /// Receiver value before the last `execute`; undo restores it exactly.
    previous: Option<f64>,
}

impl CalculatorCommand {
    /// Multiplying or dividing by zero and non-finite operands are refused
    /// before they reach the history.
    pub fn new(operator: Operator, operand: f64) -> Result<Self, PatternError> {
        let lossy = matches!(operator, Operator::Multiply | Operator::Divide) && operand == 0.0;
        if lossy || !operand.is_finite() {
            return Err(PatternError::NotInvertible {
                operator: operator.symbol(),
                operand,
            });
        }
        Ok(CalculatorCommand {
            operator,
            operand,
            previous: None,
        })
    }
}

impl Command for CalculatorCommand {
    fn execute(&mut self, calculator: &mut Calculator) -> f64 {
        self.previous = Some(calculator.value());
        calculator.operation(self.operator, self.operand)
    }

    fn unexecute(&mut self, calculator: &mut Calculator) -> f64 {
        match self.previous.take() {
            Some(value) => calculator.restore(value),
            None => calculator.value(),
        }
    }

    fn describe(&self) -> String {
        format!("{} {}", self.operator, self.operand)
    }
}

/// The invoker.
#[derive(Debug, Default)]
pub struct User {
    calculator: Calculator,
    commands: Vec<Box<dyn Command>>,
    current: usize,
}

impl User {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> f64 {
        self.calculator.value()
    }

    pub fn compute(&mut self, operator: char, operand: f64) -> Result<f64, PatternError> {
        let command = CalculatorCommand::new(Operator::try_from(operator)?, operand)?;
        Ok(self.store_and_execute(Box::new(command)))
    }

    pub fn store_and_execute(&mut self, mut command: Box<dyn Command>) -> f64 {
        if self.current < self.commands.len() {
            tracing::debug!(
                dropped = self.commands.len() - self.current,
                "discarding redo history"
            );
            self.commands.truncate(self.current);
        }

        let value = command.execute(&mut self.calculator);
        self.commands.push(command);
        self.current += 1;
        value
    }

    /// Undoes up to `levels` commands, returning the value after each step.
    pub fn undo(&mut self, levels: usize) -> Vec<f64> {
        let mut values = Vec::new();
        for _ in 0..levels {
            if self.current == 0 {
                break;
            }
            self.current -= 1;
            let command = &mut self.commands[self.current];
            tracing::trace!(command = %command.describe(), "undo");
            values.push(command.unexecute(&mut self.calculator));
        }
        values
    }

    /// Redoes up to `levels` commands, returning the value after each step.
    pub fn redo(&mut self, levels: usize) -> Vec<f64> {
        let mut values = Vec::new();
        for _ in 0..levels {
            let Some(command) = self.commands.get_mut(self.current) else {
                break;
            };
            tracing::trace!(command = %command.describe(), "redo");
            values.push(command.execute(&mut self.calculator));
            self.current += 1;
        }
        values
    }

    pub fn can_undo(&self) -> bool {
        self.current > 0
    }

    pub fn can_redo(&self) -> bool {
        self.current < self.commands.len()
    }

    pub fn history_len(&self) -> usize {
        self.commands.len()
    }
}

pub struct CommandPattern;

impl Pattern for CommandPattern {
    fn name(&self) -> &'static str {
        "command"
    }

    fn category(&self) -> Category {
        Category::Behavioral
    }

    fn intent(&self) -> &'static str {
        "Encapsulate a request as an object, allowing undo and redo."
    }

    fn participants(&self) -> &'static [Participant] {
        const PARTICIPANTS: &[Participant] = &[
            Participant::new("Command", "Command"),
            Participant::new("ConcreteCommand", "CalculatorCommand"),
            Participant::new("Receiver", "Calculator"),
            Participant::new("Invoker", "User"),
        ];
        PARTICIPANTS
    }

    fn run(&self, out: &mut dyn Write) -> Result<(), PatternError> {
        output::heading(out, "Command")?;

        let mut user = User::new();
        for (operator, operand) in [('+', 100.0), ('-', 50.0), ('*', 10.0), ('/', 2.0)] {
            let value = user.compute(operator, operand)?;
            writeln!(out, "Current value = {value} (following {operator} {operand})")?;
        }

        output::section(out, "Undo 4 levels")?;
        for value in user.undo(4) {
            writeln!(out, "Current value = {value}")?;
        }

        output::section(out, "Redo 3 levels")?;
        for value in user.redo(3) {
            writeln!(out, "Current value = {value}")?;
        }

        output::section(out, "Rejected commands")?;
        for (operator, operand) in [('%', 3.0), ('/', 0.0)] {
            if let Err(e) = user.compute(operator, operand) {
                writeln!(out, "{e}")?;
            }
        }
        writeln!(out, "Value unchanged: {}", user.value())?;
        Ok(())
    }
}
