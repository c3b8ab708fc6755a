//! Abstract Factory: one factory per widget family, so a client that only
//! sees `&dyn WidgetFactory` can never mix a light button with a dark
//! checkbox.

use std::io::Write;

use crate::catalog::{Category, Participant, Pattern};
use crate::error::PatternError;
use crate::output;

pub trait Button {
    fn render(&self, label: &str) -> String;
    fn theme(&self) -> &'static str;
}

pub trait Checkbox {
    fn render(&self, label: &str, checked: bool) -> String;
    fn theme(&self) -> &'static str;
}

pub trait WidgetFactory {
    fn name(&self) -> &'static str;
    fn create_button(&self) -> Box<dyn Button>;
    fn create_checkbox(&self) -> Box<dyn Checkbox>;
}

// =============================================================================
// Light family
// =============================================================================

pub struct LightButton;
pub struct LightCheckbox;

impl Button for LightButton {
    fn render(&self, label: &str) -> String {
        format!("[ {label} ]")
    }

    fn theme(&self) -> &'static str {
        "light"
    }
}

impl Checkbox for LightCheckbox {
    fn render(&self, label: &str, checked: bool) -> String {
        let mark = if checked { "x" } else { " " };
        format!("[{mark}] {label}")
    }

    fn theme(&self) -> &'static str {
        "light"
    }
}

pub struct LightTheme;

impl WidgetFactory for LightTheme {
    fn name(&self) -> &'static str {
        "light"
    }

    fn create_button(&self) -> Box<dyn Button> {
        Box::new(LightButton)
    }

    fn create_checkbox(&self) -> Box<dyn Checkbox> {
        Box::new(LightCheckbox)
    }
}

// =============================================================================
// Dark family
// =============================================================================

pub struct DarkButton;
pub struct DarkCheckbox;

impl Button for DarkButton {
    fn render(&self, label: &str) -> String {
        format!("<< {label} >>")
    }

    fn theme(&self) -> &'static str {
        "dark"
    }
}

impl Checkbox for DarkCheckbox {
    fn render(&self, label: &str, checked: bool) -> String {
        let mark = if checked { "#" } else { "." };
        format!("({mark}) {label}")
    }

    fn theme(&self) -> &'static str {
        "dark"
    }
}

pub struct DarkTheme;

impl WidgetFactory for DarkTheme {
    fn name(&self) -> &'static str {
        "dark"
    }

    fn create_button(&self) -> Box<dyn Button> {
        Box::new(DarkButton)
    }

    fn create_checkbox(&self) -> Box<dyn Checkbox> {
        Box::new(DarkCheckbox)
    }
}

/// The client. It only ever talks to the abstract factory and products.
pub fn render_form(factory: &dyn WidgetFactory) -> Vec<String> {
    let remember = factory.create_checkbox();
    let submit = factory.create_button();

    vec![
        remember.render("Remember me", true),
        submit.render("Sign in"),
    ]
}

pub struct AbstractFactoryPattern;

impl Pattern for AbstractFactoryPattern {
    fn name(&self) -> &'static str {
        "abstract-factory"
    }

    fn category(&self) -> Category {
        Category::Creational
    }

    fn intent(&self) -> &'static str {
        "Create families of related objects without naming their concrete types."
    }

    fn participants(&self) -> &'static [Participant] {
        const PARTICIPANTS: &[Participant] = &[
            Participant::new("AbstractFactory", "WidgetFactory"),
            Participant::new("ConcreteFactory", "LightTheme, DarkTheme"),
            Participant::new("AbstractProduct", "Button, Checkbox"),
            Participant::new("ConcreteProduct", "LightButton, DarkCheckbox, ..."),
            Participant::new("Client", "render_form"),
        ];
        PARTICIPANTS
    }

    fn run(&self, out: &mut dyn Write) -> Result<(), PatternError> {
        output::heading(out, "Abstract Factory")?;

        let factories: [&dyn WidgetFactory; 2] = [&LightTheme, &DarkTheme];
        for factory in factories {
            output::section(out, &format!("{} theme", factory.name()))?;
            for line in render_form(factory) {
                writeln!(out, "{line}")?;
            }
        }
        Ok(())
    }
}
