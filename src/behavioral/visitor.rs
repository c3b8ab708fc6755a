//! Visitor: new operations over the shape hierarchy (area, XML export) are
//! added as visitors without touching the shape types. Double dispatch goes
//! through `Element::accept`.

use std::io::Write;

use crate::catalog::{Category, Participant, Pattern};
use crate::error::PatternError;
use crate::output;

#[derive(Debug, Clone, PartialEq)]
pub struct Dot {
    pub id: u32,
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub id: u32,
    pub x: i32,
    pub y: i32,
    pub radius: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rect {
    pub id: u32,
    pub x: i32,
    pub y: i32,
    pub width: f64,
    pub height: f64,
}

pub trait ShapeVisitor {
    fn visit_dot(&mut self, dot: &Dot);
    fn visit_circle(&mut self, circle: &Circle);
    fn visit_rect(&mut self, rect: &Rect);
}

pub trait Element {
    fn accept(&self, visitor: &mut dyn ShapeVisitor);
}

impl Element for Dot {
    fn accept(&self, visitor: &mut dyn ShapeVisitor) {
        visitor.visit_dot(self);
    }
}

impl Element for Circle {
    fn accept(&self, visitor: &mut dyn ShapeVisitor) {
        visitor.visit_circle(self);
    }
}

impl Element for Rect {
    fn accept(&self, visitor: &mut dyn ShapeVisitor) {
        visitor.visit_rect(self);
    }
}

#[derive(Debug, Default)]
pub struct AreaVisitor {
    pub total: f64,
}

impl ShapeVisitor for AreaVisitor {
    fn visit_dot(&mut self, _dot: &Dot) {}

    fn visit_circle(&mut self, circle: &Circle) {
        self.total += std::f64::consts::PI * circle.radius * circle.radius;
    }

    fn visit_rect(&mut self, rect: &Rect) {
        self.total += rect.width * rect.height;
    }
}

#[derive(Debug, Default)]
pub struct XmlExportVisitor {
    lines: Vec<String>,
}

impl XmlExportVisitor {
    pub fn finish(self) -> String {
        let mut xml = String::from("<shapes>\n");
        for line in self.lines {
            xml.push_str("  ");
            xml.push_str(&line);
            xml.push('\n');
        }
        xml.push_str("</shapes>");
        xml
    }
}

impl ShapeVisitor for XmlExportVisitor {
    fn visit_dot(&mut self, dot: &Dot) {
        self.lines.push(format!(
            r#"<dot id="{}" x="{}" y="{}"/>"#,
            dot.id, dot.x, dot.y
        ));
    }

    fn visit_circle(&mut self, circle: &Circle) {
        self.lines.push(format!(
            r#"<circle id="{}" x="{}" y="{}" radius="{}"/>"#,
            circle.id, circle.x, circle.y, circle.radius
        ));
    }

    fn visit_rect(&mut self, rect: &Rect) {
        self.lines.push(format!(
            r#"<rect id="{}" x="{}" y="{}" width="{}" height="{}"/>"#,
            rect.id, rect.x, rect.y, rect.width, rect.height
        ));
    }
}

pub fn visit_all(elements: &[Box<dyn Element>], visitor: &mut dyn ShapeVisitor) {
    for element in elements {
        element.accept(visitor);
    }
}

pub fn sample_drawing() -> Vec<Box<dyn Element>> {
    vec![
        Box::new(Dot { id: 1, x: 10, y: 55 }),
        Box::new(Circle {
            id: 2,
            x: 23,
            y: 15,
            radius: 10.0,
        }),
        Box::new(Rect {
            id: 3,
            x: 10,
            y: 17,
            width: 20.0,
            height: 30.0,
        }),
    ]
}

pub struct VisitorPattern;

impl Pattern for VisitorPattern {
    fn name(&self) -> &'static str {
        "visitor"
    }

    fn category(&self) -> Category {
        Category::Behavioral
    }

    fn intent(&self) -> &'static str {
        "Add new operations to a type hierarchy without changing the types."
    }

    fn participants(&self) -> &'static [Participant] {
        const PARTICIPANTS: &[Participant] = &[
            Participant::new("Visitor", "ShapeVisitor"),
            Participant::new("ConcreteVisitor", "AreaVisitor, XmlExportVisitor"),
            Participant::new("Element", "Element"),
            Participant::new("ConcreteElement", "Dot, Circle, Rect"),
        ];
        PARTICIPANTS
    }

    fn run(&self, out: &mut dyn Write) -> Result<(), PatternError> {
        output::heading(out, "Visitor")?;
        let drawing = sample_drawing();

        let mut area = AreaVisitor::default();
        visit_all(&drawing, &mut area);
        writeln!(out, "Total area: {:.2}", area.total)?;

        output::section(out, "XML export")?;
        let mut xml = XmlExportVisitor::default();
        visit_all(&drawing, &mut xml);
        writeln!(out, "{}", xml.finish())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_visitor() {
        let mut area = AreaVisitor::default();
        visit_all(&sample_drawing(), &mut area);
        let expected = std::f64::consts::PI * 100.0 + 600.0;
        assert!((area.total - expected).abs() < 1e-9);
    }

    #[test]
    fn test_xml_export() {
        let mut xml = XmlExportVisitor::default();
        visit_all(&sample_drawing(), &mut xml);
        assert_eq!(
            xml.finish(),
            "<shapes>\n\
             \x20 <dot id=\"1\" x=\"10\" y=\"55\"/>\n\
             \x20 <circle id=\"2\" x=\"23\" y=\"15\" radius=\"10\"/>\n\
             \x20 <rect id=\"3\" x=\"10\" y=\"17\" width=\"20\" height=\"30\"/>\n\
             </shapes>"
        );
    }

    #[test]
    fn test_empty_drawing() {
        let mut xml = XmlExportVisitor::default();
        visit_all(&[], &mut xml);
        assert_eq!(xml.finish(), "<shapes>\n</shapes>");
    }
}
