use std::io::{self, Write};

use crate::core::ballistics::{RootSet, ThrowParameters};

pub const REPORT_TITLE: &str = "The oblique throw - Simulation / Without air resistance";

const DESCRIPTION_HEADER: &str = "Description";
const INFORMATION_HEADER: &str = "Information";

enum Row {
    Entry(&'static str, String),
    Section,
}

/// Inputs and zero crossings of one throw, ready to be printed.
#[derive(Clone, Copy, Debug)]
pub struct ThrowSummary {
    pub parameters: ThrowParameters,
    /// Launch angle as the user gave it, in degrees.
    pub angle_deg: f64,
    pub roots: RootSet,
}

impl ThrowSummary {
    fn rows(&self) -> Vec<Row> {
        let p = &self.parameters;
        vec![
            Row::Entry(
                "Gravitational acceleration in m/s²",
                format!("{:?} m/s²", p.gravity),
            ),
            Row::Entry(
                "The initial velocity in m/s",
                format!("{:?} m/s", p.initial_velocity),
            ),
            Row::Entry(
                "Initial height in meters",
                format!("{:?} m", p.initial_height),
            ),
            Row::Entry(
                "Dropping angle alpha in deg",
                format!("{:?}°", self.angle_deg),
            ),
            Row::Section,
            Row::Entry(
                "zero point: y(x) = 0",
                format!("{:?} meters", self.roots.x_root),
            ),
            Row::Entry(
                "zero point: y(t) = 0",
                format!("{:?} seconds", self.roots.t_root),
            ),
        ]
    }

    /// Writes the summary as a boxed two-column table.
    pub fn write_table<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let rows = self.rows();
        let (desc_w, info_w) = rows.iter().fold(
            (
                DESCRIPTION_HEADER.chars().count(),
                INFORMATION_HEADER.chars().count(),
            ),
            |(d, i), row| match row {
                Row::Entry(desc, info) => (d.max(desc.chars().count()), i.max(info.chars().count())),
                Row::Section => (d, i),
            },
        );
        let rule = |left: &str, mid: &str, right: &str| {
            format!(
                "{left}{}{mid}{}{right}",
                "─".repeat(desc_w + 2),
                "─".repeat(info_w + 2)
            )
        };
        let table_w = desc_w + info_w + 7;

        writeln!(out, "{REPORT_TITLE:^table_w$}")?;
        writeln!(out, "{}", rule("┌", "┬", "┐"))?;
        writeln!(
            out,
            "│ {DESCRIPTION_HEADER:<desc_w$} │ {INFORMATION_HEADER:<info_w$} │"
        )?;
        writeln!(out, "{}", rule("├", "┼", "┤"))?;
        for row in &rows {
            match row {
                Row::Entry(desc, info) => {
                    writeln!(out, "│ {desc:<desc_w$} │ {info:<info_w$} │")?;
                }
                Row::Section => writeln!(out, "{}", rule("├", "┼", "┤"))?,
            }
        }
        writeln!(out, "{}", rule("└", "┴", "┘"))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{REPORT_TITLE, ThrowSummary};
    use crate::core::ballistics::{RootSet, ThrowParameters};

    fn render(summary: &ThrowSummary) -> String {
        let mut out = Vec::new();
        summary.write_table(&mut out).expect("writing to a Vec cannot fail");
        String::from_utf8(out).expect("table is valid UTF-8")
    }

    fn summary() -> ThrowSummary {
        ThrowSummary {
            parameters: ThrowParameters::new(10.0, 9.81, 20.0, 0.0).expect("valid parameters"),
            angle_deg: 0.0,
            roots: RootSet {
                x_root: 20.192751093846088,
                t_root: 2.019275109384609,
            },
        }
    }

    #[test]
    fn rows_appear_in_order() {
        let text = render(&summary());
        let position = |needle: &str| {
            text.find(needle)
                .unwrap_or_else(|| panic!("missing '{needle}' in:\n{text}"))
        };

        let order = [
            position("Gravitational acceleration"),
            position("The initial velocity"),
            position("Initial height"),
            position("Dropping angle"),
            position("zero point: y(x) = 0"),
            position("zero point: y(t) = 0"),
        ];
        assert!(order.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(text.lines().next().is_some_and(|l| l.trim() == REPORT_TITLE));
    }

    #[test]
    fn values_are_printed_as_received() {
        let text = render(&summary());

        assert!(text.contains("9.81 m/s²"));
        assert!(text.contains("10.0 m/s"));
        assert!(text.contains("20.0 m"));
        assert!(text.contains("0.0°"));
        assert!(text.contains("20.192751093846088 meters"));
        assert!(text.contains("2.019275109384609 seconds"));
    }

    #[test]
    fn section_separates_inputs_from_results() {
        let text = render(&summary());
        let lines: Vec<&str> = text.lines().collect();
        let angle_line = lines
            .iter()
            .position(|l| l.contains("Dropping angle"))
            .expect("angle row");

        assert!(lines[angle_line + 1].starts_with('├'));
        assert!(lines[angle_line + 2].contains("zero point: y(x) = 0"));
    }

    #[test]
    fn every_table_line_has_the_same_width() {
        let text = render(&summary());
        let widths: Vec<usize> = text
            .lines()
            .skip(1)
            .map(|l| l.chars().count())
            .collect();

        assert!(widths.windows(2).all(|pair| pair[0] == pair[1]));
    }
}
