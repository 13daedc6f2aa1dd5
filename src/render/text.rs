//! Plain text rendering for presentation trees.

use super::{walk, ContainerUnit, InlineUnit, PresentationUnit, UnitVisitor, VisitorAction};

/// Convert presentation units to plain text.
///
/// Units are stacked one per line. Lines inside quotes are prefixed with
/// `> ` once per nesting level, and an empty quote leaves a bare `>` line.
pub fn to_text(units: &[PresentationUnit]) -> String {
    let mut host = TextHost::default();
    walk(units, &mut host);
    host.lines.join("\n")
}

#[derive(Default)]
struct TextHost {
    lines: Vec<String>,
}

impl TextHost {
    fn push_line(&mut self, depth: usize, line: &str) {
        let mut out = "> ".repeat(depth);
        if line.is_empty() {
            // Bare marker, no trailing space.
            out.pop();
        }
        out.push_str(line);
        self.lines.push(out);
    }
}

impl UnitVisitor for TextHost {
    fn visit_inline(&mut self, unit: &InlineUnit, depth: usize) {
        let text = unit.plain_text();
        if text.is_empty() {
            self.push_line(depth, "");
            return;
        }
        for line in text.lines() {
            self.push_line(depth, line);
        }
    }

    fn enter_container(&mut self, container: &ContainerUnit, depth: usize) -> VisitorAction {
        if container.is_empty() {
            self.push_line(depth + 1, "");
        }
        VisitorAction::Continue
    }
}
