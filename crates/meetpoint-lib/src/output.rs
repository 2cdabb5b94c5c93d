use std::fmt::Write;

use crate::map::{MapNode, NodeId};
use crate::routing::{BuildingRef, Leg, MeetingPlan};

/// Presentation style for turning a [`MeetingPlan`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Full report with origins, meeting building, snapped nodes and paths.
    PlainText,
    /// One line per person.
    Compact,
}

impl MeetingPlan {
    /// Render the plan using the requested textual mode.
    pub fn render(&self, mode: RenderMode) -> String {
        match mode {
            RenderMode::PlainText => self.render_plain(),
            RenderMode::Compact => self.render_compact(),
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        write_building(&mut buffer, "Person 1's point", &self.first);
        write_building(&mut buffer, "Person 2's point", &self.second);
        write_building(&mut buffer, "Destination Building", &self.meeting);
        let _ = writeln!(buffer);
        write_node(&mut buffer, "Nearest P1 node", &self.first_node);
        write_node(&mut buffer, "Nearest P2 node", &self.second_node);
        write_node(&mut buffer, "Nearest destination node", &self.meeting_node);

        for (person, leg) in [(1, &self.first_leg), (2, &self.second_leg)] {
            let _ = writeln!(buffer);
            match leg {
                Leg::Reached { miles, path } => {
                    let _ = writeln!(
                        buffer,
                        "Person {person}'s distance to dest: {miles:.5} miles"
                    );
                    let _ = writeln!(buffer, "Path: {}", join_path(path));
                }
                Leg::Unreachable => {
                    let _ = writeln!(buffer, "Person {person}: sorry, destination unreachable");
                }
            }
        }

        buffer
    }

    fn render_compact(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Meet at {} ({})",
            self.meeting.name, self.meeting.abbrev
        );
        for (person, origin, leg) in [
            (1, &self.first, &self.first_leg),
            (2, &self.second, &self.second_leg),
        ] {
            match leg.miles() {
                Some(miles) => {
                    let _ = writeln!(
                        buffer,
                        "  Person {person} from {}: {miles:.2} mi",
                        origin.abbrev
                    );
                }
                None => {
                    let _ = writeln!(
                        buffer,
                        "  Person {person} from {}: unreachable",
                        origin.abbrev
                    );
                }
            }
        }
        buffer
    }
}

fn write_building(buffer: &mut String, label: &str, building: &BuildingRef) {
    let _ = writeln!(buffer, "{label}:");
    let _ = writeln!(buffer, " {}", building.name);
    let _ = writeln!(buffer, " {}", building.coordinate);
}

fn write_node(buffer: &mut String, label: &str, node: &MapNode) {
    let _ = writeln!(buffer, "{label}:");
    let _ = writeln!(buffer, " {}", node.id);
    let _ = writeln!(buffer, " {}", node.coordinate);
}

fn join_path(path: &[NodeId]) -> String {
    path.iter()
        .map(NodeId::to_string)
        .collect::<Vec<_>>()
        .join("->")
}
