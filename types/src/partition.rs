//! Two-way team split and its text rendering.

pub const TEAM_A_LABEL: &str = "Team A";
pub const TEAM_B_LABEL: &str = "Team B";

/// A roster split into two disjoint teams.
///
/// Team A holds `ceil(n/2)` members and Team B the remaining `floor(n/2)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
    team_a: Vec<String>,
    team_b: Vec<String>,
}

impl Partition {
    /// Split an already shuffled member list at `ceil(n/2)`.
    #[must_use]
    pub fn from_shuffled(mut shuffled: Vec<String>) -> Self {
        let midpoint = shuffled.len().div_ceil(2);
        let team_b = shuffled.split_off(midpoint);
        Self {
            team_a: shuffled,
            team_b,
        }
    }

    #[must_use]
    pub fn team_a(&self) -> &[String] {
        &self.team_a
    }

    #[must_use]
    pub fn team_b(&self) -> &[String] {
        &self.team_b
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.team_a.len() + self.team_b.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// One display line per team, Team A first.
    #[must_use]
    pub fn lines(&self) -> [String; 2] {
        [
            format_team_line(TEAM_A_LABEL, &self.team_a),
            format_team_line(TEAM_B_LABEL, &self.team_b),
        ]
    }

    /// Text placed on the clipboard by the copy action.
    #[must_use]
    pub fn clipboard_text(&self) -> String {
        self.lines().join("\n")
    }
}

/// `"Team A(2명): A, B"`
#[must_use]
pub fn format_team_line(label: &str, members: &[String]) -> String {
    format!("{label}({}명): {}", members.len(), members.join(", "))
}
