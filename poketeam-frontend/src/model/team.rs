pub const TEAM_SIZE: usize = 6;

/// Ordered group of pokemon names produced by one generation run. Immutable
/// after construction; the same name may appear more than once.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Team {
    members: Vec<String>,
}

impl Team {
    pub(crate) fn new(members: Vec<String>) -> Self {
        debug_assert_eq!(members.len(), TEAM_SIZE);
        Self { members }
    }

    pub fn members(&self) -> &[String] {
        &self.members
    }

    pub fn contains(&self, name: &str) -> bool {
        self.members.iter().any(|member| member == name)
    }
}

/// Append only collection of saved teams, insertion order preserved. Lives
/// for the session only; there is no removal and no persistence.
#[derive(Debug, Default)]
pub struct SavedTeams {
    teams: Vec<Team>,
}

impl SavedTeams {
    pub fn save(&mut self, team: Team) {
        self.teams.push(team);
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn team(names: &[&str]) -> Team {
        Team::new(names.iter().map(|name| name.to_string()).collect())
    }

    #[test]
    fn contains_matches_whole_names_only() {
        let team = team(&["pikachu", "onix", "eevee", "gastly", "snorlax", "meowth"]);

        assert!(team.contains("onix"));
        assert!(!team.contains("oni"));
        assert!(!team.contains("mew"));
    }

    #[test]
    fn save_preserves_insertion_order() {
        let mut saved = SavedTeams::default();
        let first = team(&["a", "b", "c", "d", "e", "f"]);
        let second = team(&["f", "e", "d", "c", "b", "a"]);

        saved.save(first.clone());
        saved.save(second.clone());

        assert_eq!(saved.teams(), &[first, second]);
    }
}
