use poketeam_repository::detail::PokemonDetail;

use crate::settings::Settings;

use self::team::{SavedTeams, Team};

pub mod team;

#[derive(Debug, Default)]
pub struct Model {
    /// Result of the last completed generation run. Overwritten by each
    /// following run, copied into `saved_teams` on save.
    pub current_team: Option<Team>,
    /// Detail record for the currently selected team member, present once
    /// loading finished and only while the details view is open.
    pub details: Option<PokemonDetail>,
    pub error: Option<String>,
    /// True while a generation run is in flight. At most one run may be in
    /// flight; update rejects further generation requests until it resolves.
    pub loading: bool,
    pub saved_teams: SavedTeams,
    pub settings: Settings,
    pub view: ViewState,
}

/// The single visible screen. Exactly one variant is active at any time.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum ViewState {
    #[default]
    Home,
    Generator,
    Details(String),
    SavedTeams,
}
