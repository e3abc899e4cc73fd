#[derive(Clone, Debug)]
pub struct Settings {
    pub api_url: Option<String>,
    pub offline: bool,
    pub save_enabled: bool,
    pub saved_teams_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: None,
            offline: false,
            save_enabled: true,
            saved_teams_enabled: true,
        }
    }
}
