use crate::{
    action::Action,
    model::{team::Team, Model},
};

pub fn generated(model: &mut Model, team: &Team) -> Vec<Action> {
    model.current_team = Some(team.clone());
    model.loading = false;

    Vec::new()
}

pub fn generation_failed(model: &mut Model, error: &str) -> Vec<Action> {
    // the prior team and view stay untouched, only the flag and the error
    // field change so the session is not stuck on the loading indicator
    model.error = Some(error.to_string());
    model.loading = false;

    Vec::new()
}

pub fn save(model: &mut Model) -> Vec<Action> {
    if !model.settings.save_enabled {
        tracing::warn!("ignoring save: feature is disabled");
        return Vec::new();
    }

    match &model.current_team {
        Some(team) => model.saved_teams.save(team.clone()),
        None => tracing::warn!("ignoring save without a generated team"),
    };

    Vec::new()
}
