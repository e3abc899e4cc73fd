use poketeam_repository::detail::PokemonDetail;

use crate::{
    action::Action,
    model::{Model, ViewState},
    task::Task,
};

pub fn generate(model: &mut Model) -> Vec<Action> {
    if model.loading {
        tracing::warn!("ignoring generation request while one is already running");
        return Vec::new();
    }

    if model.view != ViewState::Home {
        tracing::warn!("ignoring generate on view: {:?}", model.view);
        return Vec::new();
    }

    model.view = ViewState::Generator;

    start_generation(model)
}

pub fn refresh(model: &mut Model) -> Vec<Action> {
    if model.loading {
        tracing::warn!("ignoring refresh while a generation is already running");
        return Vec::new();
    }

    match model.view {
        ViewState::Generator => (),
        ViewState::Details(_) => {
            model.view = ViewState::Generator;
            model.details = None;
        }
        _ => {
            tracing::warn!("ignoring refresh on view: {:?}", model.view);
            return Vec::new();
        }
    };

    start_generation(model)
}

fn start_generation(model: &mut Model) -> Vec<Action> {
    model.error = None;
    model.loading = true;

    vec![Action::Task(Task::GenerateTeam)]
}

pub fn select(model: &mut Model, name: &str) -> Vec<Action> {
    if model.view != ViewState::Generator || model.loading {
        tracing::warn!("ignoring selection of {} on view: {:?}", name, model.view);
        return Vec::new();
    }

    let team = match &model.current_team {
        Some(team) => team,
        None => {
            tracing::warn!("ignoring selection without a generated team");
            return Vec::new();
        }
    };

    if !team.contains(name) {
        tracing::warn!("ignoring selection of {}: not a team member", name);
        return Vec::new();
    }

    model.view = ViewState::Details(name.to_string());
    model.details = None;

    vec![Action::Task(Task::LoadPokemon(name.to_string()))]
}

pub fn leave_details(model: &mut Model) -> Vec<Action> {
    match model.view {
        ViewState::Details(_) => {
            model.view = ViewState::Generator;
            model.details = None;
        }
        _ => tracing::warn!("ignoring back on view: {:?}", model.view),
    };

    Vec::new()
}

pub fn home(model: &mut Model) -> Vec<Action> {
    model.view = ViewState::Home;
    model.details = None;

    Vec::new()
}

pub fn saved_teams(model: &mut Model) -> Vec<Action> {
    if !model.settings.saved_teams_enabled {
        tracing::warn!("ignoring saved teams view: feature is disabled");
        return Vec::new();
    }

    match model.view {
        ViewState::Generator | ViewState::Details(_) => {
            model.view = ViewState::SavedTeams;
            model.details = None;
        }
        _ => tracing::warn!("ignoring saved teams view on view: {:?}", model.view),
    };

    Vec::new()
}

pub fn pokemon_loaded(model: &mut Model, detail: &PokemonDetail) -> Vec<Action> {
    // results arriving after navigation away are stale and get dropped
    match &model.view {
        ViewState::Details(name) if name == &detail.name => {
            model.details = Some(detail.clone());
        }
        _ => tracing::debug!("dropping stale detail record for {}", detail.name),
    };

    Vec::new()
}
