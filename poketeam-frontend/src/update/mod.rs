use crate::{
    action::Action,
    event::{Envelope, Message},
    model::Model,
};

mod navigation;
mod team;

#[tracing::instrument(skip(model))]
pub fn update(model: &mut Model, envelope: &Envelope) -> Vec<Action> {
    envelope
        .messages
        .iter()
        .flat_map(|message| update_with_message(model, message))
        .collect()
}

fn update_with_message(model: &mut Model, message: &Message) -> Vec<Action> {
    match message {
        Message::Error(error) => {
            model.error = Some(error.to_string());
            Vec::new()
        }
        Message::GenerationFailed(error) => team::generation_failed(model, error),
        Message::LeaveDetails => navigation::leave_details(model),
        Message::NavigateHome => navigation::home(model),
        Message::NavigateSavedTeams => navigation::saved_teams(model),
        Message::PokemonLoaded(detail) => navigation::pokemon_loaded(model, detail),
        Message::Quit => vec![Action::Quit],
        Message::Refresh => navigation::refresh(model),
        Message::SaveTeam => team::save(model),
        Message::SelectMember(name) => navigation::select(model, name),
        Message::StartGeneration => navigation::generate(model),
        Message::TeamGenerated(team) => team::generated(model, team),
    }
}
