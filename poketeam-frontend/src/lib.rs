use std::sync::Arc;

use action::ActionResult;
use error::AppError;
use event::Emitter;
use model::Model;
use poketeam_repository::PokemonRepository;
use settings::Settings;
use view::render_model;

mod action;
pub mod error;
mod event;
mod model;
pub mod settings;
mod task;
mod update;
mod view;

pub async fn run(
    settings: Settings,
    repository: Arc<dyn PokemonRepository>,
) -> Result<(), AppError> {
    let mut emitter = Emitter::start(repository);

    let mut model = Model {
        settings,
        ..Default::default()
    };

    tracing::debug!("starting with model state: {:?}", model);
    println!("{}", render_model(&model));

    let mut result = Vec::new();
    while let Some(envelope) = emitter.receiver.recv().await {
        tracing::debug!("received messages: {:?}", envelope.messages);

        let actions = update::update(&mut model, &envelope);
        let exec = action::exec(&mut emitter, actions);

        println!("{}", render_model(&model));

        if exec == ActionResult::Quit {
            break;
        }
    }

    if let Err(error) = emitter.shutdown().await {
        result.push(error);
    }

    if result.is_empty() {
        Ok(())
    } else {
        Err(AppError::Aggregate(result))
    }
}
