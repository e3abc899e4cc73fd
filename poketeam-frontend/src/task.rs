use std::sync::Arc;

use poketeam_repository::{error::RepositoryError, PokemonRepository};
use tokio::{sync::mpsc::Sender, task::JoinSet};

use crate::{
    error::AppError,
    event::Message,
    model::team::{Team, TEAM_SIZE},
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Task {
    GenerateTeam,
    LoadPokemon(String),
}

pub struct TaskManager {
    repository: Arc<dyn PokemonRepository>,
    sender: Sender<Vec<Message>>,
    tasks: JoinSet<Result<(), AppError>>,
}

impl TaskManager {
    pub fn new(repository: Arc<dyn PokemonRepository>, sender: Sender<Vec<Message>>) -> Self {
        Self {
            repository,
            sender,
            tasks: JoinSet::new(),
        }
    }

    pub async fn finishing(&mut self) -> Result<(), AppError> {
        let mut errors = Vec::new();
        while let Some(task) = self.tasks.join_next().await {
            match task {
                Ok(Ok(())) => (),
                Ok(Err(error)) => {
                    tracing::error!("task result returned error: {:?}", error);
                    errors.push(error)
                }
                Err(error) => {
                    tracing::error!("task failed: {:?}", error);
                }
            };
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::Aggregate(errors))
        }
    }

    pub fn run(&mut self, task: Task) {
        match task {
            Task::GenerateTeam => {
                let repository = self.repository.clone();
                let sender = self.sender.clone();
                self.tasks.spawn(async move {
                    let message = match generate_team(repository.as_ref()).await {
                        Ok(team) => Message::TeamGenerated(team),
                        Err(error) => {
                            tracing::error!("generating team failed: {:?}", error);
                            Message::GenerationFailed(error.to_string())
                        }
                    };

                    sender.send(vec![message]).await?;
                    Ok(())
                });
            }
            Task::LoadPokemon(name) => {
                let repository = self.repository.clone();
                let sender = self.sender.clone();
                self.tasks.spawn(async move {
                    let message = match repository.pokemon(&name).await {
                        Ok(detail) => Message::PokemonLoaded(detail),
                        Err(error) => {
                            tracing::error!("loading pokemon {} failed: {:?}", name, error);
                            Message::Error(error.to_string())
                        }
                    };

                    sender.send(vec![message]).await?;
                    Ok(())
                });
            }
        };
    }
}

/// One generation run: six times in a row, draw a random pokemon and look its
/// detail record up again by name. The second lookup warms the repository so
/// the details view opens without waiting; its result is discarded here. The
/// calls are strictly sequential, so the team order equals the response
/// order. The first failure aborts the whole run.
async fn generate_team(repository: &dyn PokemonRepository) -> Result<Team, RepositoryError> {
    let mut members = Vec::with_capacity(TEAM_SIZE);
    for _ in 0..TEAM_SIZE {
        let random = repository.random_pokemon().await?;
        repository.pokemon(&random.name).await?;
        members.push(random.name);
    }

    Ok(Team::new(members))
}

#[cfg(test)]
mod test {
    use std::{collections::VecDeque, sync::Mutex};

    use async_trait::async_trait;
    use poketeam_repository::detail::PokemonDetail;

    use super::*;

    struct SequencedRepository {
        calls: Mutex<Vec<String>>,
        responses: Mutex<VecDeque<Result<&'static str, RepositoryError>>>,
    }

    impl SequencedRepository {
        fn new(responses: Vec<Result<&'static str, RepositoryError>>) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                responses: Mutex::new(responses.into_iter().collect()),
            }
        }

        fn detail(name: &str) -> PokemonDetail {
            PokemonDetail {
                id: 0,
                name: name.to_string(),
                height: 1,
                weight: 1,
                types: Vec::new(),
            }
        }
    }

    #[async_trait]
    impl PokemonRepository for SequencedRepository {
        async fn pokemon(&self, name: &str) -> Result<PokemonDetail, RepositoryError> {
            self.calls.lock().unwrap().push(format!("pokemon {}", name));
            Ok(Self::detail(name))
        }

        async fn random_pokemon(&self) -> Result<PokemonDetail, RepositoryError> {
            self.calls.lock().unwrap().push("random".to_string());
            let response = self
                .responses
                .lock()
                .unwrap()
                .pop_front()
                .expect("unexpected random_pokemon call");

            response.map(Self::detail)
        }
    }

    #[tokio::test]
    async fn generate_team_collects_six_names_in_response_order() {
        let repository = SequencedRepository::new(vec![
            Ok("pikachu"),
            Ok("onix"),
            Ok("pikachu"),
            Ok("eevee"),
            Ok("gastly"),
            Ok("snorlax"),
        ]);

        let team = generate_team(&repository).await.unwrap();

        assert_eq!(
            team.members(),
            &["pikachu", "onix", "pikachu", "eevee", "gastly", "snorlax"]
        );
    }

    #[tokio::test]
    async fn generate_team_prefetches_every_member_sequentially() {
        let repository = SequencedRepository::new(vec![Ok("a"), Ok("b"), Ok("c"), Ok("d"), Ok("e"), Ok("f")]);

        generate_team(&repository).await.unwrap();

        let calls = repository.calls.lock().unwrap();
        let expected: Vec<String> = ["a", "b", "c", "d", "e", "f"]
            .iter()
            .flat_map(|name| ["random".to_string(), format!("pokemon {}", name)])
            .collect();

        assert_eq!(*calls, expected);
    }

    #[tokio::test]
    async fn generate_team_aborts_on_first_failure() {
        let repository = SequencedRepository::new(vec![
            Ok("a"),
            Ok("b"),
            Err(RepositoryError::Transport("connection reset".to_string())),
        ]);

        let result = generate_team(&repository).await;

        assert_eq!(
            result,
            Err(RepositoryError::Transport("connection reset".to_string()))
        );

        // two completed iterations plus the failing draw, nothing after
        let calls = repository.calls.lock().unwrap();
        assert_eq!(
            *calls,
            vec!["random", "pokemon a", "random", "pokemon b", "random"]
        );
    }
}
