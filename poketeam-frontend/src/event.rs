use std::sync::Arc;

use poketeam_repository::{detail::PokemonDetail, PokemonRepository};
use tokio::{
    io::{AsyncBufReadExt, BufReader},
    sync::mpsc::{self, Receiver},
};

use crate::{
    error::AppError,
    model::team::Team,
    task::{Task, TaskManager},
};

#[derive(Debug)]
pub struct Envelope {
    pub messages: Vec<Message>,
    pub source: MessageSource,
}

#[derive(Debug, Eq, PartialEq)]
pub enum MessageSource {
    Task,
    User,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Message {
    Error(String),
    GenerationFailed(String),
    LeaveDetails,
    NavigateHome,
    NavigateSavedTeams,
    PokemonLoaded(PokemonDetail),
    Quit,
    Refresh,
    SaveTeam,
    SelectMember(String),
    StartGeneration,
    TeamGenerated(Team),
}

pub struct Emitter {
    pub receiver: Receiver<Envelope>,
    tasks: TaskManager,
}

impl Emitter {
    pub fn start(repository: Arc<dyn PokemonRepository>) -> Self {
        let (sender, receiver) = mpsc::channel(1);
        let internal_sender = sender.clone();

        let (task_sender, mut task_receiver) = mpsc::channel(1);
        let tasks = TaskManager::new(repository, task_sender);
        tokio::spawn(async move {
            while let Some(messages) = task_receiver.recv().await {
                let _ = internal_sender
                    .send(Envelope {
                        messages,
                        source: MessageSource::Task,
                    })
                    .await;
            }
        });

        start_stdin_listener(sender);

        Self { receiver, tasks }
    }

    pub fn run(&mut self, task: Task) {
        self.tasks.run(task);
    }

    pub async fn shutdown(&mut self) -> Result<(), AppError> {
        self.tasks.finishing().await
    }
}

fn start_stdin_listener(sender: mpsc::Sender<Envelope>) {
    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        while let Ok(Some(line)) = lines.next_line().await {
            if let Some(envelope) = resolve_input(&line) {
                if sender.send(envelope).await.is_err() {
                    break;
                }
            }
        }
    });
}

pub fn resolve_input(line: &str) -> Option<Envelope> {
    let input = line.trim();
    if input.is_empty() {
        return None;
    }

    let (command, argument) = match input.split_once(char::is_whitespace) {
        Some((command, argument)) => (command, Some(argument.trim())),
        None => (input, None),
    };

    let message = match (command, argument) {
        ("generate", None) => Message::StartGeneration,
        ("refresh", None) => Message::Refresh,
        ("save", None) => Message::SaveTeam,
        ("select", Some(name)) if !name.is_empty() => Message::SelectMember(name.to_string()),
        ("back", None) => Message::LeaveDetails,
        ("home", None) => Message::NavigateHome,
        ("teams", None) => Message::NavigateSavedTeams,
        ("quit", None) | ("q", None) => Message::Quit,
        _ => Message::Error(format!("unknown command: {}", input)),
    };

    Some(Envelope {
        messages: vec![message],
        source: MessageSource::User,
    })
}
