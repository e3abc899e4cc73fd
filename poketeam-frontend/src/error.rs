use thiserror::Error;

use crate::event::Message;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Error aggregation")]
    Aggregate(Vec<AppError>),
    #[error("Sending messages to the main loop failed")]
    MessageSendFailed(#[from] tokio::sync::mpsc::error::SendError<Vec<Message>>),
}
