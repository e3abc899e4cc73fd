use crate::{event::Emitter, task::Task};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Action {
    Quit,
    Task(Task),
}

#[derive(Debug, Eq, PartialEq)]
pub enum ActionResult {
    Continue,
    Quit,
}

pub fn exec(emitter: &mut Emitter, actions: Vec<Action>) -> ActionResult {
    let mut result = ActionResult::Continue;
    for action in actions {
        tracing::debug!("executing action: {:?}", action);

        match action {
            Action::Quit => result = ActionResult::Quit,
            Action::Task(task) => emitter.run(task),
        }
    }

    result
}
