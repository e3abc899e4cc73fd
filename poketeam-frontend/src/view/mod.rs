use crate::model::{Model, ViewState};

pub fn render_model(model: &Model) -> String {
    let mut content = match &model.view {
        ViewState::Home => render_home(model),
        ViewState::Generator => render_generator(model),
        ViewState::Details(name) => render_details(model, name),
        ViewState::SavedTeams => render_saved_teams(model),
    };

    if let Some(error) = &model.error {
        content.push_str(&format!("\nerror: {}\n", error));
    }

    content
}

fn render_home(model: &Model) -> String {
    let mut content = String::from("== poketeam ==\n\ncommands:\n  generate - roll a new team\n");
    if model.settings.save_enabled {
        content.push_str("  save     - keep the current team\n");
    }
    content.push_str("  quit     - leave\n");

    content
}

fn render_generator(model: &Model) -> String {
    if model.loading {
        return String::from("generating team ...\n");
    }

    let mut content = String::from("== your team ==\n");
    match &model.current_team {
        Some(team) => {
            for (index, name) in team.members().iter().enumerate() {
                content.push_str(&format!("  {}. {}\n", index + 1, name));
            }
            content.push_str("\nselect <name> | refresh | save | teams | home\n");
        }
        // generate is only accepted on the home screen; from here the user
        // recovers with refresh
        None => content.push_str("no team yet, run refresh\n"),
    };

    content
}

fn render_details(model: &Model, name: &str) -> String {
    let mut content = format!("== {} ==\n", name);
    match &model.details {
        Some(detail) => {
            content.push_str(&format!("  id:     {}\n", detail.id));
            content.push_str(&format!("  height: {}\n", detail.height));
            content.push_str(&format!("  weight: {}\n", detail.weight));
            content.push_str(&format!("  types:  {}\n", detail.type_names().join(", ")));
        }
        None => content.push_str("loading details ...\n"),
    };
    content.push_str("\nback | refresh | teams | home\n");

    content
}

fn render_saved_teams(model: &Model) -> String {
    let mut content = String::from("== saved teams ==\n");
    if model.saved_teams.is_empty() {
        content.push_str("nothing saved yet\n");
    }

    for (index, team) in model.saved_teams.teams().iter().enumerate() {
        content.push_str(&format!(
            "  team {}: {}\n",
            index + 1,
            team.members().join(", ")
        ));
    }
    content.push_str("\nhome\n");

    content
}

#[cfg(test)]
mod test {
    use crate::model::team::Team;

    use super::*;

    fn team(names: &[&str]) -> Team {
        Team::new(names.iter().map(|name| name.to_string()).collect())
    }

    #[test]
    fn generator_shows_loading_indicator_while_a_run_is_in_flight() {
        let mut model = Model::default();
        model.view = ViewState::Generator;
        model.loading = true;
        model.current_team = Some(team(&["a", "b", "c", "d", "e", "f"]));

        let content = render_model(&model);

        assert!(content.contains("generating team"));
        assert!(!content.contains("1. a"));
    }

    #[test]
    fn generator_lists_the_team_in_order() {
        let mut model = Model::default();
        model.view = ViewState::Generator;
        model.current_team = Some(team(&["pikachu", "onix", "eevee", "gastly", "snorlax", "meowth"]));

        let content = render_model(&model);

        assert!(content.contains("1. pikachu"));
        assert!(content.contains("6. meowth"));
    }

    #[test]
    fn generator_empty_state_hints_the_command_accepted_there() {
        let mut model = Model::default();
        model.view = ViewState::Generator;

        let content = render_model(&model);

        assert!(content.contains("run refresh"));
        assert!(!content.contains("run generate"));
    }

    #[test]
    fn error_field_renders_on_every_view() {
        let mut model = Model::default();
        model.error = Some("connection reset".to_string());

        assert!(render_model(&model).contains("error: connection reset"));
    }

    #[test]
    fn saved_teams_renders_each_saved_team_indexed() {
        let mut model = Model::default();
        model.view = ViewState::SavedTeams;
        model.saved_teams.save(team(&["a", "b", "c", "d", "e", "f"]));

        let content = render_model(&model);

        assert!(content.contains("team 1: a, b, c, d, e, f"));
    }
}
