use std::sync::Arc;

use clap::{Arg, ArgAction, ArgMatches, Command};
use poketeam_frontend::settings::Settings;
use poketeam_repository::{client::PokeApiClient, memory::StaticRepository, PokemonRepository};
use thiserror::Error;
use tracing::{debug, error};

#[derive(Debug, Error)]
pub enum Error {
    #[error("Initialization error")]
    Initialization,
}

#[tokio::main]
async fn main() {
    let logpath = match get_logging_path() {
        Ok(it) => it,
        Err(_) => return,
    };

    let logfile = tracing_appender::rolling::daily(logpath, "log");
    tracing_subscriber::fmt()
        .compact()
        .with_writer(logfile)
        .init();

    debug!("starting application");

    let mut settings = Settings::default();
    map_args_to_settings(&cli().get_matches(), &mut settings);

    let repository: Arc<dyn PokemonRepository> = if settings.offline {
        Arc::new(StaticRepository::with_default_roster())
    } else {
        Arc::new(PokeApiClient::new(settings.api_url.clone()))
    };

    match poketeam_frontend::run(settings, repository).await {
        Ok(()) => {
            debug!("closing application");
        }
        Err(err) => {
            error!("closing application with error: {:?}", err);
        }
    }
}

fn cli() -> Command {
    Command::new("poketeam")
        .about("poketeam - random pokemon team generator")
        .args([
            Arg::new("api-url")
                .long("api-url")
                .action(ArgAction::Set)
                .help("base url of the pokeapi instance to query"),
            Arg::new("offline")
                .long("offline")
                .action(ArgAction::SetTrue)
                .default_value("false")
                .help("serve teams from a built in roster instead of the pokeapi"),
            Arg::new("no-save-team")
                .long("no-save-team")
                .action(ArgAction::SetTrue)
                .default_value("false")
                .help("disable saving generated teams"),
            Arg::new("no-saved-teams")
                .long("no-saved-teams")
                .action(ArgAction::SetTrue)
                .default_value("false")
                .help("disable the saved teams screen"),
        ])
}

fn map_args_to_settings(args: &ArgMatches, settings: &mut Settings) {
    settings.api_url = args.get_one::<String>("api-url").cloned();
    settings.offline = args.get_flag("offline");
    settings.save_enabled = !args.get_flag("no-save-team");
    settings.saved_teams_enabled = !args.get_flag("no-saved-teams");
}

fn get_logging_path() -> Result<String, Error> {
    let cache_dir = match dirs::cache_dir() {
        Some(cache_dir) => match cache_dir.to_str() {
            Some(cache_dir_string) => cache_dir_string.to_string(),
            None => return Err(Error::Initialization),
        },
        None => return Err(Error::Initialization),
    };

    Ok(format!("{}{}", cache_dir, "/poketeam/logs"))
}
