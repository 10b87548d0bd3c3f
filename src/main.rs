mod cli;
mod cmd;

use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use habitual::output;
use std::process;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { skip } => cmd::init::run(skip),
        Commands::Add { name, category } => {
            cmd::habit::run_add(&name, category.as_deref(), cli.user.as_deref(), cli.human)
        }
        Commands::List => cmd::habit::run_list(cli.user.as_deref(), cli.human),
        Commands::Remove { habit } => {
            cmd::habit::run_remove(&habit, cli.user.as_deref(), cli.human)
        }
        Commands::Log {
            habit,
            minutes,
            note,
        } => cmd::log::run(
            &habit,
            minutes,
            note.as_deref(),
            cli.date,
            cli.user.as_deref(),
            cli.human,
        ),
        Commands::Logs { habit, last } => {
            cmd::log::run_list(&habit, last, cli.user.as_deref(), cli.human)
        }
        Commands::Unlog { id } => cmd::log::run_remove(id, cli.user.as_deref(), cli.human),
        Commands::Stats { habit, days } => cmd::stats::run(
            &habit,
            days,
            cli.date,
            cli.user.as_deref(),
            cli.human,
        ),
        Commands::Config { action } => match action {
            ConfigAction::Show => cmd::config::run_show(cli.human),
            ConfigAction::Set { key, value } => cmd::config::run_set(&key, &value),
        },
    };

    if let Err(e) = result {
        let err = output::error("", "general_error", &e.to_string());
        eprintln!("{}", serde_json::to_string(&err).unwrap());
        process::exit(1);
    }
}
