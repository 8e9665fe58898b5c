use clap::Parser;

mod cli;
mod config;
mod errors;
mod gamelist;
mod games;
mod planner;
mod query;
mod sorting;
#[cfg(test)]
mod tests;

use config::Config;
use planner::Planner;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = cli::Args::parse();
    let config = Config::load();

    match args.command {
        cli::Command::Filter {
            expression,
            sort,
            descending,
            count,
            collection,
        } => {
            let path = collection.unwrap_or_else(|| config.collection.clone());
            let games = games::load_collection(&path)?;

            let mut planner = Planner::new(games);
            let sort_on = sort.as_deref().unwrap_or(&config.default_sort);
            let results = planner.filter_named(&expression, sort_on, !descending)?;

            if count {
                println!("{} games found", results.len());
            } else {
                println!("{}", serde_json::to_string_pretty(&results)?);
            }
            Ok(())
        }

        cli::Command::Fields {} => {
            cli::print_fields();
            Ok(())
        }

        cli::Command::Interactive { collection } => {
            let path = collection.unwrap_or_else(|| config.collection.clone());
            let games = games::load_collection(&path)?;
            cli::run_interactive(games)
        }
    }
}
