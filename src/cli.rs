use clap::{Parser, Subcommand};
use inquire::error::InquireError;

use crate::games::BoardGame;
use crate::gamelist::GameList;
use crate::planner::Planner;
use crate::query::GameField;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Filter the collection with a comma-separated expression,
    /// e.g. "minplayers>1,maxplayers<6,name~=go".
    Filter {
        /// Filter expression. Clauses are ANDed left to right.
        expression: String,

        /// Field to sort results on (defaults to the configured field)
        #[clap(short, long)]
        sort: Option<String>,

        /// Sort descending instead of ascending
        #[clap(short, long, default_value = "false")]
        descending: bool,

        /// Print the count instead of the games
        #[clap(short, long, default_value = "false")]
        count: bool,

        /// Collection CSV to load (defaults to the configured path)
        #[clap(long)]
        collection: Option<String>,
    },

    /// List the filterable/sortable fields and their value kinds.
    Fields {},

    /// Start an interactive session: filter the collection, build up a
    /// shortlist, and save it to a file.
    Interactive {
        /// Collection CSV to load (defaults to the configured path)
        #[clap(long)]
        collection: Option<String>,
    },
}

pub fn print_fields() {
    for field in GameField::ALL {
        println!("{:<12} {}", field.canonical_name(), field.kind().label());
    }
}

/// Prompt loop for one planning session. The shortlist lives only for the
/// duration of the session; `save` is how it leaves the process.
pub fn run_interactive(games: Vec<BoardGame>) -> anyhow::Result<()> {
    let mut planner = Planner::new(games);
    let mut list = GameList::new();
    let mut current = planner.filter("")?;

    println!(
        "{} games loaded. Type 'help' for commands, 'exit' to quit.",
        current.len()
    );

    loop {
        let line = match inquire::Text::new(">").prompt() {
            Ok(line) => line,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(err) => anyhow::bail!("prompt error: {err}"),
        };
        let line = line.trim();
        let (cmd, rest) = line.split_once(' ').unwrap_or((line, ""));
        let rest = rest.trim();

        match cmd.to_lowercase().as_str() {
            "" => {}

            "help" => print_help(),

            "filter" => match planner.filter(rest) {
                Ok(games) => {
                    current = games;
                    print_games(&current);
                }
                Err(err) => println!("error: {err}"),
            },

            "sort" => {
                let (field, dir) = rest.split_once(' ').unwrap_or((rest, "asc"));
                let ascending = !dir.trim().eq_ignore_ascii_case("desc");
                match planner.filter_named("", field, ascending) {
                    Ok(games) => {
                        current = games;
                        print_games(&current);
                    }
                    Err(err) => println!("error: {err}"),
                }
            }

            "reset" => {
                planner.reset();
                current = planner.filter("")?;
                println!("{} games", current.len());
            }

            "add" => match list.add_to_list(rest, &current) {
                Ok(()) => println!("{} games on the list", list.count()),
                Err(err) => println!("error: {err}"),
            },

            "remove" => match list.remove_from_list(rest) {
                Ok(()) => println!("{} games on the list", list.count()),
                Err(err) => println!("error: {err}"),
            },

            "list" => {
                for (pos, name) in list.game_names().iter().enumerate() {
                    println!("{}: {}", pos + 1, name);
                }
            }

            "clear" => {
                list.clear();
                println!("list cleared");
            }

            "save" => {
                if rest.is_empty() {
                    println!("usage: save <path>");
                    continue;
                }
                match list.save(rest) {
                    Ok(()) => println!("saved {} names to {rest}", list.count()),
                    Err(err) => println!("error: {err}"),
                }
            }

            "exit" | "quit" => break,

            other => println!("unknown command: {other}"),
        }
    }

    Ok(())
}

fn print_games(games: &[BoardGame]) {
    for (pos, game) in games.iter().enumerate() {
        println!("{}: {}", pos + 1, game.name);
    }
    println!("{} games", games.len());
}

fn print_help() {
    println!("filter <expr>        narrow the working set (e.g. rating>=7,maxplayers<6)");
    println!("sort <field> [desc]  re-sort the working set");
    println!("reset                start over from the full collection");
    println!("add <token>          add to the list: ALL, an index/range, or a name");
    println!("remove <token>       remove from the list: ALL, an index/range, or a name");
    println!("list                 show the list");
    println!("clear                empty the list");
    println!("save <path>          write the list names to a file");
    println!("exit                 quit");
}
