mod cli_exec;
mod cli_runtime;
mod cli_subcommands;

pub(crate) use cli_subcommands::{Commands, PetCommands, RemoteCommands};

fn main() {
    if let Err(err) = cli_runtime::run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}
