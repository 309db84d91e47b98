use anyhow::Result;

use crate::{Commands, PetCommands, RemoteCommands};

mod pets;
mod session;

pub(crate) fn handle_command(command: Commands) -> Result<()> {
    match command {
        Commands::Login {
            url,
            username,
            password,
        } => session::handle_login_command(url, &username, &password),
        Commands::Register {
            url,
            username,
            password,
            roles,
        } => session::handle_register_command(url, &username, &password, roles),
        Commands::Logout => session::handle_logout_command(),
        Commands::Whoami { json } => session::handle_whoami_command(json),
        Commands::Remote { command } => match command {
            RemoteCommands::Show { json } => session::handle_remote_show_command(json),
        },
        Commands::Pets { all, json } => pets::handle_pets_command(all, json),
        Commands::Pet { command } => match command {
            PetCommands::Create {
                name,
                pet_type,
                json,
            } => pets::handle_create_command(&name, &pet_type, json),
            PetCommands::Show { pet_id, json } => pets::handle_show_command(pet_id, json),
            PetCommands::Feed { pet_id, json } => pets::handle_feed_command(pet_id, json),
            PetCommands::Train { pet_id, json } => pets::handle_train_command(pet_id, json),
            PetCommands::Delete { pet_id } => pets::handle_delete_command(pet_id),
        },
    }
}
