use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Log in to a pet backend and persist the session
    Login {
        /// Backend base URL (defaults to the configured remote)
        #[arg(long)]
        url: Option<String>,
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },

    /// Create an account; the backend signs the new user in
    Register {
        /// Backend base URL (defaults to the configured remote)
        #[arg(long)]
        url: Option<String>,
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
        /// Requested role list entries
        #[arg(long = "role", default_value = "USER")]
        roles: Vec<String>,
    },

    /// Drop the persisted session
    Logout,

    /// Show the decoded identity of the current session
    Whoami {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the configured remote
    Remote {
        #[command(subcommand)]
        command: RemoteCommands,
    },

    /// List pets
    Pets {
        /// Every pet in the system (admin only)
        #[arg(long)]
        all: bool,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Operate on a single pet
    Pet {
        #[command(subcommand)]
        command: PetCommands,
    },
}

#[derive(Subcommand)]
pub(crate) enum RemoteCommands {
    /// Show the configured remote
    Show {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub(crate) enum PetCommands {
    /// Create a pet
    Create {
        #[arg(long)]
        name: String,
        /// Pet type: VEGETA|FREZER|MR_SATAN|GOKU|KRILLIN
        #[arg(long = "type")]
        pet_type: String,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a pet
    Show {
        pet_id: u64,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Feed a pet (hunger down, energy up)
    Feed {
        pet_id: u64,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Train a pet (energy down, hunger up)
    Train {
        pet_id: u64,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a pet
    Delete { pet_id: u64 },
}
