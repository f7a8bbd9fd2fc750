use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// List todos, most recent first
    List {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a todo
    Add {
        /// Todo text
        text: String,
    },

    /// Replace the text of an existing todo
    Edit {
        /// Todo id (as printed by `list`)
        id: String,
        /// New text
        text: String,
    },

    /// Store the server URL and bearer token in the config file
    Login {
        #[arg(long)]
        url: String,
        #[arg(long)]
        token: String,
    },
}
