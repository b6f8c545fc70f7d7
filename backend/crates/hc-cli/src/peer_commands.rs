use clap::Subcommand;

#[derive(Subcommand)]
pub enum PeerCommands {
    /// Show another user's card and connection status
    Card {
        /// User ID
        user_id: String,
    },
    /// Send a connection request
    Connect {
        /// User ID
        user_id: String,
    },
    /// Open a chat with a connected user
    Message {
        /// User ID
        user_id: String,
    },
}
