use crate::{peer_commands::PeerCommands, profile_commands::ProfileCommands};

use hc_core::DEFAULT_REGISTRATION_ROLE;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Create an account; an OTP is mailed to the address
    Register {
        #[arg(long)]
        username: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,

        /// Repeat the password
        #[arg(long)]
        confirm_password: String,

        #[arg(long, default_value = DEFAULT_REGISTRATION_ROLE)]
        role: String,

        /// Agree to the Terms and Conditions
        #[arg(long)]
        accept_terms: bool,
    },

    /// Verify an email address with the mailed OTP
    VerifyOtp {
        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        otp: String,
    },

    /// Mail a fresh OTP
    ResendOtp {
        #[arg(long)]
        email: Option<String>,
    },

    /// Sign in with email and password
    Login {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },

    /// Sign in with a Google ID token
    GoogleLogin {
        /// The credential returned by Google sign-in
        credential: String,
    },

    /// Sign out and forget the stored session
    Logout,

    /// Show the current session
    Whoami,

    /// Check whether a path may be opened with the current session
    Route {
        /// Path such as /profile or /chat/42
        path: String,
    },

    /// Your own profile
    Profile {
        #[command(subcommand)]
        action: ProfileCommands,
    },

    /// List the skill catalog
    Skills,

    /// Other community members
    Peer {
        #[command(subcommand)]
        action: PeerCommands,
    },
}
