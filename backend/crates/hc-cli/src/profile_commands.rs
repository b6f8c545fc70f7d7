use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum ProfileCommands {
    /// Show your own profile
    Show,
    /// Update your profile; omitted fields keep their current values
    Update {
        #[arg(long)]
        username: Option<String>,

        /// Full name
        #[arg(long)]
        full_name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        /// Phone number
        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        state: Option<String>,

        #[arg(long)]
        bio: Option<String>,

        #[arg(long)]
        timezone: Option<String>,

        #[arg(long)]
        availability: Option<String>,

        /// Skill IDs, comma separated (replaces the current selection)
        #[arg(long, value_delimiter = ',')]
        skill_ids: Option<Vec<i64>>,

        /// Image file to upload as the new profile photo
        #[arg(long)]
        photo: Option<PathBuf>,
    },
}
