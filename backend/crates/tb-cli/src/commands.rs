use clap::Subcommand;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Initialize the users table
    InitUsers,

    /// Initialize the tokens table
    InitTokens,

    /// Add a new user
    Add {
        /// The username of the new user
        username: String,
        /// The password of the new user
        password: String,
    },

    /// Create a one-time registration link
    Token,

    /// Clear the kill factor of every issue
    ResetKillFactor,
}
