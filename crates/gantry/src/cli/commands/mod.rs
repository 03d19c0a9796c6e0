//! CLI commands

mod board;
mod changelog;
mod codec;
mod commits;
mod completions;
mod init;

pub use board::{CardsCommand, ColumnsCommand};
pub use changelog::ChangelogCommand;
pub use codec::CodecCommand;
pub use commits::CommitsCommand;
pub use completions::CompletionsCommand;
pub use init::InitCommand;
