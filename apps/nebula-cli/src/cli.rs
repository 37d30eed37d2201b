//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use nebula_core::services::AssistAction;

#[derive(Debug, Parser)]
#[command(name = "nebula", version, about = "Nebula Blog - read and manage posts")]
pub struct Cli {
    /// Directory holding the post slot
    #[arg(long, global = true, env = "NEBULA_DATA_DIR")]
    pub data_dir: Option<PathBuf>,
    /// Print JSON view models instead of text
    #[arg(long, global = true)]
    pub json: bool,
    /// Use throwaway in-memory storage
    #[arg(long, global = true)]
    pub ephemeral: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List posts grouped by year
    List {
        /// Case-insensitive match on title, summary or tags
        #[arg(short, long, default_value = "")]
        search: String,
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },
    /// Show a single post
    Show { id: String },
    /// Page through posts interactively
    Browse {
        #[arg(short, long, default_value = "")]
        search: String,
    },
    /// Log into the admin area
    Login {
        /// Read from stdin when omitted
        #[arg(long, env = "NEBULA_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },
    /// Log out of the admin area
    Logout,
    /// Manage posts (requires login)
    #[command(subcommand)]
    Admin(AdminCommand),
}

#[derive(Debug, Subcommand)]
pub enum AdminCommand {
    /// List all posts with ids
    Posts {
        /// Case-insensitive match on title or summary
        #[arg(short, long, default_value = "")]
        search: String,
    },
    /// Create a post
    New(EditArgs),
    /// Edit an existing post
    Edit {
        id: String,
        #[command(flatten)]
        args: EditArgs,
    },
    /// Delete a post
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Run a writing assistant helper on some text
    Assist {
        #[arg(value_enum)]
        action: AssistKind,
        #[command(flatten)]
        source: ContentSource,
    },
}

#[derive(Debug, Clone, Default, Args)]
pub struct ContentSource {
    /// Markdown content
    #[arg(long, conflicts_with = "content_file")]
    pub content: Option<String>,
    /// Read markdown content from a file
    #[arg(long)]
    pub content_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Args)]
pub struct EditArgs {
    #[arg(long)]
    pub title: Option<String>,
    #[command(flatten)]
    pub source: ContentSource,
    #[arg(long)]
    pub summary: Option<String>,
    /// Comma-separated tags
    #[arg(long)]
    pub tags: Option<String>,
    /// Cover image URL
    #[arg(long)]
    pub cover: Option<String>,
    /// Generate the summary with the writing assistant
    #[arg(long)]
    pub ai_summary: bool,
    /// Let the writing assistant suggest a title
    #[arg(long)]
    pub ai_title: bool,
    /// Copy-edit the content with the writing assistant
    #[arg(long)]
    pub ai_improve: bool,
}

impl EditArgs {
    /// Requested assistant helpers, in the order they run.
    pub fn assist_actions(&self) -> Vec<AssistAction> {
        [
            (self.ai_improve, AssistAction::Improve),
            (self.ai_title, AssistAction::Title),
            (self.ai_summary, AssistAction::Summary),
        ]
        .into_iter()
        .filter_map(|(on, action)| on.then_some(action))
        .collect()
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum AssistKind {
    Summary,
    Title,
    Improve,
}

impl From<AssistKind> for AssistAction {
    fn from(kind: AssistKind) -> Self {
        match kind {
            AssistKind::Summary => AssistAction::Summary,
            AssistKind::Title => AssistAction::Title,
            AssistKind::Improve => AssistAction::Improve,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_list() {
        let cli = Cli::parse_from(["nebula", "list", "--search", "rust", "--page", "2", "--json"]);

        assert!(cli.json);
        assert!(matches!(cli.command, Command::List { ref search, page: 2 } if search == "rust"));
    }

    #[test]
    fn test_assist_actions_order() {
        let cli = Cli::parse_from([
            "nebula", "admin", "new", "--title", "T", "--content", "C", "--ai-summary",
            "--ai-improve",
        ]);

        let Command::Admin(AdminCommand::New(args)) = cli.command else {
            panic!("expected admin new");
        };
        assert_eq!(
            args.assist_actions(),
            vec![AssistAction::Improve, AssistAction::Summary]
        );
    }
}
