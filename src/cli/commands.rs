use std::path::PathBuf;

use chrono::{NaiveDate, NaiveTime};
use clap::{Args, Parser, Subcommand};

use crate::entity::{Difficulty, GoalCategory};

#[derive(Parser, Debug)]
#[command(name = "tutordesk")]
#[command(version, about = "Track a student's goals, tasks, sessions, resources and notes")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Directory holding the tracker data (overrides TUTORDESK_DIR)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the profile, every list and task progress
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the task completion percentage
    Progress {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// View or edit the student profile
    Profile(ProfileCommand),

    /// Manage goals
    Goal(GoalCommand),

    /// Manage assigned tasks
    Task(TaskCommand),

    /// Manage mentoring sessions
    Session(SessionCommand),

    /// Manage reference resources
    Resource(ResourceCommand),

    /// Manage free-text notes
    Note(NoteCommand),

    /// Erase all data and start again from the example document
    Reset {
        /// Skip the confirmation prompt
        #[arg(long)]
        force: bool,
    },
}

#[derive(Args, Debug)]
pub struct ProfileCommand {
    #[command(subcommand)]
    pub action: ProfileAction,
}

#[derive(Subcommand, Debug)]
pub enum ProfileAction {
    /// Print the profile
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Change one or more profile fields
    Set {
        /// Student name (blank resets to the placeholder)
        #[arg(long)]
        student: Option<String>,

        /// Course label
        #[arg(long)]
        course: Option<String>,

        /// Mentor name
        #[arg(long)]
        mentor: Option<String>,

        /// Student level
        #[arg(long)]
        level: Option<String>,

        /// Free-form observations
        #[arg(long)]
        observations: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug)]
pub struct GoalCommand {
    #[command(subcommand)]
    pub action: GoalAction,
}

#[derive(Subcommand, Debug)]
pub enum GoalAction {
    /// Add a goal to the top of the list
    Add {
        /// What the student should achieve
        text: String,

        /// Horizon (short, medium, long)
        #[arg(long, short = 'c', default_value = "short")]
        category: GoalCategory,

        /// Target date (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        target: Option<NaiveDate>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Mark a goal done, or not done if it already is
    Toggle {
        /// Goal id or unique id prefix
        id: String,
    },

    /// Delete a goal
    Delete {
        /// Goal id or unique id prefix
        id: String,
    },

    /// List goals
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug)]
pub struct TaskCommand {
    #[command(subcommand)]
    pub action: TaskAction,
}

#[derive(Subcommand, Debug)]
pub enum TaskAction {
    /// Assign a task
    Add {
        /// Task description
        text: String,

        /// Difficulty (easy, medium, hard)
        #[arg(long, short = 'd', default_value = "easy")]
        difficulty: Difficulty,

        /// Due date (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        due: Option<NaiveDate>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Mark a task as done
    Done {
        /// Task id or unique id prefix
        id: String,

        /// Mark as not done instead
        #[arg(long)]
        undo: bool,
    },

    /// Delete a task
    Delete {
        /// Task id or unique id prefix
        id: String,
    },

    /// List tasks
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug)]
pub struct SessionCommand {
    #[command(subcommand)]
    pub action: SessionAction,
}

#[derive(Subcommand, Debug)]
pub enum SessionAction {
    /// Schedule a session
    Add {
        /// Session date (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        date: Option<NaiveDate>,

        /// Start time (HH:MM, 24h)
        #[arg(long, value_parser = parse_time)]
        time: Option<NaiveTime>,

        /// How the session is held
        #[arg(long, short = 'm', default_value = "in-person")]
        modality: String,

        /// What the session should cover
        #[arg(long, short = 'o')]
        objective: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a session
    Delete {
        /// Session id or unique id prefix
        id: String,
    },

    /// List sessions in date order
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug)]
pub struct ResourceCommand {
    #[command(subcommand)]
    pub action: ResourceAction,
}

#[derive(Subcommand, Debug)]
pub enum ResourceAction {
    /// Add a resource to the top of the list
    Add {
        /// Resource title
        title: String,

        /// Link to the resource
        #[arg(long)]
        url: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a resource
    Delete {
        /// Resource id or unique id prefix
        id: String,
    },

    /// List resources
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug)]
pub struct NoteCommand {
    #[command(subcommand)]
    pub action: NoteAction,
}

#[derive(Subcommand, Debug)]
pub enum NoteAction {
    /// Save a note, stamped with the current time
    Add {
        /// Note text
        text: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a note
    Delete {
        /// Note id or unique id prefix
        id: String,
    },

    /// List notes, newest first
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

fn parse_time(s: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(s, "%H:%M")
        .map_err(|_| format!("Invalid time '{}', expected HH:MM", s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_goal_add() {
        let cli = Cli::try_parse_from([
            "tutordesk",
            "goal",
            "add",
            "Dividir con decimales",
            "--category",
            "medium",
            "--target",
            "2024-05-20",
        ])
        .unwrap();

        match cli.command {
            Commands::Goal(GoalCommand {
                action:
                    GoalAction::Add {
                        text,
                        category,
                        target,
                        json,
                    },
            }) => {
                assert_eq!(text, "Dividir con decimales");
                assert_eq!(category, GoalCategory::Medium);
                assert_eq!(target, NaiveDate::from_ymd_opt(2024, 5, 20));
                assert!(!json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_rejects_bad_date_and_time() {
        assert!(Cli::try_parse_from(["tutordesk", "task", "add", "x", "--due", "20/05/2024"]).is_err());
        assert!(Cli::try_parse_from(["tutordesk", "session", "add", "--time", "9am"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["tutordesk", "show", "--data-dir", "/tmp/t", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/t")));
    }
}
