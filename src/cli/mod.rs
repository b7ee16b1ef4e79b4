mod commands;
mod handlers;

pub use commands::{
    Cli, Commands, GoalAction, GoalCommand, NoteAction, NoteCommand, ProfileAction,
    ProfileCommand, ResourceAction, ResourceCommand, SessionAction, SessionCommand, TaskAction,
    TaskCommand,
};
pub use handlers::{
    handle_delete, handle_goal_add, handle_goal_toggle, handle_list, handle_note_add,
    handle_profile_set, handle_profile_show, handle_progress, handle_reset, handle_resource_add,
    handle_session_add, handle_show, handle_task_add, handle_task_done, TerminalView,
};
