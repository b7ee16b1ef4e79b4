use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};
use tutordesk::cli::{
    handle_delete, handle_goal_add, handle_goal_toggle, handle_list, handle_note_add,
    handle_profile_set, handle_profile_show, handle_progress, handle_reset, handle_resource_add,
    handle_session_add, handle_show, handle_task_add, handle_task_done, Cli, Commands, GoalAction,
    NoteAction, ProfileAction, ResourceAction, SessionAction, TaskAction,
};
use tutordesk::entity::ProfileUpdate;
use tutordesk::view::ListKind;

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("tutordesk=info"),
        2 => EnvFilter::new("tutordesk=debug"),
        _ => EnvFilter::new("trace"),
    };
    // stdout carries command output, logs go to stderr
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let dir = cli.data_dir.as_deref();

    let result = match cli.command {
        Commands::Show { json } => handle_show(dir, json),
        Commands::Progress { json } => handle_progress(dir, json),
        Commands::Profile(profile) => match profile.action {
            ProfileAction::Show { json } => handle_profile_show(dir, json),
            ProfileAction::Set {
                student,
                course,
                mentor,
                level,
                observations,
                json,
            } => handle_profile_set(
                dir,
                ProfileUpdate {
                    student_name: student,
                    course_label: course,
                    mentor_name: mentor,
                    student_level: level,
                    observations,
                },
                json,
            ),
        },
        Commands::Goal(goal) => match goal.action {
            GoalAction::Add {
                text,
                category,
                target,
                json,
            } => handle_goal_add(dir, text, category, target, json),
            GoalAction::Toggle { id } => handle_goal_toggle(dir, id),
            GoalAction::Delete { id } => handle_delete(dir, ListKind::Goals, id),
            GoalAction::List { json } => handle_list(dir, ListKind::Goals, json),
        },
        Commands::Task(task) => match task.action {
            TaskAction::Add {
                text,
                difficulty,
                due,
                json,
            } => handle_task_add(dir, text, difficulty, due, json),
            TaskAction::Done { id, undo } => handle_task_done(dir, id, undo),
            TaskAction::Delete { id } => handle_delete(dir, ListKind::Tasks, id),
            TaskAction::List { json } => handle_list(dir, ListKind::Tasks, json),
        },
        Commands::Session(session) => match session.action {
            SessionAction::Add {
                date,
                time,
                modality,
                objective,
                json,
            } => handle_session_add(dir, date, time, modality, objective, json),
            SessionAction::Delete { id } => handle_delete(dir, ListKind::Sessions, id),
            SessionAction::List { json } => handle_list(dir, ListKind::Sessions, json),
        },
        Commands::Resource(resource) => match resource.action {
            ResourceAction::Add { title, url, json } => handle_resource_add(dir, title, url, json),
            ResourceAction::Delete { id } => handle_delete(dir, ListKind::Resources, id),
            ResourceAction::List { json } => handle_list(dir, ListKind::Resources, json),
        },
        Commands::Note(note) => match note.action {
            NoteAction::Add { text, json } => handle_note_add(dir, text, json),
            NoteAction::Delete { id } => handle_delete(dir, ListKind::Notes, id),
            NoteAction::List { json } => handle_list(dir, ListKind::Notes, json),
        },
        Commands::Reset { force } => handle_reset(dir, force),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
