//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `taskboard_core` linkage with a deterministic scripted session.
//! - Show what a host UI would draw through a stdout renderer.

use log::error;
use std::rc::Rc;
use taskboard_core::{
    default_log_level, init_logging, Board, Category, DragSession, ProjectRecord,
    ProjectRenderer, ProjectStore,
};

const LOG_DIR_ENV: &str = "TASKBOARD_LOG_DIR";
const LOG_LEVEL_ENV: &str = "TASKBOARD_LOG_LEVEL";

struct StdoutRenderer;

impl ProjectRenderer for StdoutRenderer {
    fn render(&self, container_id: &str, projects: &[ProjectRecord]) {
        println!("[{container_id}] {} project(s)", projects.len());
        for project in projects {
            println!("  - {} ({} people)", project.title, project.people_count);
        }
    }
}

fn main() {
    println!("taskboard_core ping={}", taskboard_core::ping());
    println!("taskboard_core version={}", taskboard_core::core_version());

    if let Ok(log_dir) = std::env::var(LOG_DIR_ENV) {
        let level =
            std::env::var(LOG_LEVEL_ENV).unwrap_or_else(|_| default_log_level().to_string());
        if let Err(err) = init_logging(&level, &log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    let store = Rc::new(ProjectStore::new());
    let mut board = Board::new(Rc::clone(&store), Rc::new(StdoutRenderer));

    let input = board.input();
    input.set_title("Build API");
    input.set_description("Implement REST endpoints");
    input.set_people("3");
    let id = match input.submit() {
        Ok(id) => id,
        Err(err) => {
            error!("event=demo module=cli status=error reason=\"{err}\"");
            eprintln!("demo submit rejected: {err}");
            std::process::exit(1);
        }
    };

    let Some(item) = board.view(Category::Active).item(id) else {
        eprintln!("demo project missing from active view");
        std::process::exit(1);
    };
    let finished = board.view(Category::Finished);
    let mut session = DragSession::start(&item);
    session.over(finished);
    session.drop(finished);
    session.end(&item);

    println!("drag session phase={:?}", session.phase());
}
