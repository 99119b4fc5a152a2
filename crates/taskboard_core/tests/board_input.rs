use std::rc::Rc;
use taskboard_core::{
    Board, Category, ProjectStore, ProjectValidationError, RecordingRenderer,
};

fn board() -> (Board, Rc<RecordingRenderer>) {
    let store = Rc::new(ProjectStore::new());
    let renderer = Rc::new(RecordingRenderer::new());
    let board = Board::new(store, renderer.clone());
    (board, renderer)
}

#[test]
fn board_wires_two_subscribed_views_and_initial_frames() {
    let (board, renderer) = board();

    assert_eq!(board.store().subscriber_count(), 2);
    assert_eq!(board.view(Category::Active).category(), Category::Active);
    assert_eq!(board.view(Category::Finished).category(), Category::Finished);

    let frames = renderer.frames();
    assert_eq!(frames.len(), 2);
    assert_eq!(frames[0].container_id, "active-project-list");
    assert_eq!(frames[1].container_id, "finished-project-list");
    assert!(frames.iter().all(|frame| frame.projects.is_empty()));
}

#[test]
fn submit_creates_active_project_and_clears_form() {
    let (mut board, renderer) = board();
    let input = board.input();
    input.set_title("Build API");
    input.set_description("Implement REST endpoints");
    input.set_people("3");

    let id = input.submit().unwrap();
    assert!(input.draft().title.is_empty());
    assert!(input.draft().people.is_empty());

    let active = board.view(Category::Active).items();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].id(), id);
    assert_eq!(active[0].persons_label(), "3 persons assigned");
    assert_eq!(renderer.frame_count("active-project-list"), 2);
    assert_eq!(renderer.frame_count("finished-project-list"), 2);
}

#[test]
fn rejected_submit_does_not_notify_views() {
    let (mut board, renderer) = board();
    let input = board.input();
    input.set_title("Build API");
    input.set_description("Implement REST endpoints");
    input.set_people("0");

    let err = input.submit().unwrap_err();
    assert_eq!(
        err,
        ProjectValidationError::PeopleOutOfRange {
            min: 1,
            max: 100,
            actual: 0
        }
    );
    assert!(board.store().is_empty());
    assert_eq!(renderer.frames().len(), 2);
}

#[test]
fn views_built_after_records_exist_start_current() {
    let store = Rc::new(ProjectStore::new());
    let id = store.create("early", "created before the board", 1);
    store.reassign_category(id, Category::Finished);

    let board = Board::new(Rc::clone(&store), Rc::new(RecordingRenderer::new()));
    assert!(board.view(Category::Active).projects().is_empty());
    assert_eq!(board.view(Category::Finished).projects()[0].id, id);
}
