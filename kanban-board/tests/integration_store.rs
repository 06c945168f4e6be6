//! Integration tests for the store with file-backed persistence

use kanban_board::{
    BoardConfig, FileStorage, HydrationSource, KanbanStore, Storage, TaskPatch, STORAGE_KEY,
};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_board_survives_reload() {
    let temp = TempDir::new().unwrap();
    let storage = FileStorage::new(temp.path().join("board"));

    let (todo, done, task, reply) = {
        let mut store = KanbanStore::open(&storage);
        let todo = store.board().columns[0].id.clone();
        let done = store.board().columns[2].id.clone();

        let mut actions = store.actions();
        let task = actions.add_task(&todo, "Ship it", "before friday").unwrap();
        let root = actions.add_comment(&todo, &task, "who reviews?").unwrap();
        let reply = actions.add_reply(&todo, &task, &root, "me").unwrap();
        actions
            .edit_task(&todo, &task, TaskPatch::new().with_title("Ship it today"))
            .unwrap();
        actions.move_task(&task, &todo, &done);
        (todo, done, task, reply)
    };

    let reloaded = KanbanStore::open(&storage);
    let board = reloaded.board();

    assert_eq!(board.columns[0].id, todo);
    assert!(board.find_task(&todo, &task).is_none());

    let moved = board.find_task(&done, &task).unwrap();
    assert_eq!(moved.title, "Ship it today");
    assert_eq!(moved.description, "before friday");
    assert_eq!(moved.find_comment(&reply).unwrap().content, "me");
}

#[test]
fn test_snapshot_file_layout() {
    let temp = TempDir::new().unwrap();
    let storage = FileStorage::new(temp.path());
    let store = KanbanStore::open(&storage);

    let path = storage.entry_path(STORAGE_KEY);
    assert_eq!(path.file_name().unwrap(), "kanban-board-state.json");

    let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
    let columns = raw["columns"].as_array().unwrap();
    assert_eq!(columns.len(), 3);
    assert_eq!(columns[0]["title"], "To Do");
    assert_eq!(columns[0]["tasks"][2]["description"], "use axios");
    assert_eq!(columns[1]["tasks"], serde_json::json!([]));
    assert_eq!(
        columns[0]["id"].as_str().unwrap(),
        store.board().columns[0].id.as_str()
    );
}

#[test]
fn test_corrupt_file_falls_back_and_is_replaced() {
    let temp = TempDir::new().unwrap();
    let storage = FileStorage::new(temp.path());
    storage.save(STORAGE_KEY, "{\"columns\": [").unwrap();

    let mut store = KanbanStore::new(&storage);
    assert_eq!(store.hydrate(), HydrationSource::Unreadable);
    assert_eq!(store.board().columns.len(), 3);

    let raw = storage.load(STORAGE_KEY).unwrap().unwrap();
    assert!(kanban_board::persist::decode(&raw).is_ok());
}

#[test]
fn test_legacy_snapshot_without_nested_arrays() {
    let temp = TempDir::new().unwrap();
    let storage = FileStorage::new(temp.path());
    storage
        .save(
            STORAGE_KEY,
            r#"{"columns":[{"id":"a","title":"Only",
                "tasks":[{"id":"t","title":"Old","description":""}]}]}"#,
        )
        .unwrap();

    let mut store = KanbanStore::open(&storage);
    let column = store.board().columns[0].id.clone();
    let task = store.board().columns[0].tasks[0].id.clone();

    let comment = store.actions().add_comment(&column, &task, "first").unwrap();
    assert_eq!(
        store.board().find_task(&column, &task).unwrap().comments[0].id,
        comment
    );
}

#[test]
fn test_config_data_dir_drives_file_storage() {
    let temp = TempDir::new().unwrap();
    let config = BoardConfig {
        data_dir: Some(temp.path().join("data")),
        storage_key: "team-board".into(),
        seed_sample_tasks: false,
        ..BoardConfig::default()
    };
    let storage = config.file_storage().unwrap();

    let mut store = KanbanStore::open_with_config(&storage, &config);
    store.actions().add_column_titled("Blocked");

    assert!(temp.path().join("data").join("team-board.json").exists());
    let reloaded = KanbanStore::open_with_config(&storage, &config);
    assert_eq!(reloaded.board().columns.len(), 4);
    assert_eq!(reloaded.board().task_count(), 0);
}
