use notes_core::{
    serialize_notes, BlockEditError, BlockId, ChecklistStats, InMemoryNotesStore, NoteBlock,
    NotesDocument, NotesService, NotesServiceError, NotesStore, StoreError, StoreResult,
};

struct FailingStore;

impl NotesStore for FailingStore {
    fn read(&self, _key: &str) -> StoreResult<Option<String>> {
        Err(StoreError::Backend("offline".to_string()))
    }

    fn write(&mut self, _key: &str, _value: &str) -> StoreResult<()> {
        Err(StoreError::Backend("offline".to_string()))
    }
}

#[test]
fn load_of_missing_key_is_empty_document() {
    let service = NotesService::new(InMemoryNotesStore::new());
    let document = service.load("note:1").unwrap();
    assert!(document.is_empty());
}

#[test]
fn save_writes_storage_form_and_load_reads_it_back() {
    let mut service = NotesService::new(InMemoryNotesStore::new());
    let document = NotesDocument::from_blocks(vec![
        NoteBlock::heading("Groceries"),
        NoteBlock::checklist_checked("milk", true),
        NoteBlock::checklist("eggs"),
    ]);

    service.save("note:1", &document).unwrap();

    let raw = service.store().read("note:1").unwrap().unwrap();
    assert_eq!(raw, serialize_notes(&document));
    assert_eq!(service.load(" note:1 ").unwrap(), document);
    assert_eq!(
        service.checklist_stats("note:1").unwrap(),
        ChecklistStats {
            total: 2,
            completed: 1,
        }
    );
    assert_eq!(
        service.plain_text("note:1").unwrap(),
        "## Groceries\n[x] milk\n[ ] eggs"
    );
}

#[test]
fn legacy_plain_text_is_upgraded_on_update() {
    let store = InMemoryNotesStore::new().with_value("note:legacy", "[ ] call mom\nremember");
    let mut service = NotesService::new(store);

    let first_id = service.load("note:legacy").unwrap().blocks()[0].id.clone();
    assert_eq!(
        service.plain_text("note:legacy").unwrap(),
        "[ ] call mom\nremember"
    );

    // Plain-text ids are minted per load, so edit by position.
    let checked = service
        .update("note:legacy", |document| {
            let id = document.blocks()[0].id.clone();
            document.toggle_checked(&id)
        })
        .unwrap();
    assert!(checked);

    let raw = service.store().read("note:legacy").unwrap().unwrap();
    assert!(raw.starts_with(r#"{"version":1,"blocks":["#));

    let reloaded = service.load("note:legacy").unwrap();
    assert_ne!(reloaded.blocks()[0].id, first_id);
    let stable_id = reloaded.blocks()[0].id.clone();
    assert_eq!(service.load("note:legacy").unwrap().blocks()[0].id, stable_id);
    assert_eq!(reloaded.blocks()[0].checked(), Some(true));
}

#[test]
fn failed_edit_does_not_persist() {
    let mut service = NotesService::new(InMemoryNotesStore::new());
    let missing = BlockId::from("missing");

    let err = service
        .update("note:1", |document| document.remove(&missing).map(|_| ()))
        .unwrap_err();

    assert!(matches!(
        err,
        NotesServiceError::Edit(BlockEditError::BlockNotFound(_))
    ));
    assert!(service.store().is_empty());
}

#[test]
fn store_failures_surface_as_service_errors() {
    let mut service = NotesService::new(FailingStore);

    let load_err = service.load("note:1").unwrap_err();
    assert!(matches!(load_err, NotesServiceError::Store(_)));
    assert!(load_err.to_string().contains("offline"));

    let save_err = service.save("note:1", &NotesDocument::new()).unwrap_err();
    assert!(matches!(save_err, NotesServiceError::Store(_)));
}

#[test]
fn blank_key_is_rejected() {
    let service = NotesService::new(InMemoryNotesStore::new());
    assert!(matches!(
        service.load("  "),
        Err(NotesServiceError::EmptyKey)
    ));
}
