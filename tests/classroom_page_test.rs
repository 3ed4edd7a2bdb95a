mod common;

use std::sync::Arc;

use common::FakeBackend;
use course_console::pages::{ClassroomListPage, PageStatus, SubmitOutcome};

async fn loaded_page(backend: &Arc<FakeBackend>) -> ClassroomListPage<FakeBackend> {
    let mut page = ClassroomListPage::new(Arc::clone(backend));
    page.load().await;
    page
}

#[tokio::test]
async fn load_fills_snapshot() {
    let backend = Arc::new(FakeBackend::seeded());
    let page = loaded_page(&backend).await;

    assert_eq!(page.status(), PageStatus::Loaded);
    assert!(page.banner().is_none());
    assert_eq!(page.classrooms().len(), 2);
}

#[tokio::test]
async fn load_failure_sets_banner() {
    let backend = Arc::new(FakeBackend::seeded());
    backend.fail_on("list_classrooms", "Service unavailable");
    let page = loaded_page(&backend).await;

    assert_eq!(page.status(), PageStatus::LoadError);
    assert_eq!(
        page.banner(),
        Some("Failed to fetch classrooms. Please try again later. Service unavailable")
    );
}

#[tokio::test]
async fn search_filters_locally() {
    let backend = Arc::new(FakeBackend::seeded());
    let mut page = loaded_page(&backend).await;
    backend.reset_calls();

    page.set_search_term("Computer");
    let visible = page.visible();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].name, "Computer Lab A");

    page.set_search_term("");
    assert_eq!(page.visible().len(), 2);
    assert!(backend.calls().is_empty());
}

#[tokio::test]
async fn create_closes_modal_and_refetches() {
    let backend = Arc::new(FakeBackend::seeded());
    let mut page = loaded_page(&backend).await;
    backend.reset_calls();

    page.open_create();
    let form = page.form_mut().unwrap();
    form.name = "New Room".into();
    form.abbreviation = "NR".into();

    assert_eq!(page.submit().await, SubmitOutcome::Saved);
    assert!(page.modal().is_none());
    assert_eq!(backend.calls(), vec!["create_classroom", "list_classrooms"]);
    assert!(page.classrooms().iter().any(|c| c.name == "New Room"));
    assert_eq!(page.status(), PageStatus::Loaded);
}

#[tokio::test]
async fn invalid_form_never_reaches_backend() {
    let backend = Arc::new(FakeBackend::seeded());
    let mut page = loaded_page(&backend).await;
    backend.reset_calls();

    page.open_create();
    let form = page.form_mut().unwrap();
    form.name = "Second lab".into();
    form.abbreviation = "cla".into();

    assert_eq!(page.submit().await, SubmitOutcome::Invalid);
    let modal = page.modal().expect("modal stays open");
    assert!(modal.errors.contains("abbreviation"));
    assert!(backend.calls().is_empty());
}

#[tokio::test]
async fn edit_keeps_own_abbreviation() {
    let backend = Arc::new(FakeBackend::seeded());
    let mut page = loaded_page(&backend).await;

    page.open_edit(1).unwrap();
    page.form_mut().unwrap().name = "Computer Lab Alpha".into();

    assert_eq!(page.submit().await, SubmitOutcome::Saved);
    assert_eq!(backend.classroom_names()[0], "Computer Lab Alpha");
}

#[tokio::test]
async fn open_edit_of_unknown_id_fails() {
    let backend = Arc::new(FakeBackend::seeded());
    let mut page = loaded_page(&backend).await;
    assert!(page.open_edit(999).is_err());
    assert!(page.modal().is_none());
}

#[tokio::test]
async fn failed_submit_closes_modal_with_banner() {
    let backend = Arc::new(FakeBackend::seeded());
    let mut page = loaded_page(&backend).await;
    backend.fail_on("update_classroom", "Classroom is in use");

    page.open_edit(2).unwrap();
    page.form_mut().unwrap().name = "Maths".into();

    assert_eq!(page.submit().await, SubmitOutcome::Failed);
    assert!(page.modal().is_none());
    assert_eq!(page.banner(), Some("Failed to update classroom. Classroom is in use"));
    assert_eq!(page.status(), PageStatus::Loaded);
}

#[tokio::test]
async fn delete_needs_confirmation() {
    let backend = Arc::new(FakeBackend::seeded());
    let mut page = loaded_page(&backend).await;
    backend.reset_calls();

    page.request_delete(2);
    page.cancel_delete();
    assert_eq!(page.confirm_delete().await, SubmitOutcome::Ignored);
    assert!(backend.calls().is_empty());

    page.request_delete(2);
    assert_eq!(page.confirm_delete().await, SubmitOutcome::Saved);
    assert_eq!(backend.calls(), vec!["delete_classroom", "list_classrooms"]);
    assert_eq!(page.classrooms().len(), 1);
    assert!(page.pending_delete().is_none());
}

#[tokio::test]
async fn failed_delete_keeps_page_usable() {
    let backend = Arc::new(FakeBackend::seeded());
    let mut page = loaded_page(&backend).await;
    backend.fail_on("delete_classroom", "Classroom has schedules");

    page.request_delete(1);
    assert_eq!(page.confirm_delete().await, SubmitOutcome::Failed);
    assert_eq!(page.banner(), Some("Failed to delete classroom. Classroom has schedules"));
    assert!(page.pending_delete().is_none());
    assert_eq!(page.classrooms().len(), 2);
}
