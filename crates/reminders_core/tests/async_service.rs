use reminders_core::{
    AsyncReminderService, InMemoryReminderStore, Reminder, ReminderDraft, ReminderError,
    SqliteReminderStore,
};
use std::collections::HashSet;

#[tokio::test]
async fn async_service_round_trips_through_sqlite() {
    let service = AsyncReminderService::new(SqliteReminderStore::open_in_memory().unwrap());
    let mut reminder = Reminder::with_id("a");
    reminder.title = Some("T".to_string());
    reminder.location = Some("L".to_string());
    reminder.latitude = Some(1.0);
    reminder.longitude = Some(2.0);

    service.save_reminder(reminder.clone()).await.unwrap();

    assert_eq!(service.get_reminder("a").await.unwrap(), reminder);
    service.delete_reminder("a").await.unwrap();
    assert!(matches!(
        service.get_reminder("a").await,
        Err(ReminderError::NotFound(_))
    ));
}

#[tokio::test]
async fn concurrent_saves_all_land() {
    let service = AsyncReminderService::new(SqliteReminderStore::open_in_memory().unwrap());

    let handles: Vec<_> = (0..8)
        .map(|n| {
            let service = service.clone();
            tokio::spawn(async move {
                let draft = ReminderDraft {
                    title: Some(format!("title {n}")),
                    location: Some(format!("place {n}")),
                    ..ReminderDraft::default()
                };
                service.validate_and_save(draft).await
            })
        })
        .collect();

    let mut ids = HashSet::new();
    for handle in handles {
        ids.insert(handle.await.unwrap().unwrap().id);
    }

    let stored: HashSet<_> = service
        .get_reminders()
        .await
        .unwrap()
        .into_iter()
        .map(|reminder| reminder.id)
        .collect();
    assert_eq!(stored, ids);
}

#[tokio::test]
async fn async_service_reports_store_failures() {
    let service = AsyncReminderService::new(InMemoryReminderStore::failing());

    let err = service.delete_all_reminders().await.unwrap_err();
    assert_eq!(err, ReminderError::Storage("Test exception".to_string()));

    service.service().store().set_return_error(false);
    assert!(service.get_reminders().await.unwrap().is_empty());
}
