use anyhow::Result;
use ntest::timeout;
use reservista_admin::auth::{resolve, AUTH_USER_KEY, MOCK_PASSWORD};
use reservista_admin::entities::Role;
use reservista_admin::{AuthService, FileStorage, Route, SessionStorage};
use reservista_core::NoLatency;

#[test]
#[timeout(5000)]
fn test_session_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap();

    let auth = AuthService::with_latency(FileStorage::new(dir.path()), NoLatency);
    let user = runtime
        .block_on(auth.login("staff@example.com", MOCK_PASSWORD))
        .unwrap();
    assert_eq!(user.role, Role::Staff);
    drop(auth);

    let restarted = AuthService::with_latency(FileStorage::new(dir.path()), NoLatency);
    let session = restarted.current_user().unwrap();
    assert_eq!(session.as_ref().map(|u| u.email.as_str()), Some("staff@example.com"));
    assert_eq!(resolve(Route::Login, session.as_ref()), Route::Dashboard);

    restarted.logout().unwrap();
    let signed_out = AuthService::with_latency(FileStorage::new(dir.path()), NoLatency);
    assert_eq!(signed_out.current_user().unwrap(), None);
    assert_eq!(resolve(Route::Users, None), Route::Login);
}

#[test]
#[timeout(5000)]
fn test_corrupt_file_session_is_cleared() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStorage::new(dir.path());
    storage.set(AUTH_USER_KEY, r#"{"id":"1""#).unwrap();
    storage.set("unrelated", "kept").unwrap();

    let auth = AuthService::with_latency(storage, NoLatency);
    assert_eq!(auth.current_user().unwrap(), None);
    assert_eq!(auth.storage().get(AUTH_USER_KEY).unwrap(), None);
    assert_eq!(auth.storage().get("unrelated").unwrap().as_deref(), Some("kept"));
}

#[tokio::test]
async fn test_failed_login_keeps_existing_session() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let auth = AuthService::with_latency(FileStorage::new(dir.path()), NoLatency);

    auth.login("admin@example.com", MOCK_PASSWORD).await?;
    assert!(auth.login("admin@example.com", "nope").await.is_err());

    let current = auth.current_user()?;
    assert_eq!(current.map(|u| u.role), Some(Role::Admin));
    Ok(())
}
