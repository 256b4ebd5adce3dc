//! Account lifecycle against the file backends.

use immo_auth::{AuthError, current_session, login, logout, register};
use immo_store::{CredentialStore, FileSessionStore, TextStore};
use pretty_assertions::assert_eq;
use rstest::rstest;
use tempfile::TempDir;

fn stores(dir: &TempDir) -> (TextStore, FileSessionStore) {
    (
        TextStore::new(
            dir.path().join("proprietes.txt"),
            dir.path().join("utilisateurs.txt"),
        ),
        FileSessionStore::new(dir.path().join("session.txt")),
    )
}

#[test]
fn registering_the_same_name_twice_keeps_a_single_entry() {
    let dir = TempDir::new().expect("tmp dir");
    let (mut store, _) = stores(&dir);

    register(&mut store, "alice", "first").expect("first registration");
    let before = std::fs::read_to_string(store.users_path()).expect("read");

    let err = register(&mut store, "alice", "second").expect_err("duplicate");
    assert!(matches!(err, AuthError::DuplicateAccount(_)));

    let after = std::fs::read_to_string(store.users_path()).expect("read");
    assert_eq!(before, after, "credential file must be untouched");
    assert_eq!(store.load_credentials().expect("load").len(), 1);
}

#[test]
fn session_persists_across_store_instances() {
    let dir = TempDir::new().expect("tmp dir");
    let (mut store, mut sessions) = stores(&dir);

    register(&mut store, "alice", "pw").expect("register");
    login(&store, &mut sessions, "alice", "pw").expect("login");

    let (_, reopened) = stores(&dir);
    let session = current_session(&reopened).expect("read session");
    assert_eq!(session.current_user(), Some("alice"));

    let (_, mut reopened) = stores(&dir);
    assert!(logout(&mut reopened).expect("logout"));
    assert!(!current_session(&sessions).expect("read").is_authenticated());
}

#[test]
fn failed_login_leaves_previous_session_alone() {
    let dir = TempDir::new().expect("tmp dir");
    let (mut store, mut sessions) = stores(&dir);
    register(&mut store, "alice", "pw").expect("register");
    register(&mut store, "bob", "pw2").expect("register");
    login(&store, &mut sessions, "alice", "pw").expect("login");

    assert!(login(&store, &mut sessions, "bob", "wrong").is_err());
    assert_eq!(
        current_session(&sessions).expect("read").current_user(),
        Some("alice")
    );
}

#[rstest]
#[case("a,b")]
#[case("")]
#[case("   ")]
#[case("line\nbreak")]
fn unstorable_usernames_are_rejected_before_storage(#[case] username: &str) {
    let dir = TempDir::new().expect("tmp dir");
    let (mut store, _) = stores(&dir);
    assert!(matches!(
        register(&mut store, username, "pw"),
        Err(AuthError::Validation(_))
    ));
    assert!(!store.users_path().exists());
}
