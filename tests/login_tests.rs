use rshipaudit::core::login::{LoginLogic, hash_password, is_valid_email};
use rshipaudit::db::pool::DbPool;
use rshipaudit::errors::AppError;
use rshipaudit::models::UserRole;

#[test]
fn test_register_then_login() {
    let pool = DbPool::in_memory().expect("db");
    LoginLogic::register(
        &pool.conn,
        "Jefa@Example.com",
        "secreto1",
        UserRole::Administration,
    )
    .expect("register");

    let role = LoginLogic::login(&pool.conn, "jefa@example.com", "secreto1").expect("login");
    assert_eq!(role, UserRole::Administration);
    assert_eq!(role.landing_command(), "report");

    assert_eq!(
        LoginLogic::current_user(&pool.conn).expect("current user"),
        Some("jefa@example.com".to_string())
    );
}

#[test]
fn test_no_current_user_before_login() {
    let pool = DbPool::in_memory().expect("db");
    assert_eq!(
        LoginLogic::current_user(&pool.conn).expect("current user"),
        None
    );
}

#[test]
fn test_bad_credentials_are_rejected() {
    let pool = DbPool::in_memory().expect("db");
    let role = UserRole::Inspector;
    LoginLogic::register(&pool.conn, "ana@example.com", "secreto1", role).expect("register");

    for (email, password) in [
        ("ana@example.com", "otraclave"),
        ("nadie@example.com", "secreto1"),
        ("ana@example.com", "corta"),
        ("not-an-email", "secreto1"),
    ] {
        let err = LoginLogic::login(&pool.conn, email, password).expect_err(email);
        assert!(matches!(err, AppError::InvalidCredentials));
    }

    assert_eq!(
        LoginLogic::current_user(&pool.conn).expect("current user"),
        None
    );
}

#[test]
fn test_duplicate_user_is_rejected() {
    let pool = DbPool::in_memory().expect("db");
    let role = UserRole::Inspector;
    LoginLogic::register(&pool.conn, "ana@example.com", "secreto1", role).expect("register");

    let err = LoginLogic::register(&pool.conn, "ANA@example.com", "otraclave", role)
        .expect_err("same email");
    assert!(matches!(err, AppError::UserExists(_)));
}

#[test]
fn test_invalid_registration_input() {
    let pool = DbPool::in_memory().expect("db");
    let role = UserRole::Inspector;
    assert!(LoginLogic::register(&pool.conn, "ana", "secreto1", role).is_err());
    assert!(LoginLogic::register(&pool.conn, "ana@example.com", "12345", role).is_err());
}

#[test]
fn test_password_hash() {
    let h = hash_password("ana@example.com", "secreto1");
    assert_eq!(h.len(), 64);
    assert_eq!(h, hash_password("ana@example.com", "secreto1"));
    assert_ne!(h, hash_password("eva@example.com", "secreto1"));

    assert!(is_valid_email("a.b@mar.es"));
    assert!(!is_valid_email("a b@mar.es"));
}
