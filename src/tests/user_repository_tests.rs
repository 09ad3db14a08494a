mod tests {
    use crate::{
        providers::user_repository::UserRepository,
        shapes::user::UserEntry,
        tests::fixtures::memory_users,
    };

    fn user(username: &str, password: &str) -> UserEntry {
        UserEntry {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn saved_password_is_returned() {
        let repo = memory_users().await;
        repo.save_user(&user("admin", "$2a$12$hash")).await.unwrap();
        assert_eq!(
            repo.get_password("admin").await.unwrap(),
            Some("$2a$12$hash".to_string())
        );
        assert_eq!(
            repo.get_user("admin").await.unwrap(),
            Some(user("admin", "$2a$12$hash"))
        );
    }

    #[tokio::test]
    async fn unknown_user_has_no_password() {
        let repo = memory_users().await;
        assert!(repo.get_password("nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn usernames_are_unique() {
        let repo = memory_users().await;
        repo.save_user(&user("admin", "a")).await.unwrap();
        assert!(repo.save_user(&user("admin", "b")).await.is_err());
        assert_eq!(
            repo.get_password("admin").await.unwrap(),
            Some("a".to_string())
        );
    }
}
