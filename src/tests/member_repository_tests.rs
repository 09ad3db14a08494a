mod tests {
    use crate::{
        errors::{AppError, DatabaseError},
        providers::{
            db::member_repository::SqliteMemberRepository, member_repository::MemberRepository,
        },
        shapes::member::MemberRole,
        tests::fixtures::{assert_same_member, coach, memory_pool, player},
    };

    async fn repository() -> SqliteMemberRepository {
        SqliteMemberRepository::new(memory_pool().await)
    }

    #[tokio::test]
    async fn save_assigns_increasing_ids() {
        let repo = repository().await;
        let ana = repo.save(player("Ana", "Ruiz", 9)).await.unwrap();
        let luis = repo.save(coach("Luis", "Paz")).await.unwrap();
        assert!(ana.id > 0);
        assert!(luis.id > ana.id);
        assert_eq!(ana.created_at, ana.updated_at);
    }

    #[tokio::test]
    async fn saved_member_reads_back() {
        let repo = repository().await;
        let saved = repo.save(player("Ana", "Ruiz", 9)).await.unwrap();
        let read = repo.get_by_id(saved.id).await.unwrap().unwrap();
        assert_same_member(&read, &saved);
        assert_eq!(read.created_at, saved.created_at);

        let saved = repo.save(coach("Luis", "Paz")).await.unwrap();
        let read = repo.get_by_id(saved.id).await.unwrap().unwrap();
        assert_same_member(&read, &saved);
    }

    #[tokio::test]
    async fn save_ignores_the_incoming_id() {
        let repo = repository().await;
        let mut member = coach("Luis", "Paz");
        member.id = 500;
        let saved = repo.save(member).await.unwrap();
        assert_ne!(saved.id, 500);
        assert!(repo.get_by_id(500).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn get_all_is_ordered_by_id() {
        let repo = repository().await;
        assert!(repo.get_all().await.unwrap().is_empty());
        repo.save(player("Ana", "Ruiz", 9)).await.unwrap();
        repo.save(coach("Luis", "Paz")).await.unwrap();
        repo.save(player("Eva", "Gil", 1)).await.unwrap();
        let all = repo.get_all().await.unwrap();
        let names: Vec<&str> = all.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Ana", "Luis", "Eva"]);
        assert!(all.windows(2).all(|w| w[0].id < w[1].id));
    }

    #[tokio::test]
    async fn update_rewrites_fields_and_keeps_created_at() {
        let repo = repository().await;
        let saved = repo.save(player("Ana", "Ruiz", 9)).await.unwrap();
        let mut changed = saved.clone();
        changed.surname = "Ruiz Soler".to_string();
        changed.salary = 2000.0;
        if let MemberRole::Player(p) = &mut changed.role {
            p.goals = 20;
            p.minutes_played = 2700;
        }
        let updated = repo.update(saved.id, changed.clone()).await.unwrap().unwrap();
        assert_eq!(updated.id, saved.id);
        assert_eq!(updated.created_at, saved.created_at);
        assert!(updated.updated_at >= saved.updated_at);

        let read = repo.get_by_id(saved.id).await.unwrap().unwrap();
        assert_same_member(&read, &changed);
        assert_eq!(read.created_at, saved.created_at);
        assert_eq!(read.updated_at, updated.updated_at);
    }

    #[tokio::test]
    async fn update_can_switch_role() {
        let repo = repository().await;
        let saved = repo.save(player("Ana", "Ruiz", 9)).await.unwrap();
        let as_coach = coach("Ana", "Ruiz");
        repo.update(saved.id, as_coach.clone()).await.unwrap().unwrap();
        let read = repo.get_by_id(saved.id).await.unwrap().unwrap();
        assert_eq!(read.role, as_coach.role);
    }

    #[tokio::test]
    async fn update_of_missing_member_changes_nothing() {
        let repo = repository().await;
        repo.save(coach("Luis", "Paz")).await.unwrap();
        assert!(repo.update(99, player("Ana", "Ruiz", 9)).await.unwrap().is_none());
        let all = repo.get_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "Luis");
    }

    #[tokio::test]
    async fn delete_returns_the_removed_member() {
        let repo = repository().await;
        let saved = repo.save(coach("Luis", "Paz")).await.unwrap();
        let deleted = repo.delete(saved.id).await.unwrap().unwrap();
        assert_same_member(&deleted, &saved);
        assert!(repo.get_by_id(saved.id).await.unwrap().is_none());
        assert!(repo.delete(saved.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn unknown_role_in_row_is_reported_as_corruption() {
        let pool = memory_pool().await;
        sqlx::query(
            "INSERT INTO integrantes (nombre, apellidos, fecha_nacimiento, fecha_incorporacion, salario, pais, rol, created_at, updated_at) VALUES ('Raúl', 'Sanz', '1980-01-01', '2010-01-01', 10.0, 'Perú', 'Arbitro', '2024-01-01 10:00:00', '2024-01-01 10:00:00')",
        )
        .execute(&pool)
        .await
        .unwrap();
        let repo = SqliteMemberRepository::new(pool);
        match repo.get_by_id(1).await {
            Err(AppError::Database(DatabaseError::CorruptedRow(id, msg))) => {
                assert_eq!(id, 1);
                assert!(msg.contains("Arbitro"));
            }
            other => panic!("unexpected result: {:?}", other.map(|m| m.is_some())),
        }
        assert!(repo.get_all().await.is_err());
    }

    #[tokio::test]
    async fn player_row_without_shirt_number_is_reported_as_corruption() {
        let pool = memory_pool().await;
        sqlx::query(
            "INSERT INTO integrantes (nombre, apellidos, fecha_nacimiento, fecha_incorporacion, salario, pais, rol, posicion, altura, peso, goles, partidos_jugados, created_at, updated_at) VALUES ('Eva', 'Gil', '2000-01-01', '2021-01-01', 10.0, 'Chile', 'Jugador', 'PORTERO', 1.8, 70.0, 0, 1, '2024-01-01 10:00:00', '2024-01-01 10:00:00')",
        )
        .execute(&pool)
        .await
        .unwrap();
        let repo = SqliteMemberRepository::new(pool);
        match repo.get_by_id(1).await {
            Err(AppError::Database(DatabaseError::CorruptedRow(_, msg))) => {
                assert!(msg.contains("dorsal"))
            }
            other => panic!("unexpected result: {:?}", other.map(|m| m.is_some())),
        }
    }

    #[tokio::test]
    async fn schema_script_can_run_twice() {
        let pool = memory_pool().await;
        crate::providers::db::database::init_tables(&pool).await.unwrap();
        let repo = SqliteMemberRepository::new(pool);
        assert!(repo.get_all().await.unwrap().is_empty());
    }
}
