mod tests {
    use crate::{
        cli::{execute, seed_if_empty, AddCommand, Cli, Command},
        errors::AppError,
        providers::fs::roster_storage::FormatEnum,
        shapes::{
            enums::{PositionEnum, RoleFilterEnum, SortEnum, SpecialtyEnum},
            member::MemberRole,
            settings::Settings,
        },
        tests::fixtures::{coach, memory_service, memory_users, player},
    };
    use clap::Parser;
    use tempfile::tempdir;

    fn parse(args: &[&str]) -> Command {
        let mut argv = vec!["newteam"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap().command
    }

    fn add_player_args() -> Vec<&'static str> {
        vec![
            "add",
            "player",
            "--name",
            "Ana",
            "--surname",
            "Ruiz",
            "--birth-date",
            "1998-03-14",
            "--join-date",
            "2020-07-01",
            "--salary",
            "1500",
            "--country",
            "España",
            "--position",
            "delantero",
            "--number",
            "9",
            "--height",
            "1.72",
            "--weight",
            "64",
        ]
    }

    #[test]
    fn parses_list_options() {
        match parse(&["list", "--name", "ana", "--role", "players", "--sort", "salary-desc"]) {
            Command::List { name, role, sort } => {
                assert_eq!(name.as_deref(), Some("ana"));
                assert_eq!(role, RoleFilterEnum::Players);
                assert_eq!(sort, SortEnum::SalaryDesc);
            }
            other => panic!("unexpected command: {:?}", other),
        }
        match parse(&["list"]) {
            Command::List { name, role, sort } => {
                assert!(name.is_none());
                assert_eq!(role, RoleFilterEnum::All);
                assert_eq!(sort, SortEnum::None);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn parses_add_player_with_defaults() {
        match parse(&add_player_args()) {
            Command::Add(AddCommand::Player(args)) => {
                assert_eq!(args.member.name, "Ana");
                assert_eq!(args.position, PositionEnum::Delantero);
                assert_eq!(args.number, 9);
                assert_eq!(args.goals, 0);
                assert!(args.member.image.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn parses_add_coach_and_backup() {
        let cmd = parse(&[
            "add",
            "coach",
            "--name",
            "Luis",
            "--surname",
            "Paz",
            "--birth-date",
            "1975-11-02",
            "--join-date",
            "2019-01-15",
            "--salary",
            "3200",
            "--country",
            "Argentina",
            "--specialty",
            "entrenador-porteros",
        ]);
        match cmd {
            Command::Add(AddCommand::Coach(args)) => {
                assert_eq!(args.specialty, SpecialtyEnum::EntrenadorPorteros)
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert!(matches!(
            parse(&["backup"]),
            Command::Backup {
                format: FormatEnum::Json
            }
        ));
        assert!(matches!(
            parse(&["backup", "--format", "csv"]),
            Command::Backup {
                format: FormatEnum::Csv
            }
        ));
    }

    #[test]
    fn rejects_bad_arguments() {
        assert!(Cli::try_parse_from(["newteam", "show", "abc"]).is_err());
        assert!(Cli::try_parse_from(["newteam", "list", "--role", "referees"]).is_err());
        let mut args = vec!["newteam"];
        args.extend(add_player_args());
        args[8] = "14/03/1998";
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[tokio::test]
    async fn add_edit_show_and_delete() {
        let service = memory_service().await;
        let users = memory_users().await;
        let settings = Settings::default();

        let out = execute(&service, &users, &settings, parse(&add_player_args()))
            .await
            .unwrap();
        assert!(out.contains("Ana Ruiz"));

        let out = execute(
            &service,
            &users,
            &settings,
            parse(&["edit", "1", "--salary", "1800", "--country", "Perú"]),
        )
        .await
        .unwrap();
        assert!(out.starts_with("updated"));
        let member = service.get_by_id(1).await.unwrap();
        assert_eq!(member.salary, 1800.0);
        assert_eq!(member.country, "Perú");
        assert!(matches!(member.role, MemberRole::Player(_)));

        let out = execute(&service, &users, &settings, parse(&["show", "1"]))
            .await
            .unwrap();
        assert!(out.contains("Perú"));
        assert!(out.contains("goals"));

        execute(&service, &users, &settings, parse(&["delete", "1"]))
            .await
            .unwrap();
        assert!(matches!(
            execute(&service, &users, &settings, parse(&["show", "1"])).await,
            Err(AppError::NotFound(1))
        ));
    }

    #[tokio::test]
    async fn added_text_is_trimmed_and_images_resolved() {
        let service = memory_service().await;
        let users = memory_users().await;
        let settings = Settings {
            images_dir: std::path::PathBuf::from("/srv/newteam/images"),
            ..Settings::default()
        };
        let mut args = add_player_args();
        args[3] = "  Ana ";
        args[5] = " Ruiz";
        args.extend(["--image", "ana.png"]);
        execute(&service, &users, &settings, parse(&args))
            .await
            .unwrap();
        let member = service.get_by_id(1).await.unwrap();
        assert_eq!(member.full_name(), "Ana Ruiz");

        let out = execute(&service, &users, &settings, parse(&["show", "1"]))
            .await
            .unwrap();
        assert!(out.contains("image:   /srv/newteam/images/ana.png"));
    }

    #[tokio::test]
    async fn invalid_edit_is_rejected() {
        let service = memory_service().await;
        let users = memory_users().await;
        service.save(coach("Luis", "Paz")).await.unwrap();
        let result = execute(
            &service,
            &users,
            &Settings::default(),
            parse(&["edit", "1", "--salary=-5"]),
        )
        .await;
        assert!(matches!(result, Err(AppError::Invalid(_))));
    }

    #[tokio::test]
    async fn list_and_stats() {
        let service = memory_service().await;
        let users = memory_users().await;
        let settings = Settings::default();
        assert_eq!(
            execute(&service, &users, &settings, parse(&["list"])).await.unwrap(),
            "no members"
        );
        service.save(player("Ana", "Ruiz", 9)).await.unwrap();
        service.save(coach("Luis", "Paz")).await.unwrap();

        let out = execute(&service, &users, &settings, parse(&["list", "--role", "coaches"]))
            .await
            .unwrap();
        assert!(out.contains("Luis Paz"));
        assert!(!out.contains("Ana Ruiz"));

        let out = execute(&service, &users, &settings, parse(&["stats"]))
            .await
            .unwrap();
        assert!(out.contains("players:         1"));
        assert!(out.contains("coaches:         1"));
    }

    #[tokio::test]
    async fn export_import_and_backup() {
        let dir = tempdir().unwrap();
        let service = memory_service().await;
        let users = memory_users().await;
        let settings = Settings {
            backup_dir: dir.path().to_path_buf(),
            ..Settings::default()
        };
        service.save(coach("Luis", "Paz")).await.unwrap();
        let file = dir.path().join("out.bin");
        let file_arg = file.to_string_lossy().to_string();

        let out = execute(&service, &users, &settings, parse(&["export", &file_arg]))
            .await
            .unwrap();
        assert!(out.starts_with("exported 1 members"));

        let out = execute(&service, &users, &settings, parse(&["import", &file_arg]))
            .await
            .unwrap();
        assert!(out.starts_with("imported 1 members"));
        assert_eq!(service.get_all().await.unwrap().len(), 2);

        let out = execute(&service, &users, &settings, parse(&["backup", "--format", "csv"]))
            .await
            .unwrap();
        assert!(out.contains("backup-"));
        let backups = std::fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().ends_with(".csv"))
            .count();
        assert_eq!(backups, 1);
    }

    #[tokio::test]
    async fn user_accounts() {
        let service = memory_service().await;
        let users = memory_users().await;
        let settings = Settings::default();
        let out = execute(&service, &users, &settings, parse(&["user", "check", "admin"]))
            .await
            .unwrap();
        assert_eq!(out, "user 'admin' not found");
        execute(
            &service,
            &users,
            &settings,
            parse(&["user", "add", "admin", "$2a$12$abc"]),
        )
        .await
        .unwrap();
        let out = execute(&service, &users, &settings, parse(&["user", "check", "admin"]))
            .await
            .unwrap();
        assert_eq!(out, "user 'admin' exists");
        assert!(execute(
            &service,
            &users,
            &settings,
            parse(&["user", "add", "admin", "other"]),
        )
        .await
        .is_err());
    }

    #[tokio::test]
    async fn seed_only_fills_an_empty_store() {
        let dir = tempdir().unwrap();
        let seed = dir.path().join("seed.json");
        let source = memory_service().await;
        source.save(player("Ana", "Ruiz", 9)).await.unwrap();
        source.save(coach("Luis", "Paz")).await.unwrap();
        source.export_to_file(&seed).await.unwrap();

        let settings = Settings {
            seed_file: Some(seed),
            ..Settings::default()
        };
        let service = memory_service().await;
        seed_if_empty(&service, &settings).await;
        assert_eq!(service.get_all().await.unwrap().len(), 2);
        seed_if_empty(&service, &settings).await;
        assert_eq!(service.get_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn broken_seed_is_ignored() {
        let dir = tempdir().unwrap();
        let settings = Settings {
            seed_file: Some(dir.path().join("missing.csv")),
            ..Settings::default()
        };
        let service = memory_service().await;
        seed_if_empty(&service, &settings).await;
        assert!(service.get_all().await.unwrap().is_empty());
    }
}
