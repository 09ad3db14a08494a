use crate::{
    errors::AppError,
    logging::logger::{log_info, log_warn},
    providers::{
        fs::roster_storage::FormatEnum, member_repository::MemberRepository,
        roster_reader::RosterReader, roster_writer::RosterWriter,
        user_repository::UserRepository,
    },
    roster_view::{RosterQuery, RosterStats},
    service::RosterService,
    shapes::{
        enums::{PositionEnum, RoleFilterEnum, SortEnum, SpecialtyEnum},
        member::{CoachDetails, MemberEntry, MemberRole, PlayerDetails},
        settings::Settings,
        user::UserEntry,
    },
};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "newteam")]
#[command(version)]
#[command(about = "Team roster management: players, coaches and their files")]
#[command(long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add every member found in a csv, json, xml or binary file
    Import { file: PathBuf },
    /// Write the whole roster to a file; the extension picks the format
    Export { file: PathBuf },
    /// Export the roster into the backup directory
    Backup {
        #[arg(short, long, value_enum, default_value_t = FormatEnum::Json)]
        format: FormatEnum,
    },
    /// List members
    List {
        /// Case-insensitive part of the full name
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long, value_enum, default_value_t = RoleFilterEnum::All)]
        role: RoleFilterEnum,
        #[arg(short, long, value_enum, default_value_t = SortEnum::None)]
        sort: SortEnum,
    },
    Show { id: i64 },
    Delete { id: i64 },
    /// Head count, salary cost and player averages
    Stats,
    #[command(subcommand)]
    Add(AddCommand),
    /// Change the common fields of a member
    Edit {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        surname: Option<String>,
        #[arg(long)]
        salary: Option<f64>,
        #[arg(long)]
        country: Option<String>,
        #[arg(long)]
        image: Option<String>,
    },
    /// Login accounts
    #[command(subcommand)]
    User(UserCommand),
}

#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// Register an account; the password must already be hashed
    Add {
        username: String,
        password_hash: String,
    },
    /// Tell whether an account exists
    Check { username: String },
}

#[derive(Debug, Subcommand)]
pub enum AddCommand {
    Player(PlayerArgs),
    Coach(CoachArgs),
}

#[derive(Debug, Clone, Args)]
pub struct MemberArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub surname: String,
    /// YYYY-MM-DD
    #[arg(long)]
    pub birth_date: NaiveDate,
    /// YYYY-MM-DD
    #[arg(long)]
    pub join_date: NaiveDate,
    #[arg(long)]
    pub salary: f64,
    #[arg(long)]
    pub country: String,
    #[arg(long)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Args)]
pub struct PlayerArgs {
    #[command(flatten)]
    pub member: MemberArgs,
    #[arg(long, value_enum)]
    pub position: PositionEnum,
    #[arg(long)]
    pub number: i32,
    /// Meters
    #[arg(long)]
    pub height: f64,
    /// Kilograms
    #[arg(long)]
    pub weight: f64,
    #[arg(long, default_value_t = 0)]
    pub goals: i32,
    #[arg(long, default_value_t = 0)]
    pub matches_played: i32,
    #[arg(long, default_value_t = 0)]
    pub minutes_played: i32,
}

#[derive(Debug, Clone, Args)]
pub struct CoachArgs {
    #[command(flatten)]
    pub member: MemberArgs,
    #[arg(long, value_enum)]
    pub specialty: SpecialtyEnum,
}

impl MemberArgs {
    fn into_entry(self, role: MemberRole) -> MemberEntry {
        let mut member = MemberEntry::new(
            self.name,
            self.surname,
            self.birth_date,
            self.join_date,
            self.salary,
            self.country,
            role,
        );
        if let Some(image) = self.image {
            member.image = image.trim().to_string();
        }
        member
    }
}

impl From<PlayerArgs> for MemberEntry {
    fn from(args: PlayerArgs) -> Self {
        args.member.into_entry(MemberRole::Player(PlayerDetails {
            position: args.position,
            number: args.number,
            height: args.height,
            weight: args.weight,
            goals: args.goals,
            matches_played: args.matches_played,
            minutes_played: args.minutes_played,
        }))
    }
}

impl From<CoachArgs> for MemberEntry {
    fn from(args: CoachArgs) -> Self {
        args.member.into_entry(MemberRole::Coach(CoachDetails {
            specialty: args.specialty,
        }))
    }
}

fn render_roster(roster: &[MemberEntry]) -> String {
    if roster.is_empty() {
        return "no members".to_string();
    }
    roster
        .iter()
        .map(|m| format!("{}  salary {:.2}  {}", m, m.salary, m.country))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_member(member: &MemberEntry, settings: &Settings) -> String {
    let mut lines = vec![
        member.to_string(),
        format!("born:    {}", member.birth_date),
        format!("joined:  {}", member.join_date),
        format!("salary:  {:.2}", member.salary),
        format!("country: {}", member.country),
        format!("image:   {}", settings.image_location(&member.image)),
    ];
    if let Some(p) = member.as_player() {
        lines.push(format!("height:  {:.2} m", p.height));
        lines.push(format!("weight:  {:.1} kg", p.weight));
        lines.push(format!(
            "goals:   {} in {} matches ({} minutes)",
            p.goals, p.matches_played, p.minutes_played
        ));
    }
    lines.join("\n")
}

/// Imports `settings.seed_file` into an empty store. A failing seed is logged
/// and does not stop the program.
pub async fn seed_if_empty<MR, RR, RW>(service: &RosterService<MR, RR, RW>, settings: &Settings)
where
    MR: MemberRepository + Send + Sync + 'static,
    RR: RosterReader + Send + Sync + 'static,
    RW: RosterWriter + Send + Sync + 'static,
{
    let Some(seed) = &settings.seed_file else {
        return;
    };
    match service.get_all().await {
        Ok(roster) if roster.is_empty() => match service.import_from_file(seed).await {
            Ok(saved) => log_info(&format!(
                "seeded {} members from '{}'",
                saved.len(),
                seed.display()
            )),
            Err(e) => log_warn(&format!("could not seed from '{}': {}", seed.display(), e)),
        },
        Ok(_) => {}
        Err(e) => log_warn(&format!("could not check the store before seeding: {}", e)),
    }
}

async fn execute_user<U: UserRepository + Send + Sync>(
    users: &U,
    command: UserCommand,
) -> Result<String, AppError> {
    match command {
        UserCommand::Add {
            username,
            password_hash,
        } => {
            users
                .save_user(&UserEntry {
                    username: username.clone(),
                    password: password_hash,
                })
                .await?;
            Ok(format!("user '{}' added", username))
        }
        UserCommand::Check { username } => match users.get_password(&username).await? {
            Some(_) => Ok(format!("user '{}' exists", username)),
            None => Ok(format!("user '{}' not found", username)),
        },
    }
}

/// Runs one command and returns the text to print.
pub async fn execute<MR, RR, RW, U>(
    service: &RosterService<MR, RR, RW>,
    users: &U,
    settings: &Settings,
    command: Command,
) -> Result<String, AppError>
where
    MR: MemberRepository + Send + Sync + 'static,
    RR: RosterReader + Send + Sync + 'static,
    RW: RosterWriter + Send + Sync + 'static,
    U: UserRepository + Send + Sync,
{
    match command {
        Command::Import { file } => {
            let saved = service.import_from_file(&file).await?;
            Ok(format!(
                "imported {} members from '{}'",
                saved.len(),
                file.display()
            ))
        }
        Command::Export { file } => {
            let count = service.export_to_file(&file).await?;
            Ok(format!("exported {} members to '{}'", count, file.display()))
        }
        Command::Backup { format } => {
            let path = service.backup(&settings.backup_dir, format).await?;
            Ok(format!("backup written to '{}'", path.display()))
        }
        Command::List { name, role, sort } => {
            let query = RosterQuery {
                name_filter: name,
                role_filter: role,
                sort,
            };
            let roster = service.get_all().await?;
            Ok(render_roster(&query.apply(&roster)))
        }
        Command::Show { id } => Ok(render_member(&service.get_by_id(id).await?, settings)),
        Command::Delete { id } => {
            let deleted = service.delete(id).await?;
            Ok(format!("deleted {}", deleted.full_name()))
        }
        Command::Stats => {
            let roster = service.get_all().await?;
            Ok(RosterStats::from_roster(&roster).to_string())
        }
        Command::Add(add) => {
            let member = match add {
                AddCommand::Player(args) => MemberEntry::from(args),
                AddCommand::Coach(args) => MemberEntry::from(args),
            };
            let saved = service.save(member).await?;
            Ok(format!("added {}", saved))
        }
        Command::Edit {
            id,
            name,
            surname,
            salary,
            country,
            image,
        } => {
            let mut member = service.get_by_id(id).await?;
            if let Some(v) = name {
                member.name = v.trim().to_string();
            }
            if let Some(v) = surname {
                member.surname = v.trim().to_string();
            }
            if let Some(v) = salary {
                member.salary = v;
            }
            if let Some(v) = country {
                member.country = v.trim().to_string();
            }
            if let Some(v) = image {
                member.image = v.trim().to_string();
            }
            let updated = service.update(id, member).await?;
            Ok(format!("updated {}", updated))
        }
        Command::User(user) => execute_user(users, user).await,
    }
}
