pub const APP_DIRECTORY_NAME: &str = ".newteam";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const LOG_FILE_NAME: &str = "newteam.log";
pub const DATABASE_FILE_NAME: &str = "newteam.db";
pub const DEFAULT_IMAGE: &str = "media/profile_picture.png";
pub const PLAYER_ROLE_LABEL: &str = "Jugador";
pub const COACH_ROLE_LABEL: &str = "Entrenador";
pub const DEFAULT_CACHE_SIZE: usize = 10;
pub const DEFAULT_CACHE_EXPIRATION_MS: u64 = 60_000;
pub const MAX_SHIRT_NUMBER: i32 = 99;
pub const MAX_HEIGHT_METERS: f64 = 3.0;
pub const BACKUP_FILE_PREFIX: &str = "backup";
pub const DATE_FORMAT: &str = "%Y-%m-%d";
