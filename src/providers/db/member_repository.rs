use crate::{
    errors::AppError,
    logging::logger::log_debug,
    providers::{db::member_row::MemberRow, member_repository::MemberRepository},
    shapes::member::MemberEntry,
};
use async_trait::async_trait;
use chrono::Local;
use futures::{future::ready, TryStreamExt};
use sqlx::SqlitePool;

const SELECT_MEMBERS: &str = "SELECT id, nombre, apellidos, fecha_nacimiento, fecha_incorporacion, salario, pais, rol, especialidad, posicion, dorsal, altura, peso, goles, partidos_jugados, minutos_jugados, imagen, created_at, updated_at FROM integrantes";

pub struct SqliteMemberRepository {
    pool: SqlitePool,
}

impl SqliteMemberRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MemberRepository for SqliteMemberRepository {
    async fn save(&self, member: MemberEntry) -> Result<MemberEntry, AppError> {
        let member = member.stamped(Local::now().naive_local());
        let row = MemberRow::from(&member);
        let result = sqlx::query(
            "INSERT INTO integrantes (nombre, apellidos, fecha_nacimiento, fecha_incorporacion, salario, pais, rol, especialidad, posicion, dorsal, altura, peso, goles, partidos_jugados, minutos_jugados, imagen, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&row.name)
        .bind(&row.surname)
        .bind(row.birth_date)
        .bind(row.join_date)
        .bind(row.salary)
        .bind(&row.country)
        .bind(&row.role)
        .bind(&row.specialty)
        .bind(&row.position)
        .bind(row.number)
        .bind(row.height)
        .bind(row.weight)
        .bind(row.goals)
        .bind(row.matches_played)
        .bind(row.minutes_played)
        .bind(&row.image)
        .bind(row.created_at)
        .bind(row.updated_at)
        .execute(&self.pool)
        .await?;
        let id = result.last_insert_rowid();
        log_debug(&format!("inserted member {} '{}'", id, member.full_name()));
        Ok(MemberEntry { id, ..member })
    }

    async fn delete(&self, id: i64) -> Result<Option<MemberEntry>, AppError> {
        let existing = match self.get_by_id(id).await? {
            Some(m) => m,
            None => return Ok(None),
        };
        sqlx::query("DELETE FROM integrantes WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        log_debug(&format!("deleted member {}", id));
        Ok(Some(existing))
    }

    async fn update(&self, id: i64, member: MemberEntry) -> Result<Option<MemberEntry>, AppError> {
        let existing = match self.get_by_id(id).await? {
            Some(m) => m,
            None => return Ok(None),
        };
        let member = MemberEntry {
            id,
            created_at: existing.created_at,
            updated_at: Local::now().naive_local(),
            ..member
        };
        let row = MemberRow::from(&member);
        sqlx::query(
            "UPDATE integrantes SET nombre = ?, apellidos = ?, fecha_nacimiento = ?, fecha_incorporacion = ?, salario = ?, pais = ?, rol = ?, especialidad = ?, posicion = ?, dorsal = ?, altura = ?, peso = ?, goles = ?, partidos_jugados = ?, minutos_jugados = ?, imagen = ?, updated_at = ? WHERE id = ?",
        )
        .bind(&row.name)
        .bind(&row.surname)
        .bind(row.birth_date)
        .bind(row.join_date)
        .bind(row.salary)
        .bind(&row.country)
        .bind(&row.role)
        .bind(&row.specialty)
        .bind(&row.position)
        .bind(row.number)
        .bind(row.height)
        .bind(row.weight)
        .bind(row.goals)
        .bind(row.matches_played)
        .bind(row.minutes_played)
        .bind(&row.image)
        .bind(row.updated_at)
        .bind(id)
        .execute(&self.pool)
        .await?;
        log_debug(&format!("updated member {}", id));
        Ok(Some(member))
    }

    async fn get_all(&self) -> Result<Vec<MemberEntry>, AppError> {
        let sql = format!("{} ORDER BY id", SELECT_MEMBERS);
        sqlx::query_as::<_, MemberRow>(&sql)
            .fetch(&self.pool)
            .map_err(AppError::from)
            .and_then(|row| ready(MemberEntry::try_from(row)))
            .try_collect::<Vec<_>>()
            .await
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<MemberEntry>, AppError> {
        let sql = format!("{} WHERE id = ?", SELECT_MEMBERS);
        let row = sqlx::query_as::<_, MemberRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.map(MemberEntry::try_from).transpose()
    }
}
