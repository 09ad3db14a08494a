use crate::{
    constants::{COACH_ROLE_LABEL, PLAYER_ROLE_LABEL},
    errors::{AppError, IOError},
    logging::logger::log_debug,
    providers::{
        fs::path::{check_parent_dir, check_readable_file},
        roster_reader::RosterReader,
        roster_writer::RosterWriter,
    },
    shapes::{dto::MemberDto, member::MemberEntry},
};
use async_trait::async_trait;
use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use std::io::{Cursor, Read, Write};
use std::path::Path;
use tokio::fs::{read, write};

/// Fixed layout record stream, big-endian, no record length prefix:
///
/// `id:i64 nombre apellidos fecha_nacimiento fecha_incorporacion salario:f64 pais rol`
/// followed by `posicion dorsal:i32 altura:f64 peso:f64 goles:i32 partidos_jugados:i32`
/// for players or `especialidad` for coaches. Strings are a u16 byte length
/// followed by modified UTF-8 bytes, as `DataOutput::writeUTF` writes them.
pub struct BinRosterFile;

fn encoding_error(e: impl std::fmt::Display) -> AppError {
    AppError::IO(IOError::EncodingError(e.to_string()))
}

/// Java's modified UTF-8: NUL is `C0 80` and characters outside the BMP are
/// written as two 3 byte surrogates.
fn to_modified_utf8(value: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(value.len());
    for unit in value.encode_utf16() {
        match unit {
            0x0001..=0x007F => out.push(unit as u8),
            0x0000 | 0x0080..=0x07FF => {
                out.push(0xC0 | (unit >> 6) as u8);
                out.push(0x80 | (unit & 0x3F) as u8);
            }
            _ => {
                out.push(0xE0 | (unit >> 12) as u8);
                out.push(0x80 | ((unit >> 6) & 0x3F) as u8);
                out.push(0x80 | (unit & 0x3F) as u8);
            }
        }
    }
    out
}

fn continuation(bytes: &[u8], at: usize) -> Result<u16, AppError> {
    match bytes.get(at) {
        Some(b) if b & 0xC0 == 0x80 => Ok((b & 0x3F) as u16),
        _ => Err(encoding_error(format!("malformed string at byte {}", at))),
    }
}

/// Also accepts plain 4 byte UTF-8 sequences.
fn from_modified_utf8(bytes: &[u8]) -> Result<String, AppError> {
    let mut units: Vec<u16> = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        match b {
            0x00..=0x7F => {
                units.push(b as u16);
                i += 1;
            }
            0xC0..=0xDF => {
                units.push(((b & 0x1F) as u16) << 6 | continuation(bytes, i + 1)?);
                i += 2;
            }
            0xE0..=0xEF => {
                units.push(
                    ((b & 0x0F) as u16) << 12
                        | continuation(bytes, i + 1)? << 6
                        | continuation(bytes, i + 2)?,
                );
                i += 3;
            }
            0xF0..=0xF7 => {
                let code = ((b & 0x07) as u32) << 18
                    | (continuation(bytes, i + 1)? as u32) << 12
                    | (continuation(bytes, i + 2)? as u32) << 6
                    | continuation(bytes, i + 3)? as u32;
                let c = char::from_u32(code).ok_or_else(|| {
                    encoding_error(format!("invalid code point at byte {}", i))
                })?;
                let mut buf = [0u16; 2];
                units.extend_from_slice(c.encode_utf16(&mut buf));
                i += 4;
            }
            _ => return Err(encoding_error(format!("malformed string at byte {}", i))),
        }
    }
    String::from_utf16(&units).map_err(encoding_error)
}

fn write_utf<W: Write>(out: &mut W, value: &str) -> Result<(), AppError> {
    let bytes = to_modified_utf8(value);
    let len = u16::try_from(bytes.len()).map_err(|_| {
        encoding_error(format!("string of {} bytes is too long", bytes.len()))
    })?;
    out.write_u16::<BigEndian>(len).map_err(encoding_error)?;
    out.write_all(&bytes).map_err(encoding_error)
}

fn read_utf<R: Read>(input: &mut R) -> Result<String, AppError> {
    let len = input.read_u16::<BigEndian>().map_err(encoding_error)?;
    let mut buf = vec![0u8; len as usize];
    input.read_exact(&mut buf).map_err(encoding_error)?;
    from_modified_utf8(&buf)
}

fn required<T>(field: &str, value: Option<T>) -> Result<T, AppError> {
    value.ok_or_else(|| encoding_error(format!("missing {}", field)))
}

impl BinRosterFile {
    pub fn encode(roster: &[MemberEntry]) -> Result<Vec<u8>, AppError> {
        let mut out: Vec<u8> = Vec::new();
        for dto in roster.iter().map(MemberDto::from) {
            out.write_i64::<BigEndian>(dto.id).map_err(encoding_error)?;
            write_utf(&mut out, &dto.name)?;
            write_utf(&mut out, &dto.surname)?;
            write_utf(&mut out, &dto.birth_date)?;
            write_utf(&mut out, &dto.join_date)?;
            out.write_f64::<BigEndian>(dto.salary)
                .map_err(encoding_error)?;
            write_utf(&mut out, &dto.country)?;
            write_utf(&mut out, &dto.role)?;
            if dto.role == PLAYER_ROLE_LABEL {
                write_utf(&mut out, &required("posicion", dto.position)?)?;
                out.write_i32::<BigEndian>(required("dorsal", dto.number)?)
                    .map_err(encoding_error)?;
                out.write_f64::<BigEndian>(required("altura", dto.height)?)
                    .map_err(encoding_error)?;
                out.write_f64::<BigEndian>(required("peso", dto.weight)?)
                    .map_err(encoding_error)?;
                out.write_i32::<BigEndian>(required("goles", dto.goals)?)
                    .map_err(encoding_error)?;
                out.write_i32::<BigEndian>(required("partidos_jugados", dto.matches_played)?)
                    .map_err(encoding_error)?;
            } else {
                write_utf(&mut out, &required("especialidad", dto.specialty)?)?;
            }
        }
        Ok(out)
    }

    pub fn decode(bytes: &[u8]) -> Result<Vec<MemberEntry>, AppError> {
        let mut cursor = Cursor::new(bytes);
        let mut roster = Vec::new();
        while (cursor.position() as usize) < bytes.len() {
            let id = cursor.read_i64::<BigEndian>().map_err(encoding_error)?;
            let name = read_utf(&mut cursor)?;
            let surname = read_utf(&mut cursor)?;
            let birth_date = read_utf(&mut cursor)?;
            let join_date = read_utf(&mut cursor)?;
            let salary = cursor.read_f64::<BigEndian>().map_err(encoding_error)?;
            let country = read_utf(&mut cursor)?;
            let role = read_utf(&mut cursor)?;
            let mut dto = MemberDto {
                id,
                name,
                surname,
                birth_date,
                join_date,
                salary,
                country,
                role,
                specialty: None,
                position: None,
                number: None,
                height: None,
                weight: None,
                goals: None,
                matches_played: None,
                minutes_played: None,
                image: String::new(),
            };
            match dto.role.as_str() {
                PLAYER_ROLE_LABEL => {
                    dto.position = Some(read_utf(&mut cursor)?);
                    dto.number = Some(cursor.read_i32::<BigEndian>().map_err(encoding_error)?);
                    dto.height = Some(cursor.read_f64::<BigEndian>().map_err(encoding_error)?);
                    dto.weight = Some(cursor.read_f64::<BigEndian>().map_err(encoding_error)?);
                    dto.goals = Some(cursor.read_i32::<BigEndian>().map_err(encoding_error)?);
                    dto.matches_played =
                        Some(cursor.read_i32::<BigEndian>().map_err(encoding_error)?);
                }
                COACH_ROLE_LABEL => {
                    dto.specialty = Some(read_utf(&mut cursor)?);
                }
                other => return Err(encoding_error(format!("unknown role '{}'", other))),
            }
            roster.push(MemberEntry::try_from(dto)?);
        }
        Ok(roster)
    }
}

#[async_trait]
impl RosterReader for BinRosterFile {
    async fn read(&self, path: &Path) -> Result<Vec<MemberEntry>, AppError> {
        log_debug(&format!("reading binary roster '{}'", path.display()));
        check_readable_file(path).await?;
        let bytes = read(path)
            .await
            .map_err(|e| AppError::IO(IOError::from(e)))?;
        Self::decode(&bytes)
    }
}

#[async_trait]
impl RosterWriter for BinRosterFile {
    async fn write(&self, roster: &[MemberEntry], path: &Path) -> Result<(), AppError> {
        log_debug(&format!(
            "writing {} members to binary roster '{}'",
            roster.len(),
            path.display()
        ));
        check_parent_dir(path)?;
        let bytes = Self::encode(roster)?;
        write(path, bytes)
            .await
            .map_err(|e| AppError::IO(IOError::from(e)))
    }
}
