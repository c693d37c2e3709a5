use std::collections::HashMap;
use std::io::{self, BufRead};
use std::path::Path;
use std::str::FromStr;

use log::{debug, info};
use utils::open_read;

use crate::error::{LevelError, Result};
use crate::level::{Level, TaxonId};

const SEPARATOR: char = '\t';
const MEMBER_SEPARATOR: char = ' ';
const MIN_FIELDS: usize = 8;

const ID_FIELD: usize = 0;
const NAME_FIELD: usize = 2;
const SIZE_FIELD: usize = 3;
const MEMBERS_FIELD: usize = 7;

/// All levels of a levels table, in the order the table defines them
#[derive(Debug, Default)]
pub struct LevelCatalog {
    levels: Vec<Level>,
    index: HashMap<TaxonId, usize>,
}

/// A level whose declared size differs from the number of members listed for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeMismatch {
    pub id: TaxonId,
    pub declared: i64,
    pub actual: usize,
}

impl LevelCatalog {
    /// Parse the levels table at `path`. The first line is a header and is skipped.
    pub fn load(path: &Path) -> Result<Self> {
        let reader = open_read(path).map_err(|source| LevelError::ResourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = Self::parse(reader, |source| LevelError::ResourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Read {} levels from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Parse a levels table from any buffered reader, same rules as [`LevelCatalog::load`]
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        Self::parse(reader, LevelError::ReadFailed)
    }

    fn parse<R, F>(reader: R, read_error: F) -> Result<Self>
    where
        R: BufRead,
        F: Fn(io::Error) -> LevelError,
    {
        let mut catalog = LevelCatalog::default();

        // Rows are split as raw bytes so the header is skipped without being decoded
        for (i, row) in reader.split(b'\n').enumerate() {
            let row = row.map_err(&read_error)?;

            if i == 0 {
                continue;
            }

            let line_no = i + 1;
            let row = row.strip_suffix(b"\r").unwrap_or(&row);
            let line = std::str::from_utf8(row).map_err(|e| LevelError::MalformedRecord {
                line: line_no,
                reason: format!("row is not valid UTF-8: {}", e),
            })?;

            catalog.insert(parse_record(line, line_no)?);
        }

        Ok(catalog)
    }

    /// A repeated id replaces the earlier row but keeps its position
    fn insert(&mut self, level: Level) {
        match self.index.get(&level.id) {
            Some(&pos) => {
                debug!("Level {} is defined more than once, keeping the last row", level.id);
                self.levels[pos] = level;
            }
            None => {
                self.index.insert(level.id, self.levels.len());
                self.levels.push(level);
            }
        }
    }

    pub fn get<K: LevelKey>(&self, key: K) -> Result<&Level> {
        let id = key.level_id()?;
        self.index
            .get(&id)
            .map(|&pos| &self.levels[pos])
            .ok_or(LevelError::UnknownGroup(id))
    }

    /// All members of the given level
    pub fn members<K: LevelKey>(&self, key: K) -> Result<&[TaxonId]> {
        Ok(&self.get(key)?.members)
    }

    /// The declared size of the given level
    pub fn size<K: LevelKey>(&self, key: K) -> Result<i64> {
        Ok(self.get(key)?.size)
    }

    /// The human readable name of the given level
    pub fn name<K: LevelKey>(&self, key: K) -> Result<&str> {
        Ok(&self.get(key)?.name)
    }

    pub fn contains(&self, id: TaxonId) -> bool {
        self.index.contains_key(&id)
    }

    /// Levels in definition order
    pub fn iter(&self) -> impl Iterator<Item = &Level> {
        self.levels.iter()
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Levels whose declared size does not match their member list. Nothing is corrected.
    pub fn size_mismatches(&self) -> Vec<SizeMismatch> {
        self.levels
            .iter()
            .filter(|l| l.size != l.members.len() as i64)
            .map(|l| SizeMismatch {
                id: l.id,
                declared: l.size,
                actual: l.members.len(),
            })
            .collect()
    }
}

/// Anything that can name a level: an integer id or a numeric string
pub trait LevelKey {
    fn level_id(&self) -> Result<TaxonId>;
}

impl LevelKey for TaxonId {
    fn level_id(&self) -> Result<TaxonId> {
        Ok(*self)
    }
}

impl LevelKey for i32 {
    fn level_id(&self) -> Result<TaxonId> {
        Ok(TaxonId::from(*self))
    }
}

impl LevelKey for u32 {
    fn level_id(&self) -> Result<TaxonId> {
        Ok(TaxonId::from(*self))
    }
}

impl LevelKey for str {
    fn level_id(&self) -> Result<TaxonId> {
        self.trim()
            .parse::<TaxonId>()
            .map_err(|_| LevelError::InvalidKey(self.to_string()))
    }
}

impl LevelKey for String {
    fn level_id(&self) -> Result<TaxonId> {
        self.as_str().level_id()
    }
}

impl<K: LevelKey + ?Sized> LevelKey for &K {
    fn level_id(&self) -> Result<TaxonId> {
        (**self).level_id()
    }
}

fn parse_record(line: &str, line_no: usize) -> Result<Level> {
    let fields: Vec<&str> = line.split(SEPARATOR).collect();
    if fields.len() < MIN_FIELDS {
        return Err(LevelError::MalformedRecord {
            line: line_no,
            reason: format!(
                "expected at least {} tab-separated fields, found {}",
                MIN_FIELDS,
                fields.len()
            ),
        });
    }

    let id: TaxonId = parse_field(fields[ID_FIELD], "level id", line_no)?;
    let size: i64 = parse_field(fields[SIZE_FIELD], "level size", line_no)?;

    // "?" can't be used inside map(), collecting into a Result stops at the first bad member
    let members = fields[MEMBERS_FIELD]
        .split(MEMBER_SEPARATOR)
        .map(|m| parse_field(m, "member taxon id", line_no))
        .collect::<Result<Vec<TaxonId>>>()?;

    Ok(Level::new(id, fields[NAME_FIELD].to_string(), members, size))
}

fn parse_field<T: FromStr>(s: &str, what: &str, line_no: usize) -> Result<T> {
    s.trim().parse::<T>().map_err(|_| LevelError::MalformedRecord {
        line: line_no,
        reason: format!("unable to parse {:?} as {}", s, what),
    })
}
