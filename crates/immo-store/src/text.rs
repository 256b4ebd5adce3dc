//! Comma-delimited text backend.
//!
//! Two files, each starting with a header line:
//!
//! ```text
//! prix,ville,type,chambres,salles_de_bains
//! 200000,Québec,Condo,2,1
//! ```
//!
//! ```text
//! utilisateur,hash
//! alice,5e884898da28...
//! ```
//!
//! Blank lines are skipped. A file that is missing, empty, or holds only a
//! header loads as an empty collection.

use std::path::{Path, PathBuf};

use immo_core::{CredentialSet, PropertyRecord, UserCredential};

use crate::atomic::{read_or_empty, write_atomic};
use crate::error::StoreError;
use crate::{CredentialStore, PropertyStore};

pub const PROPERTIES_HEADER: &str = "prix,ville,type,chambres,salles_de_bains";
pub const USERS_HEADER: &str = "utilisateur,hash";

const DELIMITER: char = ',';

/// Property and credential files on disk.
#[derive(Debug, Clone)]
pub struct TextStore {
    properties_path: PathBuf,
    users_path: PathBuf,
}

impl TextStore {
    #[must_use]
    pub fn new(properties_path: impl Into<PathBuf>, users_path: impl Into<PathBuf>) -> Self {
        Self {
            properties_path: properties_path.into(),
            users_path: users_path.into(),
        }
    }

    #[must_use]
    pub fn properties_path(&self) -> &Path {
        &self.properties_path
    }

    #[must_use]
    pub fn users_path(&self) -> &Path {
        &self.users_path
    }

    /// Create either file with just its header if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if a file cannot be created.
    pub fn ensure_files(&self) -> Result<(), StoreError> {
        for (path, header) in [
            (&self.properties_path, PROPERTIES_HEADER),
            (&self.users_path, USERS_HEADER),
        ] {
            if !path.exists() {
                tracing::debug!(path = %path.display(), "creating empty record file");
                write_atomic(path, &format!("{header}\n"), false)?;
            }
        }
        Ok(())
    }
}

impl PropertyStore for TextStore {
    fn load_properties(&self) -> Result<Vec<PropertyRecord>, StoreError> {
        let contents = read_or_empty(&self.properties_path)?;
        let records = decode_properties(&contents, &self.properties_path)?;
        tracing::debug!(
            path = %self.properties_path.display(),
            count = records.len(),
            "loaded properties"
        );
        Ok(records)
    }

    fn save_properties(&mut self, records: &[PropertyRecord]) -> Result<(), StoreError> {
        write_atomic(&self.properties_path, &encode_properties(records), false)?;
        tracing::debug!(
            path = %self.properties_path.display(),
            count = records.len(),
            "saved properties"
        );
        Ok(())
    }
}

impl CredentialStore for TextStore {
    fn load_credentials(&self) -> Result<CredentialSet, StoreError> {
        let contents = read_or_empty(&self.users_path)?;
        let credentials = decode_credentials(&contents, &self.users_path)?;
        tracing::debug!(
            path = %self.users_path.display(),
            count = credentials.len(),
            "loaded credentials"
        );
        Ok(credentials)
    }

    fn save_credentials(&mut self, credentials: &CredentialSet) -> Result<(), StoreError> {
        let encoded = encode_credentials(credentials)?;
        write_atomic(&self.users_path, &encoded, true)?;
        tracing::debug!(
            path = %self.users_path.display(),
            count = credentials.len(),
            "saved credentials"
        );
        Ok(())
    }
}

// --- Codec ---

/// Non-blank data rows with their 1-based line numbers, header skipped.
fn data_rows(contents: &str) -> impl Iterator<Item = (usize, &str)> {
    contents
        .lines()
        .enumerate()
        .skip(1)
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
}

fn decode_properties(contents: &str, path: &Path) -> Result<Vec<PropertyRecord>, StoreError> {
    data_rows(contents)
        .map(|(line, row)| {
            decode_property(row).map_err(|reason| StoreError::Malformed {
                path: path.to_path_buf(),
                line,
                reason,
            })
        })
        .collect()
}

fn decode_property(row: &str) -> Result<PropertyRecord, String> {
    let fields: Vec<&str> = row.split(DELIMITER).map(str::trim).collect();
    let [price, city, kind, bedrooms, bathrooms] = fields.as_slice() else {
        return Err(format!("expected 5 fields, found {}", fields.len()));
    };
    Ok(PropertyRecord {
        price: price
            .parse()
            .map_err(|_| format!("invalid price '{price}'"))?,
        city: city.parse().map_err(|_| format!("unknown city '{city}'"))?,
        property_type: kind
            .parse()
            .map_err(|_| format!("unknown property type '{kind}'"))?,
        bedrooms: bedrooms
            .parse()
            .map_err(|_| format!("invalid bedroom count '{bedrooms}'"))?,
        bathrooms: bathrooms
            .parse()
            .map_err(|_| format!("invalid bathroom count '{bathrooms}'"))?,
    })
}

fn encode_properties(records: &[PropertyRecord]) -> String {
    let mut out = String::from(PROPERTIES_HEADER);
    out.push('\n');
    for record in records {
        out.push_str(&format!(
            "{},{},{},{},{}\n",
            record.price, record.city, record.property_type, record.bedrooms, record.bathrooms
        ));
    }
    out
}

fn decode_credentials(contents: &str, path: &Path) -> Result<CredentialSet, StoreError> {
    let malformed = |line: usize, reason: String| StoreError::Malformed {
        path: path.to_path_buf(),
        line,
        reason,
    };

    let mut credentials = CredentialSet::new();
    for (line, row) in data_rows(contents) {
        let (username, hash) = row
            .split_once(DELIMITER)
            .ok_or_else(|| malformed(line, "expected 'utilisateur,hash'".to_string()))?;
        let (username, hash) = (username.trim(), hash.trim());
        if username.is_empty() || hash.is_empty() || hash.contains(DELIMITER) {
            return Err(malformed(line, "expected 'utilisateur,hash'".to_string()));
        }
        credentials
            .insert(UserCredential {
                username: username.to_string(),
                password_hash: hash.to_string(),
            })
            .map_err(|dup| malformed(line, dup.to_string()))?;
    }
    Ok(credentials)
}

fn encode_credentials(credentials: &CredentialSet) -> Result<String, StoreError> {
    let mut out = String::from(USERS_HEADER);
    out.push('\n');
    for credential in credentials.iter() {
        check_field("username", &credential.username)?;
        check_field("password_hash", &credential.password_hash)?;
        out.push_str(&format!(
            "{},{}\n",
            credential.username, credential.password_hash
        ));
    }
    Ok(out)
}

fn check_field(field: &'static str, value: &str) -> Result<(), StoreError> {
    if value.contains(DELIMITER) || value.contains(['\n', '\r']) {
        return Err(StoreError::InvalidField {
            field,
            reason: "contains the delimiter or a line break".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use immo_core::{City, PropertyType};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn decode_skips_header_and_blank_lines() {
        let contents = format!("{PROPERTIES_HEADER}\n\n200000,Québec,Condo,2,1\n\n");
        let records = decode_properties(&contents, Path::new("p.txt")).expect("decode");
        assert_eq!(
            records,
            vec![PropertyRecord::new(200_000, City::Quebec, PropertyType::Condo, 2, 1)]
        );
    }

    #[test]
    fn decode_reports_line_number_of_bad_row() {
        let contents = format!("{PROPERTIES_HEADER}\n200000,Québec,Condo,2,1\n1,Paris,Loft,1,1\n");
        let err = decode_properties(&contents, Path::new("p.txt")).expect_err("bad city");
        match err {
            StoreError::Malformed { line, reason, .. } => {
                assert_eq!(line, 3);
                assert!(reason.contains("Paris"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn decode_rejects_wrong_field_count() {
        let contents = format!("{PROPERTIES_HEADER}\n200000,Québec,Condo\n");
        assert!(decode_properties(&contents, Path::new("p.txt")).is_err());
    }

    #[test]
    fn empty_and_header_only_files_decode_to_nothing() {
        assert!(decode_properties("", Path::new("p.txt")).expect("empty").is_empty());
        assert!(
            decode_credentials(&format!("{USERS_HEADER}\n"), Path::new("u.txt"))
                .expect("header only")
                .is_empty()
        );
    }

    #[test]
    fn encode_writes_header_and_canonical_values() {
        let encoded = encode_properties(&[PropertyRecord::new(
            500_000,
            City::Montreal,
            PropertyType::Maison,
            4,
            2,
        )]);
        assert_eq!(
            encoded,
            format!("{PROPERTIES_HEADER}\n500000,Montréal,Maison,4,2\n")
        );
    }

    #[test]
    fn duplicate_usernames_on_disk_are_malformed() {
        let contents = format!("{USERS_HEADER}\nalice,aa\nalice,bb\n");
        assert!(matches!(
            decode_credentials(&contents, Path::new("u.txt")),
            Err(StoreError::Malformed { line: 3, .. })
        ));
    }

    #[test]
    fn encode_refuses_delimiter_in_username() {
        let mut credentials = CredentialSet::new();
        credentials
            .insert(UserCredential {
                username: "a,b".to_string(),
                password_hash: "h".to_string(),
            })
            .expect("insert");
        assert!(matches!(
            encode_credentials(&credentials),
            Err(StoreError::InvalidField {
                field: "username",
                ..
            })
        ));
    }
}
