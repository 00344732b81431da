use std::collections::HashSet;

use thiserror::Error;

use crate::raid::RaidRecord;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("raid #{index} has an empty path")]
    EmptyPath { index: usize },
    #[error("raid {path} has an empty label")]
    EmptyLabel { path: String },
    #[error("duplicate raid path {path}")]
    DuplicatePath { path: String },
}

/// Parse a JSON array of raid records and validate it.
pub fn parse_catalog(json: &str) -> Result<Vec<RaidRecord>, CatalogError> {
    let catalog: Vec<RaidRecord> = serde_json::from_str(json)?;
    validate(&catalog)?;
    Ok(catalog)
}

pub fn validate(catalog: &[RaidRecord]) -> Result<(), CatalogError> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(catalog.len());
    for (index, raid) in catalog.iter().enumerate() {
        if raid.path.trim().is_empty() {
            return Err(CatalogError::EmptyPath { index });
        }
        if raid.label.trim().is_empty() {
            return Err(CatalogError::EmptyLabel {
                path: raid.path.clone(),
            });
        }
        if !seen.insert(raid.path.as_str()) {
            return Err(CatalogError::DuplicatePath {
                path: raid.path.clone(),
            });
        }
    }
    Ok(())
}

/// Strong ETag for a serialized catalog body.
pub fn catalog_etag(body: &[u8]) -> String {
    format!("\"raids-{:08x}\"", crc32fast::hash(body))
}

/// URL slug for a group label: lowercase ASCII alphanumerics joined by `-`.
pub fn group_slug(label: &str) -> String {
    let mut slug = String::with_capacity(label.len());
    for c in label.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// Built-in legion raid list, used when no catalog file is configured.
pub fn default_catalog() -> Vec<RaidRecord> {
    let raid = |label: &str, slug: &str, mode: &str, gold: &[u32]| {
        RaidRecord::new(label, format!("/raids/{slug}-{mode}"), gold.to_vec())
    };
    vec![
        raid("Valtan", "valtan", "normal", &[500, 700]),
        raid("Valtan", "valtan", "hard", &[700, 1100]),
        raid("Vykas", "vykas", "normal", &[1000, 1500]),
        raid("Vykas", "vykas", "hard", &[1500, 2000]),
        raid("Kakul-Saydon", "kakul-saydon", "normal", &[1000, 1000, 1500]),
        raid("Brelshaza", "brelshaza", "normal", &[2000, 2500, 1500]),
        raid("Brelshaza", "brelshaza", "hard", &[2500, 3000, 2000]),
        raid("Kayangel", "kayangel", "normal", &[1000, 1500, 2000]),
        raid("Kayangel", "kayangel", "hard", &[1500, 2000, 3000]),
        raid("Akkan", "akkan", "normal", &[1500, 2500, 4000]),
        raid("Akkan", "akkan", "hard", &[2000, 3500, 5000]),
    ]
}
