use std::path::PathBuf;

pub const DEFAULT_SERVER_PORT: u16 = 3000;
pub const DEFAULT_STATIC_DIR: &str = "client/dist";
pub const CATALOG_CACHE_CONTROL: &str = "public, max-age=60";

pub fn server_port() -> u16 {
    std::env::var("PORT")
        .ok()
        .and_then(|value| value.trim().parse::<u16>().ok())
        .filter(|value| *value > 0)
        .unwrap_or(DEFAULT_SERVER_PORT)
}

pub fn static_dir() -> PathBuf {
    std::env::var("RAIDGOLD_STATIC_DIR")
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR))
}

/// Optional JSON catalog replacing the built-in raid list.
pub fn raids_catalog_path() -> Option<PathBuf> {
    std::env::var("RAIDS_CATALOG_PATH")
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_port_defaults_when_unset_or_invalid() {
        temp_env::with_var_unset("PORT", || {
            assert_eq!(server_port(), DEFAULT_SERVER_PORT);
        });
        temp_env::with_var("PORT", Some("not-a-port"), || {
            assert_eq!(server_port(), DEFAULT_SERVER_PORT);
        });
        temp_env::with_var("PORT", Some("0"), || {
            assert_eq!(server_port(), DEFAULT_SERVER_PORT);
        });
    }

    #[test]
    fn server_port_reads_env() {
        temp_env::with_var("PORT", Some(" 8080 "), || {
            assert_eq!(server_port(), 8080);
        });
    }

    #[test]
    fn static_dir_falls_back_to_client_dist() {
        temp_env::with_var("RAIDGOLD_STATIC_DIR", Some("  "), || {
            assert_eq!(static_dir(), PathBuf::from(DEFAULT_STATIC_DIR));
        });
        temp_env::with_var("RAIDGOLD_STATIC_DIR", Some("/srv/raidgold"), || {
            assert_eq!(static_dir(), PathBuf::from("/srv/raidgold"));
        });
    }

    #[test]
    fn raids_catalog_path_is_optional() {
        temp_env::with_var_unset("RAIDS_CATALOG_PATH", || {
            assert_eq!(raids_catalog_path(), None);
        });
        temp_env::with_var("RAIDS_CATALOG_PATH", Some("data/raids.json"), || {
            assert_eq!(raids_catalog_path(), Some(PathBuf::from("data/raids.json")));
        });
    }
}
