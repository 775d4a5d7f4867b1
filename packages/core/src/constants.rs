use std::env;
use std::path::PathBuf;

/// Number of questions returned per page by every paginated endpoint
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Get the path to the trivia data directory (~/.trivia)
pub fn trivia_dir() -> PathBuf {
    // First try HOME environment variable (useful for tests)
    if let Ok(home) = env::var("HOME") {
        PathBuf::from(home).join(".trivia")
    } else {
        dirs::home_dir()
            .unwrap_or_else(env::temp_dir)
            .join(".trivia")
    }
}

/// Get the path to the default database file (~/.trivia/trivia.db)
pub fn database_file() -> PathBuf {
    trivia_dir().join("trivia.db")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_file_lives_in_trivia_dir() {
        let db = database_file();
        assert_eq!(db.parent(), Some(trivia_dir().as_path()));
        assert_eq!(db.file_name().and_then(|n| n.to_str()), Some("trivia.db"));
    }
}
