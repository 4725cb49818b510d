//! JSON export for the collected movie records
//!
//! Serializes the full record set (including nested timings) to a
//! pretty-printed JSON array, overwriting any existing file at the
//! target path.

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::types::Movie;

/// Write the movie records to `path` as a pretty-printed JSON array.
///
/// # Arguments
/// * `movies` - Full record set, in listing order
/// * `path` - Output file; overwritten if it exists
///
/// # Errors
/// * `VoxError::Json` if serialization fails
/// * `VoxError::Io` if the file cannot be created or written
pub fn write_movies<P: AsRef<Path>>(movies: &[Movie], path: P) -> Result<()> {
    let json = serde_json::to_string_pretty(movies)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DaySchedule, Showtimes};
    use indexmap::IndexMap;

    fn sample_movies() -> Vec<Movie> {
        let mut experiences = IndexMap::new();
        experiences.insert("STANDARD".to_string(), vec!["14:30".to_string()]);

        let mut showtimes = Showtimes::new();
        showtimes.insert("Mall of Arabia".to_string(), experiences);

        let mut timings = IndexMap::new();
        timings.insert(
            "2025-02-12".to_string(),
            DaySchedule {
                day_of_week: "Wednesday".to_string(),
                showtimes,
            },
        );
        timings.insert(
            "2025-02-13".to_string(),
            DaySchedule {
                day_of_week: "Thursday".to_string(),
                showtimes: Showtimes::new(),
            },
        );

        vec![Movie {
            slug: "the-batman".to_string(),
            identifier: "HO00001234".to_string(),
            title: "The Batman".to_string(),
            description: String::new(),
            image_url: String::new(),
            classification: "PG15".to_string(),
            language: "English".to_string(),
            showtimes_url: "/movies/the-batman#showtimes".to_string(),
            timings,
        }]
    }

    #[test]
    fn test_write_movies_round_trip() {
        let movies = sample_movies();
        let path = std::env::temp_dir().join("vox-export-round-trip.json");

        write_movies(&movies, &path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        let back: Vec<Movie> = serde_json::from_str(&written).unwrap();
        assert_eq!(back, movies);

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_write_movies_pretty_prints() {
        let movies = sample_movies();
        let path = std::env::temp_dir().join("vox-export-pretty.json");

        write_movies(&movies, &path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        // Two-space indentation, array at the top level
        assert!(written.starts_with("[\n  {"));
        assert!(written.contains("\n    \"slug\": \"the-batman\""));

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_write_movies_overwrites_existing_file() {
        let path = std::env::temp_dir().join("vox-export-overwrite.json");
        fs::write(&path, "stale content").unwrap();

        write_movies(&sample_movies(), &path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(!written.contains("stale content"));
        assert!(written.contains("the-batman"));

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_write_movies_unwritable_path_fails() {
        let path = std::env::temp_dir().join("no-such-dir-vox").join("out.json");
        let result = write_movies(&sample_movies(), &path);
        assert!(result.is_err());
    }

    #[test]
    fn test_write_movies_empty_set() {
        let path = std::env::temp_dir().join("vox-export-empty.json");
        write_movies(&[], &path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, "[]");

        fs::remove_file(&path).ok();
    }
}
