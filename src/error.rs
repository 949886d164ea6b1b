use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum GameError {
    /// The high-score file could not be read or written.
    HighScoreIo { path: PathBuf, source: io::Error },
    /// The high-score file exists but does not hold a single integer.
    HighScoreParse { path: PathBuf, content: String },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HighScoreIo { path, source } => {
                write!(f, "high score file {}: {}", path.display(), source)
            }
            Self::HighScoreParse { path, content } => write!(
                f,
                "high score file {} holds {:?}, expected an integer",
                path.display(),
                content
            ),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::HighScoreIo { source, .. } => Some(source),
            Self::HighScoreParse { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn only_file_failures_carry_a_source() {
        let io = GameError::HighScoreIo {
            path: PathBuf::from("hs.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert!(io.source().is_some());
        assert!(io.to_string().starts_with("high score file hs.txt"));

        let parse = GameError::HighScoreParse { path: PathBuf::from("hs.txt"), content: "x".to_string() };
        assert!(parse.source().is_none());
        assert!(parse.to_string().contains("expected an integer"));
    }
}
