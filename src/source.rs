use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

pub struct Source {
    pub name: String,
    pub content: String,
}

impl Source {
    pub fn load(path: &Path) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(Source {
            name: path.display().to_string(),
            content,
        })
    }

    pub fn text(text: &str) -> Self {
        Source {
            name: String::from("<text>"),
            content: String::from(text),
        }
    }

    /// Physical lines, without their terminators.
    pub fn lines(&self) -> std::str::Lines {
        self.content.lines()
    }

    pub fn line_count(&self) -> usize {
        self.content.lines().count()
    }
}

/// A 1-based line and column into a source, plus the length of the highlighted text.
#[derive(Clone, Debug, PartialEq)]
pub struct Location {
    pub line: usize,
    pub column: usize,
    pub length: usize,
}

impl Location {
    pub fn new(line: usize, column: usize, length: usize) -> Self {
        Location {
            line,
            column,
            length,
        }
    }

    pub fn underline(&self) -> String {
        let offset = (1..self.column).map(|_| " ").collect::<String>();
        let underline = (0..self.length.max(1)).map(|_| "^").collect::<String>();
        offset + &underline
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
