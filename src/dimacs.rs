use std::mem;

use thiserror::Error;

/// Possible errors while parsing DIMACS CNF input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("line {line}: invalid literal '{token}'")]
    InvalidToken { line: usize, token: String },
}

pub struct Dimacs;

impl Dimacs {
    /// Parse DIMACS CNF text into clauses of signed literals.
    ///
    /// Comment (`c`) and problem (`p`) lines are skipped; header counts are
    /// not trusted. Any other token must be a signed integer. A `0` closes
    /// the current clause, which may span lines; a trailing clause without
    /// terminator is kept.
    pub fn parse(input: &str) -> Result<Vec<Vec<i32>>, ParseError> {
        let mut clauses = Vec::new();
        let mut current = Vec::new();

        for (line_idx, line) in input.lines().enumerate() {
            let line = line.trim_start();
            if line.is_empty() || line.starts_with('c') || line.starts_with('p') {
                continue;
            }

            for token in line.split_whitespace() {
                let lit: i32 = token.parse().map_err(|_| ParseError::InvalidToken {
                    line: line_idx + 1,
                    token: token.to_string(),
                })?;

                if lit == 0 {
                    clauses.push(mem::take(&mut current));
                } else {
                    current.push(lit);
                }
            }
        }

        if !current.is_empty() {
            clauses.push(current);
        }

        Ok(clauses)
    }
}
