//! Person-Action-Object systems and their config format.
//!
//! A PAO file is INI-style plain text: a `[pao]` section with one
//! `NN = person,action,object` line per number:
//!
//! ```ini
//! [pao]
//! 07 = James Bond,shooting,pistol
//! 42 = Douglas Adams,towelling,towel
//! ```
//!
//! `#` and `;` start comment lines, blank lines are skipped, and
//! sections other than `[pao]` are ignored.

use std::fs;
use std::path::Path;

use rand::seq::SliceRandom;

use crate::error::PaoError;

/// One association: a 2-digit number and its person, action and object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaoEntry {
    pub number: String,
    pub person: String,
    pub action: String,
    pub object: String,
}

/// A user's full PAO system.
#[derive(Debug, Clone, Default)]
pub struct PaoSystem {
    entries: Vec<PaoEntry>,
}

impl PaoSystem {
    /// Load a system from its config file.
    pub fn load(path: &Path) -> Result<Self, PaoError> {
        let content = fs::read_to_string(path).map_err(|source| PaoError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        let system = Self::parse(&content)?;
        tracing::debug!(
            count = system.entries.len(),
            path = %path.display(),
            "loaded pao associations"
        );
        Ok(system)
    }

    /// Parse the INI-style config format.
    pub fn parse(content: &str) -> Result<Self, PaoError> {
        let mut entries = Vec::new();
        let mut in_pao = false;
        let mut seen_section = false;

        for (idx, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }
            if line.starts_with('[') && line.ends_with(']') {
                in_pao = line.eq_ignore_ascii_case("[pao]");
                seen_section |= in_pao;
                continue;
            }
            if !in_pao {
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                return Err(PaoError::MalformedEntry {
                    line: idx + 1,
                    text: line.to_string(),
                });
            };
            let number = key.trim().to_string();
            if number.is_empty()
                || number.len() > 2
                || !number.chars().all(|c| c.is_ascii_digit())
            {
                return Err(PaoError::BadNumber {
                    line: idx + 1,
                    number,
                });
            }

            let fields: Vec<&str> = value.split(',').map(str::trim).collect();
            if fields.len() != 3 || fields.iter().any(|f| f.is_empty()) {
                return Err(PaoError::MalformedEntry {
                    line: idx + 1,
                    text: line.to_string(),
                });
            }
            entries.push(PaoEntry {
                number,
                person: fields[0].to_string(),
                action: fields[1].to_string(),
                object: fields[2].to_string(),
            });
        }

        if !seen_section {
            return Err(PaoError::MissingSection);
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[PaoEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entries in randomized quiz order.
    pub fn shuffled(&self) -> Vec<PaoEntry> {
        let mut entries = self.entries.clone();
        entries.shuffle(&mut rand::rng());
        entries
    }
}

/// A short description of the system, shown by `--explain`.
pub fn explain() -> &'static str {
    "A Person-Action-Object system assigns a person doing an action on an\n\
     object to every two-digit number. A six-digit number then becomes a\n\
     single scene: the first pair's person performs the second pair's\n\
     action on the third pair's object. Define your associations in\n\
     ~/.artofmemory.conf and drill them with --quiz."
}
