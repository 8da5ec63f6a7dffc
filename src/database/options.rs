use std::{fs, io, path::PathBuf};

use thiserror::Error;

use crate::model::person::Person;

#[derive(Error, Debug)]
pub enum SeedError {
    #[error("Unable to read seed file [{0}]: {1}")]
    Read(PathBuf, io::Error),

    #[error("Seed file [{0}] is not a JSON list of people: {1}")]
    Parse(PathBuf, serde_json::Error),
}

#[derive(Debug, Clone, Default)]
pub struct StoreOptions {
    seed_file: Option<PathBuf>,
}

// Implements: https://rust-unofficial.github.io/patterns/patterns/creational/builder.html
impl StoreOptions {
    /// JSON file holding an array of people that are saved into the store on startup.
    /// Ids in the file are ignored, every person is assigned a fresh one.
    pub fn set_seed_file(mut self, seed_file: Option<PathBuf>) -> Self {
        self.seed_file = seed_file;
        self
    }

    pub fn seed_file(&self) -> Option<&PathBuf> {
        self.seed_file.as_ref()
    }

    pub fn load_seed(&self) -> Result<Vec<Person>, SeedError> {
        let Some(seed_file) = &self.seed_file else {
            return Ok(vec![]);
        };

        let contents =
            fs::read_to_string(seed_file).map_err(|e| SeedError::Read(seed_file.clone(), e))?;

        serde_json::from_str(&contents).map_err(|e| SeedError::Parse(seed_file.clone(), e))
    }
}
