use serde::{Deserialize, Serialize};

use crate::breed::repo::Breed;

/// Request body for breed creation.
#[derive(Debug, Deserialize)]
pub struct BreedIn {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct BreedOut {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}

impl From<Breed> for BreedOut {
    fn from(breed: Breed) -> Self {
        Self {
            id: breed.id,
            name: breed.name,
            description: breed.description,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BreedOutList {
    pub breed: Vec<BreedOut>,
}
