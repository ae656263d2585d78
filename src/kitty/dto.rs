use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::breed::dto::BreedOut;
use crate::kitty::repo::Kitty;

/// Request body for kitten creation.
#[derive(Debug, Deserialize)]
pub struct KittyCreate {
    pub name: String,
    pub color: String,
    pub age: i32, // full months
    pub description: Option<String>,
    pub breed_id: i32,
}

/// Partial update payload. A field that is absent or null is left alone;
/// null never means "clear this field".
#[derive(Debug, Default, Deserialize)]
pub struct KittyUpdate {
    pub name: Option<String>,
    pub color: Option<String>,
    pub age: Option<i32>,
    pub description: Option<String>,
    pub breed_id: Option<i32>,
}

impl KittyUpdate {
    /// Merge the supplied fields into an existing record.
    pub fn apply(self, kitty: &mut Kitty) {
        if let Some(name) = self.name {
            kitty.name = name;
        }
        if let Some(color) = self.color {
            kitty.color = color;
        }
        if let Some(age) = self.age {
            kitty.age = age;
        }
        if let Some(description) = self.description {
            kitty.description = Some(description);
        }
        if let Some(breed_id) = self.breed_id {
            kitty.breed_id = breed_id;
        }
    }
}

#[derive(Debug, Serialize)]
pub struct KittyOut {
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
    pub deleted_at: Option<OffsetDateTime>,
    pub id: i32,
    pub name: String,
    pub color: String,
    pub age: i32,
    pub description: Option<String>,
    pub breed_id: i32,
}

impl From<Kitty> for KittyOut {
    fn from(kitty: Kitty) -> Self {
        Self {
            created_at: kitty.created_at,
            updated_at: kitty.updated_at,
            deleted_at: kitty.deleted_at,
            id: kitty.id,
            name: kitty.name,
            color: kitty.color,
            age: kitty.age,
            description: kitty.description,
            breed_id: kitty.breed_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct KittyOutWithBreed {
    pub kitty: KittyOut,
    pub breed: BreedOut,
}

#[derive(Debug, Serialize)]
pub struct KittyOutList {
    pub kittens: Vec<KittyOut>,
}

/// Query parameters for the kitten list.
#[derive(Debug, Deserialize)]
pub struct KittyListParams {
    pub breed_id: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn sample_kitty() -> Kitty {
        Kitty {
            id: 10,
            name: "Murka".into(),
            color: "gray".into(),
            age: 4,
            description: Some("playful".into()),
            breed_id: 2,
            created_at: datetime!(2024-10-03 12:09:14 UTC),
            updated_at: datetime!(2024-10-03 12:09:14 UTC),
            deleted_at: None,
        }
    }

    #[test]
    fn apply_overwrites_only_supplied_fields() {
        let mut kitty = sample_kitty();
        KittyUpdate {
            color: Some("black".into()),
            ..Default::default()
        }
        .apply(&mut kitty);

        assert_eq!(kitty.color, "black");
        assert_eq!(kitty.name, "Murka");
        assert_eq!(kitty.age, 4);
        assert_eq!(kitty.description.as_deref(), Some("playful"));
        assert_eq!(kitty.breed_id, 2);
    }

    #[test]
    fn apply_ignores_nulls() {
        let mut kitty = sample_kitty();
        let update: KittyUpdate = serde_json::from_str(
            r#"{"name": null, "color": null, "age": null, "description": null, "breed_id": null}"#,
        )
        .unwrap();
        update.apply(&mut kitty);

        assert_eq!(kitty.name, "Murka");
        assert_eq!(kitty.color, "gray");
        assert_eq!(kitty.age, 4);
        assert_eq!(kitty.description.as_deref(), Some("playful"));
        assert_eq!(kitty.breed_id, 2);
    }

    #[test]
    fn apply_can_replace_every_field() {
        let mut kitty = sample_kitty();
        KittyUpdate {
            name: Some("Barsik".into()),
            color: Some("white".into()),
            age: Some(7),
            description: Some("sleepy".into()),
            breed_id: Some(3),
        }
        .apply(&mut kitty);

        assert_eq!(kitty.name, "Barsik");
        assert_eq!(kitty.color, "white");
        assert_eq!(kitty.age, 7);
        assert_eq!(kitty.description.as_deref(), Some("sleepy"));
        assert_eq!(kitty.breed_id, 3);
    }

    #[test]
    fn apply_never_touches_timestamps_or_id() {
        let mut kitty = sample_kitty();
        KittyUpdate {
            name: Some("Barsik".into()),
            ..Default::default()
        }
        .apply(&mut kitty);

        assert_eq!(kitty.id, 10);
        assert_eq!(kitty.created_at, datetime!(2024-10-03 12:09:14 UTC));
        assert_eq!(kitty.updated_at, datetime!(2024-10-03 12:09:14 UTC));
        assert!(kitty.deleted_at.is_none());
    }
}
