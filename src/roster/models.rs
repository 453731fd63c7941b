use super::validation::{ValidationError, validate_power_description, validate_strength};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Row, sqlite::SqliteRow};
use std::fmt;
use utoipa::ToSchema;

/// How strongly a hero wields a power.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Strength {
    Strong,
    Weak,
    Average,
}

impl Strength {
    /// Canonical label used in payloads and in the `hero_powers.strength` column.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strong => "Strong",
            Self::Weak => "Weak",
            Self::Average => "Average",
        }
    }

    /// Parse the persisted `hero_powers.strength` value.
    fn from_db(value: &str) -> Result<Self, sqlx::Error> {
        validate_strength(value).map_err(|err| sqlx::Error::Decode(Box::new(err)))
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Hero {
    pub id: i64,
    pub name: String,
    pub super_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Power {
    pub id: i64,
    pub name: String,
    pub description: String,
}

impl Power {
    /// Returns the power with `description` swapped in.
    ///
    /// # Errors
    /// Returns a [`ValidationError`] if the description is too short; `self` is
    /// consumed either way, callers keep their stored copy untouched.
    pub fn with_description(self, description: String) -> Result<Self, ValidationError> {
        validate_power_description(&description)?;
        Ok(Self {
            description,
            ..self
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroPower {
    pub id: i64,
    pub strength: Strength,
    pub hero_id: i64,
    pub power_id: i64,
}

impl<'r> FromRow<'r, SqliteRow> for HeroPower {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let strength: String = row.try_get("strength")?;
        Ok(Self {
            id: row.try_get("id")?,
            strength: Strength::from_db(&strength)?,
            hero_id: row.try_get("hero_id")?,
            power_id: row.try_get("power_id")?,
        })
    }
}

/// A hero power together with the power it points at, as listed under a hero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PowerLink {
    pub hero_power: HeroPower,
    pub power: Power,
}

impl<'r> FromRow<'r, SqliteRow> for PowerLink {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let strength: String = row.try_get("strength")?;
        let power_id: i64 = row.try_get("power_id")?;
        Ok(Self {
            hero_power: HeroPower {
                id: row.try_get("id")?,
                strength: Strength::from_db(&strength)?,
                hero_id: row.try_get("hero_id")?,
                power_id,
            },
            power: Power {
                id: power_id,
                name: row.try_get("power_name")?,
                description: row.try_get("power_description")?,
            },
        })
    }
}

/// Hero fields before an id has been assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewHero {
    pub name: String,
    pub super_name: String,
}

impl NewHero {
    #[must_use]
    pub fn new(name: impl Into<String>, super_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            super_name: super_name.into(),
        }
    }
}

/// A power that has passed validation and is ready to insert.
///
/// Fields are private so the only way to obtain one is [`NewPower::create`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPower {
    name: String,
    description: String,
}

impl NewPower {
    /// # Errors
    /// Returns a [`ValidationError`] if the description is shorter than 20 characters.
    pub fn create(
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let description = description.into();
        validate_power_description(&description)?;
        Ok(Self {
            name: name.into(),
            description,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// A hero power whose strength has been validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewHeroPower {
    strength: Strength,
    hero_id: i64,
    power_id: i64,
}

impl NewHeroPower {
    /// # Errors
    /// Returns [`ValidationError::InvalidStrength`] if `strength` is not a known label.
    pub fn create(strength: &str, hero_id: i64, power_id: i64) -> Result<Self, ValidationError> {
        Ok(Self {
            strength: validate_strength(strength)?,
            hero_id,
            power_id,
        })
    }

    #[must_use]
    pub const fn strength(&self) -> Strength {
        self.strength
    }

    #[must_use]
    pub const fn hero_id(&self) -> i64 {
        self.hero_id
    }

    #[must_use]
    pub const fn power_id(&self) -> i64 {
        self.power_id
    }
}
