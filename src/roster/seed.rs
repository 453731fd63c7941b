//! Sample data for local development.

use super::{
    Store,
    models::{NewHero, NewHeroPower, NewPower},
    repo::{RosterError, insert_hero_power_row, insert_hero_row, insert_power_row},
};
use tracing::info;

const HEROES: &[(&str, &str)] = &[
    ("Kamala Khan", "Ms. Marvel"),
    ("Doreen Green", "Squirrel Girl"),
    ("Gwen Stacy", "Spider-Gwen"),
    ("Janet Van Dyne", "The Wasp"),
    ("Wanda Maximoff", "Scarlet Witch"),
    ("Carol Danvers", "Captain Marvel"),
    ("Jean Grey", "Dark Phoenix"),
    ("Ororo Munroe", "Storm"),
    ("Kitty Pryde", "Shadowcat"),
    ("Elektra Natchios", "Elektra"),
];

const POWERS: &[(&str, &str)] = &[
    ("super strength", "gives the wielder super-human strengths"),
    (
        "flight",
        "gives the wielder the ability to fly through the skies at supersonic speed",
    ),
    (
        "super human senses",
        "allows the wielder to use her senses at a super-human level",
    ),
    ("elasticity", "can stretch the human body to extreme lengths"),
];

/// Hero and power positions (into `HEROES` and `POWERS`) with the link strength.
const LINKS: &[(usize, usize, &str)] = &[
    (0, 0, "Strong"),
    (0, 1, "Average"),
    (1, 2, "Weak"),
    (2, 2, "Strong"),
    (3, 1, "Average"),
    (4, 3, "Weak"),
    (5, 0, "Strong"),
    (5, 1, "Strong"),
    (6, 2, "Average"),
    (7, 1, "Strong"),
    (8, 3, "Average"),
    (9, 0, "Weak"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub heroes: usize,
    pub powers: usize,
    pub hero_powers: usize,
}

/// Inserts the sample heroes, powers and hero powers in one transaction.
///
/// With `reset`, existing rows are removed first and id sequences restart.
///
/// # Errors
/// Returns a [`RosterError`] if any insert fails; nothing is written in that case.
pub async fn seed(store: &Store, reset: bool) -> Result<SeedSummary, RosterError> {
    let mut tx = store.pool().begin().await?;

    if reset {
        info!("Clearing existing records");
        for statement in [
            "DELETE FROM hero_powers",
            "DELETE FROM powers",
            "DELETE FROM heroes",
            "DELETE FROM sqlite_sequence WHERE name IN ('hero_powers', 'powers', 'heroes')",
        ] {
            sqlx::query(statement).execute(&mut *tx).await?;
        }
    }

    let mut hero_ids = Vec::with_capacity(HEROES.len());
    for (name, super_name) in HEROES {
        let hero = insert_hero_row(&mut *tx, &NewHero::new(*name, *super_name)).await?;
        hero_ids.push(hero.id);
    }

    let mut power_ids = Vec::with_capacity(POWERS.len());
    for (name, description) in POWERS {
        let power = insert_power_row(&mut *tx, &NewPower::create(*name, *description)?).await?;
        power_ids.push(power.id);
    }

    for (hero, power, strength) in LINKS {
        let link = NewHeroPower::create(strength, hero_ids[*hero], power_ids[*power])?;
        insert_hero_power_row(&mut *tx, link).await?;
    }

    tx.commit().await?;

    let summary = SeedSummary {
        heroes: HEROES.len(),
        powers: POWERS.len(),
        hero_powers: LINKS.len(),
    };
    info!(
        heroes = summary.heroes,
        powers = summary.powers,
        hero_powers = summary.hero_powers,
        "Seeded database"
    );

    Ok(summary)
}
