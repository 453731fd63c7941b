//! SQL for heroes, powers and hero powers.
//!
//! Reads go straight to the pool. Every write runs in its own transaction so
//! a failed check leaves the store exactly as it was.

use super::{
    Store,
    models::{Hero, HeroPower, NewHero, NewHeroPower, NewPower, Power, PowerLink},
    serialize::{HeroDetail, HeroPowerDetail, serialize_hero, serialize_hero_power},
    validation::ValidationError,
};
use sqlx::SqliteExecutor;
use std::fmt;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Hero,
    Power,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hero => f.write_str("Hero"),
            Self::Power => f.write_str("Power"),
        }
    }
}

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("{0} not found")]
    NotFound(Entity),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Lists all heroes by id.
///
/// # Errors
/// Returns [`RosterError::Database`] if the query fails.
pub async fn list_heroes(store: &Store) -> Result<Vec<Hero>, RosterError> {
    let heroes =
        sqlx::query_as::<_, Hero>("SELECT id, name, super_name FROM heroes ORDER BY id")
            .fetch_all(store.pool())
            .await?;
    Ok(heroes)
}

/// # Errors
/// Returns [`RosterError::Database`] if the query fails.
pub async fn find_hero(store: &Store, id: i64) -> Result<Option<Hero>, RosterError> {
    Ok(fetch_hero(store.pool(), id).await?)
}

/// Lists the hero powers of `hero_id` joined with their power, by hero power id.
///
/// # Errors
/// Returns [`RosterError::Database`] if the query fails.
pub async fn hero_power_links(store: &Store, hero_id: i64) -> Result<Vec<PowerLink>, RosterError> {
    Ok(fetch_links(store.pool(), hero_id).await?)
}

/// Loads a hero and its links in one read transaction.
///
/// # Errors
/// Returns [`RosterError::NotFound`] if the hero does not exist.
pub async fn hero_detail(store: &Store, id: i64) -> Result<HeroDetail, RosterError> {
    let mut tx = store.pool().begin().await?;

    let hero = fetch_hero(&mut *tx, id)
        .await?
        .ok_or(RosterError::NotFound(Entity::Hero))?;
    let links = fetch_links(&mut *tx, id).await?;

    tx.commit().await?;

    Ok(serialize_hero(&hero, &links))
}

/// # Errors
/// Returns [`RosterError::Database`] if the insert fails.
pub async fn insert_hero(store: &Store, hero: &NewHero) -> Result<Hero, RosterError> {
    Ok(insert_hero_row(store.pool(), hero).await?)
}

/// Deletes a hero; its hero powers go with it.
///
/// Returns `false` when no hero had that id.
///
/// # Errors
/// Returns [`RosterError::Database`] if the delete fails.
pub async fn delete_hero(store: &Store, id: i64) -> Result<bool, RosterError> {
    let result = sqlx::query("DELETE FROM heroes WHERE id = ?")
        .bind(id)
        .execute(store.pool())
        .await?;
    debug!(hero_id = id, rows = result.rows_affected(), "hero delete");
    Ok(result.rows_affected() > 0)
}

/// Lists all powers by id.
///
/// # Errors
/// Returns [`RosterError::Database`] if the query fails.
pub async fn list_powers(store: &Store) -> Result<Vec<Power>, RosterError> {
    let powers =
        sqlx::query_as::<_, Power>("SELECT id, name, description FROM powers ORDER BY id")
            .fetch_all(store.pool())
            .await?;
    Ok(powers)
}

/// # Errors
/// Returns [`RosterError::Database`] if the query fails.
pub async fn find_power(store: &Store, id: i64) -> Result<Option<Power>, RosterError> {
    Ok(fetch_power(store.pool(), id).await?)
}

/// # Errors
/// Returns [`RosterError::Database`] if the insert fails.
pub async fn insert_power(store: &Store, power: &NewPower) -> Result<Power, RosterError> {
    Ok(insert_power_row(store.pool(), power).await?)
}

/// Replaces a power's description after validating it.
///
/// The existence check runs before validation, so an unknown id reports
/// `NotFound` even when the description is also invalid.
///
/// # Errors
/// Returns [`RosterError::NotFound`] for an unknown id and
/// [`RosterError::Validation`] for a short description; the row is unchanged
/// in both cases.
pub async fn update_power_description(
    store: &Store,
    id: i64,
    description: String,
) -> Result<Power, RosterError> {
    let mut tx = store.pool().begin().await?;

    let power = fetch_power(&mut *tx, id)
        .await?
        .ok_or(RosterError::NotFound(Entity::Power))?;
    let power = power.with_description(description)?;

    sqlx::query("UPDATE powers SET description = ? WHERE id = ?")
        .bind(&power.description)
        .bind(power.id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    Ok(power)
}

/// Deletes a power; its hero powers go with it.
///
/// Returns `false` when no power had that id.
///
/// # Errors
/// Returns [`RosterError::Database`] if the delete fails.
pub async fn delete_power(store: &Store, id: i64) -> Result<bool, RosterError> {
    let result = sqlx::query("DELETE FROM powers WHERE id = ?")
        .bind(id)
        .execute(store.pool())
        .await?;
    debug!(power_id = id, rows = result.rows_affected(), "power delete");
    Ok(result.rows_affected() > 0)
}

/// Inserts a hero power after checking that both ends exist.
///
/// The hero is checked before the power. Nothing is written unless both exist.
///
/// # Errors
/// Returns [`RosterError::NotFound`] naming the missing side, or
/// [`RosterError::Database`] if the insert fails.
pub async fn insert_hero_power(
    store: &Store,
    hero_power: NewHeroPower,
) -> Result<HeroPowerDetail, RosterError> {
    let mut tx = store.pool().begin().await?;

    let hero = fetch_hero(&mut *tx, hero_power.hero_id())
        .await?
        .ok_or(RosterError::NotFound(Entity::Hero))?;
    let power = fetch_power(&mut *tx, hero_power.power_id())
        .await?
        .ok_or(RosterError::NotFound(Entity::Power))?;

    let row = insert_hero_power_row(&mut *tx, hero_power).await?;

    tx.commit().await?;

    Ok(serialize_hero_power(&row, &hero, &power))
}

async fn fetch_hero<'e, E>(executor: E, id: i64) -> Result<Option<Hero>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, Hero>("SELECT id, name, super_name FROM heroes WHERE id = ?")
        .bind(id)
        .fetch_optional(executor)
        .await
}

async fn fetch_power<'e, E>(executor: E, id: i64) -> Result<Option<Power>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, Power>("SELECT id, name, description FROM powers WHERE id = ?")
        .bind(id)
        .fetch_optional(executor)
        .await
}

async fn fetch_links<'e, E>(executor: E, hero_id: i64) -> Result<Vec<PowerLink>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, PowerLink>(
        r"
        SELECT hp.id, hp.strength, hp.hero_id, hp.power_id,
            p.name AS power_name, p.description AS power_description
        FROM hero_powers hp
        JOIN powers p ON p.id = hp.power_id
        WHERE hp.hero_id = ?
        ORDER BY hp.id
        ",
    )
    .bind(hero_id)
    .fetch_all(executor)
    .await
}

pub(super) async fn insert_hero_row<'e, E>(executor: E, hero: &NewHero) -> Result<Hero, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, Hero>(
        "INSERT INTO heroes (name, super_name) VALUES (?, ?) RETURNING id, name, super_name",
    )
    .bind(&hero.name)
    .bind(&hero.super_name)
    .fetch_one(executor)
    .await
}

pub(super) async fn insert_power_row<'e, E>(
    executor: E,
    power: &NewPower,
) -> Result<Power, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, Power>(
        "INSERT INTO powers (name, description) VALUES (?, ?) RETURNING id, name, description",
    )
    .bind(power.name())
    .bind(power.description())
    .fetch_one(executor)
    .await
}

pub(super) async fn insert_hero_power_row<'e, E>(
    executor: E,
    hero_power: NewHeroPower,
) -> Result<HeroPower, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, HeroPower>(
        r"
        INSERT INTO hero_powers (strength, hero_id, power_id)
        VALUES (?, ?, ?)
        RETURNING id, strength, hero_id, power_id
        ",
    )
    .bind(hero_power.strength().as_str())
    .bind(hero_power.hero_id())
    .bind(hero_power.power_id())
    .fetch_one(executor)
    .await
}
