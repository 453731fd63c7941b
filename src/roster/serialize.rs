//! Response projections.
//!
//! Each projection is its own type and only nests projections that point away
//! from where it was reached: a hero lists hero powers with their power, a hero
//! power embeds hero and power summaries, and summaries embed nothing. None of
//! the nested types has a field that could lead back to its parent.

use super::models::{Hero, HeroPower, Power, PowerLink, Strength};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct HeroSummary {
    pub id: i64,
    pub name: String,
    pub super_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct PowerSummary {
    pub id: i64,
    pub name: String,
    pub description: String,
}

/// A hero power as listed under its hero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct HeroPowerEntry {
    pub id: i64,
    pub hero_id: i64,
    pub power_id: i64,
    pub strength: Strength,
    pub power: PowerSummary,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct HeroDetail {
    pub id: i64,
    pub name: String,
    pub super_name: String,
    pub hero_powers: Vec<HeroPowerEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct HeroPowerDetail {
    pub id: i64,
    pub hero_id: i64,
    pub power_id: i64,
    pub strength: Strength,
    pub hero: HeroSummary,
    pub power: PowerSummary,
}

#[must_use]
pub fn serialize_hero_summary(hero: &Hero) -> HeroSummary {
    HeroSummary {
        id: hero.id,
        name: hero.name.clone(),
        super_name: hero.super_name.clone(),
    }
}

#[must_use]
pub fn serialize_power(power: &Power) -> PowerSummary {
    PowerSummary {
        id: power.id,
        name: power.name.clone(),
        description: power.description.clone(),
    }
}

/// Projects a hero with its links, ordered by hero power id.
///
/// Links that belong to another hero are skipped.
#[must_use]
pub fn serialize_hero(hero: &Hero, links: &[PowerLink]) -> HeroDetail {
    let mut hero_powers: Vec<HeroPowerEntry> = links
        .iter()
        .filter(|link| link.hero_power.hero_id == hero.id)
        .map(|link| HeroPowerEntry {
            id: link.hero_power.id,
            hero_id: link.hero_power.hero_id,
            power_id: link.hero_power.power_id,
            strength: link.hero_power.strength,
            power: serialize_power(&link.power),
        })
        .collect();
    hero_powers.sort_by_key(|entry| entry.id);

    HeroDetail {
        id: hero.id,
        name: hero.name.clone(),
        super_name: hero.super_name.clone(),
        hero_powers,
    }
}

#[must_use]
pub fn serialize_hero_power(hero_power: &HeroPower, hero: &Hero, power: &Power) -> HeroPowerDetail {
    HeroPowerDetail {
        id: hero_power.id,
        hero_id: hero_power.hero_id,
        power_id: hero_power.power_id,
        strength: hero_power.strength,
        hero: serialize_hero_summary(hero),
        power: serialize_power(power),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn hero() -> Hero {
        Hero {
            id: 1,
            name: "Kamala Khan".to_string(),
            super_name: "Ms. Marvel".to_string(),
        }
    }

    fn link(id: i64, hero_id: i64, power_id: i64, strength: Strength) -> PowerLink {
        PowerLink {
            hero_power: HeroPower {
                id,
                strength,
                hero_id,
                power_id,
            },
            power: Power {
                id: power_id,
                name: format!("power {power_id}"),
                description: "a description long enough to pass".to_string(),
            },
        }
    }

    /// Walks `value` and fails if any object below the root carries `key`.
    fn assert_no_nested_key(value: &Value, key: &str, depth: usize) {
        match value {
            Value::Object(map) => {
                if depth > 0 {
                    assert!(!map.contains_key(key), "nested `{key}` found: {value}");
                }
                for child in map.values() {
                    assert_no_nested_key(child, key, depth + 1);
                }
            }
            Value::Array(items) => {
                for item in items {
                    assert_no_nested_key(item, key, depth + 1);
                }
            }
            _ => {}
        }
    }

    #[test]
    fn hero_detail_orders_links_and_drops_foreign_ones() {
        let links = vec![
            link(7, 1, 2, Strength::Weak),
            link(3, 1, 1, Strength::Strong),
            link(5, 2, 1, Strength::Average),
        ];
        let detail = serialize_hero(&hero(), &links);
        let ids: Vec<i64> = detail.hero_powers.iter().map(|entry| entry.id).collect();
        assert_eq!(ids, vec![3, 7]);
        assert_eq!(detail.hero_powers[0].power.id, 1);
    }

    #[test]
    fn hero_detail_has_expected_shape() {
        let detail = serialize_hero(&hero(), &[link(1, 1, 1, Strength::Strong)]);
        let value = serde_json::to_value(&detail).unwrap_or(Value::Null);
        assert_eq!(
            value,
            json!({
                "id": 1,
                "name": "Kamala Khan",
                "super_name": "Ms. Marvel",
                "hero_powers": [{
                    "id": 1,
                    "hero_id": 1,
                    "power_id": 1,
                    "strength": "Strong",
                    "power": {
                        "id": 1,
                        "name": "power 1",
                        "description": "a description long enough to pass"
                    }
                }]
            })
        );
    }

    #[test]
    fn hero_detail_never_re_expands_hero() {
        let links = vec![link(1, 1, 1, Strength::Strong), link(2, 1, 2, Strength::Weak)];
        let value = serde_json::to_value(serialize_hero(&hero(), &links)).unwrap_or(Value::Null);
        assert_no_nested_key(&value, "hero", 0);
        assert_no_nested_key(&value, "super_name", 0);
        assert_no_nested_key(&value, "hero_powers", 0);
    }

    #[test]
    fn power_summary_omits_links() {
        let power = Power {
            id: 4,
            name: "elasticity".to_string(),
            description: "can stretch the human body to extreme lengths".to_string(),
        };
        let value = serde_json::to_value(serialize_power(&power)).unwrap_or(Value::Null);
        assert_eq!(
            value,
            json!({
                "id": 4,
                "name": "elasticity",
                "description": "can stretch the human body to extreme lengths"
            })
        );
    }

    #[test]
    fn hero_power_detail_embeds_summaries_only() {
        let row = link(9, 1, 2, Strength::Average);
        let detail = serialize_hero_power(&row.hero_power, &hero(), &row.power);
        let value = serde_json::to_value(&detail).unwrap_or(Value::Null);
        assert_eq!(value["hero"]["super_name"], json!("Ms. Marvel"));
        assert_eq!(value["power"]["id"], json!(2));
        assert_eq!(value["strength"], json!("Average"));
        assert_no_nested_key(&value, "hero_powers", 0);
        assert!(value["hero"].get("hero_powers").is_none());
        assert!(value["power"].get("hero_powers").is_none());
    }
}
