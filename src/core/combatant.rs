use serde::{Deserialize, Serialize};

/// Damage dealt by one poison tick
pub const POISON_DAMAGE: i32 = 10;

/// Team attack bonus applied to each participant's attack power
pub const TEAM_ATTACK_MULTIPLIER: f64 = 1.1;

/// A team attack chain ends once a participant would deal less than this
pub const TEAM_ATTACK_MIN_DAMAGE: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    Poison,
    Dead,
}

/// A party member on the battlefield
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combatant {
    pub name: String,
    pub hit_point: i32,
    pub conditions: Vec<Condition>,
    pub attack_power: i32,
    pub team_attack_succeeded: bool,
}

impl Combatant {
    pub fn new(name: impl Into<String>, hit_point: i32, attack_power: i32) -> Self {
        Self {
            name: name.into(),
            hit_point,
            attack_power,
            ..Self::default()
        }
    }

    pub fn contains_condition(&self, condition: Condition) -> bool {
        self.conditions.contains(&condition)
    }

    pub fn add_condition(&mut self, condition: Condition) {
        self.conditions.push(condition);
    }

    /// Removes the first occurrence of `condition`, if any
    pub fn remove_condition(&mut self, condition: Condition) {
        if let Some(index) = self.conditions.iter().position(|c| *c == condition) {
            self.conditions.remove(index);
        }
    }

    pub fn has_team_attack_succeeded(&self) -> bool {
        self.team_attack_succeeded
    }
}

/// Applies one poison tick to every poisoned, still-standing combatant
pub fn apply_poison(combatants: &mut [Combatant]) {
    for combatant in combatants.iter_mut() {
        if combatant.hit_point == 0 {
            continue;
        }
        if !combatant.contains_condition(Condition::Poison) {
            continue;
        }

        combatant.hit_point = combatant.hit_point.saturating_sub(POISON_DAMAGE);

        if combatant.hit_point > 0 {
            continue;
        }
        combatant.hit_point = 0;
        combatant.add_condition(Condition::Dead);
        combatant.remove_condition(Condition::Poison);
        tracing::trace!(name = %combatant.name, "combatant succumbed to poison");
    }
}

/// Sums team attack damage until the chain breaks, saturating at `i32::MAX`
pub fn total_team_damage(combatants: &[Combatant]) -> i32 {
    let mut total: i32 = 0;
    for combatant in combatants {
        if !combatant.has_team_attack_succeeded() {
            break;
        }
        let damage = f64::from(combatant.attack_power) * TEAM_ATTACK_MULTIPLIER;
        if damage < TEAM_ATTACK_MIN_DAMAGE {
            break;
        }
        total = total.saturating_add(damage as i32);
    }
    total
}
