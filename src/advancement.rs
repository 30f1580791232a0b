//! Experience point costs and spending for post-creation advancement.
//!
//! Costs are quoted as pure functions of the current rating; spending is a
//! two-phase protocol (quote, then apply) so confirmation stays a caller
//! concern. Apply never mutates its input: it returns a new record with the
//! deduction and the raise made together, or a typed rejection.

use crate::character::{Ability, Attribute, Background, Character, Sphere};
use crate::game_data::{ADVANTAGE_CEILING, TRAIT_CEILING, XP_COSTS};
use thiserror::Error;

/// A quoted price for raising a trait by one dot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XpCost {
    pub cost: u32,
    pub description: String,
}

/// Errors from experience operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdvancementError {
    #[error("{stat} is already at its maximum of {maximum}")]
    AtMaximum { stat: &'static str, maximum: u8 },

    #[error("not enough experience: need {needed}, have {available}")]
    CannotAfford { needed: u32, available: u32 },

    #[error("experience award must be positive")]
    NonPositiveAward,
}

// ============================================================================
// Cost Formulas
// ============================================================================

/// Attribute: new rating x 4.
pub fn attribute_cost(current: u8) -> XpCost {
    let new = current + 1;
    XpCost {
        cost: u32::from(new) * XP_COSTS.attribute,
        description: format!(
            "Increase attribute from {current} to {new} ({new} x {})",
            XP_COSTS.attribute
        ),
    }
}

/// Ability: flat cost to learn something new, otherwise new rating x 2.
pub fn ability_cost(current: u8) -> XpCost {
    if current == 0 {
        return XpCost {
            cost: XP_COSTS.new_ability,
            description: format!("Learn new ability (flat {} XP)", XP_COSTS.new_ability),
        };
    }
    let new = current + 1;
    XpCost {
        cost: u32::from(new) * XP_COSTS.ability,
        description: format!(
            "Increase ability from {current} to {new} ({new} x {})",
            XP_COSTS.ability
        ),
    }
}

/// Sphere: new rating x 7.
pub fn sphere_cost(current: u8) -> XpCost {
    let new = current + 1;
    XpCost {
        cost: u32::from(new) * XP_COSTS.sphere,
        description: format!(
            "Increase sphere from {current} to {new} ({new} x {})",
            XP_COSTS.sphere
        ),
    }
}

/// Arete: new rating x 8.
pub fn arete_cost(current: u8) -> XpCost {
    let new = current + 1;
    XpCost {
        cost: u32::from(new) * XP_COSTS.arete,
        description: format!(
            "Increase Arete from {current} to {new} ({new} x {})",
            XP_COSTS.arete
        ),
    }
}

/// Permanent Willpower: flat cost per dot.
pub fn willpower_cost() -> XpCost {
    XpCost {
        cost: XP_COSTS.willpower,
        description: format!(
            "Increase permanent Willpower (flat {} XP)",
            XP_COSTS.willpower
        ),
    }
}

/// Background: flat cost to acquire, flat (cheaper) cost to raise,
/// independent of the current rating.
pub fn background_cost(current: u8) -> XpCost {
    if current == 0 {
        return XpCost {
            cost: XP_COSTS.new_background,
            description: format!("Acquire new background (flat {} XP)", XP_COSTS.new_background),
        };
    }
    XpCost {
        cost: XP_COSTS.background_increase,
        description: format!(
            "Increase background from {current} to {} (flat {} XP)",
            current + 1,
            XP_COSTS.background_increase
        ),
    }
}

// ============================================================================
// Spending
// ============================================================================

/// A trait experience can be spent on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceTarget {
    Attribute(Attribute),
    Ability(Ability),
    Sphere(Sphere),
    Background(Background),
    Arete,
    Willpower,
}

impl AdvanceTarget {
    pub fn label(&self) -> &'static str {
        match self {
            AdvanceTarget::Attribute(attribute) => attribute.name(),
            AdvanceTarget::Ability(ability) => ability.name(),
            AdvanceTarget::Sphere(sphere) => sphere.name(),
            AdvanceTarget::Background(background) => background.name(),
            AdvanceTarget::Arete => "Arete",
            AdvanceTarget::Willpower => "Willpower",
        }
    }

    /// Rating this trait can be advanced to and no further.
    pub fn ceiling(&self) -> u8 {
        match self {
            AdvanceTarget::Attribute(_)
            | AdvanceTarget::Ability(_)
            | AdvanceTarget::Sphere(_)
            | AdvanceTarget::Background(_) => TRAIT_CEILING,
            AdvanceTarget::Arete | AdvanceTarget::Willpower => ADVANTAGE_CEILING,
        }
    }

    pub fn current(&self, character: &Character) -> u8 {
        match self {
            AdvanceTarget::Attribute(attribute) => character.attributes.get(*attribute),
            AdvanceTarget::Ability(ability) => character.abilities.get(*ability),
            AdvanceTarget::Sphere(sphere) => character.spheres.get(*sphere),
            AdvanceTarget::Background(background) => character.backgrounds.get(*background),
            AdvanceTarget::Arete => character.arete,
            AdvanceTarget::Willpower => character.willpower,
        }
    }
}

/// Phase one: quote the price of the target's next dot.
pub fn quote(character: &Character, target: AdvanceTarget) -> XpCost {
    let current = target.current(character);
    match target {
        AdvanceTarget::Attribute(_) => attribute_cost(current),
        AdvanceTarget::Ability(_) => ability_cost(current),
        AdvanceTarget::Sphere(_) => sphere_cost(current),
        AdvanceTarget::Background(_) => background_cost(current),
        AdvanceTarget::Arete => arete_cost(current),
        AdvanceTarget::Willpower => willpower_cost(),
    }
}

/// Whether the balance covers a cost.
pub fn can_afford(character: &Character, cost: u32) -> bool {
    character.experience >= cost
}

/// Phase two: deduct the quoted cost and raise the target by one dot,
/// returning the new record. Rejects at the trait's ceiling or on a
/// shortfall; a rejection leaves the caller's record exactly as it was.
/// Willpower purchases also refill current Willpower to the new maximum.
pub fn apply(character: &Character, target: AdvanceTarget) -> Result<Character, AdvancementError> {
    let current = target.current(character);
    if current >= target.ceiling() {
        return Err(AdvancementError::AtMaximum {
            stat: target.label(),
            maximum: target.ceiling(),
        });
    }

    let quoted = quote(character, target);
    if !can_afford(character, quoted.cost) {
        return Err(AdvancementError::CannotAfford {
            needed: quoted.cost,
            available: character.experience,
        });
    }

    let mut updated = character.clone();
    updated.experience -= quoted.cost;
    match target {
        AdvanceTarget::Attribute(attribute) => updated.attributes.set(attribute, current + 1),
        AdvanceTarget::Ability(ability) => updated.abilities.set(ability, current + 1),
        AdvanceTarget::Sphere(sphere) => updated.spheres.set(sphere, current + 1),
        AdvanceTarget::Background(background) => updated.backgrounds.set(background, current + 1),
        AdvanceTarget::Arete => updated.arete = current + 1,
        AdvanceTarget::Willpower => {
            updated.willpower = current + 1;
            updated.willpower_current = current + 1;
        }
    }

    tracing::debug!(
        id = %updated.id,
        target = target.label(),
        cost = quoted.cost,
        "experience spent"
    );
    Ok(updated)
}

/// Credit earned experience to both the spendable balance and the lifetime
/// total. Awards must be positive.
pub fn add_xp(character: &Character, amount: u32) -> Result<Character, AdvancementError> {
    if amount == 0 {
        return Err(AdvancementError::NonPositiveAward);
    }
    let mut updated = character.clone();
    updated.experience += amount;
    updated.experience_total += amount;
    Ok(updated)
}
