//! Static rule tables for character creation and advancement.
//!
//! Point budgets, freebie costs, and experience multipliers for
//! Mage: The Ascension 20th Anniversary Edition character rules.

// ============================================================================
// Creation Budgets
// ============================================================================

/// Attribute points granted per priority tier (primary/secondary/tertiary).
pub const PRIMARY_ATTRIBUTE_POINTS: u8 = 7;
pub const SECONDARY_ATTRIBUTE_POINTS: u8 = 5;
pub const TERTIARY_ATTRIBUTE_POINTS: u8 = 3;

/// Ability points granted per priority tier.
pub const PRIMARY_ABILITY_POINTS: u8 = 13;
pub const SECONDARY_ABILITY_POINTS: u8 = 9;
pub const TERTIARY_ABILITY_POINTS: u8 = 5;

/// Sphere points distributed at creation; the affinity sphere's first dot
/// counts against this pool.
pub const SPHERE_POINTS: u8 = 6;

/// Background points distributed at creation.
pub const BACKGROUND_POINTS: u8 = 7;

/// Individual spheres cannot be raised past this during initial allocation.
pub const CREATION_SPHERE_CAP: u8 = 3;

/// Fixed starting advantages, surfaced read-only during creation.
pub const STARTING_WILLPOWER: u8 = 5;
pub const STARTING_ARETE: u8 = 1;

/// Bonus pool spent after priority allocation.
pub const FREEBIE_POINTS: u8 = 15;

// ============================================================================
// Ceilings
// ============================================================================

/// Rating cap for attributes, abilities, spheres, and backgrounds.
pub const TRAIT_CEILING: u8 = 5;

/// Rating cap for Arete and Willpower.
pub const ADVANTAGE_CEILING: u8 = 10;

// ============================================================================
// Freebie Costs
// ============================================================================

/// Per-dot freebie point costs by trait kind.
#[derive(Debug, Clone, Copy)]
pub struct FreebieCosts {
    pub attribute: u8,
    pub ability: u8,
    pub sphere: u8,
    pub background: u8,
    pub arete: u8,
    pub willpower: u8,
}

pub const FREEBIE_COSTS: FreebieCosts = FreebieCosts {
    attribute: 5,
    ability: 2,
    sphere: 7,
    background: 1,
    arete: 4,
    willpower: 1,
};

// ============================================================================
// Experience Costs
// ============================================================================

/// Experience cost table: multipliers apply to the new rating, flats are
/// independent of the current rating.
#[derive(Debug, Clone, Copy)]
pub struct XpCosts {
    /// New rating x this.
    pub attribute: u32,
    /// New rating x this (rating 1 and up).
    pub ability: u32,
    /// Flat cost to open an ability at 0.
    pub new_ability: u32,
    /// New rating x this.
    pub sphere: u32,
    /// New rating x this.
    pub arete: u32,
    /// Flat per dot of permanent Willpower.
    pub willpower: u32,
    /// Flat per dot once a background is already owned.
    pub background_increase: u32,
    /// Flat cost to open a background at 0.
    pub new_background: u32,
}

pub const XP_COSTS: XpCosts = XpCosts {
    attribute: 4,
    ability: 2,
    new_ability: 3,
    sphere: 7,
    arete: 8,
    willpower: 1,
    background_increase: 3,
    new_background: 5,
};
