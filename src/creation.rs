//! Point-buy rules for initial character creation.
//!
//! Provides a headless, step-by-step wizard enforcing priority budgets for
//! attributes and abilities, capped sphere and background allocation, and
//! freebie-point spending. Every mutation either succeeds or rejects with a
//! reason, leaving the draft untouched.

use crate::character::{
    Ability, AbilityCategory, Attribute, AttributeCategory, Background, Character, Essence, Nature,
    Sphere, Spheres, Tradition,
};
use crate::game_data::{
    ADVANTAGE_CEILING, BACKGROUND_POINTS, CREATION_SPHERE_CAP, FREEBIE_COSTS, FREEBIE_POINTS,
    PRIMARY_ABILITY_POINTS, PRIMARY_ATTRIBUTE_POINTS, SECONDARY_ABILITY_POINTS,
    SECONDARY_ATTRIBUTE_POINTS, SPHERE_POINTS, TERTIARY_ABILITY_POINTS,
    TERTIARY_ATTRIBUTE_POINTS, TRAIT_CEILING,
};
use std::fmt;

// ============================================================================
// Priorities
// ============================================================================

/// Ranked budget tier for a stat category. Each tier is held by at most one
/// category per axis (attributes and abilities prioritize independently).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Priority {
    Primary,
    Secondary,
    Tertiary,
}

impl Priority {
    pub fn name(&self) -> &'static str {
        match self {
            Priority::Primary => "Primary",
            Priority::Secondary => "Secondary",
            Priority::Tertiary => "Tertiary",
        }
    }

    pub fn all() -> [Priority; 3] {
        [Priority::Primary, Priority::Secondary, Priority::Tertiary]
    }

    /// Attribute points granted by this tier.
    pub fn attribute_points(&self) -> u8 {
        match self {
            Priority::Primary => PRIMARY_ATTRIBUTE_POINTS,
            Priority::Secondary => SECONDARY_ATTRIBUTE_POINTS,
            Priority::Tertiary => TERTIARY_ATTRIBUTE_POINTS,
        }
    }

    /// Ability points granted by this tier.
    pub fn ability_points(&self) -> u8 {
        match self {
            Priority::Primary => PRIMARY_ABILITY_POINTS,
            Priority::Secondary => SECONDARY_ABILITY_POINTS,
            Priority::Tertiary => TERTIARY_ABILITY_POINTS,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Priority assignment for the three attribute categories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttributePriorities {
    pub physical: Option<Priority>,
    pub social: Option<Priority>,
    pub mental: Option<Priority>,
}

impl AttributePriorities {
    pub fn get(&self, category: AttributeCategory) -> Option<Priority> {
        match category {
            AttributeCategory::Physical => self.physical,
            AttributeCategory::Social => self.social,
            AttributeCategory::Mental => self.mental,
        }
    }

    fn set(&mut self, category: AttributeCategory, priority: Option<Priority>) {
        match category {
            AttributeCategory::Physical => self.physical = priority,
            AttributeCategory::Social => self.social = priority,
            AttributeCategory::Mental => self.mental = priority,
        }
    }

    /// Assign a tier to a category. Any other category currently holding
    /// that tier loses it; reassigning moves the tier rather than
    /// duplicating it.
    pub fn assign(&mut self, category: AttributeCategory, priority: Priority) {
        for other in AttributeCategory::all() {
            if self.get(other) == Some(priority) {
                self.set(other, None);
            }
        }
        self.set(category, Some(priority));
    }

    pub fn is_complete(&self) -> bool {
        self.physical.is_some() && self.social.is_some() && self.mental.is_some()
    }
}

/// Priority assignment for the three ability categories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AbilityPriorities {
    pub talents: Option<Priority>,
    pub skills: Option<Priority>,
    pub knowledges: Option<Priority>,
}

impl AbilityPriorities {
    pub fn get(&self, category: AbilityCategory) -> Option<Priority> {
        match category {
            AbilityCategory::Talents => self.talents,
            AbilityCategory::Skills => self.skills,
            AbilityCategory::Knowledges => self.knowledges,
        }
    }

    fn set(&mut self, category: AbilityCategory, priority: Option<Priority>) {
        match category {
            AbilityCategory::Talents => self.talents = priority,
            AbilityCategory::Skills => self.skills = priority,
            AbilityCategory::Knowledges => self.knowledges = priority,
        }
    }

    /// Assign a tier to a category, displacing any other holder of the tier.
    pub fn assign(&mut self, category: AbilityCategory, priority: Priority) {
        for other in AbilityCategory::all() {
            if self.get(other) == Some(priority) {
                self.set(other, None);
            }
        }
        self.set(category, Some(priority));
    }

    pub fn is_complete(&self) -> bool {
        self.talents.is_some() && self.skills.is_some() && self.knowledges.is_some()
    }
}

// ============================================================================
// Steps
// ============================================================================

/// Steps of the creation wizard, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreationStep {
    Concept,
    Attributes,
    Abilities,
    Advantages,
    Freebies,
    Review,
}

impl CreationStep {
    pub fn title(&self) -> &'static str {
        match self {
            CreationStep::Concept => "Concept",
            CreationStep::Attributes => "Attributes",
            CreationStep::Abilities => "Abilities",
            CreationStep::Advantages => "Advantages",
            CreationStep::Freebies => "Freebie Points",
            CreationStep::Review => "Review",
        }
    }

    pub fn next(&self) -> Option<CreationStep> {
        match self {
            CreationStep::Concept => Some(CreationStep::Attributes),
            CreationStep::Attributes => Some(CreationStep::Abilities),
            CreationStep::Abilities => Some(CreationStep::Advantages),
            CreationStep::Advantages => Some(CreationStep::Freebies),
            CreationStep::Freebies => Some(CreationStep::Review),
            CreationStep::Review => None,
        }
    }

    pub fn prev(&self) -> Option<CreationStep> {
        match self {
            CreationStep::Concept => None,
            CreationStep::Attributes => Some(CreationStep::Concept),
            CreationStep::Abilities => Some(CreationStep::Attributes),
            CreationStep::Advantages => Some(CreationStep::Abilities),
            CreationStep::Freebies => Some(CreationStep::Advantages),
            CreationStep::Review => Some(CreationStep::Freebies),
        }
    }
}

impl fmt::Display for CreationStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

// ============================================================================
// Errors
// ============================================================================

/// Rejection from a creation-phase operation. The draft is unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreationError {
    StepIncomplete(CreationStep),
    AtFirstStep,
    AtFinalStep,
    NotAtReview,
    OutOfRange {
        stat: &'static str,
        value: u8,
        min: u8,
        max: u8,
    },
    BudgetExceeded {
        category: &'static str,
        requested: u8,
        budget: u8,
    },
    SpheresLocked,
    SphereCapExceeded {
        sphere: Sphere,
    },
    SphereTotalExceeded {
        requested: u8,
        budget: u8,
    },
    AffinityMinimum {
        sphere: Sphere,
    },
    BackgroundTotalExceeded {
        requested: u8,
        budget: u8,
    },
    InsufficientFreebies {
        cost: u8,
        remaining: u8,
    },
    AtMaximum {
        stat: &'static str,
        maximum: u8,
    },
}

impl fmt::Display for CreationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreationError::StepIncomplete(step) => {
                write!(f, "The {} step is not yet complete", step.title())
            }
            CreationError::AtFirstStep => write!(f, "Already at the first step"),
            CreationError::AtFinalStep => write!(f, "Already at the final step"),
            CreationError::NotAtReview => {
                write!(f, "A character can only be finalized from the review step")
            }
            CreationError::OutOfRange {
                stat,
                value,
                min,
                max,
            } => write!(f, "{stat} must be between {min} and {max}, got {value}"),
            CreationError::BudgetExceeded {
                category,
                requested,
                budget,
            } => write!(
                f,
                "{requested} points exceeds the {category} budget of {budget}"
            ),
            CreationError::SpheresLocked => {
                write!(f, "Choose an affinity sphere before allocating sphere points")
            }
            CreationError::SphereCapExceeded { sphere } => write!(
                f,
                "{sphere} cannot be raised above {CREATION_SPHERE_CAP} during creation"
            ),
            CreationError::SphereTotalExceeded { requested, budget } => write!(
                f,
                "{requested} sphere points exceeds the creation budget of {budget}"
            ),
            CreationError::AffinityMinimum { sphere } => write!(
                f,
                "{sphere} is the affinity sphere and cannot drop below 1"
            ),
            CreationError::BackgroundTotalExceeded { requested, budget } => write!(
                f,
                "{requested} background points exceeds the creation budget of {budget}"
            ),
            CreationError::InsufficientFreebies { cost, remaining } => write!(
                f,
                "Not enough freebie points: need {cost}, have {remaining}"
            ),
            CreationError::AtMaximum { stat, maximum } => {
                write!(f, "{stat} is already at its maximum of {maximum}")
            }
        }
    }
}

impl std::error::Error for CreationError {}

// ============================================================================
// Freebie Targets
// ============================================================================

/// A trait a freebie point can be spent on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FreebieTarget {
    Attribute(Attribute),
    Ability(Ability),
    Sphere(Sphere),
    Background(Background),
    Arete,
    Willpower,
}

impl FreebieTarget {
    /// Freebie cost of one dot.
    pub fn cost(&self) -> u8 {
        match self {
            FreebieTarget::Attribute(_) => FREEBIE_COSTS.attribute,
            FreebieTarget::Ability(_) => FREEBIE_COSTS.ability,
            FreebieTarget::Sphere(_) => FREEBIE_COSTS.sphere,
            FreebieTarget::Background(_) => FREEBIE_COSTS.background,
            FreebieTarget::Arete => FREEBIE_COSTS.arete,
            FreebieTarget::Willpower => FREEBIE_COSTS.willpower,
        }
    }

    /// Highest rating freebie points may buy. Willpower runs to 10 during
    /// creation; Arete stops at 5 and only experience raises it further.
    pub fn ceiling(&self) -> u8 {
        match self {
            FreebieTarget::Attribute(_)
            | FreebieTarget::Ability(_)
            | FreebieTarget::Sphere(_)
            | FreebieTarget::Background(_)
            | FreebieTarget::Arete => TRAIT_CEILING,
            FreebieTarget::Willpower => ADVANTAGE_CEILING,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FreebieTarget::Attribute(attribute) => attribute.name(),
            FreebieTarget::Ability(ability) => ability.name(),
            FreebieTarget::Sphere(sphere) => sphere.name(),
            FreebieTarget::Background(background) => background.name(),
            FreebieTarget::Arete => "Arete",
            FreebieTarget::Willpower => "Willpower",
        }
    }

    fn current(&self, character: &Character) -> u8 {
        match self {
            FreebieTarget::Attribute(attribute) => character.attributes.get(*attribute),
            FreebieTarget::Ability(ability) => character.abilities.get(*ability),
            FreebieTarget::Sphere(sphere) => character.spheres.get(*sphere),
            FreebieTarget::Background(background) => character.backgrounds.get(*background),
            FreebieTarget::Arete => character.arete,
            FreebieTarget::Willpower => character.willpower,
        }
    }
}

// ============================================================================
// Wizard
// ============================================================================

/// Headless build wizard for new characters.
///
/// Owns a draft [`Character`] plus the transient budget context (priority
/// assignments and the freebie pool). Dropping the wizard cancels the build;
/// nothing is persisted until the finished record is handed back by
/// [`CreationWizard::finish`].
#[derive(Debug, Clone)]
pub struct CreationWizard {
    step: CreationStep,
    character: Character,
    attribute_priorities: AttributePriorities,
    ability_priorities: AbilityPriorities,
    freebie_points: u8,
}

impl CreationWizard {
    pub fn new() -> Self {
        Self {
            step: CreationStep::Concept,
            character: Character::new(),
            attribute_priorities: AttributePriorities::default(),
            ability_priorities: AbilityPriorities::default(),
            freebie_points: FREEBIE_POINTS,
        }
    }

    // ------------------------------------------------------------------
    // State accessors
    // ------------------------------------------------------------------

    pub fn step(&self) -> CreationStep {
        self.step
    }

    pub fn character(&self) -> &Character {
        &self.character
    }

    pub fn freebie_points(&self) -> u8 {
        self.freebie_points
    }

    pub fn attribute_priority(&self, category: AttributeCategory) -> Option<Priority> {
        self.attribute_priorities.get(category)
    }

    pub fn ability_priority(&self, category: AbilityCategory) -> Option<Priority> {
        self.ability_priorities.get(category)
    }

    /// Starting Quintessence cap equals the Avatar background rating. Shown
    /// for confirmation during the advantages step; not spent from any pool.
    pub fn starting_quintessence_max(&self) -> u8 {
        self.character.backgrounds.get(Background::Avatar)
    }

    // ------------------------------------------------------------------
    // Concept step
    // ------------------------------------------------------------------

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.character.name = name.into();
    }

    pub fn set_player(&mut self, player: impl Into<String>) {
        self.character.player = player.into();
    }

    pub fn set_chronicle(&mut self, chronicle: impl Into<String>) {
        self.character.chronicle = chronicle.into();
    }

    pub fn set_concept(&mut self, concept: impl Into<String>) {
        self.character.concept = concept.into();
    }

    pub fn set_cabal(&mut self, cabal: impl Into<String>) {
        self.character.cabal = cabal.into();
    }

    pub fn set_tradition(&mut self, tradition: Tradition) {
        self.character.tradition = Some(tradition);
    }

    pub fn set_essence(&mut self, essence: Essence) {
        self.character.essence = essence;
    }

    pub fn set_nature(&mut self, nature: Nature) {
        self.character.nature = Some(nature);
    }

    pub fn set_demeanor(&mut self, demeanor: Nature) {
        self.character.demeanor = Some(demeanor);
    }

    // ------------------------------------------------------------------
    // Attribute step
    // ------------------------------------------------------------------

    pub fn assign_attribute_priority(&mut self, category: AttributeCategory, priority: Priority) {
        self.attribute_priorities.assign(category, priority);
    }

    /// Points already allocated within a category (dots above the base of 1).
    pub fn attribute_points_spent(&self, category: AttributeCategory) -> u8 {
        category
            .members()
            .iter()
            .map(|a| self.character.attributes.get(*a) - 1)
            .sum()
    }

    /// Points the category's priority grants; zero until one is assigned.
    pub fn attribute_points_available(&self, category: AttributeCategory) -> u8 {
        self.attribute_priorities
            .get(category)
            .map(|p| p.attribute_points())
            .unwrap_or(0)
    }

    /// Set an attribute rating, validating the 1-5 domain and the owning
    /// category's budget. A rejected edit leaves the rating as it was.
    pub fn set_attribute(&mut self, attribute: Attribute, value: u8) -> Result<(), CreationError> {
        if !(1..=TRAIT_CEILING).contains(&value) {
            return Err(CreationError::OutOfRange {
                stat: attribute.name(),
                value,
                min: 1,
                max: TRAIT_CEILING,
            });
        }

        let category = attribute.category();
        let budget = self.attribute_points_available(category);
        let current = self.character.attributes.get(attribute);
        let spent_elsewhere = self.attribute_points_spent(category) - (current - 1);
        let requested = spent_elsewhere + (value - 1);
        if requested > budget {
            return Err(CreationError::BudgetExceeded {
                category: category.name(),
                requested,
                budget,
            });
        }

        self.character.attributes.set(attribute, value);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Ability step
    // ------------------------------------------------------------------

    pub fn assign_ability_priority(&mut self, category: AbilityCategory, priority: Priority) {
        self.ability_priorities.assign(category, priority);
    }

    pub fn ability_points_spent(&self, category: AbilityCategory) -> u8 {
        category
            .members()
            .iter()
            .map(|a| self.character.abilities.get(*a))
            .sum()
    }

    pub fn ability_points_available(&self, category: AbilityCategory) -> u8 {
        self.ability_priorities
            .get(category)
            .map(|p| p.ability_points())
            .unwrap_or(0)
    }

    /// Set an ability rating, validating the 0-5 domain and the owning
    /// category's budget.
    pub fn set_ability(&mut self, ability: Ability, value: u8) -> Result<(), CreationError> {
        if value > TRAIT_CEILING {
            return Err(CreationError::OutOfRange {
                stat: ability.name(),
                value,
                min: 0,
                max: TRAIT_CEILING,
            });
        }

        let category = ability.category();
        let budget = self.ability_points_available(category);
        let current = self.character.abilities.get(ability);
        let spent_elsewhere = self.ability_points_spent(category) - current;
        let requested = spent_elsewhere + value;
        if requested > budget {
            return Err(CreationError::BudgetExceeded {
                category: category.name(),
                requested,
                budget,
            });
        }

        self.character.abilities.set(ability, value);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Advantages step
    // ------------------------------------------------------------------

    /// Choose the affinity sphere. All sphere dots reset and the chosen
    /// sphere starts at 1; spheres stay locked until this happens.
    pub fn select_affinity(&mut self, sphere: Sphere) {
        self.character.spheres = Spheres::default();
        self.character.spheres.set(sphere, 1);
        self.character.affinity = Some(sphere);
    }

    pub fn sphere_points_total(&self) -> u8 {
        self.character.spheres.total()
    }

    /// Set a sphere rating during the allocation phase: per-sphere cap of 3,
    /// affinity minimum of 1, grand total within the sphere budget.
    pub fn set_sphere(&mut self, sphere: Sphere, value: u8) -> Result<(), CreationError> {
        let Some(affinity) = self.character.affinity else {
            return Err(CreationError::SpheresLocked);
        };
        if value > CREATION_SPHERE_CAP {
            return Err(CreationError::SphereCapExceeded { sphere });
        }
        if sphere == affinity && value < 1 {
            return Err(CreationError::AffinityMinimum { sphere });
        }

        let current = self.character.spheres.get(sphere);
        let requested = self.character.spheres.total() - current + value;
        if requested > SPHERE_POINTS {
            return Err(CreationError::SphereTotalExceeded {
                requested,
                budget: SPHERE_POINTS,
            });
        }

        self.character.spheres.set(sphere, value);
        Ok(())
    }

    pub fn background_points_total(&self) -> u8 {
        self.character.backgrounds.total()
    }

    /// Set a background rating: 0-5 each, grand total within the budget.
    pub fn set_background(&mut self, background: Background, value: u8) -> Result<(), CreationError> {
        if value > TRAIT_CEILING {
            return Err(CreationError::OutOfRange {
                stat: background.name(),
                value,
                min: 0,
                max: TRAIT_CEILING,
            });
        }

        let current = self.character.backgrounds.get(background);
        let requested = self.character.backgrounds.total() - current + value;
        if requested > BACKGROUND_POINTS {
            return Err(CreationError::BackgroundTotalExceeded {
                requested,
                budget: BACKGROUND_POINTS,
            });
        }

        self.character.backgrounds.set(background, value);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Freebie step
    // ------------------------------------------------------------------

    /// Spend freebie points on one dot of the target. Freebie purchases sit
    /// on top of the earlier budgets: category allowances and the creation
    /// sphere caps do not apply here, only the per-target ceiling and the
    /// pool balance. A successful spend debits the pool and raises the
    /// target by exactly one; Willpower dots arrive filled.
    pub fn spend_freebie(&mut self, target: FreebieTarget) -> Result<(), CreationError> {
        let cost = target.cost();
        if self.freebie_points < cost {
            return Err(CreationError::InsufficientFreebies {
                cost,
                remaining: self.freebie_points,
            });
        }

        let current = target.current(&self.character);
        if current >= target.ceiling() {
            return Err(CreationError::AtMaximum {
                stat: target.label(),
                maximum: target.ceiling(),
            });
        }

        self.freebie_points -= cost;
        match target {
            FreebieTarget::Attribute(attribute) => {
                self.character.attributes.set(attribute, current + 1)
            }
            FreebieTarget::Ability(ability) => self.character.abilities.set(ability, current + 1),
            FreebieTarget::Sphere(sphere) => self.character.spheres.set(sphere, current + 1),
            FreebieTarget::Background(background) => {
                self.character.backgrounds.set(background, current + 1)
            }
            FreebieTarget::Arete => self.character.arete = current + 1,
            FreebieTarget::Willpower => {
                self.character.willpower = current + 1;
                self.character.willpower_current = current + 1;
            }
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    /// Whether the current step's entry requirements for the next step hold.
    pub fn can_proceed(&self) -> bool {
        match self.step {
            CreationStep::Concept => {
                !self.character.name.is_empty() && self.character.tradition.is_some()
            }
            CreationStep::Attributes => self.attribute_priorities.is_complete(),
            CreationStep::Abilities => self.ability_priorities.is_complete(),
            CreationStep::Advantages | CreationStep::Freebies | CreationStep::Review => true,
        }
    }

    /// Move forward one step, guarded by [`CreationWizard::can_proceed`].
    pub fn advance(&mut self) -> Result<CreationStep, CreationError> {
        if !self.can_proceed() {
            return Err(CreationError::StepIncomplete(self.step));
        }
        match self.step.next() {
            Some(next) => {
                self.step = next;
                Ok(next)
            }
            None => Err(CreationError::AtFinalStep),
        }
    }

    /// Move back one step. The concept step has nothing before it.
    pub fn go_back(&mut self) -> Result<CreationStep, CreationError> {
        match self.step.prev() {
            Some(prev) => {
                self.step = prev;
                Ok(prev)
            }
            None => Err(CreationError::AtFirstStep),
        }
    }

    /// Finalize from the review step, handing the record to the caller.
    /// Unspent freebie points are simply forfeit.
    pub fn finish(self) -> Result<Character, CreationError> {
        if self.step != CreationStep::Review {
            return Err(CreationError::NotAtReview);
        }
        tracing::debug!(id = %self.character.id, name = %self.character.name, "character build finished");
        Ok(self.character)
    }
}

impl Default for CreationWizard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Wizard with concept filled in and priorities assigned, parked on the
    /// attributes step.
    fn wizard_with_priorities() -> CreationWizard {
        let mut wizard = CreationWizard::new();
        wizard.set_name("Esha");
        wizard.set_tradition(Tradition::Euthanatos);
        wizard.advance().expect("concept complete");

        wizard.assign_attribute_priority(AttributeCategory::Physical, Priority::Secondary);
        wizard.assign_attribute_priority(AttributeCategory::Social, Priority::Tertiary);
        wizard.assign_attribute_priority(AttributeCategory::Mental, Priority::Primary);
        wizard.assign_ability_priority(AbilityCategory::Talents, Priority::Primary);
        wizard.assign_ability_priority(AbilityCategory::Skills, Priority::Secondary);
        wizard.assign_ability_priority(AbilityCategory::Knowledges, Priority::Tertiary);
        wizard
    }

    #[test]
    fn test_concept_guard_blocks_advance() {
        let mut wizard = CreationWizard::new();
        assert!(!wizard.can_proceed());
        assert_eq!(
            wizard.advance(),
            Err(CreationError::StepIncomplete(CreationStep::Concept))
        );

        wizard.set_name("Dana");
        assert!(!wizard.can_proceed());

        wizard.set_tradition(Tradition::Verbena);
        assert!(wizard.can_proceed());
        assert_eq!(wizard.advance(), Ok(CreationStep::Attributes));
    }

    #[test]
    fn test_cannot_go_back_from_concept() {
        let mut wizard = CreationWizard::new();
        assert_eq!(wizard.go_back(), Err(CreationError::AtFirstStep));
    }

    #[test]
    fn test_priority_uniqueness_within_axis() {
        let mut priorities = AttributePriorities::default();
        priorities.assign(AttributeCategory::Physical, Priority::Primary);
        priorities.assign(AttributeCategory::Social, Priority::Primary);

        // Primary moved to social; physical lost it.
        assert_eq!(priorities.physical, None);
        assert_eq!(priorities.social, Some(Priority::Primary));

        priorities.assign(AttributeCategory::Physical, Priority::Secondary);
        priorities.assign(AttributeCategory::Mental, Priority::Tertiary);
        for priority in Priority::all() {
            let holders = AttributeCategory::all()
                .iter()
                .filter(|c| priorities.get(**c) == Some(priority))
                .count();
            assert!(holders <= 1, "{priority} held by {holders} categories");
        }
    }

    #[test]
    fn test_attribute_axis_independent_of_ability_axis() {
        let mut wizard = CreationWizard::new();
        wizard.assign_attribute_priority(AttributeCategory::Physical, Priority::Primary);
        wizard.assign_ability_priority(AbilityCategory::Talents, Priority::Primary);

        // Both axes may hold Primary at once.
        assert_eq!(
            wizard.attribute_priority(AttributeCategory::Physical),
            Some(Priority::Primary)
        );
        assert_eq!(
            wizard.ability_priority(AbilityCategory::Talents),
            Some(Priority::Primary)
        );
    }

    #[test]
    fn test_attribute_budget_enforced() {
        let mut wizard = wizard_with_priorities();

        // Mental is primary: 7 points above base.
        wizard.set_attribute(Attribute::Perception, 4).unwrap();
        wizard.set_attribute(Attribute::Intelligence, 4).unwrap();
        assert_eq!(
            wizard.attribute_points_spent(AttributeCategory::Mental),
            6
        );

        // One point left; raising Wits to 3 needs two.
        let result = wizard.set_attribute(Attribute::Wits, 3);
        assert_eq!(
            result,
            Err(CreationError::BudgetExceeded {
                category: "Mental",
                requested: 8,
                budget: 7,
            })
        );
        assert_eq!(wizard.character().attributes.wits, 1);

        wizard.set_attribute(Attribute::Wits, 2).unwrap();
        assert_eq!(wizard.attribute_points_spent(AttributeCategory::Mental), 7);
    }

    #[test]
    fn test_attribute_domain_enforced() {
        let mut wizard = wizard_with_priorities();
        assert!(matches!(
            wizard.set_attribute(Attribute::Strength, 0),
            Err(CreationError::OutOfRange { min: 1, .. })
        ));
        assert!(matches!(
            wizard.set_attribute(Attribute::Strength, 6),
            Err(CreationError::OutOfRange { max: 5, .. })
        ));
    }

    #[test]
    fn test_attribute_spend_requires_priority() {
        let mut wizard = CreationWizard::new();
        // No priority assigned: the budget is zero and any raise rejects.
        let result = wizard.set_attribute(Attribute::Strength, 2);
        assert!(matches!(
            result,
            Err(CreationError::BudgetExceeded { budget: 0, .. })
        ));
        // The base rating is always accepted.
        assert!(wizard.set_attribute(Attribute::Strength, 1).is_ok());
    }

    #[test]
    fn test_ability_budget_counts_raw_dots() {
        let mut wizard = wizard_with_priorities();

        // Talents is primary: 13 raw dots.
        wizard.set_ability(Ability::Alertness, 5).unwrap();
        wizard.set_ability(Ability::Brawl, 5).unwrap();
        wizard.set_ability(Ability::Empathy, 3).unwrap();
        assert_eq!(wizard.ability_points_spent(AbilityCategory::Talents), 13);

        let result = wizard.set_ability(Ability::Athletics, 1);
        assert_eq!(
            result,
            Err(CreationError::BudgetExceeded {
                category: "Talents",
                requested: 14,
                budget: 13,
            })
        );
        assert_eq!(wizard.character().abilities.athletics, 0);
    }

    #[test]
    fn test_spheres_locked_until_affinity() {
        let mut wizard = wizard_with_priorities();
        assert_eq!(
            wizard.set_sphere(Sphere::Forces, 1),
            Err(CreationError::SpheresLocked)
        );

        wizard.select_affinity(Sphere::Forces);
        assert_eq!(wizard.character().spheres.forces, 1);
        assert!(wizard.set_sphere(Sphere::Life, 2).is_ok());
    }

    #[test]
    fn test_selecting_affinity_resets_spheres() {
        let mut wizard = wizard_with_priorities();
        wizard.select_affinity(Sphere::Forces);
        wizard.set_sphere(Sphere::Forces, 3).unwrap();
        wizard.set_sphere(Sphere::Mind, 2).unwrap();

        wizard.select_affinity(Sphere::Time);
        assert_eq!(wizard.character().spheres.forces, 0);
        assert_eq!(wizard.character().spheres.mind, 0);
        assert_eq!(wizard.character().spheres.time, 1);
        assert_eq!(wizard.sphere_points_total(), 1);
    }

    #[test]
    fn test_affinity_sphere_minimum_one() {
        let mut wizard = wizard_with_priorities();
        wizard.select_affinity(Sphere::Entropy);
        assert_eq!(
            wizard.set_sphere(Sphere::Entropy, 0),
            Err(CreationError::AffinityMinimum {
                sphere: Sphere::Entropy
            })
        );
        assert_eq!(wizard.character().spheres.entropy, 1);
    }

    #[test]
    fn test_sphere_cap_and_total() {
        let mut wizard = wizard_with_priorities();
        wizard.select_affinity(Sphere::Forces);

        assert_eq!(
            wizard.set_sphere(Sphere::Forces, 4),
            Err(CreationError::SphereCapExceeded {
                sphere: Sphere::Forces
            })
        );

        wizard.set_sphere(Sphere::Forces, 3).unwrap();
        wizard.set_sphere(Sphere::Prime, 2).unwrap();
        wizard.set_sphere(Sphere::Life, 1).unwrap();
        assert_eq!(wizard.sphere_points_total(), 6);

        assert_eq!(
            wizard.set_sphere(Sphere::Mind, 1),
            Err(CreationError::SphereTotalExceeded {
                requested: 7,
                budget: 6,
            })
        );
        assert_eq!(wizard.character().spheres.mind, 0);
    }

    #[test]
    fn test_background_total_enforced() {
        let mut wizard = wizard_with_priorities();
        wizard.set_background(Background::Avatar, 3).unwrap();
        wizard.set_background(Background::Node, 2).unwrap();
        wizard.set_background(Background::Resources, 2).unwrap();
        assert_eq!(wizard.background_points_total(), 7);

        assert_eq!(
            wizard.set_background(Background::Allies, 1),
            Err(CreationError::BackgroundTotalExceeded {
                requested: 8,
                budget: 7,
            })
        );

        // Lowering one frees room for another.
        wizard.set_background(Background::Node, 1).unwrap();
        assert!(wizard.set_background(Background::Allies, 1).is_ok());
    }

    #[test]
    fn test_starting_quintessence_tracks_avatar() {
        let mut wizard = wizard_with_priorities();
        assert_eq!(wizard.starting_quintessence_max(), 0);
        wizard.set_background(Background::Avatar, 3).unwrap();
        assert_eq!(wizard.starting_quintessence_max(), 3);
    }

    #[test]
    fn test_freebie_pool_accounting() {
        let mut wizard = wizard_with_priorities();
        assert_eq!(wizard.freebie_points(), 15);

        wizard
            .spend_freebie(FreebieTarget::Attribute(Attribute::Strength))
            .unwrap();
        assert_eq!(wizard.freebie_points(), 10);
        assert_eq!(wizard.character().attributes.strength, 2);

        wizard
            .spend_freebie(FreebieTarget::Ability(Ability::Occult))
            .unwrap();
        assert_eq!(wizard.freebie_points(), 8);
        assert_eq!(wizard.character().abilities.occult, 1);

        wizard.spend_freebie(FreebieTarget::Sphere(Sphere::Mind)).unwrap();
        assert_eq!(wizard.freebie_points(), 1);
        assert_eq!(wizard.character().spheres.mind, 1);

        wizard
            .spend_freebie(FreebieTarget::Background(Background::Arcane))
            .unwrap();
        assert_eq!(wizard.freebie_points(), 0);

        let result = wizard.spend_freebie(FreebieTarget::Background(Background::Arcane));
        assert_eq!(
            result,
            Err(CreationError::InsufficientFreebies {
                cost: 1,
                remaining: 0,
            })
        );
        assert_eq!(wizard.character().backgrounds.arcane, 1);
    }

    #[test]
    fn test_freebie_spending_ignores_category_budgets() {
        let mut wizard = wizard_with_priorities();
        // Fill the mental budget completely.
        wizard.set_attribute(Attribute::Perception, 4).unwrap();
        wizard.set_attribute(Attribute::Intelligence, 4).unwrap();
        wizard.set_attribute(Attribute::Wits, 2).unwrap();

        // Freebies can still push past the priority allowance.
        wizard
            .spend_freebie(FreebieTarget::Attribute(Attribute::Perception))
            .unwrap();
        assert_eq!(wizard.character().attributes.perception, 5);
    }

    #[test]
    fn test_freebie_sphere_ignores_creation_cap() {
        let mut wizard = wizard_with_priorities();
        wizard.select_affinity(Sphere::Forces);
        wizard.set_sphere(Sphere::Forces, 3).unwrap();

        // Allocation stops at 3, but a freebie dot takes the sphere to 4.
        wizard.spend_freebie(FreebieTarget::Sphere(Sphere::Forces)).unwrap();
        assert_eq!(wizard.character().spheres.forces, 4);
    }

    #[test]
    fn test_freebie_arete_capped_at_five() {
        let mut wizard = wizard_with_priorities();
        // Arete freebie purchases stop at 5 even though experience purchases
        // later run to 10.
        wizard.spend_freebie(FreebieTarget::Arete).unwrap();
        assert_eq!(wizard.character().arete, 2);
        assert_eq!(wizard.freebie_points(), 11);

        wizard.character.arete = 5;
        let result = wizard.spend_freebie(FreebieTarget::Arete);
        assert_eq!(
            result,
            Err(CreationError::AtMaximum {
                stat: "Arete",
                maximum: 5,
            })
        );
        assert_eq!(wizard.character().arete, 5);
        assert_eq!(wizard.freebie_points(), 11);
    }

    #[test]
    fn test_freebie_willpower_runs_to_ten_and_fills_current() {
        let mut wizard = wizard_with_priorities();
        wizard.character.willpower_current = 2;

        wizard.spend_freebie(FreebieTarget::Willpower).unwrap();
        assert_eq!(wizard.character().willpower, 6);
        assert_eq!(wizard.character().willpower_current, 6);

        wizard.character.willpower = 10;
        wizard.character.willpower_current = 10;
        assert_eq!(
            wizard.spend_freebie(FreebieTarget::Willpower),
            Err(CreationError::AtMaximum {
                stat: "Willpower",
                maximum: 10,
            })
        );
    }

    #[test]
    fn test_priority_reassignment_keeps_spent_points() {
        let mut wizard = wizard_with_priorities();
        wizard.set_attribute(Attribute::Perception, 4).unwrap();
        wizard.set_attribute(Attribute::Intelligence, 4).unwrap();

        // Demote mental after spending its primary budget: the dots stay,
        // only further edits validate against the new allowance.
        wizard.assign_attribute_priority(AttributeCategory::Mental, Priority::Tertiary);
        assert_eq!(wizard.character().attributes.perception, 4);
        assert!(matches!(
            wizard.set_attribute(Attribute::Wits, 2),
            Err(CreationError::BudgetExceeded { budget: 3, .. })
        ));
    }

    #[test]
    fn test_full_walkthrough() {
        let mut wizard = CreationWizard::new();
        wizard.set_name("Jun");
        wizard.set_player("Sam");
        wizard.set_tradition(Tradition::AkashicBrotherhood);
        wizard.set_essence(Essence::Questing);
        wizard.set_nature(Nature::Guru);
        wizard.set_demeanor(Nature::Loner);
        assert_eq!(wizard.advance(), Ok(CreationStep::Attributes));

        wizard.assign_attribute_priority(AttributeCategory::Physical, Priority::Primary);
        wizard.assign_attribute_priority(AttributeCategory::Mental, Priority::Secondary);
        wizard.assign_attribute_priority(AttributeCategory::Social, Priority::Tertiary);
        wizard.set_attribute(Attribute::Dexterity, 4).unwrap();
        wizard.set_attribute(Attribute::Stamina, 3).unwrap();
        wizard.set_attribute(Attribute::Strength, 3).unwrap();
        assert_eq!(wizard.advance(), Ok(CreationStep::Abilities));

        wizard.assign_ability_priority(AbilityCategory::Talents, Priority::Primary);
        wizard.assign_ability_priority(AbilityCategory::Skills, Priority::Secondary);
        wizard.assign_ability_priority(AbilityCategory::Knowledges, Priority::Tertiary);
        wizard.set_ability(Ability::Brawl, 4).unwrap();
        wizard.set_ability(Ability::Alertness, 3).unwrap();
        wizard.set_ability(Ability::Meditation, 3).unwrap();
        wizard.set_ability(Ability::Cosmology, 2).unwrap();
        assert_eq!(wizard.advance(), Ok(CreationStep::Advantages));

        wizard.select_affinity(Sphere::Mind);
        wizard.set_sphere(Sphere::Mind, 3).unwrap();
        wizard.set_sphere(Sphere::Life, 2).unwrap();
        wizard.set_sphere(Sphere::Prime, 1).unwrap();
        wizard.set_background(Background::Avatar, 2).unwrap();
        wizard.set_background(Background::Mentor, 3).unwrap();
        wizard.set_background(Background::Sanctum, 2).unwrap();
        assert_eq!(wizard.advance(), Ok(CreationStep::Freebies));

        wizard.spend_freebie(FreebieTarget::Arete).unwrap();
        wizard.spend_freebie(FreebieTarget::Willpower).unwrap();
        wizard
            .spend_freebie(FreebieTarget::Ability(Ability::Enigmas))
            .unwrap();
        assert_eq!(wizard.advance(), Ok(CreationStep::Review));

        // Finishing early is rejected; finishing from review succeeds.
        assert_eq!(wizard.advance(), Err(CreationError::AtFinalStep));
        let character = wizard.finish().expect("finish from review");

        assert_eq!(character.name, "Jun");
        assert_eq!(character.tradition, Some(Tradition::AkashicBrotherhood));
        assert_eq!(character.arete, 2);
        assert_eq!(character.willpower, 6);
        assert_eq!(character.willpower_current, 6);
        assert_eq!(character.abilities.enigmas, 1);
        assert_eq!(character.affinity, Some(Sphere::Mind));
        // Starting advantages the wizard never touches.
        assert_eq!(character.quintessence_max, 0);
        assert_eq!(character.experience, 0);
    }

    #[test]
    fn test_finish_requires_review_step() {
        let wizard = CreationWizard::new();
        assert!(matches!(wizard.finish(), Err(CreationError::NotAtReview)));
    }
}
