//! Mage: The Ascension character sheet types.
//!
//! Contains the canonical character record: identity, closed-list descriptors
//! (tradition, essence, nature), the attribute/ability/sphere/background stat
//! blocks, advantages, and experience.

use crate::game_data::{STARTING_ARETE, STARTING_WILLPOWER};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Unique identifier for characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CharacterId(pub Uuid);

impl CharacterId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CharacterId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Descriptors
// ============================================================================

/// The nine Traditions, plus the Hollow Ones and unaffiliated orphans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tradition {
    AkashicBrotherhood,
    CelestialChorus,
    CultOfEcstasy,
    Dreamspeakers,
    Euthanatos,
    OrderOfHermes,
    SonsOfEther,
    Verbena,
    VirtualAdepts,
    HollowOnes,
    Orphan,
}

impl Tradition {
    pub fn name(&self) -> &'static str {
        match self {
            Tradition::AkashicBrotherhood => "Akashic Brotherhood",
            Tradition::CelestialChorus => "Celestial Chorus",
            Tradition::CultOfEcstasy => "Cult of Ecstasy",
            Tradition::Dreamspeakers => "Dreamspeakers",
            Tradition::Euthanatos => "Euthanatos",
            Tradition::OrderOfHermes => "Order of Hermes",
            Tradition::SonsOfEther => "Sons of Ether",
            Tradition::Verbena => "Verbena",
            Tradition::VirtualAdepts => "Virtual Adepts",
            Tradition::HollowOnes => "Hollow Ones",
            Tradition::Orphan => "Orphan",
        }
    }

    pub fn all() -> [Tradition; 11] {
        [
            Tradition::AkashicBrotherhood,
            Tradition::CelestialChorus,
            Tradition::CultOfEcstasy,
            Tradition::Dreamspeakers,
            Tradition::Euthanatos,
            Tradition::OrderOfHermes,
            Tradition::SonsOfEther,
            Tradition::Verbena,
            Tradition::VirtualAdepts,
            Tradition::HollowOnes,
            Tradition::Orphan,
        ]
    }
}

impl fmt::Display for Tradition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The flavor of a mage's Avatar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Essence {
    #[default]
    Dynamic,
    Pattern,
    Primordial,
    Questing,
}

impl Essence {
    pub fn name(&self) -> &'static str {
        match self {
            Essence::Dynamic => "Dynamic",
            Essence::Pattern => "Pattern",
            Essence::Primordial => "Primordial",
            Essence::Questing => "Questing",
        }
    }

    pub fn all() -> [Essence; 4] {
        [
            Essence::Dynamic,
            Essence::Pattern,
            Essence::Primordial,
            Essence::Questing,
        ]
    }
}

impl fmt::Display for Essence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Personality archetypes. A character's demeanor draws from the same list,
/// so both fields use this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Nature {
    Architect,
    Autocrat,
    BonVivant,
    Bravo,
    Caregiver,
    Celebrant,
    Competitor,
    Conformist,
    Conniver,
    Critic,
    Curmudgeon,
    Deviant,
    Director,
    Enigma,
    EyeOfTheStorm,
    Fanatic,
    Gallant,
    Guru,
    Idealist,
    Judge,
    Loner,
    Martyr,
    Masochist,
    Monster,
    Pedagogue,
    Penitent,
    Perfectionist,
    Rebel,
    Rogue,
    Scientist,
    Survivor,
    ThrillSeeker,
    Traditionalist,
    Trickster,
    Visionary,
}

impl Nature {
    pub fn name(&self) -> &'static str {
        match self {
            Nature::Architect => "Architect",
            Nature::Autocrat => "Autocrat",
            Nature::BonVivant => "Bon Vivant",
            Nature::Bravo => "Bravo",
            Nature::Caregiver => "Caregiver",
            Nature::Celebrant => "Celebrant",
            Nature::Competitor => "Competitor",
            Nature::Conformist => "Conformist",
            Nature::Conniver => "Conniver",
            Nature::Critic => "Critic",
            Nature::Curmudgeon => "Curmudgeon",
            Nature::Deviant => "Deviant",
            Nature::Director => "Director",
            Nature::Enigma => "Enigma",
            Nature::EyeOfTheStorm => "Eye of the Storm",
            Nature::Fanatic => "Fanatic",
            Nature::Gallant => "Gallant",
            Nature::Guru => "Guru",
            Nature::Idealist => "Idealist",
            Nature::Judge => "Judge",
            Nature::Loner => "Loner",
            Nature::Martyr => "Martyr",
            Nature::Masochist => "Masochist",
            Nature::Monster => "Monster",
            Nature::Pedagogue => "Pedagogue",
            Nature::Penitent => "Penitent",
            Nature::Perfectionist => "Perfectionist",
            Nature::Rebel => "Rebel",
            Nature::Rogue => "Rogue",
            Nature::Scientist => "Scientist",
            Nature::Survivor => "Survivor",
            Nature::ThrillSeeker => "Thrill-Seeker",
            Nature::Traditionalist => "Traditionalist",
            Nature::Trickster => "Trickster",
            Nature::Visionary => "Visionary",
        }
    }

    pub fn all() -> [Nature; 35] {
        [
            Nature::Architect,
            Nature::Autocrat,
            Nature::BonVivant,
            Nature::Bravo,
            Nature::Caregiver,
            Nature::Celebrant,
            Nature::Competitor,
            Nature::Conformist,
            Nature::Conniver,
            Nature::Critic,
            Nature::Curmudgeon,
            Nature::Deviant,
            Nature::Director,
            Nature::Enigma,
            Nature::EyeOfTheStorm,
            Nature::Fanatic,
            Nature::Gallant,
            Nature::Guru,
            Nature::Idealist,
            Nature::Judge,
            Nature::Loner,
            Nature::Martyr,
            Nature::Masochist,
            Nature::Monster,
            Nature::Pedagogue,
            Nature::Penitent,
            Nature::Perfectionist,
            Nature::Rebel,
            Nature::Rogue,
            Nature::Scientist,
            Nature::Survivor,
            Nature::ThrillSeeker,
            Nature::Traditionalist,
            Nature::Trickster,
            Nature::Visionary,
        ]
    }
}

impl fmt::Display for Nature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ============================================================================
// Attributes
// ============================================================================

/// The three attribute groupings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttributeCategory {
    Physical,
    Social,
    Mental,
}

impl AttributeCategory {
    pub fn name(&self) -> &'static str {
        match self {
            AttributeCategory::Physical => "Physical",
            AttributeCategory::Social => "Social",
            AttributeCategory::Mental => "Mental",
        }
    }

    pub fn all() -> [AttributeCategory; 3] {
        [
            AttributeCategory::Physical,
            AttributeCategory::Social,
            AttributeCategory::Mental,
        ]
    }

    /// The three attributes belonging to this category. Membership is fixed.
    pub fn members(&self) -> [Attribute; 3] {
        match self {
            AttributeCategory::Physical => {
                [Attribute::Strength, Attribute::Dexterity, Attribute::Stamina]
            }
            AttributeCategory::Social => [
                Attribute::Charisma,
                Attribute::Manipulation,
                Attribute::Appearance,
            ],
            AttributeCategory::Mental => [
                Attribute::Perception,
                Attribute::Intelligence,
                Attribute::Wits,
            ],
        }
    }
}

impl fmt::Display for AttributeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The nine attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Attribute {
    Strength,
    Dexterity,
    Stamina,
    Charisma,
    Manipulation,
    Appearance,
    Perception,
    Intelligence,
    Wits,
}

impl Attribute {
    pub fn name(&self) -> &'static str {
        match self {
            Attribute::Strength => "Strength",
            Attribute::Dexterity => "Dexterity",
            Attribute::Stamina => "Stamina",
            Attribute::Charisma => "Charisma",
            Attribute::Manipulation => "Manipulation",
            Attribute::Appearance => "Appearance",
            Attribute::Perception => "Perception",
            Attribute::Intelligence => "Intelligence",
            Attribute::Wits => "Wits",
        }
    }

    pub fn category(&self) -> AttributeCategory {
        match self {
            Attribute::Strength | Attribute::Dexterity | Attribute::Stamina => {
                AttributeCategory::Physical
            }
            Attribute::Charisma | Attribute::Manipulation | Attribute::Appearance => {
                AttributeCategory::Social
            }
            Attribute::Perception | Attribute::Intelligence | Attribute::Wits => {
                AttributeCategory::Mental
            }
        }
    }

    pub fn all() -> [Attribute; 9] {
        [
            Attribute::Strength,
            Attribute::Dexterity,
            Attribute::Stamina,
            Attribute::Charisma,
            Attribute::Manipulation,
            Attribute::Appearance,
            Attribute::Perception,
            Attribute::Intelligence,
            Attribute::Wits,
        ]
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Attribute ratings container. Every attribute starts at 1 and runs 1-5.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attributes {
    pub strength: u8,
    pub dexterity: u8,
    pub stamina: u8,
    pub charisma: u8,
    pub manipulation: u8,
    pub appearance: u8,
    pub perception: u8,
    pub intelligence: u8,
    pub wits: u8,
}

impl Attributes {
    pub fn get(&self, attribute: Attribute) -> u8 {
        match attribute {
            Attribute::Strength => self.strength,
            Attribute::Dexterity => self.dexterity,
            Attribute::Stamina => self.stamina,
            Attribute::Charisma => self.charisma,
            Attribute::Manipulation => self.manipulation,
            Attribute::Appearance => self.appearance,
            Attribute::Perception => self.perception,
            Attribute::Intelligence => self.intelligence,
            Attribute::Wits => self.wits,
        }
    }

    pub fn set(&mut self, attribute: Attribute, value: u8) {
        match attribute {
            Attribute::Strength => self.strength = value,
            Attribute::Dexterity => self.dexterity = value,
            Attribute::Stamina => self.stamina = value,
            Attribute::Charisma => self.charisma = value,
            Attribute::Manipulation => self.manipulation = value,
            Attribute::Appearance => self.appearance = value,
            Attribute::Perception => self.perception = value,
            Attribute::Intelligence => self.intelligence = value,
            Attribute::Wits => self.wits = value,
        }
    }
}

impl Default for Attributes {
    fn default() -> Self {
        Self {
            strength: 1,
            dexterity: 1,
            stamina: 1,
            charisma: 1,
            manipulation: 1,
            appearance: 1,
            perception: 1,
            intelligence: 1,
            wits: 1,
        }
    }
}

// ============================================================================
// Abilities
// ============================================================================

/// The three ability groupings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AbilityCategory {
    Talents,
    Skills,
    Knowledges,
}

impl AbilityCategory {
    pub fn name(&self) -> &'static str {
        match self {
            AbilityCategory::Talents => "Talents",
            AbilityCategory::Skills => "Skills",
            AbilityCategory::Knowledges => "Knowledges",
        }
    }

    pub fn all() -> [AbilityCategory; 3] {
        [
            AbilityCategory::Talents,
            AbilityCategory::Skills,
            AbilityCategory::Knowledges,
        ]
    }

    /// The ten abilities belonging to this category. Membership is fixed.
    pub fn members(&self) -> [Ability; 10] {
        match self {
            AbilityCategory::Talents => [
                Ability::Alertness,
                Ability::Athletics,
                Ability::Awareness,
                Ability::Brawl,
                Ability::Empathy,
                Ability::Expression,
                Ability::Intimidation,
                Ability::Leadership,
                Ability::Streetwise,
                Ability::Subterfuge,
            ],
            AbilityCategory::Skills => [
                Ability::Crafts,
                Ability::Drive,
                Ability::Etiquette,
                Ability::Firearms,
                Ability::Meditation,
                Ability::Melee,
                Ability::Research,
                Ability::Stealth,
                Ability::Survival,
                Ability::Technology,
            ],
            AbilityCategory::Knowledges => [
                Ability::Academics,
                Ability::Computer,
                Ability::Cosmology,
                Ability::Enigmas,
                Ability::Investigation,
                Ability::Law,
                Ability::Medicine,
                Ability::Occult,
                Ability::Politics,
                Ability::Science,
            ],
        }
    }
}

impl fmt::Display for AbilityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The thirty abilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ability {
    // Talents
    Alertness,
    Athletics,
    Awareness,
    Brawl,
    Empathy,
    Expression,
    Intimidation,
    Leadership,
    Streetwise,
    Subterfuge,
    // Skills
    Crafts,
    Drive,
    Etiquette,
    Firearms,
    Meditation,
    Melee,
    Research,
    Stealth,
    Survival,
    Technology,
    // Knowledges
    Academics,
    Computer,
    Cosmology,
    Enigmas,
    Investigation,
    Law,
    Medicine,
    Occult,
    Politics,
    Science,
}

impl Ability {
    pub fn name(&self) -> &'static str {
        match self {
            Ability::Alertness => "Alertness",
            Ability::Athletics => "Athletics",
            Ability::Awareness => "Awareness",
            Ability::Brawl => "Brawl",
            Ability::Empathy => "Empathy",
            Ability::Expression => "Expression",
            Ability::Intimidation => "Intimidation",
            Ability::Leadership => "Leadership",
            Ability::Streetwise => "Streetwise",
            Ability::Subterfuge => "Subterfuge",
            Ability::Crafts => "Crafts",
            Ability::Drive => "Drive",
            Ability::Etiquette => "Etiquette",
            Ability::Firearms => "Firearms",
            Ability::Meditation => "Meditation",
            Ability::Melee => "Melee",
            Ability::Research => "Research",
            Ability::Stealth => "Stealth",
            Ability::Survival => "Survival",
            Ability::Technology => "Technology",
            Ability::Academics => "Academics",
            Ability::Computer => "Computer",
            Ability::Cosmology => "Cosmology",
            Ability::Enigmas => "Enigmas",
            Ability::Investigation => "Investigation",
            Ability::Law => "Law",
            Ability::Medicine => "Medicine",
            Ability::Occult => "Occult",
            Ability::Politics => "Politics",
            Ability::Science => "Science",
        }
    }

    pub fn category(&self) -> AbilityCategory {
        match self {
            Ability::Alertness
            | Ability::Athletics
            | Ability::Awareness
            | Ability::Brawl
            | Ability::Empathy
            | Ability::Expression
            | Ability::Intimidation
            | Ability::Leadership
            | Ability::Streetwise
            | Ability::Subterfuge => AbilityCategory::Talents,
            Ability::Crafts
            | Ability::Drive
            | Ability::Etiquette
            | Ability::Firearms
            | Ability::Meditation
            | Ability::Melee
            | Ability::Research
            | Ability::Stealth
            | Ability::Survival
            | Ability::Technology => AbilityCategory::Skills,
            Ability::Academics
            | Ability::Computer
            | Ability::Cosmology
            | Ability::Enigmas
            | Ability::Investigation
            | Ability::Law
            | Ability::Medicine
            | Ability::Occult
            | Ability::Politics
            | Ability::Science => AbilityCategory::Knowledges,
        }
    }

    pub fn all() -> [Ability; 30] {
        [
            Ability::Alertness,
            Ability::Athletics,
            Ability::Awareness,
            Ability::Brawl,
            Ability::Empathy,
            Ability::Expression,
            Ability::Intimidation,
            Ability::Leadership,
            Ability::Streetwise,
            Ability::Subterfuge,
            Ability::Crafts,
            Ability::Drive,
            Ability::Etiquette,
            Ability::Firearms,
            Ability::Meditation,
            Ability::Melee,
            Ability::Research,
            Ability::Stealth,
            Ability::Survival,
            Ability::Technology,
            Ability::Academics,
            Ability::Computer,
            Ability::Cosmology,
            Ability::Enigmas,
            Ability::Investigation,
            Ability::Law,
            Ability::Medicine,
            Ability::Occult,
            Ability::Politics,
            Ability::Science,
        ]
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Ability ratings container. Everything starts untrained at 0, runs 0-5.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Abilities {
    pub alertness: u8,
    pub athletics: u8,
    pub awareness: u8,
    pub brawl: u8,
    pub empathy: u8,
    pub expression: u8,
    pub intimidation: u8,
    pub leadership: u8,
    pub streetwise: u8,
    pub subterfuge: u8,
    pub crafts: u8,
    pub drive: u8,
    pub etiquette: u8,
    pub firearms: u8,
    pub meditation: u8,
    pub melee: u8,
    pub research: u8,
    pub stealth: u8,
    pub survival: u8,
    pub technology: u8,
    pub academics: u8,
    pub computer: u8,
    pub cosmology: u8,
    pub enigmas: u8,
    pub investigation: u8,
    pub law: u8,
    pub medicine: u8,
    pub occult: u8,
    pub politics: u8,
    pub science: u8,
}

impl Abilities {
    pub fn get(&self, ability: Ability) -> u8 {
        match ability {
            Ability::Alertness => self.alertness,
            Ability::Athletics => self.athletics,
            Ability::Awareness => self.awareness,
            Ability::Brawl => self.brawl,
            Ability::Empathy => self.empathy,
            Ability::Expression => self.expression,
            Ability::Intimidation => self.intimidation,
            Ability::Leadership => self.leadership,
            Ability::Streetwise => self.streetwise,
            Ability::Subterfuge => self.subterfuge,
            Ability::Crafts => self.crafts,
            Ability::Drive => self.drive,
            Ability::Etiquette => self.etiquette,
            Ability::Firearms => self.firearms,
            Ability::Meditation => self.meditation,
            Ability::Melee => self.melee,
            Ability::Research => self.research,
            Ability::Stealth => self.stealth,
            Ability::Survival => self.survival,
            Ability::Technology => self.technology,
            Ability::Academics => self.academics,
            Ability::Computer => self.computer,
            Ability::Cosmology => self.cosmology,
            Ability::Enigmas => self.enigmas,
            Ability::Investigation => self.investigation,
            Ability::Law => self.law,
            Ability::Medicine => self.medicine,
            Ability::Occult => self.occult,
            Ability::Politics => self.politics,
            Ability::Science => self.science,
        }
    }

    pub fn set(&mut self, ability: Ability, value: u8) {
        match ability {
            Ability::Alertness => self.alertness = value,
            Ability::Athletics => self.athletics = value,
            Ability::Awareness => self.awareness = value,
            Ability::Brawl => self.brawl = value,
            Ability::Empathy => self.empathy = value,
            Ability::Expression => self.expression = value,
            Ability::Intimidation => self.intimidation = value,
            Ability::Leadership => self.leadership = value,
            Ability::Streetwise => self.streetwise = value,
            Ability::Subterfuge => self.subterfuge = value,
            Ability::Crafts => self.crafts = value,
            Ability::Drive => self.drive = value,
            Ability::Etiquette => self.etiquette = value,
            Ability::Firearms => self.firearms = value,
            Ability::Meditation => self.meditation = value,
            Ability::Melee => self.melee = value,
            Ability::Research => self.research = value,
            Ability::Stealth => self.stealth = value,
            Ability::Survival => self.survival = value,
            Ability::Technology => self.technology = value,
            Ability::Academics => self.academics = value,
            Ability::Computer => self.computer = value,
            Ability::Cosmology => self.cosmology = value,
            Ability::Enigmas => self.enigmas = value,
            Ability::Investigation => self.investigation = value,
            Ability::Law => self.law = value,
            Ability::Medicine => self.medicine = value,
            Ability::Occult => self.occult = value,
            Ability::Politics => self.politics = value,
            Ability::Science => self.science = value,
        }
    }
}

// ============================================================================
// Spheres
// ============================================================================

/// The nine Spheres of magick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sphere {
    Correspondence,
    Entropy,
    Forces,
    Life,
    Matter,
    Mind,
    Prime,
    Spirit,
    Time,
}

impl Sphere {
    pub fn name(&self) -> &'static str {
        match self {
            Sphere::Correspondence => "Correspondence",
            Sphere::Entropy => "Entropy",
            Sphere::Forces => "Forces",
            Sphere::Life => "Life",
            Sphere::Matter => "Matter",
            Sphere::Mind => "Mind",
            Sphere::Prime => "Prime",
            Sphere::Spirit => "Spirit",
            Sphere::Time => "Time",
        }
    }

    pub fn all() -> [Sphere; 9] {
        [
            Sphere::Correspondence,
            Sphere::Entropy,
            Sphere::Forces,
            Sphere::Life,
            Sphere::Matter,
            Sphere::Mind,
            Sphere::Prime,
            Sphere::Spirit,
            Sphere::Time,
        ]
    }
}

impl fmt::Display for Sphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Sphere ratings container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spheres {
    pub correspondence: u8,
    pub entropy: u8,
    pub forces: u8,
    pub life: u8,
    pub matter: u8,
    pub mind: u8,
    pub prime: u8,
    pub spirit: u8,
    pub time: u8,
}

impl Spheres {
    pub fn get(&self, sphere: Sphere) -> u8 {
        match sphere {
            Sphere::Correspondence => self.correspondence,
            Sphere::Entropy => self.entropy,
            Sphere::Forces => self.forces,
            Sphere::Life => self.life,
            Sphere::Matter => self.matter,
            Sphere::Mind => self.mind,
            Sphere::Prime => self.prime,
            Sphere::Spirit => self.spirit,
            Sphere::Time => self.time,
        }
    }

    pub fn set(&mut self, sphere: Sphere, value: u8) {
        match sphere {
            Sphere::Correspondence => self.correspondence = value,
            Sphere::Entropy => self.entropy = value,
            Sphere::Forces => self.forces = value,
            Sphere::Life => self.life = value,
            Sphere::Matter => self.matter = value,
            Sphere::Mind => self.mind = value,
            Sphere::Prime => self.prime = value,
            Sphere::Spirit => self.spirit = value,
            Sphere::Time => self.time = value,
        }
    }

    /// Sum of every sphere rating.
    pub fn total(&self) -> u8 {
        Sphere::all().iter().map(|s| self.get(*s)).sum()
    }
}

// ============================================================================
// Backgrounds
// ============================================================================

/// The twelve backgrounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Background {
    Allies,
    Arcane,
    Avatar,
    Contacts,
    Destiny,
    Dream,
    Influence,
    Mentor,
    Node,
    Resources,
    Sanctum,
    Wonder,
}

impl Background {
    pub fn name(&self) -> &'static str {
        match self {
            Background::Allies => "Allies",
            Background::Arcane => "Arcane",
            Background::Avatar => "Avatar",
            Background::Contacts => "Contacts",
            Background::Destiny => "Destiny",
            Background::Dream => "Dream",
            Background::Influence => "Influence",
            Background::Mentor => "Mentor",
            Background::Node => "Node",
            Background::Resources => "Resources",
            Background::Sanctum => "Sanctum",
            Background::Wonder => "Wonder",
        }
    }

    pub fn all() -> [Background; 12] {
        [
            Background::Allies,
            Background::Arcane,
            Background::Avatar,
            Background::Contacts,
            Background::Destiny,
            Background::Dream,
            Background::Influence,
            Background::Mentor,
            Background::Node,
            Background::Resources,
            Background::Sanctum,
            Background::Wonder,
        ]
    }
}

impl fmt::Display for Background {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Background ratings container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Backgrounds {
    pub allies: u8,
    pub arcane: u8,
    pub avatar: u8,
    pub contacts: u8,
    pub destiny: u8,
    pub dream: u8,
    pub influence: u8,
    pub mentor: u8,
    pub node: u8,
    pub resources: u8,
    pub sanctum: u8,
    pub wonder: u8,
}

impl Backgrounds {
    pub fn get(&self, background: Background) -> u8 {
        match background {
            Background::Allies => self.allies,
            Background::Arcane => self.arcane,
            Background::Avatar => self.avatar,
            Background::Contacts => self.contacts,
            Background::Destiny => self.destiny,
            Background::Dream => self.dream,
            Background::Influence => self.influence,
            Background::Mentor => self.mentor,
            Background::Node => self.node,
            Background::Resources => self.resources,
            Background::Sanctum => self.sanctum,
            Background::Wonder => self.wonder,
        }
    }

    pub fn set(&mut self, background: Background, value: u8) {
        match background {
            Background::Allies => self.allies = value,
            Background::Arcane => self.arcane = value,
            Background::Avatar => self.avatar = value,
            Background::Contacts => self.contacts = value,
            Background::Destiny => self.destiny = value,
            Background::Dream => self.dream = value,
            Background::Influence => self.influence = value,
            Background::Mentor => self.mentor = value,
            Background::Node => self.node = value,
            Background::Resources => self.resources = value,
            Background::Sanctum => self.sanctum = value,
            Background::Wonder => self.wonder = value,
        }
    }

    /// Sum of every background rating.
    pub fn total(&self) -> u8 {
        Background::all().iter().map(|b| self.get(*b)).sum()
    }
}

// ============================================================================
// Health
// ============================================================================

/// The seven-level damage track.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthLevels {
    pub bruised: bool,
    pub hurt: bool,
    pub injured: bool,
    pub wounded: bool,
    pub mauled: bool,
    pub crippled: bool,
    pub incapacitated: bool,
}

// ============================================================================
// Character
// ============================================================================

/// A complete character record.
///
/// Created empty via [`Character::new`] or built up through
/// [`crate::creation::CreationWizard`]; advanced afterwards through the
/// functions in [`crate::advancement`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: CharacterId,

    // Basic info
    pub name: String,
    pub player: String,
    pub chronicle: String,
    pub concept: String,
    pub cabal: String,
    pub tradition: Option<Tradition>,
    pub nature: Option<Nature>,
    pub demeanor: Option<Nature>,
    pub essence: Essence,

    // Stat blocks
    pub attributes: Attributes,
    pub abilities: Abilities,
    pub spheres: Spheres,
    /// The sphere this mage has a natural affinity for, once chosen.
    pub affinity: Option<Sphere>,
    pub backgrounds: Backgrounds,

    // Advantages
    pub arete: u8,
    pub willpower: u8,
    pub willpower_current: u8,
    pub quintessence: u8,
    pub quintessence_max: u8,
    pub paradox: u8,

    pub health: HealthLevels,

    // Experience
    pub experience: u32,
    pub experience_total: u32,

    // Additional info
    pub merits: Vec<String>,
    pub flaws: Vec<String>,
    pub equipment: Vec<String>,
    pub notes: String,

    // Meta
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Character {
    /// A fresh, empty character: every attribute at 1, every other trait at
    /// base, Arete 1, Willpower 5, and a new identity stamped with the
    /// current time.
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: CharacterId::new(),
            name: String::new(),
            player: String::new(),
            chronicle: String::new(),
            concept: String::new(),
            cabal: String::new(),
            tradition: None,
            nature: None,
            demeanor: None,
            essence: Essence::default(),
            attributes: Attributes::default(),
            abilities: Abilities::default(),
            spheres: Spheres::default(),
            affinity: None,
            backgrounds: Backgrounds::default(),
            arete: STARTING_ARETE,
            willpower: STARTING_WILLPOWER,
            willpower_current: STARTING_WILLPOWER,
            quintessence: 0,
            quintessence_max: 0,
            paradox: 0,
            health: HealthLevels::default(),
            experience: 0,
            experience_total: 0,
            merits: Vec::new(),
            flaws: Vec::new(),
            equipment: Vec::new(),
            notes: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Set permanent Willpower. Current Willpower can never exceed the
    /// permanent rating, so it is clamped down when the maximum drops.
    pub fn set_willpower(&mut self, value: u8) {
        self.willpower = value;
        self.willpower_current = self.willpower_current.min(value);
    }

    /// Set the Quintessence pool cap, clamping the stored Quintessence down
    /// to fit.
    pub fn set_quintessence_max(&mut self, value: u8) {
        self.quintessence_max = value;
        self.quintessence = self.quintessence.min(value);
    }

    /// Refresh the modification timestamp. Repositories call this before
    /// writing so a stored record always carries its persistence time.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Default for Character {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a finished sample character for tests and demos.
pub fn create_sample_mage(name: &str) -> Character {
    let mut character = Character::new();
    character.name = name.to_string();
    character.player = "Sample Player".to_string();
    character.concept = "Hermetic scholar".to_string();
    character.tradition = Some(Tradition::OrderOfHermes);
    character.essence = Essence::Questing;
    character.nature = Some(Nature::Architect);
    character.demeanor = Some(Nature::Pedagogue);

    character.attributes.set(Attribute::Intelligence, 4);
    character.attributes.set(Attribute::Wits, 3);
    character.attributes.set(Attribute::Perception, 3);
    character.attributes.set(Attribute::Charisma, 2);
    character.attributes.set(Attribute::Manipulation, 3);
    character.attributes.set(Attribute::Appearance, 2);
    character.attributes.set(Attribute::Dexterity, 2);
    character.attributes.set(Attribute::Stamina, 2);

    character.abilities.set(Ability::Awareness, 2);
    character.abilities.set(Ability::Alertness, 1);
    character.abilities.set(Ability::Expression, 2);
    character.abilities.set(Ability::Research, 3);
    character.abilities.set(Ability::Meditation, 2);
    character.abilities.set(Ability::Etiquette, 1);
    character.abilities.set(Ability::Academics, 3);
    character.abilities.set(Ability::Occult, 3);
    character.abilities.set(Ability::Cosmology, 2);
    character.abilities.set(Ability::Enigmas, 1);

    character.affinity = Some(Sphere::Forces);
    character.spheres.set(Sphere::Forces, 2);
    character.spheres.set(Sphere::Prime, 2);
    character.spheres.set(Sphere::Correspondence, 1);

    character.backgrounds.set(Background::Avatar, 3);
    character.backgrounds.set(Background::Mentor, 2);
    character.backgrounds.set(Background::Resources, 2);

    character.quintessence_max = 3;
    character.quintessence = 3;

    character
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_character_defaults() {
        let character = Character::new();

        for attribute in Attribute::all() {
            assert_eq!(character.attributes.get(attribute), 1);
        }
        for ability in Ability::all() {
            assert_eq!(character.abilities.get(ability), 0);
        }
        assert_eq!(character.spheres.total(), 0);
        assert_eq!(character.backgrounds.total(), 0);
        assert_eq!(character.arete, 1);
        assert_eq!(character.willpower, 5);
        assert_eq!(character.willpower_current, 5);
        assert_eq!(character.quintessence, 0);
        assert_eq!(character.quintessence_max, 0);
        assert_eq!(character.paradox, 0);
        assert_eq!(character.experience, 0);
        assert_eq!(character.experience_total, 0);
        assert!(character.tradition.is_none());
        assert!(character.affinity.is_none());
        assert_eq!(character.essence, Essence::Dynamic);
        assert_eq!(character.created_at, character.updated_at);
    }

    #[test]
    fn test_fresh_ids_are_unique() {
        assert_ne!(Character::new().id, Character::new().id);
    }

    #[test]
    fn test_willpower_clamps_current() {
        let mut character = Character::new();
        character.set_willpower(8);
        assert_eq!(character.willpower, 8);
        assert_eq!(character.willpower_current, 5);

        character.willpower_current = 8;
        character.set_willpower(3);
        assert_eq!(character.willpower_current, 3);
    }

    #[test]
    fn test_quintessence_max_clamps_pool() {
        let mut character = Character::new();
        character.set_quintessence_max(10);
        character.quintessence = 10;

        character.set_quintessence_max(4);
        assert_eq!(character.quintessence, 4);
    }

    #[test]
    fn test_attribute_categories_partition_all_nine() {
        let mut seen = Vec::new();
        for category in AttributeCategory::all() {
            for attribute in category.members() {
                assert_eq!(attribute.category(), category);
                assert!(!seen.contains(&attribute), "{attribute} listed twice");
                seen.push(attribute);
            }
        }
        assert_eq!(seen.len(), Attribute::all().len());
    }

    #[test]
    fn test_ability_categories_partition_all_thirty() {
        let mut seen = Vec::new();
        for category in AbilityCategory::all() {
            for ability in category.members() {
                assert_eq!(ability.category(), category);
                assert!(!seen.contains(&ability), "{ability} listed twice");
                seen.push(ability);
            }
        }
        assert_eq!(seen.len(), Ability::all().len());
    }

    #[test]
    fn test_closed_list_sizes() {
        assert_eq!(Tradition::all().len(), 11);
        assert_eq!(Nature::all().len(), 35);
        assert_eq!(Essence::all().len(), 4);
        assert_eq!(Sphere::all().len(), 9);
        assert_eq!(Background::all().len(), 12);
    }

    #[test]
    fn test_character_serde_round_trip() {
        let character = create_sample_mage("Marianna");

        let json = serde_json::to_string_pretty(&character).expect("serialize");
        let back: Character = serde_json::from_str(&json).expect("deserialize");

        assert_eq!(back, character);
    }

    #[test]
    fn test_sphere_totals() {
        let character = create_sample_mage("Totals");
        assert_eq!(character.spheres.total(), 5);
        assert_eq!(character.backgrounds.total(), 7);
    }
}
