use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Elemental type of a creature or a move.
///
/// Record strings are matched ignoring ASCII case. Anything unrecognised
/// becomes `Typeless`, which is neutral against and from every other type.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(from = "String", into = "String")]
#[strum(ascii_case_insensitive)]
pub enum ElementType {
    Normal,
    Fire,
    Water,
    Grass,
    Electric,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
    Typeless,
}

impl From<String> for ElementType {
    fn from(value: String) -> Self {
        value.trim().parse().unwrap_or(ElementType::Typeless)
    }
}

impl From<ElementType> for String {
    fn from(value: ElementType) -> Self {
        value.to_string()
    }
}

impl ElementType {
    /// Multiplier for a single attacking type against a single defending type.
    /// Returns: 2.0 = Super Effective, 1.0 = Normal, 0.5 = Not Very Effective, 0.0 = No Effect
    pub fn type_effectiveness(attacking: ElementType, defending: ElementType) -> f64 {
        use ElementType::*;

        match (attacking, defending) {
            // Normal
            (Normal, Ghost) => 0.0,
            (Normal, Rock) | (Normal, Steel) => 0.5,
            (Normal, _) => 1.0,

            // Fire
            (Fire, Fire) | (Fire, Water) | (Fire, Rock) | (Fire, Dragon) => 0.5,
            (Fire, Grass) | (Fire, Ice) | (Fire, Bug) | (Fire, Steel) => 2.0,
            (Fire, _) => 1.0,

            // Water
            (Water, Water) | (Water, Grass) | (Water, Dragon) => 0.5,
            (Water, Fire) | (Water, Ground) | (Water, Rock) => 2.0,
            (Water, _) => 1.0,

            // Grass
            (Grass, Fire)
            | (Grass, Grass)
            | (Grass, Poison)
            | (Grass, Flying)
            | (Grass, Bug)
            | (Grass, Dragon)
            | (Grass, Steel) => 0.5,
            (Grass, Water) | (Grass, Ground) | (Grass, Rock) => 2.0,
            (Grass, _) => 1.0,

            // Electric
            (Electric, Grass) | (Electric, Dragon) => 0.5,
            (Electric, Ground) => 0.0,
            (Electric, Water) | (Electric, Flying) => 2.0,
            (Electric, _) => 1.0,

            // Ice
            (Ice, Fire) | (Ice, Water) | (Ice, Ice) | (Ice, Steel) => 0.5,
            (Ice, Grass) | (Ice, Ground) | (Ice, Flying) | (Ice, Dragon) => 2.0,
            (Ice, _) => 1.0,

            // Fighting
            (Fighting, Poison)
            | (Fighting, Flying)
            | (Fighting, Psychic)
            | (Fighting, Bug)
            | (Fighting, Fairy) => 0.5,
            (Fighting, Ghost) => 0.0,
            (Fighting, Normal)
            | (Fighting, Ice)
            | (Fighting, Rock)
            | (Fighting, Dark)
            | (Fighting, Steel) => 2.0,
            (Fighting, _) => 1.0,

            // Poison
            (Poison, Poison) | (Poison, Ground) | (Poison, Rock) | (Poison, Ghost) => 0.5,
            (Poison, Steel) => 0.0,
            (Poison, Grass) | (Poison, Fairy) => 2.0,
            (Poison, _) => 1.0,

            // Ground
            (Ground, Grass) | (Ground, Bug) => 0.5,
            (Ground, Flying) => 0.0,
            (Ground, Fire)
            | (Ground, Electric)
            | (Ground, Poison)
            | (Ground, Rock)
            | (Ground, Steel) => 2.0,
            (Ground, _) => 1.0,

            // Flying
            (Flying, Electric) | (Flying, Rock) | (Flying, Steel) => 0.5,
            (Flying, Grass) | (Flying, Fighting) | (Flying, Bug) => 2.0,
            (Flying, _) => 1.0,

            // Psychic
            (Psychic, Psychic) | (Psychic, Steel) => 0.5,
            (Psychic, Dark) => 0.0,
            (Psychic, Fighting) | (Psychic, Poison) => 2.0,
            (Psychic, _) => 1.0,

            // Bug
            (Bug, Fire)
            | (Bug, Fighting)
            | (Bug, Poison)
            | (Bug, Flying)
            | (Bug, Ghost)
            | (Bug, Steel)
            | (Bug, Fairy) => 0.5,
            (Bug, Grass) | (Bug, Psychic) | (Bug, Dark) => 2.0,
            (Bug, _) => 1.0,

            // Rock
            (Rock, Fighting) | (Rock, Ground) | (Rock, Steel) => 0.5,
            (Rock, Fire) | (Rock, Ice) | (Rock, Flying) | (Rock, Bug) => 2.0,
            (Rock, _) => 1.0,

            // Ghost
            (Ghost, Normal) => 0.0,
            (Ghost, Dark) => 0.5,
            (Ghost, Psychic) | (Ghost, Ghost) => 2.0,
            (Ghost, _) => 1.0,

            // Dragon
            (Dragon, Steel) => 0.5,
            (Dragon, Fairy) => 0.0,
            (Dragon, Dragon) => 2.0,
            (Dragon, _) => 1.0,

            // Dark
            (Dark, Fighting) | (Dark, Dark) | (Dark, Fairy) => 0.5,
            (Dark, Psychic) | (Dark, Ghost) => 2.0,
            (Dark, _) => 1.0,

            // Steel
            (Steel, Fire) | (Steel, Water) | (Steel, Electric) | (Steel, Steel) => 0.5,
            (Steel, Ice) | (Steel, Rock) | (Steel, Fairy) => 2.0,
            (Steel, _) => 1.0,

            // Fairy
            (Fairy, Poison) | (Fairy, Steel) => 0.5,
            (Fairy, Fighting) | (Fairy, Dragon) | (Fairy, Dark) => 2.0,
            (Fairy, _) => 1.0,

            (Typeless, _) => 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use strum::IntoEnumIterator;

    #[rstest]
    #[case("Fire", ElementType::Fire)]
    #[case("fire", ElementType::Fire)]
    #[case("PSYCHIC", ElementType::Psychic)]
    #[case(" Water ", ElementType::Water)]
    #[case("Shadow", ElementType::Typeless)]
    #[case("", ElementType::Typeless)]
    fn test_parse_record_strings(#[case] raw: &str, #[case] expected: ElementType) {
        assert_eq!(ElementType::from(raw.to_string()), expected);
    }

    #[test]
    fn test_serde_uses_capitalised_names() {
        let json = serde_json::to_string(&vec![ElementType::Grass, ElementType::Poison]).unwrap();
        assert_eq!(json, r#"["Grass","Poison"]"#);

        let parsed: Vec<ElementType> = serde_json::from_str(r#"["grass","Mystery"]"#).unwrap();
        assert_eq!(parsed, vec![ElementType::Grass, ElementType::Typeless]);
    }

    #[test]
    fn test_typeless_is_neutral_both_ways() {
        for other in ElementType::iter() {
            assert_eq!(ElementType::type_effectiveness(ElementType::Typeless, other), 1.0);
            assert_eq!(ElementType::type_effectiveness(other, ElementType::Typeless), 1.0);
        }
    }

    #[rstest]
    #[case(ElementType::Normal, ElementType::Ghost)]
    #[case(ElementType::Electric, ElementType::Ground)]
    #[case(ElementType::Fighting, ElementType::Ghost)]
    #[case(ElementType::Poison, ElementType::Steel)]
    #[case(ElementType::Ground, ElementType::Flying)]
    #[case(ElementType::Psychic, ElementType::Dark)]
    #[case(ElementType::Ghost, ElementType::Normal)]
    #[case(ElementType::Dragon, ElementType::Fairy)]
    fn test_immunities(#[case] attacking: ElementType, #[case] defending: ElementType) {
        assert_eq!(ElementType::type_effectiveness(attacking, defending), 0.0);
    }

    #[test]
    fn test_chart_only_uses_known_multipliers() {
        for attacking in ElementType::iter() {
            for defending in ElementType::iter() {
                let m = ElementType::type_effectiveness(attacking, defending);
                assert!(
                    [0.0, 0.5, 1.0, 2.0].contains(&m),
                    "{attacking} vs {defending} gave {m}"
                );
            }
        }
    }
}
