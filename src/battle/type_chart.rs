use schema::ElementType;

/// Combined multiplier of an attacking type against every defender type.
///
/// Starts at 1.0 and multiplies in one chart lookup per defender type, so a
/// dual type can reach 0.25 or 4.0. Unlisted pairings contribute 1.0.
pub fn effectiveness(attack_type: ElementType, defender_types: &[ElementType]) -> f64 {
    defender_types
        .iter()
        .map(|&defending| ElementType::type_effectiveness(attack_type, defending))
        .product()
}
