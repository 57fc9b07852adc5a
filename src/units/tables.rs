use lazy_static::lazy_static;
use std::collections::HashMap;

/// SI magnitude prefixes, in the enumeration order of the source unit
/// registry (alphabetical). Prefix detection takes the first entry that is a
/// string-prefix of the unit name, so overlapping prefixes resolve by this
/// order alone. A unit whose name merely starts with a prefix ("centimeter_
/// mercury") is mis-split; that matches the upstream registry's behavior.
pub static SI_PREFIXES: &[&str] = &[
    "atto", "centi", "deci", "deka", "exa", "femto", "giga", "hecto", "kilo", "mega", "micro",
    "milli", "nano", "peta", "pico", "tera", "yocto", "yotta", "zepto", "zetta",
];

lazy_static! {
    /// Unit names that differ between the quantities naming scheme and the
    /// siunitx macro names. Anything not listed passes through unchanged.
    pub static ref UNIT_NAME_TRANSLATIONS: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("Celsius", "celsius");
        m.insert("revolutions_per_minute", "rpm");
        m.insert("arcdegree", "degree");
        m.insert("degrees_north", "degN");
        m.insert("degrees_east", "degE");
        m.insert("degrees_west", "degW");
        m.insert("degrees_true", "degT");
        m.insert("circular_mil", "cmil");
        m.insert("ampere_turn", "ampereturn");
        m.insert("elementary_charge", "elementarycharge");
        m
    };
}

/// Map a unit name to its siunitx macro name, or pass it through.
pub fn translate_unit_name(name: &str) -> &str {
    UNIT_NAME_TRANSLATIONS.get(name).copied().unwrap_or(name)
}

/// Split a unit name into a recognized SI prefix and the remaining base
/// name. Returns `None` when no prefix matches or when stripping would leave
/// nothing (a unit named exactly like a prefix is not a prefixed unit).
pub fn split_prefix(name: &str) -> Option<(&'static str, &str)> {
    for &prefix in SI_PREFIXES {
        if let Some(base) = name.strip_prefix(prefix) {
            if !base.is_empty() {
                return Some((prefix, base));
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_known_name() {
        assert_eq!(translate_unit_name("Celsius"), "celsius");
        assert_eq!(translate_unit_name("revolutions_per_minute"), "rpm");
        assert_eq!(translate_unit_name("elementary_charge"), "elementarycharge");
    }

    #[test]
    fn test_translate_unknown_name_passes_through() {
        assert_eq!(translate_unit_name("meter"), "meter");
        assert_eq!(translate_unit_name("parsec"), "parsec");
    }

    #[test]
    fn test_split_prefix() {
        assert_eq!(split_prefix("kilometer"), Some(("kilo", "meter")));
        assert_eq!(split_prefix("millisecond"), Some(("milli", "second")));
        assert_eq!(split_prefix("meter"), None);
    }

    #[test]
    fn test_prefix_named_unit_not_split() {
        assert_eq!(split_prefix("kilo"), None);
    }

    #[test]
    fn test_first_match_wins() {
        // "deci" sorts before "deka"; a name starting with both candidates
        // resolves by enumeration order.
        assert_eq!(split_prefix("decibel"), Some(("deci", "bel")));
    }
}
