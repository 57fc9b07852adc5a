use crate::units::dimension::Dimensionality;
use crate::units::tables::{split_prefix, translate_unit_name};

/// Translate a dimensionality into siunitx unit markup.
///
/// Units are emitted in descending exponent order (stable, so equal
/// exponents keep their insertion order). Negative exponents produce a
/// leading `\per` and are negated; exponent 0 contributes nothing; an
/// exponent above 1 appends `\tothe{n}`. Unit names are split into SI
/// prefix and base name when possible and translated to siunitx macro
/// names.
///
/// The returned string is finished LaTeX and must not be escaped again.
pub fn dimensionality_to_siunitx(dim: &Dimensionality) -> String {
    let mut pairs: Vec<(&str, i32)> = dim.iter().collect();
    pairs.sort_by(|a, b| b.1.cmp(&a.1));

    let mut markup = String::new();
    for (unit, power) in pairs {
        if power == 0 {
            continue;
        }
        let mut power = power;
        if power < 0 {
            markup.push_str("\\per");
            power = -power;
        }

        let name = match split_prefix(unit) {
            Some((prefix, base)) => {
                markup.push('\\');
                markup.push_str(prefix);
                base
            }
            None => unit,
        };

        markup.push('\\');
        markup.push_str(translate_unit_name(name));

        if power > 1 {
            markup.push_str(&format!("\\tothe{{{}}}", power));
        }
    }
    markup
}
