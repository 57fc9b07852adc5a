/// A preamble requirement: either a package to load or a raw declaration
/// line (siunitx unit declarations for units it does not know natively).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreambleItem {
    Package(&'static str),
    Declaration(&'static str),
}

impl PreambleItem {
    pub fn render(&self) -> String {
        match self {
            PreambleItem::Package(name) => format!("\\usepackage{{{}}}", name),
            PreambleItem::Declaration(line) => (*line).to_string(),
        }
    }
}

/// Everything quantity markup may need in the document preamble.
///
/// The list is fixed and declared once per document regardless of which
/// units actually appear: siunitx itself, amssymb (for \mho), and the
/// declarations covering rpm, compass degrees, circular mils, ampere-turns,
/// elementary charge and the CGS electromagnetic units.
pub static QUANTITY_PREAMBLE: &[PreambleItem] = &[
    PreambleItem::Package("siunitx"),
    PreambleItem::Package("amssymb"),
    PreambleItem::Declaration("\\DeclareSIUnit\\rpm{rpm}"),
    PreambleItem::Declaration("\\DeclareSIUnit\\degN{\\degree N}"),
    PreambleItem::Declaration("\\DeclareSIUnit\\degE{\\degree E}"),
    PreambleItem::Declaration("\\DeclareSIUnit\\degW{\\degree W}"),
    PreambleItem::Declaration("\\DeclareSIUnit\\degT{\\degree T}"),
    PreambleItem::Declaration("\\DeclareSIUnit\\are{a}"),
    PreambleItem::Declaration("\\DeclareSIUnit\\cmil{cmil}"),
    PreambleItem::Declaration("\\DeclareSIUnit\\darcy{D}"),
    PreambleItem::Declaration("\\DeclareSIUnit\\acre{ac}"),
    PreambleItem::Declaration("\\DeclareSIUnit\\abampere{aA}"),
    PreambleItem::Declaration("\\DeclareSIUnit\\statcoulomb{esu}"),
    PreambleItem::Declaration("\\DeclareSIUnit\\ampereturn{AT}"),
    PreambleItem::Declaration("\\DeclareSIUnit\\gilbert{Gb}"),
    PreambleItem::Declaration("\\DeclareSIUnit\\abfarad{ab\\farad}"),
    PreambleItem::Declaration("\\DeclareSIUnit\\abhenry{ab\\henry}"),
    PreambleItem::Declaration("\\DeclareSIUnit\\absiemens{ab\\siemens}"),
    PreambleItem::Declaration("\\DeclareSIUnit\\abmho{ab\\mho}"),
    PreambleItem::Declaration("\\DeclareSIUnit\\abohm{ab\\ohm}"),
    PreambleItem::Declaration("\\DeclareSIUnit\\abvolt{ab\\volt}"),
    PreambleItem::Declaration("\\DeclareSIUnit\\elementarycharge{\\textit{e}}"),
    PreambleItem::Declaration("\\DeclareSIUnit\\faraday{\\textit{F}}"),
    PreambleItem::Declaration("\\DeclareSIUnit\\gauss{G}"),
    PreambleItem::Declaration("\\DeclareSIUnit\\maxwell{Mx}"),
    PreambleItem::Declaration("\\DeclareSIUnit\\oersted{Oe}"),
    PreambleItem::Declaration("\\DeclareSIUnit\\statfarad{stat\\farad}"),
    PreambleItem::Declaration("\\DeclareSIUnit\\stathenry{stat\\henry}"),
    PreambleItem::Declaration("\\DeclareSIUnit\\statmho{stat\\mho}"),
    PreambleItem::Declaration("\\DeclareSIUnit\\statohm{stat\\ohm}"),
    PreambleItem::Declaration("\\DeclareSIUnit\\statvolt{stat\\volt}"),
];

/// Render preamble items one per line, dropping duplicates while keeping
/// first-occurrence order. Callers can chain requirement lists from several
/// sources and still emit each line once per document.
pub fn render_preamble<'a>(items: impl IntoIterator<Item = &'a PreambleItem>) -> String {
    let mut seen: Vec<&PreambleItem> = Vec::new();
    let mut out = String::new();
    for item in items {
        if seen.contains(&item) {
            continue;
        }
        seen.push(item);
        out.push_str(&item.render());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_package() {
        assert_eq!(
            PreambleItem::Package("siunitx").render(),
            "\\usepackage{siunitx}"
        );
    }

    #[test]
    fn test_render_declaration() {
        assert_eq!(
            PreambleItem::Declaration("\\DeclareSIUnit\\rpm{rpm}").render(),
            "\\DeclareSIUnit\\rpm{rpm}"
        );
    }

    #[test]
    fn test_preamble_starts_with_packages() {
        let rendered = render_preamble(QUANTITY_PREAMBLE);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "\\usepackage{siunitx}");
        assert_eq!(lines[1], "\\usepackage{amssymb}");
        assert_eq!(lines.len(), QUANTITY_PREAMBLE.len());
    }

    #[test]
    fn test_render_preamble_deduplicates() {
        let doubled: Vec<&PreambleItem> = QUANTITY_PREAMBLE
            .iter()
            .chain(QUANTITY_PREAMBLE.iter())
            .collect();
        let rendered = render_preamble(doubled);
        assert_eq!(rendered.lines().count(), QUANTITY_PREAMBLE.len());
    }
}
