/// Escape characters that have a special meaning in LaTeX text.
///
/// The `-` mapping protects hyphens from ligature collapsing, which is also
/// why pre-formatted siunitx arguments (containing `+-`) must be passed as
/// raw arguments instead of going through this function.
pub fn escape_latex(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("\\&"),
            '%' => escaped.push_str("\\%"),
            '$' => escaped.push_str("\\$"),
            '#' => escaped.push_str("\\#"),
            '_' => escaped.push_str("\\_"),
            '{' => escaped.push_str("\\{"),
            '}' => escaped.push_str("\\}"),
            '~' => escaped.push_str("\\textasciitilde{}"),
            '^' => escaped.push_str("\\textasciicircum{}"),
            '\\' => escaped.push_str("\\textbackslash{}"),
            '\n' => escaped.push_str("\\newline%\n"),
            '-' => escaped.push_str("{-}"),
            '[' => escaped.push_str("{[}"),
            ']' => escaped.push_str("{]}"),
            '\u{A0}' => escaped.push('~'),
            _ => escaped.push(c),
        }
    }
    escaped
}
