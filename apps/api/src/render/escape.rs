/// Escapes the five HTML metacharacters. `&` goes first so entities produced
/// by later replacements are not escaped twice.
pub fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
