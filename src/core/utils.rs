use std::sync::OnceLock;

use regex::Regex;

fn markup_tag() -> &'static Regex {
    static TAG: OnceLock<Regex> = OnceLock::new();
    TAG.get_or_init(|| Regex::new(r"<[^>]*>").expect("markup tag pattern is valid"))
}

/// Replace every `<...>` tag with a space, then collapse whitespace runs and trim.
pub fn strip_markup(text: &str) -> String {
    let spaced = markup_tag().replace_all(text, " ");
    spaced.split_whitespace().collect::<Vec<_>>().join(" ")
}
