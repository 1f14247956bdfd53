use once_cell::sync::Lazy;
use regex::Regex;

static SMALL_STAR_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"a-star-small-(\d+)").expect("Invalid small star regex")
});

static STAR_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"a-star-(\d+)").expect("Invalid star regex")
});

/// Rating from the class list of a small star icon, e.g. `a-star-small-45` -> `4.5`
pub fn parse_small_star_class(class_attr: &str) -> Option<String> {
    parse_star_code(&SMALL_STAR_REGEX, class_attr)
}

/// Rating from the class list of a regular star icon, e.g. `a-star-4` -> `0.4`
pub fn parse_star_class(class_attr: &str) -> Option<String> {
    parse_star_code(&STAR_REGEX, class_attr)
}

fn parse_star_code(regex: &Regex, class_attr: &str) -> Option<String> {
    let code: u64 = regex.captures(class_attr)?.get(1)?.as_str().parse().ok()?;
    Some(format_rating(code))
}

/// Render `code / 10` with exactly one fractional digit.
pub fn format_rating(code: u64) -> String {
    format!("{}.{}", code / 10, code % 10)
}
