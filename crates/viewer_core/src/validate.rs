use url::Url;

const DEFAULT_SCHEME_PREFIX: &str = "https://";

/// Returns true when `input` starts with `http://` or `https://`, ignoring case.
pub fn has_http_scheme(input: &str) -> bool {
    starts_with_ignore_case(input, "http://") || starts_with_ignore_case(input, "https://")
}

/// Trims `input` and prepends `https://` when no http(s) scheme is present.
///
/// Empty input stays empty. Applying this twice yields the same string.
pub fn normalize_url(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    if has_http_scheme(trimmed) {
        trimmed.to_string()
    } else {
        format!("{DEFAULT_SCHEME_PREFIX}{trimmed}")
    }
}

/// Decides whether `input` is an acceptable scrape target.
///
/// The normalized form must parse as an absolute URL whose host is
/// `localhost`, a dotted-quad address, or a multi-label hostname with an
/// alphabetic top-level label of at least two characters.
pub fn is_valid_url(input: &str) -> bool {
    let candidate = normalize_url(input);
    if candidate.is_empty() {
        return false;
    }
    let Ok(parsed) = Url::parse(&candidate) else {
        return false;
    };
    match parsed.host_str() {
        Some(host) if !host.is_empty() => is_acceptable_host(host),
        _ => false,
    }
}

/// Host component of an absolute URL, if it has one.
pub fn hostname_of(url: &str) -> Option<String> {
    Url::parse(url)
        .ok()
        .and_then(|parsed| parsed.host_str().map(ToOwned::to_owned))
        .filter(|host| !host.is_empty())
}

fn is_acceptable_host(host: &str) -> bool {
    if host == "localhost" || is_dotted_quad(host) {
        return true;
    }

    let labels: Vec<&str> = host.split('.').collect();
    if labels.len() < 2 || labels.iter().any(|label| label.is_empty()) {
        return false;
    }

    let tld = labels[labels.len() - 1];
    if tld.len() < 2 || !tld.chars().all(|c| c.is_ascii_alphabetic()) {
        return false;
    }

    labels
        .iter()
        .all(|label| label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-'))
}

fn is_dotted_quad(host: &str) -> bool {
    let octets: Vec<&str> = host.split('.').collect();
    octets.len() == 4
        && octets
            .iter()
            .all(|octet| (1..=3).contains(&octet.len()) && octet.bytes().all(|b| b.is_ascii_digit()))
}

fn starts_with_ignore_case(input: &str, prefix: &str) -> bool {
    input
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}
