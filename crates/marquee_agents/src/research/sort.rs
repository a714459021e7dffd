//! Ordering actor names by surname.

use std::cmp::Ordering;

fn fold_char(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' => 'a',
        'ç' | 'ć' | 'č' => 'c',
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ę' | 'ě' => 'e',
        'ì' | 'í' | 'î' | 'ï' | 'ī' => 'i',
        'ñ' | 'ń' | 'ň' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' => 'o',
        'ś' | 'š' | 'ş' => 's',
        'ù' | 'ú' | 'û' | 'ü' | 'ū' | 'ů' => 'u',
        'ý' | 'ÿ' => 'y',
        'ź' | 'ż' | 'ž' => 'z',
        'ł' => 'l',
        'ř' => 'r',
        'đ' | 'ď' => 'd',
        'ť' => 't',
        other => other,
    }
}

/// Sort key: lowercase with common Latin diacritics folded away.
fn collation_key(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .map(fold_char)
        .collect()
}

fn surname(name: &str) -> &str {
    name.split_whitespace().next_back().unwrap_or(name)
}

/// Compare two names by their last whitespace-separated token.
///
/// Case and accents are ignored at first; ties fall back to the folded full
/// name and then to plain string order, so the result is a total order.
pub fn compare_surnames(a: &str, b: &str) -> Ordering {
    collation_key(surname(a))
        .cmp(&collation_key(surname(b)))
        .then_with(|| collation_key(a).cmp(&collation_key(b)))
        .then_with(|| a.cmp(b))
}

/// Sort actor names by surname, ascending.
///
/// # Examples
///
/// ```
/// use marquee_agents::sort_actors_by_surname;
///
/// let mut actors = vec!["Amy Adams".to_string(), "Tom Hanks".to_string(), "Zoe Zed".to_string()];
/// sort_actors_by_surname(&mut actors);
/// assert_eq!(actors, ["Amy Adams", "Tom Hanks", "Zoe Zed"]);
/// ```
pub fn sort_actors_by_surname(actors: &mut [String]) {
    actors.sort_by(|a, b| compare_surnames(a, b));
}
