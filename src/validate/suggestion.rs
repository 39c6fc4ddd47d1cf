const MAX_SUGGESTIONS: usize = 5;

/// Returns the `options` that are similar enough to `input` to be suggested in its place, with
/// the closest ones first.
///
/// Options are compared case-insensitively by their optimal string alignment distance, and an
/// option only differing from the input in case counts as a distance of one. Options may be up to
/// `floor(input.len() * 0.4) + 1` edits away from the input.
pub fn suggestion_list<I, S>(input: &str, options: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let input_lowercase = input.to_lowercase();
    let threshold = input.len() * 2 / 5 + 1;

    let mut suggestions: Vec<(usize, String)> = options
        .into_iter()
        .filter_map(|option| {
            let option = option.as_ref();
            let option_lowercase = option.to_lowercase();
            let distance = if option == input {
                0
            } else if option_lowercase == input_lowercase {
                1
            } else {
                strsim::osa_distance(&input_lowercase, &option_lowercase)
            };
            (distance <= threshold).then(|| (distance, option.to_string()))
        })
        .collect();

    suggestions.sort();
    suggestions.dedup();
    suggestions.into_iter().map(|(_, option)| option).collect()
}

/// Quotes up to five items and joins them into a list, e.g. `"a", "b", or "c"`.
pub fn quoted_or_list<S: AsRef<str>>(items: &[S]) -> String {
    let quoted: Vec<String> = items
        .iter()
        .take(MAX_SUGGESTIONS)
        .map(|item| format!("\"{}\"", item.as_ref()))
        .collect();
    match quoted.as_slice() {
        [] => String::new(),
        [single] => single.clone(),
        [first, second] => format!("{} or {}", first, second),
        [init @ .., last] => format!("{}, or {}", init.join(", "), last),
    }
}

/// Formats suggestions as a sentence, e.g. ` Did you mean "a", "b", or "c"?`, that's appended to
/// an error message. Returns an empty string when there's nothing to suggest.
pub fn did_you_mean<S: AsRef<str>>(suggestions: &[S]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(" Did you mean {}?", quoted_or_list(suggestions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggests_close_options() {
        let options = ["name", "names", "nick", "owner", "Name"];
        assert_eq!(
            suggestion_list("name", options),
            ["name", "Name", "names"]
        );
        assert!(suggestion_list("xyz", options).is_empty());
        assert!(suggestion_list("name", Vec::<String>::new()).is_empty());
    }

    #[test]
    fn threshold_grows_with_input() {
        assert_eq!(suggestion_list("ab", ["ac", "xy"]), ["ac"]);
        assert_eq!(
            suggestion_list("owner", ["other", "owned", "animal", "ownr"]),
            ["owned", "ownr", "other"]
        );
    }

    #[test]
    fn quotes_lists() {
        assert_eq!(quoted_or_list::<&str>(&[]), "");
        assert_eq!(quoted_or_list(&["Pet", "Human"]), "\"Pet\" or \"Human\"");
    }

    #[test]
    fn formats_suggestions() {
        assert_eq!(did_you_mean::<&str>(&[]), "");
        assert_eq!(did_you_mean(&["a"]), " Did you mean \"a\"?");
        assert_eq!(did_you_mean(&["a", "b"]), " Did you mean \"a\" or \"b\"?");
        assert_eq!(
            did_you_mean(&["a", "b", "c"]),
            " Did you mean \"a\", \"b\", or \"c\"?"
        );
        assert_eq!(
            did_you_mean(&["a", "b", "c", "d", "e", "f"]),
            " Did you mean \"a\", \"b\", \"c\", \"d\", or \"e\"?"
        );
    }
}
