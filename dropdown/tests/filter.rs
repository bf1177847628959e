use dropdown::{filter_options, DropdownOption};

fn options(labels: &[&str]) -> Vec<DropdownOption> {
    labels
        .iter()
        .enumerate()
        .map(|(i, label)| DropdownOption::new(i.to_string(), *label))
        .collect()
}

fn labels<'a>(filtered: &[&'a DropdownOption]) -> Vec<&'a str> {
    filtered.iter().map(|o| o.label.as_str()).collect()
}

#[test]
fn test_fixture_mu_and_x() {
    let options = vec![
        DropdownOption::new("mumbai", "Mumbai"),
        DropdownOption::new("pune", "Pune"),
    ];

    assert_eq!(labels(&filter_options(&options, "mu")), vec!["Mumbai"]);
    assert!(filter_options(&options, "x").is_empty());
}

#[test]
fn test_empty_query_is_identity() {
    let options = options(&["Whitefield", "Indiranagar", "Koramangala"]);

    let filtered = filter_options(&options, "");

    assert_eq!(filtered.len(), options.len());
    for (kept, original) in filtered.iter().zip(&options) {
        assert_eq!(*kept, original);
    }
}

#[test]
fn test_case_insensitive() {
    let options = options(&["Electronic City", "HSR Layout", "Hebbal"]);

    assert_eq!(labels(&filter_options(&options, "ELEC")), vec!["Electronic City"]);
    assert_eq!(labels(&filter_options(&options, "hsr")), vec!["HSR Layout"]);
    assert_eq!(labels(&filter_options(&options, "hE")), vec!["Hebbal"]);
}

#[test]
fn test_substring_not_fuzzy() {
    let options = options(&["Marathahalli", "Malleshwaram"]);

    // "mrt" is a subsequence of "Marathahalli" but not a substring.
    assert!(filter_options(&options, "mrt").is_empty());
    assert_eq!(labels(&filter_options(&options, "ath")), vec!["Marathahalli"]);
}

#[test]
fn test_result_is_ordered_subsequence_of_containing_labels() {
    let options = options(&[
        "Bellandur",
        "Banashankari",
        "Jayanagar",
        "Basavanagudi",
        "Yelahanka",
        "Rajajinagar",
    ]);

    for query in ["an", "nagar", "a", "BA", "la", "zzz", "r"] {
        let filtered = filter_options(&options, query);
        let lowered = query.to_lowercase();

        let expected: Vec<&str> = options
            .iter()
            .filter(|o| o.label.to_lowercase().contains(&lowered))
            .map(|o| o.label.as_str())
            .collect();
        assert_eq!(labels(&filtered), expected, "query {query:?}");
    }
}

#[test]
fn test_query_longer_than_labels() {
    let options = options(&["Pune"]);

    assert!(filter_options(&options, "Pune East").is_empty());
    assert_eq!(labels(&filter_options(&options, "pune")), vec!["Pune"]);
}

fn containing<'a>(options: &'a [DropdownOption], query: &str) -> Vec<&'a str> {
    let lowered = query.to_lowercase();
    options
        .iter()
        .filter(|o| o.label.to_lowercase().contains(&lowered))
        .map(|o| o.label.as_str())
        .collect()
}

#[test]
fn test_whitespace_in_query_is_literal() {
    let options = options(&["Sarjapur  Road", "Sarjapur Road", "Old Airport Road"]);

    assert_eq!(labels(&filter_options(&options, "  road")), vec!["Sarjapur  Road"]);
    assert_eq!(labels(&filter_options(&options, "  R")), vec!["Sarjapur  Road"]);
    assert_eq!(labels(&filter_options(&options, "  ro")), vec!["Sarjapur  Road"]);
    assert_eq!(
        labels(&filter_options(&options, " road")),
        vec!["Sarjapur  Road", "Sarjapur Road", "Old Airport Road"]
    );
    assert!(filter_options(&options, "road ").is_empty());

    for query in ["  road", "  R", "  ro", " road", "road ", "r r"] {
        assert_eq!(
            labels(&filter_options(&options, query)),
            containing(&options, query),
            "query {query:?}"
        );
    }
}

#[test]
fn test_non_ascii_labels() {
    let options = options(&[
        "Cafe\u{301} Noir",
        "\u{d6}STERREICH",
        "Stra\u{df}e",
        "na\u{ef}ve",
        "\u{1c5}emal",
    ]);

    // Combining mark: only the decomposed label contains it.
    assert_eq!(labels(&filter_options(&options, "e\u{301}")), vec!["Cafe\u{301} Noir"]);
    assert_eq!(labels(&filter_options(&options, "\u{f6}st")), vec!["\u{d6}STERREICH"]);
    assert_eq!(labels(&filter_options(&options, "\u{df}")), vec!["Stra\u{df}e"]);
    assert_eq!(labels(&filter_options(&options, "\u{1c6}")), vec!["\u{1c5}emal"]);
    assert!(filter_options(&options, "naive").is_empty());

    for query in ["e\u{301}", "\u{f6}", "\u{d6}S", "\u{df}", "\u{1c4}E", "\u{ef}v", "e"] {
        assert_eq!(
            labels(&filter_options(&options, query)),
            containing(&options, query),
            "query {query:?}"
        );
    }
}
