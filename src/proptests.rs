use super::*;
use proptest::prelude::*;

// Property: one description line per token
proptest! {
    #[test]
    fn prop_line_count_equals_token_count(s in "\\PC*") {
        let tokens = tokenize(&s);
        let described = describe_patterns(&s);
        let lines = if described.is_empty() { 0 } else { described.split('\n').count() };
        prop_assert_eq!(lines, tokens.len());
    }
}

// Property: case never changes the ASCII token sequence
proptest! {
    #[test]
    fn prop_case_insensitive(s in "[a-zA-Z ,.!?0-9]*") {
        prop_assert_eq!(tokenize(&s.to_uppercase()), tokenize(&s.to_lowercase()));
    }
}

// Property: characters outside the alphabet are dropped, not substituted
proptest! {
    #[test]
    fn prop_noise_is_dropped(letters in "[a-z]{0,12}", noise in "[0-9 .,!?]{1,3}") {
        // Noise goes after every letter, so it can also break up digraphs.
        let noisy: String = letters.chars().flat_map(|c| {
            std::iter::once(c).chain(noise.chars())
        }).collect();
        let singles: Vec<String> = letters
            .chars()
            .filter(|c| TokenTable::builtin().contains(&c.to_string()))
            .map(|c| c.to_string())
            .collect();
        let tokens: Vec<String> = tokenize(&noisy).iter().map(|t| t.to_string()).collect();
        prop_assert_eq!(tokens, singles);
    }
}

// Property: every token produced is a table key, and lookup agrees with generate
proptest! {
    #[test]
    fn prop_tokens_are_table_keys(s in "\\PC*") {
        let table = TokenTable::builtin();
        let tokens = table.tokenize(&s);
        let patterns = table.generate_patterns(&s);
        prop_assert_eq!(tokens.len(), patterns.len());
        for (token, pattern) in tokens.iter().zip(patterns) {
            prop_assert!(table.contains(token.as_str()));
            prop_assert_eq!(table.lookup(token.as_str()), pattern);
        }
    }
}

// Property: unknown tokens always map to the same default
proptest! {
    #[test]
    fn prop_unknown_token_is_default(token in "[0-9e-io-u]{3}") {
        prop_assert_eq!(pattern_for_token(&token), Pattern::DEFAULT);
        prop_assert_eq!(pattern_for_token(&token), pattern_for_token(&token));
    }
}
