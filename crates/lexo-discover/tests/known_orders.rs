use lexo_discover::{discover_alphabet, AlphabetDiscovery, Traversal};

fn position(alphabet: &[char], symbol: char) -> usize {
    alphabet
        .iter()
        .position(|s| *s == symbol)
        .unwrap_or_else(|| panic!("{symbol} missing from {alphabet:?}"))
}

fn assert_before(alphabet: &[char], pairs: &[(char, char)]) {
    for (before, after) in pairs {
        assert!(
            position(alphabet, *before) < position(alphabet, *after),
            "{before} should precede {after} in {alphabet:?}"
        );
    }
}

#[test]
fn empty_input_yields_empty_alphabet() {
    let words: [&str; 0] = [];
    assert!(discover_alphabet(words).unwrap().is_empty());
}

#[test]
fn one_word_keeps_its_order() {
    let discovery = AlphabetDiscovery::new(["cat"]);
    assert_eq!(discovery.alphabet().unwrap(), &['c', 'a', 't']);
    assert_eq!(discovery.alphabet_as_string().unwrap(), "cat");
}

#[test]
fn one_word_with_repeats_lists_each_symbol_once() {
    assert_eq!(discover_alphabet(["banana"]).unwrap(), vec!['b', 'a', 'n']);
}

#[test]
fn two_words() {
    let alphabet = discover_alphabet(["cat", "bat"]).unwrap();
    assert_before(&alphabet, &[('c', 'b')]);
    assert_eq!(alphabet.len(), 4);
}

#[test]
fn two_words_first_symbol_matches() {
    let alphabet = discover_alphabet(["cat", "cbt"]).unwrap();
    assert_before(&alphabet, &[('a', 'b')]);
}

#[test]
fn partial_order_across_depths() {
    let alphabet = discover_alphabet(["cat", "cbt", "b"]).unwrap();
    assert_before(&alphabet, &[('a', 'b'), ('c', 'b')]);
}

#[test]
fn single_symbol_words_chain() {
    let alphabet = discover_alphabet(["ab", "ad", "b", "c", "d", "e"]).unwrap();
    assert_before(&alphabet, &[('a', 'b'), ('b', 'c'), ('c', 'd'), ('d', 'e')]);
}

#[test]
fn combined_partial_order() {
    let words = [
        "ab", "ac", "ad", "beb", "bfb", "bbb", "cgc", "chc", "ccc", "dgd", "ddd",
    ];
    let alphabet = discover_alphabet(words).unwrap();
    assert_before(
        &alphabet,
        &[
            ('a', 'b'),
            ('b', 'c'),
            ('c', 'd'),
            ('e', 'b'),
            ('f', 'b'),
            ('g', 'c'),
            ('h', 'c'),
            ('g', 'd'),
        ],
    );
    assert_eq!(alphabet.len(), 8);
}

#[test]
fn duplicate_and_prefix_words_do_not_disturb_order() {
    let alphabet = discover_alphabet(["", "a", "ab", "ab", "ab", "ac", "b"]).unwrap();
    assert_eq!(alphabet, vec!['a', 'b', 'c']);
}

#[test]
fn fully_identical_words_are_tolerated() {
    let alphabet = discover_alphabet(["xy", "xy"]).unwrap();
    assert_eq!(alphabet, vec!['x', 'y']);
}

#[test]
fn token_symbols_are_supported() {
    let words: Vec<Vec<&str>> = vec![
        vec!["ch", "a"],
        vec!["c", "a"],
        vec!["c", "ll"],
        vec!["b"],
    ];
    let discovery = AlphabetDiscovery::from_sequences(words);
    let alphabet = discovery.alphabet().unwrap();
    let at = |t: &str| alphabet.iter().position(|s| *s == t).unwrap();
    assert!(at("ch") < at("c"));
    assert!(at("c") < at("b"));
    assert!(at("a") < at("ll"));
}

#[test]
fn long_shared_prefix_uses_bounded_stack_by_default() {
    let prefix = "ab".repeat(50_000);
    let discovery = AlphabetDiscovery::new([format!("{prefix}x"), format!("{prefix}y")]);
    assert_eq!(discovery.config().traversal, Traversal::ExplicitStack);
    let alphabet = discovery.alphabet().unwrap();
    assert_eq!(alphabet.len(), 4);
    assert_before(alphabet, &[('x', 'y')]);
}
