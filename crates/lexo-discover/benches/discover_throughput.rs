use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lexo_discover::{AlphabetDiscovery, DiscoveryConfig, Traversal};

/// Every word of length `len` over `symbols`, in lexicographic order.
fn dictionary(symbols: &[char], len: usize) -> Vec<Vec<char>> {
    let mut words = vec![Vec::new()];
    for _ in 0..len {
        words = words
            .into_iter()
            .flat_map(|prefix: Vec<char>| {
                symbols.iter().map(move |symbol| {
                    let mut word = prefix.clone();
                    word.push(*symbol);
                    word
                })
            })
            .collect();
    }
    words
}

fn discover_bench(c: &mut Criterion) {
    let symbols: Vec<char> = "zyxwvutsrq".chars().collect();
    let words = dictionary(&symbols, 4);
    for (name, traversal) in [
        ("discover_10k_recursive", Traversal::Recursive),
        ("discover_10k_explicit_stack", Traversal::ExplicitStack),
    ] {
        c.bench_function(name, |b| {
            b.iter(|| {
                let discovery = AlphabetDiscovery::from_sequences(words.clone())
                    .with_config(DiscoveryConfig::default().with_traversal(traversal));
                black_box(discovery.alphabet().unwrap().len());
            });
        });
    }
}

criterion_group!(benches, discover_bench);
criterion_main!(benches);
