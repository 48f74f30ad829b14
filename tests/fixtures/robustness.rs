use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tag_finder::{find_iter, parse_attributes, Check};

const MARKUP_PIECES: [&str; 18] = [
    "<a", "<a>", "</a>", "</a ", "<ab>", "</ab>", "<A>", ">", " ", "\n", "=", "\"", "'", "/",
    "x", "é", "<a href=\"", "\u{3000}",
];

fn random_doc(rng: &mut StdRng) -> String {
    let len = rng.gen_range(0..24);

    (0..len)
        .filter_map(|_| MARKUP_PIECES.choose(rng).copied())
        .collect()
}

#[test]
fn random_markup() {
    let mut rng = StdRng::seed_from_u64(0x7a6_f1d3);
    let no_checks: [&dyn Check; 0] = [];

    for _ in 0..5000 {
        let doc = random_doc(&mut rng);
        let mut prev_start = None;

        for tag in find_iter(&doc, "a", &no_checks) {
            let start = tag.start();
            let content_start = tag.content_start();

            assert!(doc[start..].starts_with("<a"), "{doc:?}");
            assert!(doc[..content_start].ends_with('>'), "{doc:?}");
            assert!(start < content_start, "{doc:?}");

            if let Some(prev_start) = prev_start {
                assert!(prev_start < start, "{doc:?}");
            }

            match tag.after_closure() {
                Some(after_closure) => {
                    assert!(after_closure > content_start, "{doc:?}");
                    assert!(doc[..after_closure].ends_with('>'), "{doc:?}");
                    assert!(
                        content_start + tag.content().len() < after_closure,
                        "{doc:?}"
                    );
                }
                None => assert_eq!(tag.content(), "", "{doc:?}"),
            }

            prev_start = Some(start);
        }
    }
}

#[test]
fn random_attribute_lists() {
    let mut rng = StdRng::seed_from_u64(0xa77_1157);

    for _ in 0..5000 {
        let input = random_doc(&mut rng);
        let parsed = parse_attributes(&input);

        if let Ok(attributes) = parsed {
            for (name, value) in attributes.iter() {
                assert!(!name.is_empty(), "{input:?}");
                assert!(!name.chars().any(|ch| ch.is_ascii_uppercase()), "{input:?}");
                assert!(input.contains(value), "{input:?}");
            }
        }
    }
}
