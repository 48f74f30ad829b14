use crate::harness::{get_test_cases, ExpectedMatch, TestCase, ASCII_COMPATIBLE_ENCODINGS};
use tag_finder::{decode_document, Check, Finder};

fn find_all(finder: &Finder, doc: &str, test: &TestCase) -> Vec<ExpectedMatch> {
    let checks = test.checks();
    let checks: Vec<&dyn Check> = checks.iter().map(|check| &**check).collect();

    finder
        .find_iter(doc, &test.tag, &checks)
        .map(|tag| ExpectedMatch::from(&tag))
        .collect()
}

fn follow_next(finder: &Finder, test: &TestCase) -> Vec<ExpectedMatch> {
    let checks = test.checks();
    let checks: Vec<&dyn Check> = checks.iter().map(|check| &**check).collect();
    let mut matches = Vec::new();
    let mut tag = finder.find(&test.doc, &test.tag, &checks);

    while let Some(current) = tag {
        matches.push(ExpectedMatch::from(&current));
        tag = current.next();
    }

    matches
}

fn run_suite(suite: &str) {
    for test in get_test_cases(suite) {
        let finder = Finder::new(test.settings());

        assert_eq!(
            find_all(&finder, &test.doc, &test),
            test.matches,
            "Matches mismatch in `{}`",
            test.description
        );

        assert_eq!(
            follow_next(&finder, &test),
            test.matches,
            "`next` chain mismatch in `{}`",
            test.description
        );
    }
}

#[test]
fn attributes() {
    run_suite("attributes");
}

#[test]
fn closure() {
    run_suite("closure");
}

#[test]
fn checks() {
    run_suite("checks");
}

#[test]
fn iteration() {
    run_suite("iteration");
}

#[test]
fn decoded_documents() {
    for suite in ["attributes", "closure", "checks", "iteration"] {
        for test in get_test_cases(suite) {
            if !test.doc.is_ascii() {
                continue;
            }

            let finder = Finder::new(test.settings());

            for encoding in &ASCII_COMPATIBLE_ENCODINGS {
                let (bytes, _, _) = encoding.encode(&test.doc);
                let doc = decode_document(&bytes, encoding.name()).unwrap();

                assert_eq!(
                    find_all(&finder, &doc, &test),
                    test.matches,
                    "Matches mismatch in `{}` - Encoding: {}",
                    test.description,
                    encoding.name()
                );
            }
        }
    }
}
