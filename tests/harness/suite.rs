use hashbrown::HashMap;
use serde_derive::Deserialize;
use serde_json::from_reader;
use tag_finder::{
    contains, equal, has, not_empty, Check, MalformedAttributes, Settings, Tag, TagNameMatching,
};

#[derive(Deserialize, Debug)]
#[serde(rename_all = "snake_case")]
enum CheckData {
    Has(String),
    Contains(String, String),
    Equal(String, String),
    NotEmpty(String),
}

impl CheckData {
    fn to_check(&self) -> Box<dyn Check> {
        match self {
            CheckData::Has(name) => Box::new(has(name)),
            CheckData::Contains(name, text) => Box::new(contains(name, text)),
            CheckData::Equal(name, value) => Box::new(equal(name, value)),
            CheckData::NotEmpty(name) => Box::new(not_empty(name)),
        }
    }
}

#[derive(Deserialize, Debug, PartialEq, Eq)]
pub struct ExpectedMatch {
    pub attributes: HashMap<String, String>,
    pub start: usize,
    pub content_start: usize,
    pub after_closure: Option<usize>,
    pub content: String,
}

impl From<&Tag<'_>> for ExpectedMatch {
    fn from(tag: &Tag<'_>) -> Self {
        ExpectedMatch {
            attributes: tag
                .attributes()
                .iter()
                .map(|(name, value)| (name.to_owned(), value.to_owned()))
                .collect(),
            start: tag.start(),
            content_start: tag.content_start(),
            after_closure: tag.after_closure(),
            content: tag.content().to_owned(),
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct TestCase {
    pub description: String,
    pub doc: String,
    pub tag: String,
    #[serde(default)]
    checks: Vec<CheckData>,
    #[serde(default)]
    case_insensitive_tag_names: bool,
    #[serde(default)]
    keep_parsed_attributes: bool,
    pub matches: Vec<ExpectedMatch>,
}

impl TestCase {
    pub fn settings(&self) -> Settings {
        Settings {
            tag_name_matching: if self.case_insensitive_tag_names {
                TagNameMatching::AsciiCaseInsensitive
            } else {
                TagNameMatching::Exact
            },
            malformed_attributes: if self.keep_parsed_attributes {
                MalformedAttributes::KeepParsed
            } else {
                MalformedAttributes::Discard
            },
        }
    }

    pub fn checks(&self) -> Vec<Box<dyn Check>> {
        self.checks.iter().map(CheckData::to_check).collect()
    }
}

pub fn get_test_cases(suite: &str) -> Vec<TestCase> {
    let mut test_cases = Vec::new();

    for (path, reader) in read_test_data!(format!("{suite}.json")) {
        let cases = from_reader::<_, Vec<TestCase>>(reader)
            .unwrap_or_else(|err| panic!("Invalid test data in {}: {err}", path.display()));

        test_cases.extend(cases);
    }

    assert!(!test_cases.is_empty(), "No test cases in `{suite}` suite");

    test_cases
}
