use encoding_rs::*;

macro_rules! read_test_data {
    ($path:expr) => {
        glob::glob(&format!(
            "{}/tests/data/{}",
            env!("CARGO_MANIFEST_DIR"),
            $path
        ))
        .unwrap()
        .map(|path| {
            let path = path.unwrap();
            let reader = std::io::BufReader::new(std::fs::File::open(&path).unwrap());

            (path, reader)
        })
    };
}

mod suite;

pub use self::suite::{get_test_cases, ExpectedMatch, TestCase};

// NOTE: documents of the test cases stay the same byte for byte when they
// are ASCII-only and encoded with one of these.
pub static ASCII_COMPATIBLE_ENCODINGS: [&Encoding; 8] = [
    UTF_8,
    WINDOWS_1252,
    ISO_8859_2,
    ISO_8859_5,
    KOI8_R,
    GBK,
    EUC_JP,
    EUC_KR,
];
