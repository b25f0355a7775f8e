use pretty_assertions::assert_eq;
use std::path::{Path, PathBuf};
use syscode_catalogue::{
    Catalogue, CatalogueConfig, CatalogueError, Code, CodeId, RowError, SubsetEntry,
    DEFAULT_ID_OFFSET,
};
use tempfile::TempDir;

const CODES: &str = "\
100;x;CUR;CURRENCY;Waehrung;Waehrung;Currency;Currency
101;x;CHF;CURRENCY_CHF;CHF;Schweizer Franken;CHF;Swiss franc
102;x;EUR;CURRENCY_EUR;EUR;Euro;EUR;Euro
5000;x;CTY;COUNTRY;Land;Land;Country;Country
5001;x;CH;COUNTRY_CH;CH;Schweiz;CH;Switzerland
";

const SUBSETS: &str = "\
CURRENCY;CURRENCY_EUR;2;0
CURRENCY;CURRENCY_CHF;1;1
COUNTRY;NO_SUCH_ENTRY;1;0
NO_SUCH_SUBSET;COUNTRY_CH;1;0
";

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("write fixture");
    path
}

fn id(raw: i64) -> CodeId {
    raw + DEFAULT_ID_OFFSET
}

fn fixture() -> (TempDir, PathBuf, PathBuf) {
    let temp = TempDir::new().expect("tempdir");
    let codes = write(temp.path(), "syscodes.csv", CODES);
    let subsets = write(temp.path(), "subsets.csv", SUBSETS);
    (temp, codes, subsets)
}

#[test]
fn every_row_is_reachable_by_shifted_id() {
    let (_temp, codes, subsets) = fixture();
    let catalogue = Catalogue::load(&codes, &subsets, CatalogueConfig::default()).expect("load");

    for line in CODES.lines() {
        let fields: Vec<&str> = line.split(';').collect();
        let raw: i64 = fields[0].parse().unwrap();
        let code = catalogue.get_by_id(id(raw)).expect("code for row");

        assert_eq!(
            [
                code.code(),
                code.name(),
                code.german_short(),
                code.german_medium(),
                code.english_short(),
                code.english_medium(),
            ],
            [fields[2], fields[3], fields[4], fields[5], fields[6], fields[7]]
        );
    }
    assert_eq!(catalogue.len(), 5);
}

#[test]
fn groups_are_inferred_from_id_gaps() {
    let (_temp, codes, subsets) = fixture();
    let catalogue = Catalogue::load(&codes, &subsets, CatalogueConfig::default()).expect("load");

    let currency = catalogue.get_by_id(id(100)).unwrap();
    assert_eq!(currency.children(), &[id(101), id(102)]);

    let country = catalogue.get_by_id(id(5000)).unwrap();
    assert_eq!(country.children(), &[id(5001)]);
    assert_eq!(catalogue.get_by_id(id(5001)).unwrap().group_id(), id(5000));
}

#[test]
fn subsets_link_only_resolved_rows() {
    let (_temp, codes, subsets) = fixture();
    let catalogue = Catalogue::load(&codes, &subsets, CatalogueConfig::default()).expect("load");

    let currency = catalogue.get_by_name("CURRENCY").unwrap();
    assert_eq!(
        currency.subset_entries(),
        &[
            SubsetEntry {
                id: id(102),
                sort_number: 2,
                default_entry: false
            },
            SubsetEntry {
                id: id(101),
                sort_number: 1,
                default_entry: true
            },
        ]
    );

    let with_entries: Vec<_> = catalogue
        .codes()
        .filter(|code| !code.subset_entries().is_empty())
        .map(Code::name)
        .collect();
    assert_eq!(with_entries, vec!["CURRENCY"]);
}

#[test]
fn rendered_group_lists_members_and_entries() {
    let (_temp, codes, subsets) = fixture();
    let catalogue = Catalogue::load(&codes, &subsets, CatalogueConfig::default()).expect("load");
    let rendered = catalogue.render(catalogue.get_by_id(id(100)).unwrap());

    assert_eq!(
        rendered,
        "\
Syscode 1051000000000064 = decimal 1175720977720410212
\tcode: `CUR`
\tname: `CURRENCY`
\tshort translation: _Waehrung_ : _Currency_
\tmedium translation: _Waehrung_ : _Currency_
\tgroup: 1051000000000064 `CURRENCY`
\t2 group members found
\t\t1051000000000065 `CURRENCY_CHF`
\t\t1051000000000066 `CURRENCY_EUR`
\t2 subset entries found
\t\t1051000000000066 `CURRENCY_EUR`
\t\t1051000000000065 `CURRENCY_CHF`
"
    );
}

#[test]
fn reload_replaces_previous_contents() {
    let (temp, codes, subsets) = fixture();
    let mut catalogue =
        Catalogue::load(&codes, &subsets, CatalogueConfig::default()).expect("load");

    let other_codes = write(
        temp.path(),
        "other.csv",
        "7;x;NEW;NEW_CODE;Neu;Neu;New;New\n",
    );
    let empty_subsets = write(temp.path(), "empty.csv", "");
    catalogue
        .reload(&other_codes, &empty_subsets)
        .expect("reload");

    assert_eq!(catalogue.len(), 1);
    assert!(catalogue.get_by_id(id(100)).is_none());
    assert!(catalogue.get_by_name("CURRENCY").is_none());
    assert!(catalogue.search("CURRENCY").is_empty());
    assert_eq!(catalogue.search("NEW").len(), 1);
}

#[test]
fn failed_reload_leaves_catalogue_empty() {
    let (temp, codes, subsets) = fixture();
    let mut catalogue =
        Catalogue::load(&codes, &subsets, CatalogueConfig::default()).expect("load");

    let broken = write(temp.path(), "broken.csv", "1;x;A;B;c;d;e;f\nnot-a-number;x;A;B;c;d;e;f\n");
    let err = catalogue.reload(&broken, &subsets).unwrap_err();

    match &err {
        CatalogueError::Malformed { path, source } => {
            assert_eq!(path, &broken);
            assert!(matches!(source, RowError::InvalidNumber { line: 2, .. }));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.to_string().contains("broken.csv"));
    assert!(catalogue.is_empty());
    assert!(catalogue.get_by_id(id(100)).is_none());
}

#[test]
fn malformed_subset_row_names_subset_file() {
    let (temp, codes, _subsets) = fixture();
    let bad_subsets = write(temp.path(), "bad_subsets.csv", "CURRENCY;CURRENCY_CHF;1\n");

    let err = Catalogue::load(&codes, &bad_subsets, CatalogueConfig::default()).unwrap_err();
    match err {
        CatalogueError::Malformed { path, source } => {
            assert_eq!(path, bad_subsets);
            assert_eq!(source.line(), 1);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn missing_file_is_io_error() {
    let (temp, _codes, subsets) = fixture();
    let missing = temp.path().join("missing.csv");

    let err = Catalogue::load(&missing, &subsets, CatalogueConfig::default()).unwrap_err();
    assert!(matches!(err, CatalogueError::Io { ref path, .. } if path == &missing));
}

#[test]
fn invalid_config_is_rejected_before_reading() {
    let (_temp, codes, subsets) = fixture();
    let config = CatalogueConfig {
        group_gap_min: 10,
        group_gap_max: 5,
        ..CatalogueConfig::default()
    };

    let err = Catalogue::load(&codes, &subsets, config).unwrap_err();
    assert!(matches!(err, CatalogueError::InvalidConfig(_)));
}

#[test]
fn reused_id_keeps_earlier_code_reachable_by_name() {
    let temp = TempDir::new().expect("tempdir");
    let codes = write(
        temp.path(),
        "syscodes.csv",
        "1;x;A;FIRST;a;b;c;d\n1;x;B;SECOND;a;b;c;d\n",
    );
    let subsets = write(temp.path(), "subsets.csv", "FIRST;SECOND;1;0\n");

    let catalogue = Catalogue::load(&codes, &subsets, CatalogueConfig::default()).unwrap();

    let first = catalogue.get_by_name("FIRST").expect("FIRST by name");
    assert_eq!(first.name(), "FIRST");
    assert_eq!(
        first.subset_entries(),
        &[SubsetEntry {
            id: id(1),
            sort_number: 1,
            default_entry: false
        }]
    );

    let second = catalogue.get_by_id(id(1)).expect("SECOND by id");
    assert_eq!(second.name(), "SECOND");
    assert!(second.subset_entries().is_empty());
    assert!(!catalogue.render(second).contains("subset"));

    assert_eq!(catalogue.len(), 1);
    assert!(catalogue.search("FIRST").is_empty());
}
