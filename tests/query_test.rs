use marypy::error::FilterError;
use marypy::loader::StrainTable;
use marypy::query::{
    TableQuery, build_view, filter_records, resolve_sort_key, search_strains, select_records,
    sort_records,
};
use marypy::strain::{Column, SortOrder, StrainRecord};
use std::cmp::Ordering;

fn sample() -> Vec<StrainRecord> {
    vec![
        StrainRecord::new("White Widow", Some(4.3), Some(19), "hybrid"),
        StrainRecord::new("Blue Dream", Some(4.4), Some(21), "hybrid"),
        StrainRecord::new("Sour Diesel", Some(4.3), Some(22), "sativa"),
        StrainRecord::new("Northern Lights", Some(4.5), Some(16), "indica"),
        StrainRecord::new("Black Widow", None, None, "hybrid"),
        StrainRecord::new("Bubba Kush", Some(4.4), Some(16), "indica"),
        StrainRecord::new("blue widow", Some(4.2), Some(18), "hybrid"),
    ]
}

// Index of each record in the input, so stability can be checked on ties.
fn positions(input: &[StrainRecord], output: &[StrainRecord]) -> Vec<usize> {
    output
        .iter()
        .map(|r| input.iter().position(|x| x == r).unwrap())
        .collect()
}

#[test]
fn sorting_is_monotonic_and_stable_for_every_key_and_direction() {
    let input = sample();
    for key in Column::ALL {
        for order in [SortOrder::Asc, SortOrder::Desc] {
            let mut sorted = input.clone();
            sort_records(&mut sorted, key, order);
            let pos = positions(&input, &sorted);

            for (i, pair) in sorted.windows(2).enumerate() {
                let cmp = pair[0].compare(&pair[1], key);
                match order {
                    SortOrder::Asc => assert_ne!(cmp, Ordering::Greater, "{} asc", key),
                    SortOrder::Desc => assert_ne!(cmp, Ordering::Less, "{} desc", key),
                }
                if cmp == Ordering::Equal {
                    assert!(pos[i] < pos[i + 1], "{} {:?} not stable", key, order);
                }
            }
        }
    }
    println!("✓ Sorting is stable and monotonic for all keys and directions");
}

#[test]
fn rating_descending_example() {
    let mut records = vec![
        StrainRecord::new("A", Some(3.0), None, ""),
        StrainRecord::new("B", Some(5.0), None, ""),
    ];
    sort_records(&mut records, Column::Rating, SortOrder::Desc);
    let ratings: Vec<Option<f64>> = records.iter().map(|r| r.rating).collect();
    assert_eq!(ratings, [Some(5.0), Some(3.0)]);
}

#[test]
fn invalid_sort_key_behaves_like_default() {
    let table = StrainTable::new(sample());
    for order in ["asc", "desc"] {
        let invalid = TableQuery {
            sort_by: Some("Flavor".to_string()),
            order: Some(order.to_string()),
            ..TableQuery::default()
        };
        let default = TableQuery {
            sort_by: Some("Name".to_string()),
            order: Some(order.to_string()),
            ..TableQuery::default()
        };
        assert_eq!(select_records(&table, &invalid), select_records(&table, &default));
    }
    assert_eq!(resolve_sort_key(Some("rating")), Column::Name);
}

#[test]
fn name_sort_is_case_sensitive() {
    let mut records = sample();
    sort_records(&mut records, Column::Name, SortOrder::Asc);
    assert_eq!(records.last().unwrap().name, "blue widow");
}

#[test]
fn filter_returns_exactly_the_case_insensitive_matches() {
    let records = sample();
    for term in ["widow", "WIDOW", "Blue", "ue dr", "x", ""] {
        let found = filter_records(&records, term, "Name").unwrap();
        let expected: Vec<StrainRecord> = records
            .iter()
            .filter(|r| r.name.to_lowercase().contains(&term.to_lowercase()))
            .cloned()
            .collect();
        assert_eq!(found, expected, "term {:?}", term);
    }

    let widows = filter_records(&records, "widow", "Name").unwrap();
    assert_eq!(widows.len(), 3);
}

#[test]
fn filter_on_other_columns() {
    let records = sample();
    let indicas = filter_records(&records, "INDICA", "Type").unwrap();
    assert_eq!(indicas.len(), 2);

    let thc = filter_records(&records, "16", "THC%").unwrap();
    assert_eq!(thc.len(), 2);
}

#[test]
fn filter_term_is_literal_not_a_pattern() {
    let records = vec![
        StrainRecord::new("AK-47", Some(4.4), Some(18), "hybrid"),
        StrainRecord::new("AK 47", Some(4.4), Some(18), "hybrid"),
    ];
    let found = filter_records(&records, "k-4", "Name").unwrap();
    assert_eq!(found.len(), 1);
    assert!(filter_records(&records, ".*", "Name").unwrap().is_empty());
}

#[test]
fn unknown_column_is_an_error_value() {
    let records = sample();
    let err = filter_records(&records, "widow", "Effects").unwrap_err();
    assert_eq!(err, FilterError::InvalidColumn("Effects".to_string()));
    assert_eq!(err.to_string(), "Invalid column name 'Effects'");
}

#[test]
fn search_defaults_to_name() {
    let table = StrainTable::new(sample());
    let found = search_strains(&table, "widow", None).unwrap();
    assert_eq!(found.len(), 3);
    assert!(search_strains(&table, "widow", Some("name")).is_err());
}

#[test]
fn view_filters_then_sorts_then_pages() {
    let table = StrainTable::new(sample());
    let query = TableQuery {
        sort_by: Some("THC%".to_string()),
        order: Some("desc".to_string()),
        search: Some("widow".to_string()),
        page: Some(0),
        page_size: Some(2),
    };
    let view = build_view(&table, &query);

    assert_eq!(view.total, 3);
    assert_eq!(view.page_count, 2);
    let names: Vec<&str> = view.records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["White Widow", "blue widow"]);

    let last = build_view(&table, &TableQuery { page: Some(1), ..query });
    assert_eq!(last.records.len(), 1);
    assert_eq!(last.records[0].name, "Black Widow");
}

#[test]
fn initial_view_is_first_ten_by_name() {
    let records: Vec<StrainRecord> = (0..15)
        .rev()
        .map(|i| StrainRecord::new(&format!("Strain {:02}", i), Some(4.0), Some(20), "hybrid"))
        .collect();
    let table = StrainTable::new(records);
    let view = build_view(&table, &TableQuery::default());

    assert_eq!(view.page, 0);
    assert_eq!(view.page_size, 10);
    assert_eq!(view.page_count, 2);
    assert_eq!(view.records.len(), 10);
    assert_eq!(view.records[0].name, "Strain 00");
    assert_eq!(view.records[9].name, "Strain 09");
}

#[test]
fn blank_search_shows_everything() {
    let table = StrainTable::new(sample());
    let query = TableQuery {
        search: Some("   ".to_string()),
        page_size: Some(100),
        ..TableQuery::default()
    };
    assert_eq!(build_view(&table, &query).total, table.len());
}

#[test]
fn page_size_is_clamped_to_allowed_range() {
    let table = StrainTable::new(sample());

    let tiny = build_view(
        &table,
        &TableQuery {
            page_size: Some(0),
            ..TableQuery::default()
        },
    );
    assert_eq!(tiny.page_size, 1);
    assert_eq!(tiny.records.len(), 1);
    assert_eq!(tiny.page_count, table.len());

    let huge = build_view(
        &table,
        &TableQuery {
            page_size: Some(500),
            ..TableQuery::default()
        },
    );
    assert_eq!(huge.page_size, 100);
    assert_eq!(huge.records.len(), table.len());
    assert_eq!(huge.page_count, 1);
}
