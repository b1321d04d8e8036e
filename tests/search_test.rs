mod common;

use assert2::check;
use common::{hit_codes, record, sample_store};
use parts_catalog::{CatalogStore, FilterAxis, Filters, MAX_RESULTS, SearchOptions};
use rstest::rstest;

/// Empty query: every filtered candidate matches, ordered by code with
/// numeric-aware comparison.
#[rstest]
fn empty_query_lists_filtered_set_in_code_order(sample_store: CatalogStore) {
    let filters = Filters {
        category: Some("REFRIGERACION".into()),
        subcategory: Some("BOMBAS".into()),
        ..Filters::default()
    };
    let outcome = sample_store.search("", &filters);
    check!(hit_codes(&outcome) == vec!["BI372 10", "BI372 20", "BI810"]);
    check!(outcome.total == 3);
}

/// Exact match outranks prefix outranks substring; equal tiers fall back
/// to code order.
#[rstest]
fn code_relevance_ordering(sample_store: CatalogStore) {
    let outcome = sample_store.search("271", &Filters::default());
    // LKTBN271 and X271X both rank as Contains and sort by code
    check!(hit_codes(&outcome) == vec!["271", "271X", "LKTBN271", "X271X"]);
}

/// Query tokens are ANDed across the record's combined field text.
#[rstest]
fn token_and_semantics(sample_store: CatalogStore) {
    let hit = sample_store.search("aceite bosch", &Filters::default());
    check!(hit_codes(&hit) == vec!["W712/75"]);

    let miss = sample_store.search("aceite renault", &Filters::default());
    check!(miss.total == 0);
}

/// Matching is diacritic-insensitive via normalization.
#[rstest]
fn diacritic_insensitive_matching(sample_store: CatalogStore) {
    let outcome = sample_store.search("radiador alvarez", &Filters::default());
    check!(hit_codes(&outcome) == vec!["RGU477"]);
}

/// Segmented code search walks cleaned segments left to right.
#[rstest]
fn segmented_code_search(sample_store: CatalogStore) {
    let forward = sample_store.search("KTB 271", &Filters::default());
    check!(hit_codes(&forward).contains(&"LKTBN271".to_string()));

    // single-token reversed query: order violation, designed non-match
    let reversed = sample_store.search("271KTB", &Filters::default());
    check!(!hit_codes(&reversed).contains(&"LKTBN271".to_string()));
}

/// Punctuation and zero padding never block code matches.
#[rstest]
fn punctuation_and_padding_insensitive_codes(sample_store: CatalogStore) {
    let outcome = sample_store.search("w712 75", &Filters::default());
    check!(hit_codes(&outcome).contains(&"W712/75".to_string()));

    let padded = sample_store.search("lktbn00271", &Filters::default());
    check!(hit_codes(&padded) == vec!["LKTBN271"]);
}

/// Categorical filters narrow before text matching.
#[rstest]
fn filters_apply_before_text_match(sample_store: CatalogStore) {
    let unfiltered = sample_store.search("correa", &Filters::default());
    check!(unfiltered.total == 3);

    let filters = Filters {
        brand: Some("GATES".into()),
        ..Filters::default()
    };
    let outcome = sample_store.search("correa", &filters);
    check!(hit_codes(&outcome) == vec!["271", "271X"]);
}

/// 150 matching candidates: 100 displayed, 150 reported.
#[test]
fn result_cap_and_total() {
    let mut store = CatalogStore::new();
    let batch: Vec<_> = (0..150)
        .map(|i| {
            record(
                &format!("FIL{i:03}"),
                "FILTRO DE CABINA",
                "FILTROS",
                "CABINA",
                "MANN",
                1,
            )
        })
        .collect();
    store.load(batch).unwrap();

    let outcome = store.search("filtro", &Filters::default());
    check!(outcome.hits.len() == MAX_RESULTS);
    check!(outcome.total == 150);
}

/// Changing a selection never narrows that axis's own option list.
#[rstest]
fn cross_filter_independence(sample_store: CatalogStore) {
    let unfiltered = sample_store.available_values(FilterAxis::Category, &Filters::default());

    let filters = Filters {
        category: Some("FILTROS".into()),
        ..Filters::default()
    };
    let categories = sample_store.available_values(FilterAxis::Category, &filters);
    check!(categories == unfiltered);

    // the dependent axes do narrow
    let subcategories = sample_store.available_values(FilterAxis::Subcategory, &filters);
    check!(subcategories == vec!["ACEITE"]);
    let brands = sample_store.available_values(FilterAxis::Brand, &filters);
    check!(brands == vec!["BOSCH"]);
}

/// The fuzzy strategy is a pluggable opt-in, off by default.
#[rstest]
fn fuzzy_strategy_opt_in(sample_store: CatalogStore) {
    let strict = sample_store.search("bonba agua", &Filters::default());
    check!(strict.total == 0);

    let fuzzy = sample_store.search_with(
        "bonba agua",
        &Filters::default(),
        SearchOptions { fuzzy: true },
    );
    check!(fuzzy.total == 3);
}
