//! Pagination type tests.

use comercial_api::types::{Paginated, PaginationParams};

#[test]
fn offset_is_page_index_times_page_size() {
    let params = PaginationParams {
        page: 3,
        per_page: 20,
    };

    assert_eq!(params.offset(), 40);
    assert_eq!(params.limit(), 20);
}

#[test]
fn page_size_is_clamped_not_rejected() {
    let zero = PaginationParams {
        page: 1,
        per_page: 0,
    };
    assert_eq!(zero.limit(), 1);

    let huge = PaginationParams {
        page: 1,
        per_page: 10_000,
    };
    assert_eq!(huge.limit(), 100);
}

#[test]
fn page_zero_is_treated_as_the_first_page() {
    let params = PaginationParams {
        page: 0,
        per_page: 20,
    };

    assert_eq!(params.offset(), 0);
}

#[test]
fn params_deserialize_with_defaults() {
    let params: PaginationParams = serde_json::from_str("{}").unwrap();

    assert_eq!(params.page, 1);
    assert_eq!(params.per_page, 20);

    let partial: PaginationParams = serde_json::from_str(r#"{"page": 5}"#).unwrap();
    assert_eq!(partial.page, 5);
    assert_eq!(partial.per_page, 20);
}

#[test]
fn meta_reports_the_true_total_even_for_an_empty_page() {
    // page beyond the data set: no items, but the total still reflects
    // the match count
    let page: Paginated<i64> = Paginated::new(vec![], 9, 20, 42);

    assert!(page.data.is_empty());
    assert_eq!(page.meta.total, 42);
    assert_eq!(page.meta.total_pages, 3);
}

#[test]
fn total_pages_rounds_up() {
    let exact: Paginated<i64> = Paginated::new(vec![1, 2], 1, 2, 4);
    assert_eq!(exact.meta.total_pages, 2);

    let remainder: Paginated<i64> = Paginated::new(vec![1, 2], 1, 2, 5);
    assert_eq!(remainder.meta.total_pages, 3);

    let empty: Paginated<i64> = Paginated::new(vec![], 1, 2, 0);
    assert_eq!(empty.meta.total_pages, 0);
}
