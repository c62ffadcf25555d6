use crate::AnalyticsQuery;

#[test]
fn test_empty_query_yields_no_pairs() {
    let query = AnalyticsQuery::default();
    assert!(query.is_empty());
    assert!(query.to_query_pairs().is_empty());
}

#[test]
fn test_all_fields_in_wire_order() {
    let query = AnalyticsQuery {
        start_date: Some("2024-01-01".to_string()),
        end_date: Some("2024-02-01".to_string()),
        feature: Some("export".to_string()),
    };
    assert_eq!(
        query.to_query_pairs(),
        vec![
            ("start_date", "2024-01-01"),
            ("end_date", "2024-02-01"),
            ("feature", "export"),
        ]
    );
}

#[test]
fn test_absent_fields_are_omitted() {
    let query = AnalyticsQuery {
        start_date: Some("2024-01-01".to_string()),
        end_date: None,
        feature: Some("export".to_string()),
    };
    assert_eq!(
        query.to_query_pairs(),
        vec![("start_date", "2024-01-01"), ("feature", "export")]
    );
}
