use chrono::NaiveDate;
use slvm::errors::AppError;
use slvm::models::changeset::{Changeset, parse_assignments, parse_cli_value};
use slvm::models::schema::{RESULT_COLUMNS, TableKind};
use slvm::models::value::Value;
use slvm::utils::date::parse_day;
use slvm::utils::{format_handicap, format_playing_handicap};

#[test]
fn test_changeset_accepts_grid_key_names() {
    let changeset = Changeset::from_json_str(
        r#"{"edited_rows": {"2": {"score2": 1}}, "added_rows": [{"day": "2025-04-01"}], "deleted_rows": [0, 3]}"#,
    )
    .unwrap();

    assert_eq!(changeset.edited.len(), 1);
    assert!(changeset.edited.contains_key(&2));
    assert_eq!(changeset.added.len(), 1);
    assert_eq!(changeset.deleted, vec![0, 3]);
    assert!(!changeset.is_empty());
}

#[test]
fn test_changeset_missing_key_is_malformed() {
    let err = Changeset::from_json_str(r#"{"edited": {}, "added": []}"#).unwrap_err();
    assert!(matches!(err, AppError::Json(_)));

    let err =
        Changeset::from_json_str(r#"{"edited": {}, "added": [], "deleted": [], "extra": 1}"#)
            .unwrap_err();
    assert!(matches!(err, AppError::Json(_)));
}

#[test]
fn test_cli_values() {
    assert_eq!(parse_cli_value("3"), serde_json::json!(3));
    assert_eq!(parse_cli_value("-1.5"), serde_json::json!(-1.5));
    assert_eq!(parse_cli_value("null"), serde_json::Value::Null);
    assert_eq!(parse_cli_value(""), serde_json::Value::Null);
    assert_eq!(parse_cli_value("Marta"), serde_json::json!("Marta"));
    assert_eq!(parse_cli_value("2025-04-01"), serde_json::json!("2025-04-01"));
}

#[test]
fn test_assignments() {
    let patch = parse_assignments(&["score2=1".into(), "player3 = Marta".into()]).unwrap();
    assert_eq!(patch.get("score2"), Some(&serde_json::json!(1)));
    assert_eq!(patch.get("player3"), Some(&serde_json::json!("Marta")));

    assert!(matches!(
        parse_assignments(&["score2".into()]),
        Err(AppError::InvalidChangeset(_))
    ));
}

#[test]
fn test_value_conversion_per_column() {
    let (_, score) = TableKind::Results.column("score1").unwrap();
    let (_, day) = TableKind::Results.column("day").unwrap();
    let (_, player) = TableKind::Results.column("p3").unwrap();

    assert_eq!(Value::from_json(score, &serde_json::json!(2)).unwrap(), Value::Integer(2));
    assert_eq!(Value::from_json(score, &serde_json::json!(2.0)).unwrap(), Value::Integer(2));
    assert_eq!(Value::from_json(score, &serde_json::json!(" 4 ")).unwrap(), Value::Integer(4));
    assert!(Value::from_json(score, &serde_json::json!(2.5)).is_err());
    assert!(matches!(
        Value::from_json(score, &serde_json::json!(1e20)),
        Err(AppError::InvalidField { .. })
    ));
    assert!(Value::from_json(score, &serde_json::json!(-1e19)).is_err());
    assert!(Value::from_json(score, &serde_json::json!(true)).is_err());

    assert_eq!(
        Value::from_json(day, &serde_json::json!("2025-04-01T00:00:00")).unwrap(),
        Value::Date(NaiveDate::from_ymd_opt(2025, 4, 1).unwrap())
    );
    assert!(matches!(
        Value::from_json(day, &serde_json::json!("someday")),
        Err(AppError::InvalidDate(_))
    ));

    assert_eq!(Value::from_json(player, &serde_json::json!("")).unwrap(), Value::Null);
    assert_eq!(Value::from_json(player, &serde_json::Value::Null).unwrap(), Value::Null);
}

#[test]
fn test_column_lookup() {
    assert_eq!(RESULT_COLUMNS.len(), 10);
    assert_eq!(TableKind::Results.column("Score 2").unwrap().0, 5);
    assert_eq!(TableKind::Results.column("s2").unwrap().0, 5);
    assert_eq!(TableKind::Players.column("playing").unwrap().1.name, "handicap_playing");
    assert!(TableKind::from_name("scores").is_err());
}

#[test]
fn test_day_formats() {
    let d = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap();
    assert_eq!(parse_day("2025-03-15"), Some(d));
    assert_eq!(parse_day("15-03-2025"), Some(d));
    assert_eq!(parse_day("2025-03-15 00:00:00"), Some(d));
    assert_eq!(parse_day("15/03/2025"), None);
}

#[test]
fn test_handicap_formatting() {
    assert_eq!(format_handicap(17.2), "17.2");
    assert_eq!(format_handicap(-0.8), "+0.8");
    assert_eq!(format_playing_handicap(-1), "+1");
    assert_eq!(format_playing_handicap(19), "19");
}
