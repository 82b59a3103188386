//! CSV import/export scenarios against real files.

use std::fs;

use tabula_interchange::{read_csv, write_csv};
use tabula_tests::prelude::*;

// ========== TEST: edit_then_export_then_import ==========
#[test]
fn test_edit_then_export_then_import() {
    // GIVEN the two-row table with one row appended through the controller
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("people.csv");
    let table = people_table();
    let form = ScriptedForm::new().submit(&["", "Cara", "40"]);
    let mut controller = controller(&table, form);
    controller.append_row().unwrap();

    // WHEN the table is written to disk and read back
    write_csv(&path, &table.borrow(), false).unwrap();
    let reread = read_csv(&path).unwrap();

    // THEN labels, cells, and types survive the trip
    assert_eq!(
        reread.column_labels(),
        &["name".to_string(), "age".to_string()]
    );
    assert_eq!(reread.row_count(), 3);
    assert_eq!(*reread.get_cell(2, 0).unwrap(), Value::from("Cara"));
    assert_eq!(*reread.get_cell(2, 1).unwrap(), Value::from(40i64));
    assert!(reread.has_synthetic_index());
}

// ========== TEST: export_preserving_a_named_index ==========
#[test]
fn test_export_preserving_a_named_index() {
    // GIVEN a table keyed by name with the name column folded out
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("keyed.csv");
    let table = people_table();
    {
        let mut table = table.borrow_mut();
        table
            .set_row_keys(
                vec![
                    RowKey::single(Value::from("Alice")),
                    RowKey::single(Value::from("Bob")),
                ],
                vec![Some("name".to_string())],
            )
            .unwrap();
        table.delete_column(0).unwrap();
    }

    // WHEN it is exported with the index preserved
    write_csv(&path, &table.borrow(), true).unwrap();

    // THEN the key leads every line under its component name
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "name,age\nAlice,30\nBob,25\n"
    );
}

// ========== TEST: import_failure_names_the_offending_line ==========
#[test]
fn test_import_failure_names_the_offending_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ragged.csv");
    fs::write(&path, "name,age\nAlice,30\nBob\n").unwrap();

    let err = read_csv(&path).unwrap_err();

    assert!(err.to_string().contains("row 3"));
}
