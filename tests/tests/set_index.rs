//! Re-keying scenarios driven through the controller.

use tabula_tests::prelude::*;

mod from_columns {
    use super::*;

    // ========== TEST: set_index_promotes_a_column_to_the_key ==========
    #[test]
    fn test_set_index_promotes_a_column_to_the_key() {
        // GIVEN the two-row table
        let table = people_table();
        let form = ScriptedForm::new().submit(&["False", "True", "False"]);
        let mut controller = controller(&table, form);

        // WHEN the index is set from the name column, dropping the old one
        let outcome = controller.set_index().unwrap();

        // THEN rows are keyed by name and the column left the data set
        assert!(outcome.is_applied());
        assert_eq!(controller.view().headers(), &["[name]", "age"]);
        assert_eq!(controller.view().rows()[0], vec!["Alice", "30"]);
        assert_eq!(controller.view().rows()[1], vec!["Bob", "25"]);
        let table = table.borrow();
        assert_eq!(table.index_names(), &[Some("name".to_string())]);
        assert_eq!(table.column_labels(), &["age".to_string()]);
    }

    // ========== TEST: set_index_from_two_columns_makes_a_composite_key ==========
    #[test]
    fn test_set_index_from_two_columns_makes_a_composite_key() {
        let table = people_table();
        let form = ScriptedForm::new().submit(&["False", "True", "True"]);
        let mut controller = controller(&table, form);

        let outcome = controller.set_index().unwrap();

        assert!(outcome.is_applied());
        assert_eq!(controller.view().headers(), &["[name]", "[age]"]);
        assert_eq!(controller.view().rows()[0], vec!["Alice", "30"]);
        let table = table.borrow();
        assert_eq!(table.index_width(), 2);
        assert_eq!(table.column_count(), 0);
        assert_eq!(
            *table.row_key_at(0).unwrap(),
            RowKey::composite(vec![Value::from("Alice"), Value::from(30i64)])
        );
    }

    // ========== TEST: keeping_the_old_index_folds_it_into_the_columns ==========
    #[test]
    fn test_keeping_the_old_index_folds_it_into_the_columns() {
        // GIVEN the two-row table keyed by the synthetic counter
        let table = people_table();
        let form = ScriptedForm::new().submit(&["True", "True", "False"]);
        let mut controller = controller(&table, form);

        // WHEN the index moves to name, keeping the old one
        let outcome = controller.set_index().unwrap();

        // THEN the old counter leads the data columns under "index"
        assert!(outcome.is_applied());
        assert_eq!(controller.view().headers(), &["[name]", "index", "age"]);
        assert_eq!(controller.view().rows()[0], vec!["Alice", "0", "30"]);
        assert_eq!(controller.view().rows()[1], vec!["Bob", "1", "25"]);
        assert_eq!(
            table.borrow().column_labels(),
            &["index".to_string(), "age".to_string()]
        );
    }
}

mod to_ordinals {
    use super::*;

    // ========== TEST: choosing_nothing_rekeys_to_a_fresh_counter ==========
    #[test]
    fn test_choosing_nothing_rekeys_to_a_fresh_counter() {
        // GIVEN a table keyed by name
        let table = people_table();
        table
            .borrow_mut()
            .set_row_keys(
                vec![
                    RowKey::single(Value::from("Alice")),
                    RowKey::single(Value::from("Bob")),
                ],
                vec![Some("name".to_string())],
            )
            .unwrap();
        let form = ScriptedForm::new().submit(&["False", "False", "False"]);
        let mut controller = controller(&table, form);

        // WHEN the index is reset without keeping the old one
        let outcome = controller.set_index().unwrap();

        // THEN the key is the counter again and the names are gone
        assert!(outcome.is_applied());
        assert_eq!(controller.view().headers(), &["[index]", "name", "age"]);
        assert_eq!(controller.view().rows()[0], vec!["0", "Alice", "30"]);
        assert!(table.borrow().has_synthetic_index());
    }

    // ========== TEST: resetting_while_keeping_preserves_the_old_keys ==========
    #[test]
    fn test_resetting_while_keeping_preserves_the_old_keys() {
        let table = people_table();
        let form = ScriptedForm::new().submit(&["True", "False", "False"]);
        let mut controller = controller(&table, form);

        let outcome = controller.set_index().unwrap();

        assert!(outcome.is_applied());
        assert_eq!(
            controller.view().headers(),
            &["[index]", "index", "name", "age"]
        );
        assert_eq!(controller.view().rows()[0], vec!["0", "0", "Alice", "30"]);
        assert_eq!(table.borrow().column_count(), 3);
    }
}

mod rejections {
    use super::*;

    // ========== TEST: duplicate_prospective_keys_are_rejected ==========
    #[test]
    fn test_duplicate_prospective_keys_are_rejected() {
        // GIVEN a third row sharing Alice's age
        let table = people_table();
        table
            .borrow_mut()
            .append_row(
                RowKey::single(2i64),
                vec![Value::from("Carol"), Value::from(30i64)],
            )
            .unwrap();
        let form = ScriptedForm::new().submit(&["False", "False", "True"]);
        let mut controller = controller(&table, form);

        // WHEN the index would be set from the age column
        let outcome = controller.set_index().unwrap();

        // THEN the duplicate is rejected and nothing changed
        assert!(outcome.is_rejected());
        assert!(controller.form().notifications()[0].contains("duplicate"));
        let table = table.borrow();
        assert!(table.has_synthetic_index());
        assert_eq!(table.column_count(), 2);
    }

    // ========== TEST: folded_name_colliding_with_a_column_is_rejected ==========
    #[test]
    fn test_folded_name_colliding_with_a_column_is_rejected() {
        // GIVEN a table whose data columns already include "index"
        let raw = OrderedTable::with_columns(vec!["index".into(), "name".into()]).unwrap();
        let table = SharedTable::new(raw);
        table
            .borrow_mut()
            .append_row(
                RowKey::single(0i64),
                vec![Value::from(9i64), Value::from("Alice")],
            )
            .unwrap();
        let form = ScriptedForm::new().submit(&["True", "False", "True"]);
        let mut controller = controller(&table, form);

        // WHEN keeping the unnamed old index would fold it in as "index"
        let outcome = controller.set_index().unwrap();

        // THEN the collision is rejected before anything moves
        assert!(outcome.is_rejected());
        let table = table.borrow();
        assert!(table.has_synthetic_index());
        assert_eq!(
            table.column_labels(),
            &["index".to_string(), "name".to_string()]
        );
    }

    // ========== TEST: cancelling_the_form_changes_nothing ==========
    #[test]
    fn test_cancelling_the_form_changes_nothing() {
        let table = people_table();
        let form = ScriptedForm::new().cancel();
        let mut controller = controller(&table, form);

        let outcome = controller.set_index().unwrap();

        assert_eq!(outcome, MutationOutcome::Cancelled);
        assert!(table.borrow().has_synthetic_index());
    }
}
