//! Column editing scenarios driven through the controller.

use tabula_tests::prelude::*;

mod append {
    use super::*;

    // ========== TEST: append_column_prompts_one_value_per_row ==========
    #[test]
    fn test_append_column_prompts_one_value_per_row() {
        // GIVEN the two-row table
        let table = people_table();
        let form = ScriptedForm::new().submit(&["city", "Paris", "London"]);
        let mut controller = controller(&table, form);

        // WHEN a city column is appended
        let outcome = controller.append_column().unwrap();

        // THEN the form asked per row key and the cells landed in order
        assert!(outcome.is_applied());
        let prompts: Vec<&str> = controller.form().requests()[0]
            .fields
            .iter()
            .map(|f| f.prompt.as_str())
            .collect();
        assert_eq!(prompts, vec!["Column Name", "0", "1"]);
        assert_eq!(
            controller.view().headers(),
            &["[index]", "name", "age", "city"]
        );
        assert_eq!(controller.view().rows()[0], vec!["0", "Alice", "30", "Paris"]);
        assert_eq!(controller.view().rows()[1], vec!["1", "Bob", "25", "London"]);
    }

    // ========== TEST: append_column_infers_cell_types ==========
    #[test]
    fn test_append_column_infers_cell_types() {
        let table = people_table();
        let form = ScriptedForm::new().submit(&["score", "2.5", ""]);
        let mut controller = controller(&table, form);

        controller.append_column().unwrap();

        let table = table.borrow();
        assert_eq!(*table.get_cell(0, 2).unwrap(), Value::from(2.5));
        assert!(table.get_cell(1, 2).unwrap().is_null());
    }

    // ========== TEST: duplicate_label_is_rejected_and_reported ==========
    #[test]
    fn test_duplicate_label_is_rejected_and_reported() {
        let table = people_table();
        let form = ScriptedForm::new().submit(&["name", "", ""]);
        let mut controller = controller(&table, form);

        let outcome = controller.append_column().unwrap();

        assert!(outcome.is_rejected());
        assert!(controller.form().notifications()[0].contains("duplicate"));
        assert_eq!(table.borrow().column_count(), 2);
    }
}

mod moves {
    use super::*;

    // ========== TEST: move_column_to_end ==========
    #[test]
    fn test_move_column_to_end() {
        let table = people_table();
        let form = ScriptedForm::new().submit(&["0. name", "2. move to end"]);
        let mut controller = controller(&table, form);

        let outcome = controller.move_column().unwrap();

        assert!(outcome.is_applied());
        assert_eq!(controller.view().headers(), &["[index]", "age", "name"]);
        assert_eq!(controller.view().rows()[0], vec!["0", "30", "Alice"]);
    }

    // ========== TEST: move_column_before_an_earlier_column ==========
    #[test]
    fn test_move_column_before_an_earlier_column() {
        let table = people_table();
        let form = ScriptedForm::new().submit(&["1. age", "0. name"]);
        let mut controller = controller(&table, form);

        controller.move_column().unwrap();

        assert_eq!(controller.view().headers(), &["[index]", "age", "name"]);
    }

    // ========== TEST: answer_outside_the_choices_is_rejected ==========
    #[test]
    fn test_answer_outside_the_choices_is_rejected() {
        let table = people_table();
        let form = ScriptedForm::new().submit(&["age", "0. name"]);
        let mut controller = controller(&table, form);

        // "age" is not the enumerated "1. age" form of the answer.
        let outcome = controller.move_column().unwrap();

        assert!(outcome.is_rejected());
        assert_eq!(controller.view().headers(), &["[index]", "name", "age"]);
    }
}

mod delete {
    use super::*;

    // ========== TEST: delete_column_removes_label_and_cells ==========
    #[test]
    fn test_delete_column_removes_label_and_cells() {
        let table = people_table();
        let form = ScriptedForm::new().submit(&["1. age"]);
        let mut controller = controller(&table, form);

        let outcome = controller.delete_column().unwrap();

        assert!(outcome.is_applied());
        assert_eq!(controller.view().headers(), &["[index]", "name"]);
        assert_eq!(controller.view().rows()[0], vec!["0", "Alice"]);
    }

    // ========== TEST: cancelled_delete_applies_nothing ==========
    #[test]
    fn test_cancelled_delete_applies_nothing() {
        let table = people_table();
        let form = ScriptedForm::new().cancel();
        let mut controller = controller(&table, form);

        let outcome = controller.delete_column().unwrap();

        assert_eq!(outcome, MutationOutcome::Cancelled);
        assert_eq!(table.borrow().column_count(), 2);
    }
}
