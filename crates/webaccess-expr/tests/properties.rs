//! Generative coverage for translation and validation laws.

use proptest::prelude::*;
use proptest::sample::Index;
use webaccess_expr::{
    LabelTable, capture_values, is_resolved_form, is_structurally_valid,
    strip_accelerator_markers, translate_id_to_label, translate_label_to_id, translate_values,
};

/// Negated, joined with `|` rather than `&`, spaces around the operator, value.
type Term = (bool, bool, usize, Index);

fn label() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z]{1,6}", 1..=3).prop_map(|words| words.join(" "))
}

fn table() -> impl Strategy<Value = LabelTable> {
    prop::collection::btree_set(label(), 1..8).prop_map(|labels| {
        labels
            .into_iter()
            .zip((1_i64..).step_by(3))
            .map(|(label, id)| (id, label))
            .collect()
    })
}

fn terms(min: usize) -> impl Strategy<Value = Vec<Term>> {
    prop::collection::vec(
        (any::<bool>(), any::<bool>(), 0..3_usize, any::<Index>()),
        min..6,
    )
}

fn ids(table: &LabelTable) -> Vec<String> {
    table.iter().map(|(id, _)| id.to_string()).collect()
}

fn labels(table: &LabelTable) -> Vec<String> {
    table.iter().map(|(_, label)| label.to_owned()).collect()
}

/// Render `terms` over `values`; `doubled` repeats `&` right after the first
/// operator.
fn render(terms: &[Term], values: &[String], doubled: bool) -> String {
    let mut expr = String::new();
    for (position, (negated, or, spacing, index)) in terms.iter().enumerate() {
        let pad = " ".repeat(*spacing);
        if position > 0 {
            expr.push_str(&pad);
            expr.push(if *or { '|' } else { '&' });
            if doubled && position == 1 {
                expr.push('&');
            }
            expr.push_str(&pad);
        }
        if *negated {
            expr.push('!');
        }
        expr.push_str(index.get::<String>(values));
    }
    expr
}

proptest! {
    #[test]
    fn id_form_round_trips(table in table(), terms in terms(1)) {
        let expr = render(&terms, &ids(&table), false);
        prop_assert!(is_resolved_form(&expr));
        let edited = translate_id_to_label(&expr, &table);
        prop_assert_eq!(translate_label_to_id(&edited, &table), expr);
    }

    #[test]
    fn label_form_round_trips(table in table(), terms in terms(1)) {
        let expr = render(&terms, &labels(&table), false);
        prop_assert!(is_structurally_valid(&expr));
        let resolved = translate_label_to_id(&expr, &table);
        prop_assert!(is_resolved_form(&resolved), "{expr:?} became {resolved:?}");
        prop_assert_eq!(translate_id_to_label(&resolved, &table), expr);
    }

    #[test]
    fn well_formed_expressions_have_no_markers(table in table(), terms in terms(1)) {
        let expr = render(&terms, &labels(&table), false);
        prop_assert_eq!(strip_accelerator_markers(&expr), expr.as_str());
    }

    #[test]
    fn doubled_operators_stay_malformed(table in table(), terms in terms(2)) {
        let expr = render(&terms, &labels(&table), true);
        prop_assert!(!is_structurally_valid(&strip_accelerator_markers(&expr)), "{expr:?}");
    }

    #[test]
    fn identity_translation_is_lossless(expr in any::<String>()) {
        prop_assert_eq!(translate_values(&expr, |value| value), expr);
    }

    #[test]
    fn spans_are_ordered_slices_of_the_source(expr in "[a-z !&|\t]{0,24}") {
        let mut cursor = 0;
        for span in capture_values(&expr) {
            prop_assert!(span.start >= cursor && span.start < span.end);
            prop_assert_eq!(expr.get(span.start..span.end), Some(span.text));
            prop_assert!(!span.text.starts_with(' '));
            cursor = span.end;
        }
    }
}
