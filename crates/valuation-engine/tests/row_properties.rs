use std::collections::HashSet;

use proptest::prelude::*;
use valuation_engine::derive::{balance_sheet_totals, net_asset_valuation};
use valuation_engine::{FieldStore, RowCollection, RowOp, RowOutcome, ValuationSettings};
use valuation_model::{Preset, RowLimits, RowRecord, ASSETS, LIABILITIES};

const MAX_ROWS: usize = 10;
const SUBJECTS: [&str; 5] = ["現金預金", "売掛金", "土地", "建物", "借地権"];

fn collection() -> RowCollection {
    RowCollection::new(&ASSETS, RowLimits::new(1, MAX_ROWS, 3), "資産の部")
}

fn arb_row() -> impl Strategy<Value = RowRecord> {
    (
        prop::option::of(0usize..SUBJECTS.len()),
        prop::option::of(0i64..100_000),
    )
        .prop_map(|(name, eval)| {
            RowRecord::from_values([
                name.map(|i| SUBJECTS[i].to_string()).unwrap_or_default(),
                eval.map(|v| v.to_string()).unwrap_or_default(),
                String::new(),
                String::new(),
            ])
        })
}

fn arb_rows() -> impl Strategy<Value = Vec<RowRecord>> {
    prop::collection::vec(arb_row(), 1..=MAX_ROWS)
}

fn seed(rows: &[RowRecord]) -> FieldStore {
    let mut store = FieldStore::new();
    for (i, row) in rows.iter().enumerate() {
        ASSETS.write_row(&mut store, i, row);
    }
    ASSETS.write_count(&mut store, rows.len());
    store
}

fn sorted(mut rows: Vec<RowRecord>) -> Vec<RowRecord> {
    rows.sort();
    rows
}

fn yes(_: &str) -> bool {
    true
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn reorder_is_a_permutation(rows in arb_rows(), from in 0usize..MAX_ROWS, to in 0usize..MAX_ROWS) {
        let (from, to) = (from % rows.len(), to % rows.len());
        let mut store = seed(&rows);
        collection().apply(&mut store, RowOp::Reorder { from, to }, &mut yes);

        let after = collection().rows(&store);
        prop_assert_eq!(after.len(), rows.len());
        prop_assert_eq!(sorted(after.clone()), sorted(rows.clone()));
        prop_assert_eq!(&after[to], &rows[from]);
        for i in rows.len()..MAX_ROWS {
            prop_assert!(ASSETS.read_row(&store, i).is_empty());
        }
    }

    #[test]
    fn confirmed_delete_shifts_the_tail(rows in arb_rows(), index in 0usize..MAX_ROWS) {
        prop_assume!(rows.len() > 1);
        let index = index % rows.len();
        let mut store = seed(&rows);
        let outcome = collection().apply(&mut store, RowOp::Delete { index }, &mut yes);

        prop_assert_eq!(outcome, RowOutcome::Applied { count: rows.len() - 1 });
        let mut expected = rows.clone();
        expected.remove(index);
        prop_assert_eq!(collection().rows(&store), expected);
        prop_assert!(ASSETS.read_row(&store, rows.len() - 1).is_empty());
    }

    #[test]
    fn prune_is_idempotent(rows in arb_rows()) {
        let mut store = seed(&rows);
        collection().apply(&mut store, RowOp::PruneEmpty, &mut yes);
        let once = store.clone();

        let outcome = collection().apply(&mut store, RowOp::PruneEmpty, &mut yes);
        prop_assert_eq!(outcome, RowOutcome::Unchanged);
        prop_assert_eq!(store, once);
    }

    #[test]
    fn preset_fill_never_duplicates_names(
        rows in arb_rows(),
        catalog in prop::collection::vec(0usize..SUBJECTS.len(), 0..8),
    ) {
        // Start from rows whose names are already unique.
        let mut seen = HashSet::new();
        let rows: Vec<RowRecord> = rows
            .into_iter()
            .map(|mut row| {
                let name = row.get(0).to_string();
                if !name.is_empty() && !seen.insert(name) {
                    row.set(0, "");
                }
                row
            })
            .collect();
        let mut store = seed(&rows);
        let presets = catalog.into_iter().map(|i| Preset::new(SUBJECTS[i])).collect();
        collection().apply(&mut store, RowOp::PresetFill { presets }, &mut yes);

        let after = collection().rows(&store);
        let names: Vec<&str> = after.iter().map(|row| row.get(0)).filter(|n| !n.is_empty()).collect();
        let unique: HashSet<&str> = names.iter().copied().collect();
        prop_assert_eq!(names.len(), unique.len());
        for (before, after) in rows.iter().zip(&after) {
            if !before.is_empty() {
                prop_assert_eq!(before, after);
            }
        }
    }

    #[test]
    fn sums_match_row_values(
        assets in prop::collection::vec((0i64..1_000_000, 0i64..1_000_000), 1..=16),
        liabilities in prop::collection::vec((0i64..1_000_000, 0i64..1_000_000), 1..=16),
    ) {
        let mut store = FieldStore::new();
        for (layout, rows) in [(&ASSETS, &assets), (&LIABILITIES, &liabilities)] {
            layout.write_count(&mut store, rows.len());
            for (i, (eval, book)) in rows.iter().enumerate() {
                let row = RowRecord::from_values([
                    format!("科目{i}"),
                    eval.to_string(),
                    book.to_string(),
                    String::new(),
                ]);
                layout.write_row(&mut store, i, &row);
            }
        }

        let settings = ValuationSettings::default();
        let totals = balance_sheet_totals(&store, &settings);
        let a_eval: i64 = assets.iter().map(|(e, _)| e).sum();
        let a_book: i64 = assets.iter().map(|(_, b)| b).sum();
        let l_eval: i64 = liabilities.iter().map(|(e, _)| e).sum();
        let l_book: i64 = liabilities.iter().map(|(_, b)| b).sum();
        prop_assert_eq!(totals.asset_eval, a_eval);
        prop_assert_eq!(totals.asset_book, a_book);
        prop_assert_eq!(totals.liability_eval, l_eval);
        prop_assert_eq!(totals.liability_book, l_book);

        let valuation = net_asset_valuation(&store, &settings);
        prop_assert_eq!(valuation.net_eval, (a_eval - l_eval).max(0));
        prop_assert_eq!(valuation.net_book, (a_book - l_book).max(0));
        prop_assert_eq!(
            valuation.evaluation_difference,
            (valuation.net_eval - valuation.net_book).max(0)
        );
    }

    #[test]
    fn corporate_tax_is_floor_of_37_percent(diff in 0i64..10_000_000_000) {
        let mut store = FieldStore::new();
        ASSETS.write_count(&mut store, 1);
        ASSETS.write_row(
            &mut store,
            0,
            &RowRecord::from_values(["土地".to_string(), diff.to_string(), String::new(), String::new()]),
        );

        let valuation = net_asset_valuation(&store, &ValuationSettings::default());
        prop_assert_eq!(valuation.evaluation_difference, diff);
        let expected = i64::try_from(i128::from(diff) * 37 / 100).unwrap();
        prop_assert_eq!(valuation.corporate_tax_equivalent, expected);
        prop_assert_eq!(valuation.current_net_asset, diff - expected);
    }
}

#[test]
fn corporate_tax_half_boundaries_round_down() {
    for (diff, tax) in [(50, 18), (150, 55), (1, 0), (100, 37)] {
        let mut store = FieldStore::new();
        ASSETS.write_count(&mut store, 1);
        ASSETS.write_row(
            &mut store,
            0,
            &RowRecord::from_values(["土地".to_string(), diff.to_string(), String::new(), String::new()]),
        );
        let valuation = net_asset_valuation(&store, &ValuationSettings::default());
        assert_eq!(valuation.corporate_tax_equivalent, tax, "diff {diff}");
    }
}
