//! Inner join of the creature table with the attributes table.

use std::collections::HashSet;

use polars::prelude::*;
use tier_model::NAME_COLUMN;
use tracing::debug;

use crate::error::Result;

/// Suffix given to attribute columns whose names collide with creature columns.
pub const ATTRIBUTE_SUFFIX: &str = "_attr";

const CREATURE_ORDER: &str = "__creature_row";
const ATTRIBUTE_ORDER: &str = "__attribute_row";

/// Joins creatures with their attributes on exact, case-sensitive `name`.
///
/// Names found in only one table are dropped. A name repeated in either
/// table yields every pairing for that name. Rows come out in creature-table
/// order, then attribute-table order, so the result depends only on the two
/// inputs.
pub fn join_attributes(creatures: &DataFrame, attributes: &DataFrame) -> Result<DataFrame> {
    let attribute_rows = attributes.height();
    let attribute_names = attributes.column(NAME_COLUMN)?.cast(&DataType::String)?;
    let mut attributes = attributes.clone();
    attributes.with_column(attribute_names.clone())?;

    let known: HashSet<&str> = attribute_names.str()?.into_iter().flatten().collect();
    let unmatched = creatures
        .column(NAME_COLUMN)?
        .str()?
        .into_iter()
        .filter(|name| !name.is_some_and(|name| known.contains(name)))
        .count();

    let joined = creatures
        .clone()
        .lazy()
        .with_row_index(CREATURE_ORDER, None)
        .join(
            attributes.lazy().with_row_index(ATTRIBUTE_ORDER, None),
            [col(NAME_COLUMN)],
            [col(NAME_COLUMN)],
            JoinArgs::new(JoinType::Inner).with_suffix(Some(ATTRIBUTE_SUFFIX.into())),
        )
        .sort([CREATURE_ORDER, ATTRIBUTE_ORDER], SortMultipleOptions::default())
        .collect()?
        .drop(CREATURE_ORDER)?
        .drop(ATTRIBUTE_ORDER)?;

    debug!(
        creature_rows = creatures.height(),
        attribute_rows,
        joined_rows = joined.height(),
        unmatched_creatures = unmatched,
        "joined attributes"
    );
    Ok(joined)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creatures(names: &[&str]) -> DataFrame {
        let bst: Vec<i64> = (0..names.len() as i64).map(|idx| 300 + idx).collect();
        DataFrame::new(vec![
            Series::new("name".into(), names.to_vec()).into_column(),
            Series::new("hp".into(), vec![50i64; names.len()]).into_column(),
            Series::new("bst".into(), bst).into_column(),
        ])
        .unwrap()
    }

    fn attributes(rows: &[(&str, i64)]) -> DataFrame {
        DataFrame::new(vec![
            Series::new("name".into(), rows.iter().map(|row| row.0).collect::<Vec<_>>())
                .into_column(),
            Series::new("hp".into(), vec![99i64; rows.len()]).into_column(),
            Series::new(
                "is_legendary".into(),
                rows.iter().map(|row| row.1).collect::<Vec<_>>(),
            )
            .into_column(),
        ])
        .unwrap()
    }

    fn names(df: &DataFrame) -> Vec<String> {
        df.column("name")
            .unwrap()
            .str()
            .unwrap()
            .into_no_null_iter()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn keeps_only_shared_names() {
        let left = creatures(&["Mewtwo", "Pikachu", "Missingno"]);
        let right = attributes(&[("Pikachu", 0), ("Mewtwo", 1), ("Bulbasaur", 0)]);
        let joined = join_attributes(&left, &right).unwrap();

        assert_eq!(names(&joined), vec!["Mewtwo", "Pikachu"]);
        let legendary = joined.column("is_legendary").unwrap().i64().unwrap();
        assert_eq!(legendary.get(0), Some(1));
        assert_eq!(legendary.get(1), Some(0));
    }

    #[test]
    fn colliding_columns_get_suffix() {
        let joined = join_attributes(&creatures(&["Mew"]), &attributes(&[("Mew", 1)])).unwrap();
        let hp = joined.column("hp").unwrap().i64().unwrap();
        let hp_attr = joined.column("hp_attr").unwrap().i64().unwrap();
        assert_eq!(hp.get(0), Some(50));
        assert_eq!(hp_attr.get(0), Some(99));
        assert!(joined.column("__creature_row").is_err());
        assert!(joined.column("__attribute_row").is_err());
    }

    #[test]
    fn match_is_case_sensitive() {
        let joined =
            join_attributes(&creatures(&["mewtwo", "Mewtwo "]), &attributes(&[("Mewtwo", 1)]))
                .unwrap();
        assert_eq!(joined.height(), 0);
    }

    #[test]
    fn duplicate_names_cross_product() {
        let left = creatures(&["Rotom", "Rotom"]);
        let right = attributes(&[("Rotom", 0), ("Rotom", 1), ("Rotom", 0)]);
        let joined = join_attributes(&left, &right).unwrap();
        assert_eq!(joined.height(), 6);

        let bst = joined.column("bst").unwrap().i64().unwrap();
        let legendary = joined.column("is_legendary").unwrap().i64().unwrap();
        let pairs: Vec<(Option<i64>, Option<i64>)> =
            bst.into_iter().zip(legendary.into_iter()).collect();
        assert_eq!(
            pairs,
            vec![
                (Some(300), Some(0)),
                (Some(300), Some(1)),
                (Some(300), Some(0)),
                (Some(301), Some(0)),
                (Some(301), Some(1)),
                (Some(301), Some(0)),
            ]
        );
    }

    #[test]
    fn join_is_repeatable() {
        let left = creatures(&["C", "A", "B", "D"]);
        let right = attributes(&[("B", 0), ("D", 1), ("A", 0)]);
        let first = join_attributes(&left, &right).unwrap();
        let second = join_attributes(&left, &right).unwrap();
        assert!(first.equals_missing(&second));
        assert_eq!(names(&first), vec!["A", "B", "D"]);
    }
}
