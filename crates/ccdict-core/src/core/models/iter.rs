use super::category::Category;
use super::rows::CategoryRow;
use super::schema::{AttributeSchema, Row};
use std::marker::PhantomData;

/// Restartable, lazily decoded traversal over the rows of one category.
///
/// The schema is built once on construction. `forward` and `reverse` each
/// return a fresh iterator, so walking one never affects the other.
#[derive(Debug)]
pub struct CategoryIter<'a, R> {
    schema: AttributeSchema,
    rows: &'a [Vec<String>],
    _row: PhantomData<R>,
}

impl<'a, R: CategoryRow<'a>> CategoryIter<'a, R> {
    pub fn new(category: &'a Category) -> Self {
        Self {
            schema: AttributeSchema::for_category(category),
            rows: category.row_list(),
            _row: PhantomData,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Decoded row at `index`, or `None` if out of range.
    pub fn get<'s>(&'s self, index: usize) -> Option<R>
    where
        's: 'a,
    {
        self.rows
            .get(index)
            .map(|values| R::from_row(Row::new(&self.schema, values)))
    }

    pub fn forward<'s>(&'s self) -> impl Iterator<Item = R> + 's
    where
        's: 'a,
    {
        self.rows
            .iter()
            .map(move |values| R::from_row(Row::new(&self.schema, values)))
    }

    pub fn reverse<'s>(&'s self) -> impl Iterator<Item = R> + 's
    where
        's: 'a,
    {
        self.rows
            .iter()
            .rev()
            .map(move |values| R::from_row(Row::new(&self.schema, values)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::category::CHEM_COMP_ATOM;
    use crate::core::models::rows::AtomRow;

    fn atoms() -> Category {
        Category::new(CHEM_COMP_ATOM, &["atom_id", "type_symbol"])
            .with_row(&["C1", "C"])
            .with_row(&["C2", "C"])
            .with_row(&["O1", "O"])
    }

    #[test]
    fn forward_yields_rows_in_stored_order() {
        let category = atoms();
        let it = CategoryIter::<AtomRow>::new(&category);
        let names: Vec<_> = it.forward().filter_map(|a| a.name()).collect();
        assert_eq!(names, vec!["C1", "C2", "O1"]);
    }

    #[test]
    fn reverse_yields_rows_from_last_to_first() {
        let category = atoms();
        let it = CategoryIter::<AtomRow>::new(&category);
        let names: Vec<_> = it.reverse().filter_map(|a| a.name()).collect();
        assert_eq!(names, vec!["O1", "C2", "C1"]);
    }

    #[test]
    fn forward_and_reverse_are_independent_and_restartable() {
        let category = atoms();
        let it = CategoryIter::<AtomRow>::new(&category);

        let mut fwd = it.forward();
        let mut rev = it.reverse();
        assert_eq!(fwd.next().and_then(|a| a.name()), Some("C1"));
        assert_eq!(rev.next().and_then(|a| a.name()), Some("O1"));
        assert_eq!(fwd.next().and_then(|a| a.name()), Some("C2"));

        assert_eq!(it.forward().count(), 3);
        assert_eq!(it.reverse().count(), 3);
    }

    #[test]
    fn get_returns_none_when_out_of_range() {
        let category = atoms();
        let it = CategoryIter::<AtomRow>::new(&category);
        assert_eq!(it.get(2).and_then(|a| a.name()), Some("O1"));
        assert!(it.get(3).is_none());
        assert_eq!(it.len(), 3);
    }

    #[test]
    fn empty_category_produces_no_rows() {
        let category = Category::new(CHEM_COMP_ATOM, &["atom_id"]);
        let it = CategoryIter::<AtomRow>::new(&category);
        assert!(it.is_empty());
        assert_eq!(it.forward().count(), 0);
        assert!(it.get(0).is_none());
    }
}
