use crate::error::{Result, TriviaError};
use crate::model::{Category, CategoryId, QuizCategory};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeMap;

/// Category id to display name. Serializes as a JSON object keyed by id.
pub type CategoryMap = BTreeMap<CategoryId, String>;

pub fn as_mapping(categories: &[Category]) -> CategoryMap {
    categories
        .iter()
        .map(|c| (c.id, c.type_name.clone()))
        .collect()
}

/// Picks one of the known category ids uniformly at random.
pub fn resolve_any<R: Rng + ?Sized>(categories: &[Category], rng: &mut R) -> Result<CategoryId> {
    categories
        .choose(rng)
        .map(|c| c.id)
        .ok_or(TriviaError::NoCategories)
}

/// Turns a quiz selector into a concrete, existing category id.
pub fn resolve<R: Rng + ?Sized>(
    selector: QuizCategory,
    categories: &[Category],
    rng: &mut R,
) -> Result<CategoryId> {
    match selector {
        QuizCategory::Any => resolve_any(categories, rng),
        QuizCategory::Category(id) => find(categories, id).map(|c| c.id),
    }
}

pub fn find(categories: &[Category], id: CategoryId) -> Result<&Category> {
    categories
        .iter()
        .find(|c| c.id == id)
        .ok_or(TriviaError::CategoryNotFound(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::BTreeSet;

    #[test]
    fn mapping_is_keyed_by_id() {
        let mapping = as_mapping(&seed::categories());
        assert_eq!(mapping.len(), 6);
        assert_eq!(mapping[&1], "Science");
        assert_eq!(mapping[&6], "Sports");

        let json = serde_json::to_value(&mapping).unwrap();
        assert_eq!(json["2"], "Art");
    }

    #[test]
    fn resolve_any_covers_every_category() {
        let categories = seed::categories();
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = BTreeSet::new();
        for _ in 0..1000 {
            let id = resolve_any(&categories, &mut rng).unwrap();
            assert!((1..=6).contains(&id));
            seen.insert(id);
        }
        assert_eq!(seen, (1..=6).collect());
    }

    #[test]
    fn resolve_any_without_categories_is_not_found() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = resolve_any(&[], &mut rng).unwrap_err();
        assert!(matches!(err, TriviaError::NoCategories));
    }

    #[test]
    fn resolve_rejects_unknown_category() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = resolve(QuizCategory::Category(8), &seed::categories(), &mut rng).unwrap_err();
        assert!(matches!(err, TriviaError::CategoryNotFound(8)));
        assert_eq!(
            resolve(QuizCategory::Category(2), &seed::categories(), &mut rng).unwrap(),
            2
        );
    }
}
