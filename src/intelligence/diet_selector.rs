// ABOUTME: Rule-based diet selection with calorie targeting and allergy filtering
// ABOUTME: Picks one meal variant per slot from an injected random source
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::classifier::{classify_diet_goal, excluded_food_fragments, matches_fragment};
use super::meal_catalog::meal_template;
use super::nutrition_calculator::calorie_target;
use fitplan_core::models::{DietPlan, Meal, UserProfile};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

/// Select a daily diet for a profile.
///
/// The calorie target is deterministic; meal contents are drawn from `rng`,
/// one variant per slot. Foods matching the profile's allergies are removed
/// and meals left without foods are dropped.
#[must_use]
pub fn select_diet<R: Rng + ?Sized>(profile: &UserProfile, rng: &mut R) -> DietPlan {
    let goal = classify_diet_goal(&profile.fitness_goals);
    let target = calorie_target(profile, goal);
    let excluded = excluded_food_fragments(&profile.allergies);

    debug!(
        goal = %goal,
        bmr = target.bmr,
        tdee = target.tdee,
        daily_calories = target.daily_calories,
        "Computed calorie target"
    );

    let meals = meal_template(goal)
        .slots()
        .filter_map(|(name, variants)| {
            let foods = variants.choose(&mut *rng)?;
            let foods = filter_foods(foods.iter().copied(), &excluded);
            if foods.is_empty() {
                debug!(meal = name, "Dropped meal emptied by allergy filtering");
                return None;
            }
            Some(Meal {
                name: name.to_owned(),
                foods,
            })
        })
        .collect();

    DietPlan {
        daily_calories: target.daily_calories,
        meals,
    }
}

/// Remove foods matching any excluded fragment
fn filter_foods<'a>(foods: impl Iterator<Item = &'a str>, excluded: &[&str]) -> Vec<String> {
    foods
        .filter(|food| !matches_fragment(food, excluded))
        .map(str::to_owned)
        .collect()
}

/// Remove foods that conflict with the allergy text
#[must_use]
pub fn filter_allergens(foods: &[String], allergies: &str) -> Vec<String> {
    let excluded = excluded_food_fragments(allergies);
    filter_foods(foods.iter().map(String::as_str), &excluded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn profile(goals: &str, allergies: &str) -> UserProfile {
        UserProfile {
            fitness_goals: goals.to_owned(),
            fitness_level: "beginner".to_owned(),
            allergies: allergies.to_owned(),
            ..UserProfile::default()
        }
    }

    fn foods(items: &[&str]) -> Vec<String> {
        items.iter().map(|item| (*item).to_owned()).collect()
    }

    #[test]
    fn test_maintain_example_calories() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let plan = select_diet(&profile("maintain", "none"), &mut rng);
        assert_eq!(plan.daily_calories, 2135);
        assert_eq!(plan.meals.len(), 5);
    }

    #[test]
    fn test_same_seed_same_meals() {
        let profile = profile("build muscle", "");
        let first = select_diet(&profile, &mut ChaCha8Rng::seed_from_u64(42));
        let second = select_diet(&profile, &mut ChaCha8Rng::seed_from_u64(42));
        assert_eq!(first, second);
    }

    #[test]
    fn test_calories_do_not_depend_on_rng() {
        let profile = profile("lose weight", "");
        let targets: Vec<_> = (0..10)
            .map(|seed| select_diet(&profile, &mut ChaCha8Rng::seed_from_u64(seed)).daily_calories)
            .collect();
        assert!(targets.iter().all(|calories| *calories == targets[0]));
        assert_eq!(targets[0], 1635);
    }

    #[test]
    fn test_evening_snack_only_for_muscle_goal() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let muscle = select_diet(&profile("bulk", ""), &mut rng);
        assert_eq!(muscle.meals.len(), 6);
        assert_eq!(muscle.meals[5].name, "Evening Snack");

        let loss = select_diet(&profile("lose weight", ""), &mut rng);
        assert!(loss.meals.iter().all(|meal| meal.name != "Evening Snack"));
    }

    #[test]
    fn test_meal_order() {
        let plan = select_diet(&profile("maintain", ""), &mut ChaCha8Rng::seed_from_u64(11));
        let names: Vec<_> = plan.meals.iter().map(|meal| meal.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Breakfast", "Morning Snack", "Lunch", "Afternoon Snack", "Dinner"]
        );
    }

    #[test]
    fn test_dairy_allergy_example() {
        let filtered = filter_allergens(&foods(&["Greek yogurt", "Banana"]), "dairy");
        assert_eq!(filtered, vec!["Banana"]);
    }

    #[test]
    fn test_allergy_filter_is_idempotent() {
        let original = foods(&[
            "Scrambled eggs (3 whole)",
            "Oatmeal",
            "Whole milk",
            "Peanut butter",
            "Grilled salmon",
            "Shrimp",
            "Whole wheat bun",
        ]);
        for allergies in ["dairy", "nuts", "gluten", "eggs", "fish", "shellfish", "dairy, nut"] {
            let once = filter_allergens(&original, allergies);
            let twice = filter_allergens(&once, allergies);
            assert_eq!(once, twice, "{allergies}");
        }
    }

    #[test]
    fn test_none_disables_allergy_filtering() {
        let original = foods(&["Whole milk", "Peanut butter"]);
        assert_eq!(filter_allergens(&original, "None"), original);
        assert_eq!(filter_allergens(&original, ""), original);
    }

    #[test]
    fn test_no_allergen_survives_any_seed() {
        for seed in 0..20 {
            let plan = select_diet(&profile("build muscle", "dairy"), &mut ChaCha8Rng::seed_from_u64(seed));
            for food in plan.meals.iter().flat_map(|meal| &meal.foods) {
                let food = food.to_lowercase();
                for fragment in ["milk", "cheese", "yogurt", "butter"] {
                    assert!(!food.contains(fragment), "{food}");
                }
            }
            assert!(plan.meals.iter().all(|meal| !meal.foods.is_empty()));
        }
    }
}
