// ABOUTME: Static meal variant tables keyed by diet goal
// ABOUTME: Each slot lists interchangeable food lists; the diet selector picks one per slot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::classifier::DietGoal;
use fitplan_core::constants::labels;

/// Interchangeable food lists for one meal slot
pub type MealVariants = &'static [&'static [&'static str]];

/// Meal variants for every slot of one diet goal
#[derive(Debug, Clone, Copy)]
pub struct MealTemplate {
    /// Breakfast variants
    pub breakfast: MealVariants,
    /// Morning snack variants
    pub morning_snack: MealVariants,
    /// Lunch variants
    pub lunch: MealVariants,
    /// Afternoon snack variants
    pub afternoon_snack: MealVariants,
    /// Dinner variants
    pub dinner: MealVariants,
    /// Evening snack variants, only offered when building muscle
    pub evening_snack: Option<MealVariants>,
}

impl MealTemplate {
    /// Slots in eating order, paired with their display name
    pub fn slots(&self) -> impl Iterator<Item = (&'static str, MealVariants)> {
        [
            (labels::BREAKFAST, self.breakfast),
            (labels::MORNING_SNACK, self.morning_snack),
            (labels::LUNCH, self.lunch),
            (labels::AFTERNOON_SNACK, self.afternoon_snack),
            (labels::DINNER, self.dinner),
        ]
        .into_iter()
        .chain(
            self.evening_snack
                .map(|variants| (labels::EVENING_SNACK, variants)),
        )
    }
}

/// Meal table for a diet goal
#[must_use]
pub fn meal_template(goal: DietGoal) -> &'static MealTemplate {
    match goal {
        DietGoal::WeightLoss => &WEIGHT_LOSS_MEALS,
        DietGoal::BuildMuscle => &BUILD_MUSCLE_MEALS,
        DietGoal::Maintain => &MAINTAIN_MEALS,
    }
}

static WEIGHT_LOSS_MEALS: MealTemplate = MealTemplate {
    breakfast: &[
        &["Oatmeal with berries", "Greek yogurt", "Green tea"],
        &["Scrambled egg whites", "Whole grain toast", "Orange juice"],
        &["Protein smoothie", "Banana", "Chia seeds"],
        &["Avocado toast on whole grain", "Poached egg", "Black coffee"],
        &["Greek yogurt parfait", "Granola", "Mixed berries"],
    ],
    morning_snack: &[
        &["Apple", "Almonds (10-12)"],
        &["Carrot sticks", "Hummus"],
        &["Low-fat cottage cheese", "Cucumber slices"],
        &["Protein bar", "Green tea"],
        &["Mixed nuts (small handful)", "Pear"],
    ],
    lunch: &[
        &["Grilled chicken salad", "Quinoa", "Lemon water"],
        &["Turkey wrap", "Mixed greens", "Cucumber water"],
        &["Tuna salad", "Brown rice", "Herbal tea"],
        &["Vegetable stir-fry", "Tofu", "Green tea"],
        &["Grilled fish", "Sweet potato", "Steamed broccoli"],
    ],
    afternoon_snack: &[
        &["Protein shake", "Berries"],
        &["Rice cakes", "Almond butter"],
        &["Edamame", "Cherry tomatoes"],
        &["Greek yogurt", "Walnuts"],
        &["Celery sticks", "Peanut butter"],
    ],
    dinner: &[
        &["Baked salmon", "Asparagus", "Cauliflower rice"],
        &["Grilled chicken breast", "Green beans", "Mixed salad"],
        &["Lean beef", "Roasted vegetables", "Small portion brown rice"],
        &["Shrimp stir-fry", "Zucchini noodles", "Bell peppers"],
        &["Turkey meatballs", "Marinara sauce", "Spaghetti squash"],
    ],
    evening_snack: None,
};

static BUILD_MUSCLE_MEALS: MealTemplate = MealTemplate {
    breakfast: &[
        &["Scrambled eggs (3 whole)", "Oatmeal", "Whole milk", "Banana"],
        &["Protein pancakes", "Greek yogurt", "Honey", "Berries"],
        &["Breakfast burrito", "Eggs", "Cheese", "Avocado"],
        &["French toast", "Protein powder", "Peanut butter", "Maple syrup"],
        &["Egg white omelet", "Turkey sausage", "Hash browns", "Orange juice"],
    ],
    morning_snack: &[
        &["Protein shake", "Banana", "Peanut butter"],
        &["Trail mix", "Protein bar"],
        &["Greek yogurt", "Granola", "Honey"],
        &["Tuna sandwich", "Whole grain bread"],
        &["Smoothie bowl", "Protein powder", "Mixed nuts"],
    ],
    lunch: &[
        &["Grilled chicken breast", "Brown rice", "Broccoli", "Sweet potato"],
        &["Beef stir-fry", "Jasmine rice", "Mixed vegetables"],
        &["Salmon fillet", "Quinoa", "Asparagus", "Avocado"],
        &["Turkey burger", "Whole wheat bun", "Sweet potato fries"],
        &["Pasta with chicken", "Marinara sauce", "Side salad", "Garlic bread"],
    ],
    afternoon_snack: &[
        &["Protein shake", "Banana", "Oats"],
        &["Cottage cheese", "Pineapple", "Almonds"],
        &["Rice cakes", "Peanut butter", "Honey"],
        &["Hard-boiled eggs (2)", "Whole grain crackers"],
        &["Protein bar", "Apple", "Walnuts"],
    ],
    dinner: &[
        &["Steak", "Baked potato", "Grilled vegetables", "Dinner roll"],
        &["Grilled salmon", "Wild rice", "Brussels sprouts"],
        &["Chicken thighs", "Pasta", "Alfredo sauce", "Steamed broccoli"],
        &["Pork chops", "Mashed potatoes", "Green beans"],
        &["Shrimp", "Fried rice", "Egg", "Mixed vegetables"],
    ],
    evening_snack: Some(&[
        &["Casein protein shake", "Berries"],
        &["Cottage cheese", "Almonds"],
        &["Greek yogurt", "Honey", "Granola"],
    ]),
};

static MAINTAIN_MEALS: MealTemplate = MealTemplate {
    breakfast: &[
        &["Whole grain cereal", "Milk", "Banana", "Coffee"],
        &["Eggs (2)", "Whole wheat toast", "Avocado", "Orange juice"],
        &["Smoothie bowl", "Granola", "Mixed fruits"],
        &["Oatmeal", "Protein powder", "Berries", "Green tea"],
        &["Greek yogurt", "Honey", "Nuts", "Apple"],
    ],
    morning_snack: &[
        &["Fruit salad", "Handful of nuts"],
        &["Protein bar", "Coffee"],
        &["Yogurt", "Granola"],
        &["Apple", "Cheese stick"],
        &["Smoothie", "Chia seeds"],
    ],
    lunch: &[
        &["Chicken sandwich", "Side salad", "Fruit"],
        &["Grain bowl", "Quinoa", "Chicken", "Vegetables"],
        &["Soup", "Whole grain bread", "Small salad"],
        &["Sushi rolls", "Edamame", "Miso soup"],
        &["Burrito bowl", "Brown rice", "Beans", "Vegetables"],
    ],
    afternoon_snack: &[
        &["Hummus", "Veggie sticks"],
        &["Trail mix"],
        &["Protein shake"],
        &["Rice cakes", "Almond butter"],
        &["Fruit", "String cheese"],
    ],
    dinner: &[
        &["Grilled chicken", "Roasted vegetables", "Quinoa"],
        &["Fish tacos", "Cabbage slaw", "Black beans"],
        &["Stir-fry", "Tofu or chicken", "Brown rice"],
        &["Pasta primavera", "Grilled chicken", "Side salad"],
        &["Grilled salmon", "Sweet potato", "Steamed broccoli"],
    ],
    evening_snack: None,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_order_and_evening_snack() {
        let names: Vec<_> = meal_template(DietGoal::BuildMuscle)
            .slots()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(
            names,
            vec![
                "Breakfast",
                "Morning Snack",
                "Lunch",
                "Afternoon Snack",
                "Dinner",
                "Evening Snack"
            ]
        );
        assert_eq!(meal_template(DietGoal::Maintain).slots().count(), 5);
        assert_eq!(meal_template(DietGoal::WeightLoss).slots().count(), 5);
    }

    #[test]
    fn test_every_variant_has_foods() {
        for goal in [DietGoal::WeightLoss, DietGoal::BuildMuscle, DietGoal::Maintain] {
            for (name, variants) in meal_template(goal).slots() {
                assert!(!variants.is_empty(), "{goal}: {name}");
                assert!(variants.iter().all(|foods| !foods.is_empty()));
            }
        }
    }
}
