use crate::recipe_model::NutritionPerServing;
use crate::scaling::ScaleFactor;

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Scales every present field; calories to whole kcal, the rest to 0.1 g.
/// Absent fields stay absent.
pub fn scale_nutrition(
    nutrition: Option<&NutritionPerServing>,
    factor: ScaleFactor,
) -> Option<NutritionPerServing> {
    let nutrition = nutrition?;
    let f = factor.value();

    macro_rules! scale_grams {
        ($field:ident) => {
            nutrition.$field.map(|value| round_to_tenth(value * f))
        };
    }

    Some(NutritionPerServing {
        calories: nutrition.calories.map(|value| (value * f).round()),
        protein: scale_grams!(protein),
        carbs: scale_grams!(carbs),
        fats: scale_grams!(fats),
        fiber: scale_grams!(fiber),
        sugar: scale_grams!(sugar),
        sodium: scale_grams!(sodium),
    })
}
