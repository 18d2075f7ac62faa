use crate::error::{FitError, Result};
use crate::models::{DailyLedger, LedgerRequest, MacroTotals, Meal, MealWithTotals};

/// Where a meal sits in the request, for error messages.
fn meal_label(meal_idx: Option<usize>) -> String {
    match meal_idx {
        Some(idx) => format!("meals[{}]", idx),
        None => "meal".to_string(),
    }
}

/// Clamp a logged value to zero, rejecting non-finite input.
fn clamped(value: f64, field: &str, meal: &str, item_idx: usize) -> Result<f64> {
    if !value.is_finite() {
        return Err(FitError::Validation(format!(
            "{}.items[{}].{} is not a finite number",
            meal, item_idx, field
        )));
    }
    Ok(value.max(0.0))
}

fn summarize_at(meal: &Meal, meal_idx: Option<usize>) -> Result<MacroTotals> {
    let label = meal_label(meal_idx);
    let mut totals = MacroTotals::default();

    for (item_idx, item) in meal.items.iter().enumerate() {
        totals.calories += clamped(item.calories, "calories", &label, item_idx)?;
        totals.protein += clamped(item.protein.unwrap_or(0.0), "protein", &label, item_idx)?;
        totals.carbs += clamped(item.carbs.unwrap_or(0.0), "carbs", &label, item_idx)?;
        totals.fats += clamped(item.fats.unwrap_or(0.0), "fats", &label, item_idx)?;
    }

    // Finite items can still add up past f64::MAX
    for (field, value) in [
        ("calories", totals.calories),
        ("protein", totals.protein),
        ("carbs", totals.carbs),
        ("fats", totals.fats),
    ] {
        if !value.is_finite() {
            return Err(FitError::Validation(format!("{} {} overflow", label, field)));
        }
    }

    Ok(totals)
}

/// Sum calories and macros of one meal.
///
/// Negative values contribute zero; missing macros count as zero.
pub fn summarize_meal(meal: &Meal) -> Result<MacroTotals> {
    summarize_at(meal, None)
}

/// Fold a day's meals into per-meal totals and the energy balance.
///
/// Meal and item order are preserved.
pub fn aggregate(meals: &[Meal], calories_burned: f64) -> Result<DailyLedger> {
    if !calories_burned.is_finite() {
        return Err(FitError::Validation(
            "calories_burned is not a finite number".to_string(),
        ));
    }

    let detailed = meals
        .iter()
        .enumerate()
        .map(|(idx, meal)| {
            Ok(MealWithTotals {
                meal: meal.clone(),
                totals: summarize_at(meal, Some(idx))?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let total_calories: f64 = detailed.iter().map(|m| m.totals.calories).sum();
    if !total_calories.is_finite() {
        return Err(FitError::Validation("total_calories overflow".to_string()));
    }

    let balance = total_calories - calories_burned;
    if !balance.is_finite() {
        return Err(FitError::Validation("balance overflow".to_string()));
    }

    Ok(DailyLedger {
        total_calories,
        calories_burned,
        balance,
        meals: detailed,
    })
}

/// Aggregate a decoded endpoint request.
pub fn aggregate_request(request: &LedgerRequest) -> Result<DailyLedger> {
    aggregate(&request.meals, request.burned())
}

/// Decode an endpoint request body.
///
/// Structural problems (missing `items`, non-numeric calories, wrong JSON
/// shape) surface as `Validation` errors.
pub fn parse_request(body: &[u8]) -> Result<LedgerRequest> {
    if body.iter().all(|b| b.is_ascii_whitespace()) {
        return Ok(LedgerRequest {
            meals: Vec::new(),
            calories_burned: None,
        });
    }

    serde_json::from_slice(body).map_err(|e| FitError::Validation(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MealItem;

    #[test]
    fn test_summarize_with_macros() {
        let meal = Meal::new(
            "breakfast",
            vec![
                MealItem::new("Oats", 300.0).with_macros(10.0, 54.0, 5.0),
                MealItem::new("Coffee", 5.0),
            ],
        );
        let totals = summarize_meal(&meal).unwrap();
        assert_eq!(totals.calories, 305.0);
        assert_eq!(totals.protein, 10.0);
        assert_eq!(totals.carbs, 54.0);
        assert_eq!(totals.fats, 5.0);
    }

    #[test]
    fn test_negative_values_clamped() {
        let mut item = MealItem::new("Glitch", -50.0);
        item.protein = Some(-3.0);
        let meal = Meal::new("snack", vec![item, MealItem::new("Apple", 80.0)]);
        let totals = summarize_meal(&meal).unwrap();
        assert_eq!(totals.calories, 80.0);
        assert_eq!(totals.protein, 0.0);
    }

    #[test]
    fn test_nan_rejected_with_location() {
        let meals = vec![
            Meal::new("lunch", vec![MealItem::new("Soup", 200.0)]),
            Meal::new("dinner", vec![MealItem::new("Bad", f64::NAN)]),
        ];
        let err = aggregate(&meals, 0.0).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("meals[1].items[0].calories"));
    }

    #[test]
    fn test_meal_sum_overflow_rejected() {
        let meals = vec![
            Meal::new("lunch", vec![MealItem::new("Soup", 200.0)]),
            Meal::new(
                "dinner",
                vec![MealItem::new("Huge", 1e308), MealItem::new("Huger", 1e308)],
            ),
        ];
        let err = aggregate(&meals, 0.0).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("meals[1] calories overflow"));
    }

    #[test]
    fn test_day_total_overflow_rejected() {
        let meals = vec![
            Meal::new("lunch", vec![MealItem::new("Huge", 1e308)]),
            Meal::new("dinner", vec![MealItem::new("Huge", 1e308)]),
        ];
        let err = aggregate(&meals, 0.0).unwrap_err();
        assert!(err.to_string().contains("total_calories overflow"));

        let one = vec![Meal::new("lunch", vec![MealItem::new("Huge", 1e308)])];
        let err = aggregate(&one, -1e308).unwrap_err();
        assert!(err.to_string().contains("balance overflow"));
    }

    #[test]
    fn test_summarize_meal_error_has_no_index() {
        let meal = Meal::new(
            "snack",
            vec![MealItem::new("ok", 10.0), MealItem::new("bad", f64::NAN)],
        );
        let err = summarize_meal(&meal).unwrap_err();
        assert!(err.to_string().contains("meal.items[1].calories"));
        assert!(!err.to_string().contains("meals[0]"));
    }

    #[test]
    fn test_infinite_burned_rejected() {
        let err = aggregate(&[], f64::INFINITY).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_parse_request_empty_body() {
        let req = parse_request(b"  ").unwrap();
        assert!(req.meals.is_empty());
        assert_eq!(req.burned(), 0.0);
    }

    #[test]
    fn test_parse_request_missing_items() {
        let err = parse_request(br#"{"meals":[{"type":"lunch"}]}"#).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_parse_request_non_numeric_calories() {
        let body = br#"{"meals":[{"type":"lunch","items":[{"name":"x","calories":"abc"}]}]}"#;
        assert!(parse_request(body).unwrap_err().is_validation());
    }
}
