use serde::{Deserialize, Serialize};

/// A single logged food item.
///
/// Macros are optional; a missing macro counts as zero when summed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealItem {
    pub name: String,

    pub calories: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbs: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fats: Option<f64>,
}

impl MealItem {
    pub fn new(name: impl Into<String>, calories: f64) -> Self {
        Self {
            name: name.into(),
            calories,
            protein: None,
            carbs: None,
            fats: None,
        }
    }

    pub fn with_macros(mut self, protein: f64, carbs: f64, fats: f64) -> Self {
        self.protein = Some(protein);
        self.carbs = Some(carbs);
        self.fats = Some(fats);
        self
    }
}

/// A logged meal. `kind` is an open label (breakfast, lunch, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,

    pub items: Vec<MealItem>,
}

impl Meal {
    pub fn new(kind: impl Into<String>, items: Vec<MealItem>) -> Self {
        Self {
            kind: kind.into(),
            time: None,
            items,
        }
    }
}

/// Calorie and macro sums for one meal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroTotals {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

/// A meal echoed back with its totals attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealWithTotals {
    #[serde(flatten)]
    pub meal: Meal,

    pub totals: MacroTotals,
}

/// Daily totals and energy balance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyLedger {
    pub total_calories: f64,
    pub calories_burned: f64,
    pub balance: f64,
    pub meals: Vec<MealWithTotals>,
}

impl DailyLedger {
    /// Ledger with every meal at zero, used when nothing could be computed.
    pub fn zeroed(meals: &[Meal], calories_burned: f64) -> Self {
        Self {
            total_calories: 0.0,
            calories_burned,
            balance: -calories_burned,
            meals: meals
                .iter()
                .cloned()
                .map(|meal| MealWithTotals {
                    meal,
                    totals: MacroTotals::default(),
                })
                .collect(),
        }
    }
}

/// Body accepted by the ledger endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerRequest {
    #[serde(default)]
    pub meals: Vec<Meal>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories_burned: Option<f64>,
}

impl LedgerRequest {
    pub fn new(meals: Vec<Meal>, calories_burned: f64) -> Self {
        Self {
            meals,
            calories_burned: Some(calories_burned),
        }
    }

    pub fn burned(&self) -> f64 {
        self.calories_burned.unwrap_or(0.0)
    }
}
