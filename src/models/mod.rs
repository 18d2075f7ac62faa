pub mod meal;
pub mod profile;

pub use meal::{DailyLedger, LedgerRequest, MacroTotals, Meal, MealItem, MealWithTotals};
pub use profile::{ActivityLevel, Gender, Goal, Profile};
