mod persistence;

pub use persistence::{
    load_exercises, load_meals, load_profile, save_profile, write_meal_totals_csv, ProfileRecord,
};
