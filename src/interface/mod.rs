pub mod prompts;
pub mod render;

pub use prompts::{
    collect_profile, prompt_activity_level, prompt_age, prompt_gender, prompt_goal, prompt_yes_no,
};
pub use render::{display_estimate, display_ledger, display_plan};
