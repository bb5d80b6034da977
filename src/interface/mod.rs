pub mod prompts;
pub mod render;

pub use prompts::{
    fuzzy_candidates, prompt_field, prompt_menu, prompt_mood, prompt_reference, prompt_yes_no,
};
pub use render::{
    display_food_log, display_food_table, display_wellbeing, display_workout_log,
    display_workout_table,
};
