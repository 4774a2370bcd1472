mod monte_carlo;

pub use monte_carlo::{Evaluation, check_estimators, evaluate, repeat_trials};
