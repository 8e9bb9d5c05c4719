mod athlete;
mod category;
mod training_center;

pub use athlete::{Athlete, AthleteRecord};
pub use category::{Category, NewCategory};
pub use training_center::{NewTrainingCenter, TrainingCenter};
