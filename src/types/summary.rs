use serde::{Deserialize, Serialize};
use std::fmt;

/// Values captured once from a training; never recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingSummary {
    pub training_type: String,
    pub duration: f64,
    pub distance: f64,
    pub mean_speed: f64,
    pub spent_calories: f64,
}

impl TrainingSummary {
    pub fn new(
        training_type: &str,
        duration: f64,
        distance: f64,
        mean_speed: f64,
        spent_calories: f64,
    ) -> Self {
        Self {
            training_type: training_type.to_string(),
            duration,
            distance,
            mean_speed,
            spent_calories,
        }
    }

    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TrainingSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; Ср. cкорость: {:.3} км/ч; Потрачено ккал: {:.3}. ",
            self.training_type, self.duration, self.distance, self.mean_speed, self.spent_calories
        )
    }
}
