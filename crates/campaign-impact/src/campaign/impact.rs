use super::metrics::ProjectMetrics;
use serde::{Deserialize, Serialize};

/// Multipliers used to extrapolate impact from completed tasks. These are
/// planning assumptions drawn from typical projects, not measurements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactConfig {
    pub buildings_per_task: u64,
    pub people_per_building: u64,
    pub road_km_per_task: f64,
}

impl Default for ImpactConfig {
    fn default() -> Self {
        Self {
            buildings_per_task: 50,
            people_per_building: 4,
            road_km_per_task: 2.5,
        }
    }
}

const HUMANITARIAN_APPLICATIONS: [&str; 5] = [
    "Flood risk assessment and evacuation planning",
    "Emergency response routing",
    "Infrastructure damage assessment",
    "Population density mapping",
    "Aid distribution planning",
];

/// Stateless estimator that applies the configured multipliers to the mapped
/// task count.
#[derive(Debug, Clone, Default)]
pub struct ImpactEstimator {
    config: ImpactConfig,
}

impl ImpactEstimator {
    pub fn new(config: ImpactConfig) -> Self {
        Self { config }
    }

    pub fn estimate(&self, metrics: &ProjectMetrics) -> HumanitarianImpact {
        let mapped_tasks = metrics.mapped_tasks as u64;
        let estimated_buildings_mapped = mapped_tasks.saturating_mul(self.config.buildings_per_task);

        HumanitarianImpact {
            estimated_buildings_mapped,
            estimated_population_covered: estimated_buildings_mapped
                .saturating_mul(self.config.people_per_building),
            estimated_road_km_mapped: mapped_tasks as f64 * self.config.road_km_per_task,
            humanitarian_applications: HUMANITARIAN_APPLICATIONS
                .iter()
                .map(|application| application.to_string())
                .collect(),
        }
    }
}

/// Extrapolated reach of the mapping work. Every figure is an estimate and
/// must be presented as one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HumanitarianImpact {
    pub estimated_buildings_mapped: u64,
    pub estimated_population_covered: u64,
    pub estimated_road_km_mapped: f64,
    pub humanitarian_applications: Vec<String>,
}

impl HumanitarianImpact {
    pub fn to_row(&self) -> ImpactEstimateRow {
        ImpactEstimateRow {
            estimated_buildings_mapped: self.estimated_buildings_mapped,
            estimated_population_covered: self.estimated_population_covered,
            estimated_road_km_mapped: self.estimated_road_km_mapped,
        }
    }
}

/// Tabular form of [`HumanitarianImpact`] without the list-valued fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImpactEstimateRow {
    pub estimated_buildings_mapped: u64,
    pub estimated_population_covered: u64,
    pub estimated_road_km_mapped: f64,
}
