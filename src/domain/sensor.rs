// Reference sensor dataset model
use super::series::DataPoint;

/// One named sensor from the read-only reference dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Sensor {
    pub name: String,
    pub series: Vec<DataPoint>,
}

impl Sensor {
    pub fn new(name: String, series: Vec<DataPoint>) -> Self {
        Self { name, series }
    }
}
