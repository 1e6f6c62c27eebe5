// Application layer - Use cases over the chart registry
pub mod chart_service;
pub mod sensor_source;
pub mod view_service;
