// Domain layer - Chart registry, series filtering and form rules
pub mod chart;
pub mod form;
pub mod registry;
pub mod sensor;
pub mod series;
pub mod view;
