pub mod availability_card;
pub mod flip_card;
pub mod forecast_panel;
pub mod scarcity_chart;
pub mod stat_tile;
pub mod theme;

pub use theme::Theme;
