pub mod angles;
pub mod axes;
pub mod chart;
pub mod dataset;
pub mod logging;
pub mod palette;
pub mod pipeline;
