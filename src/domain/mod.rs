// Domain layer - Power BI resource models
pub mod capacity;
pub mod dashboard;
pub mod dataset;
pub mod report;
pub mod token;
pub mod workspace;
