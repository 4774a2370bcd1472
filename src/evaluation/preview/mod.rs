mod report;
mod summary;

pub use report::Report;
pub use summary::Summary;
