pub mod aggregate;
pub mod cli;
pub mod fetch;
pub mod map;
pub mod pipeline;
pub mod publish;
pub mod report;
pub mod run;
pub mod scrape;
pub mod sources;
pub mod taxonomy;
