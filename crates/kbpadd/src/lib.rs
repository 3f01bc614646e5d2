pub mod logging;
pub mod poller;
pub mod report;
