pub mod args;
pub mod call_stat;
pub mod iteration_stats;
pub mod outcome;
pub mod reason_tally;
pub mod result;
pub mod run_config;
