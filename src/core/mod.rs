pub mod batch;
pub mod execute;
pub mod issue;
pub mod logger;
pub(crate) mod show_result;
#[cfg(test)]
pub(crate) mod test_server;
