pub mod classifier_server;
pub mod sporecheck_env;
