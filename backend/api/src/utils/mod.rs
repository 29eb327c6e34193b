pub mod httperror;
pub mod logging;
