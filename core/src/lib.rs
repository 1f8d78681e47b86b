pub mod delay;
pub mod environment;
pub mod recon;
pub mod runner;
