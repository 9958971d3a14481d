pub mod cli;
pub mod combat;
pub mod monte_carlo;
