pub mod calculators;
pub mod resolver;
pub mod rng;
pub mod runner;
pub mod state;
pub mod type_chart;

#[cfg(test)]
mod tests;
