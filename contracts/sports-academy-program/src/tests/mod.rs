// Scenario tests for the sports academy program, grouped by lifecycle stage.
mod utils;
