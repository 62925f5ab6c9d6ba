pub mod matchup;
pub mod project;
pub mod solve;
