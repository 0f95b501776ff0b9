pub mod awards;
pub mod metacritic;
