pub mod errors;
pub mod db;
pub mod timestamp;
pub mod validation;
pub mod tender;
pub mod delivery;
pub mod cargo;

#[cfg(test)]
mod tests;
