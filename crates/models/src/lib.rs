pub mod db;
pub mod dinosaur;
pub mod errors;
