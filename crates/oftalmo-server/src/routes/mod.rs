pub mod attendances;
pub mod evaluate;
pub mod findings;
pub mod health;
pub mod patients;
