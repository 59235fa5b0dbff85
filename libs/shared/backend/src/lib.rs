pub mod client;

pub use client::ClinicClient;
