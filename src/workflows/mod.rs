pub mod counseling;
