pub mod warn;
