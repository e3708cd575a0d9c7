mod converter;
mod csv_encode;
mod header;
mod rows;
mod run;
mod text_rules;
mod tokenize;

pub use run::run;
