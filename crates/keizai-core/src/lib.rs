pub mod dictionary;
pub mod fuzzy;
pub mod highlight;
pub mod history;
pub mod language;
pub mod preprocess;
pub mod suggest;

#[cfg(test)]
mod tests;
