pub mod outcome;
pub mod person;

#[cfg(test)]
pub mod test_utils;
