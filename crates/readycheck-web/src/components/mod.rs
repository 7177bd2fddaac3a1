pub mod footer;
pub mod hero;
pub mod status;
pub mod test_cards;
