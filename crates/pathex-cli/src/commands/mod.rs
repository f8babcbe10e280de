pub mod matching;
pub mod parse;
pub mod regex;
pub mod render;
