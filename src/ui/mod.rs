pub mod hits;
pub mod theme;
pub mod widgets;
