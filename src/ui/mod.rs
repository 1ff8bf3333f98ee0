pub mod components;
pub mod explain;
pub mod pages;
pub mod shell;
pub mod theme;
