pub mod collect;
pub mod deliver;
pub mod summarize;
