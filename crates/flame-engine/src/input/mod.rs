pub mod queue;
pub mod pointer;
