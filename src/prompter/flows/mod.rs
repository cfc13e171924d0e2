pub mod calendar_flow;
