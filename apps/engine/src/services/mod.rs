pub mod match_flow;
