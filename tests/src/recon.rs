mod real;
mod simulated;
