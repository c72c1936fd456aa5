mod patient;
mod significance;
