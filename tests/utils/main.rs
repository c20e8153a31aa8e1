mod pattern;
mod period;
