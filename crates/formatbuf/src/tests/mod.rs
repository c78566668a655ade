
mod hex_float;
