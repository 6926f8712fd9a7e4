pub mod generate_fractal;
