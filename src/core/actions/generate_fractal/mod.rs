pub mod generate_fractal;
mod generate_fractal_parallel_rayon;
mod generate_fractal_serial;
pub mod ports;
pub mod progress;
mod render_band;
pub mod worker_pool;

#[cfg(test)]
mod test_support;
