use std::num::NonZeroU32;

use log::debug;
use rayon::{ThreadPool, ThreadPoolBuildError};

use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::build_worker_pool;

/// Fixed set of render workers. A single worker renders on the calling
/// thread, so no pool is built for it.
pub struct WorkerPool {
    workers: NonZeroU32,
    pool: Option<ThreadPool>,
}

impl WorkerPool {
    pub fn new(workers: NonZeroU32) -> Result<Self, ThreadPoolBuildError> {
        let pool = if workers.get() > 1 {
            Some(build_worker_pool(workers.get() as usize)?)
        } else {
            None
        };

        Ok(Self { workers, pool })
    }

    #[must_use]
    pub fn workers(&self) -> NonZeroU32 {
        self.workers
    }

    pub(crate) fn pool(&self) -> Option<&ThreadPool> {
        self.pool.as_ref()
    }
}

/// Returns `cached` if it already has `workers` workers, otherwise replaces
/// it with a freshly built pool.
pub fn refresh_worker_pool(
    cached: &mut Option<WorkerPool>,
    workers: NonZeroU32,
) -> Result<&WorkerPool, ThreadPoolBuildError> {
    let pool = match cached.take() {
        Some(pool) if pool.workers() == workers => pool,
        _ => {
            debug!("building worker pool with {} worker(s)", workers);
            WorkerPool::new(workers)?
        }
    };

    Ok(cached.insert(pool))
}
