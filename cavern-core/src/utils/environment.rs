use crate::utils::{DefaultRandom, Quota, Random, ThreadPool};
use std::sync::Arc;

/// A logger type which is called with various information.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Returns amount of CPUs.
pub fn get_cpus() -> usize {
    num_cpus::get()
}

/// Keeps track of parallelism settings: the amount of available cpus and a bounded thread pool
/// sized to it.
#[derive(Clone)]
pub struct Parallelism {
    available_cpus: usize,
    thread_pool: Arc<ThreadPool>,
}

impl Default for Parallelism {
    fn default() -> Self {
        Self::new(get_cpus())
    }
}

impl Parallelism {
    /// Creates a new instance of `Parallelism` with given amount of worker threads.
    pub fn new(available_cpus: usize) -> Self {
        let available_cpus = available_cpus.max(1);
        Self { available_cpus, thread_pool: Arc::new(ThreadPool::new(available_cpus)) }
    }

    /// Amount of total available CPUs.
    pub fn available_cpus(&self) -> usize {
        self.available_cpus
    }

    /// Executes operation on the thread pool; any parallel iteration started inside `op` is
    /// bounded by the pool size.
    pub fn execute<OP, R>(&self, op: OP) -> R
    where
        OP: FnOnce() -> R + Send,
        R: Send,
    {
        self.thread_pool.execute(op)
    }
}

/// Keeps track of environment specific information which influences algorithm behavior.
#[derive(Clone)]
pub struct Environment {
    /// A wrapper on random generator.
    pub random: Arc<dyn Random + Send + Sync>,

    /// A global deadline token: when it is reached, searches return their best-so-far result.
    pub quota: Option<Arc<dyn Quota + Send + Sync>>,

    /// Keeps data about parallelism settings.
    pub parallelism: Parallelism,

    /// An information logger.
    pub logger: InfoLogger,
}

impl Environment {
    /// Creates an instance of `Environment`.
    pub fn new(
        random: Arc<dyn Random + Send + Sync>,
        quota: Option<Arc<dyn Quota + Send + Sync>>,
        parallelism: Parallelism,
        logger: InfoLogger,
    ) -> Self {
        Self { random, quota, parallelism, logger }
    }

    /// Returns true if quota is specified and reached.
    pub fn is_quota_reached(&self) -> bool {
        self.quota.as_ref().is_some_and(|quota| quota.is_reached())
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::new(
            Arc::new(DefaultRandom::default()),
            None,
            Parallelism::default(),
            Arc::new(|msg| println!("{msg}")),
        )
    }
}
